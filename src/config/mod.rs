//! Configuration module for the song catalog
//!
//! Path resolution for the config directory and the `settings.json` that
//! holds server and database settings.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::Settings;
