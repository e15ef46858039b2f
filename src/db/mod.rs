//! Database module for the song catalog
//!
//! This module handles all database operations using SQLx with SQLite.

mod engine;
mod migrations;
pub mod tables;

pub use engine::DbEngine;
pub use migrations::run_migrations;
pub use tables::SongTable;
