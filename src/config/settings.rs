//! Server settings
//!
//! Settings are layered: `settings.json` in the config directory, then the
//! `PORT` and `DATABASE_URL` environment variables, then command-line flags
//! (applied by the caller).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Paths;

/// Server and database settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite connection string; empty means the file in the config dir
    #[serde(default)]
    pub database_url: String,

    /// Prefix all routes are mounted under
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Origins allowed by CORS; empty allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Verbose logging
    #[serde(default)]
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: String::new(),
            api_prefix: default_api_prefix(),
            allowed_origins: Vec::new(),
            debug: false,
        }
    }
}

impl Settings {
    /// Load settings from file, writing defaults when the file is missing,
    /// then apply environment overrides
    pub fn load(paths: &Paths) -> Result<Self> {
        let settings_path = paths.settings_path();

        let mut settings = if settings_path.exists() {
            let content =
                std::fs::read_to_string(&settings_path).context("Failed to read settings file")?;
            serde_json::from_str(&content).context("Failed to parse settings file")?
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            settings
        };

        settings.apply_env(|key| std::env::var(key).ok())?;

        if settings.database_url.is_empty() {
            settings.database_url = format!("sqlite:{}", paths.db_path().display());
        }

        Ok(settings)
    }

    /// Save settings to file
    pub fn save(&self, paths: &Paths) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(paths.settings_path(), content).context("Failed to write settings file")?;

        Ok(())
    }

    /// Apply `PORT` and `DATABASE_URL` overrides from the given lookup
    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // a blank value counts as unset
        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }

        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()) {
            self.database_url = url;
        }

        Ok(())
    }

    /// Address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_api_prefix() -> String {
    "/api".to_string()
}
