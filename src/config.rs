//! Configuration handling for the signup form

use crate::sanitize::SqlEscapeMode;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, every field optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Render password fields as bullets (default: true)
    pub mask_passwords: Option<bool>,
    /// Escaping rules for the SQL step (default: legacy)
    pub sql_escape_mode: Option<SqlEscapeMode>,
    /// Print the accepted profile as JSON on exit (default: true)
    pub print_submission: Option<bool>,
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SignupConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, logging and ignoring a malformed file
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable config: {err:#}");
            Self::default()
        })
    }

    pub fn mask_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(true)
    }

    pub fn sql_escape_mode(&self) -> SqlEscapeMode {
        self.sql_escape_mode.unwrap_or_default()
    }

    pub fn print_submission(&self) -> bool {
        self.print_submission.unwrap_or(true)
    }
}
