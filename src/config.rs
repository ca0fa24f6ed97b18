//! Configuration handling for the TUI

use crate::state::CountryCode;
use crate::submission::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the ingestion endpoint
pub const ENDPOINT_ENV: &str = "WAITLIST_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WaitlistConfig {
    /// Ingestion endpoint URL
    pub endpoint: Option<String>,
    /// Dial code preselected in the mobile step, e.g. "+44"
    pub default_country_code: Option<String>,
    /// Skip the loading screen
    pub skip_splash: Option<bool>,
}

impl WaitlistConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "unbooked", "waitlist-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file location, if the platform has a data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("waitlist-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: WaitlistConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Endpoint by precedence: explicit flag or env (already merged by clap),
    /// then the file, then the built-in default
    pub fn resolve_endpoint(&self, from_cli: Option<&str>) -> String {
        from_cli
            .map(str::to_string)
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Unknown codes fall back to the default country
    pub fn country_code(&self) -> CountryCode {
        self.default_country_code
            .as_deref()
            .and_then(CountryCode::from_dial_code)
            .unwrap_or_default()
    }

    pub fn skip_splash(&self) -> bool {
        self.skip_splash.unwrap_or(false)
    }
}
