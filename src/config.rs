//! Configuration and local flag persistence

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Flag recording that the onboarding tutorial was dismissed
pub const TUTORIAL_FLAG: &str = "hasSeenRpmTutorial";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("id", "rpm", "rpm-wizard")
}

/// Log file location inside the platform data directory
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("rpm-wizard.log"))
}

/// User configuration for the wizard
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WizardConfig {
    /// Generative Language API key
    pub api_key: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// API base URL
    pub endpoint: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl WizardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: WizardConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Environment variables win over the file
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(key) = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")) {
            self.api_key = Some(key);
        }
        if let Some(model) = non_empty("RPM_WIZARD_MODEL") {
            self.model = Some(model);
        }
        if let Some(endpoint) = non_empty("RPM_WIZARD_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }
    }

    pub fn with_env_overrides(mut self) -> Self {
        self.apply_env(|name| std::env::var(name).ok());
        self
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Boolean flags persisted as a small JSON object
#[derive(Debug, Clone)]
pub struct FlagStore {
    path: Option<PathBuf>,
    flags: BTreeMap<String, bool>,
}

impl FlagStore {
    /// Flags file in the platform config directory; unreadable files count as empty
    pub fn open_default() -> Self {
        let path = project_dirs().map(|dirs| dirs.config_dir().join("flags.json"));
        Self::open(path)
    }

    pub fn open(path: Option<PathBuf>) -> Self {
        let flags = path
            .as_deref()
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, flags }
    }

    pub fn get(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn set(&mut self, name: &str, value: bool) -> Result<()> {
        self.flags.insert(name.to_string(), value);
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(&self.flags)?)?;
        }
        Ok(())
    }
}
