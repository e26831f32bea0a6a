use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PayrollError, Result};

pub const BASE_URL_ENV: &str = "PAYROLL_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CONTAINER: &str = "employees";

#[derive(Deserialize, Serialize, Default, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| PayrollError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| PayrollError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "payroll")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(PayrollError::NoConfigDir)
    }

    /// Resolve the API base URL: explicit flag, then env var, then config file, then default.
    pub fn base_url(&self, explicit: Option<&str>) -> Result<Url> {
        let env = std::env::var(BASE_URL_ENV).ok();
        self.resolve_base_url(explicit, env.as_deref())
    }

    fn resolve_base_url(&self, explicit: Option<&str>, env: Option<&str>) -> Result<Url> {
        let raw = explicit
            .or(env)
            .or(self.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL);

        Url::parse(raw).map_err(|e| PayrollError::InvalidBaseUrl {
            url: raw.to_string(),
            source: e,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Get the HTML container id, preferring explicit argument over config
    pub fn resolve_container(&self, explicit: Option<&str>) -> String {
        explicit
            .or(self.container.as_deref())
            .unwrap_or(DEFAULT_CONTAINER)
            .to_string()
    }
}
