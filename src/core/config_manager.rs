// src/core/config_manager.rs
//! Configuration: environment variables over an optional YAML file over defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::FsOps;
use crate::store::JsonSaver;

pub const DEFAULT_API_URL: &str = "https://api.hh.ru/vacancies";
pub const DEFAULT_USER_AGENT: &str = "HH-User-Agent";
pub const DEFAULT_STORE_NAME: &str = "vacancies";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONFIG_FILE: &str = "scout.yaml";
const DEFAULT_LOG_FILE: &str = "/tmp/vacancy-scout.log";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub data_path: PathBuf,
    pub store_name: String,
    pub log_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Optional `scout.yaml`; every key may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub data_dir: Option<PathBuf>,
    pub store_name: Option<String>,
    pub log_file: Option<PathBuf>,
    pub api_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl ConfigFile {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse configuration file")
    }
}

impl ConfigManager {
    /// Load from the process environment and the optional config file
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let file = Self::load_file(&cwd)?;
        Self::resolve(file, &cwd, |key| std::env::var(key).ok())
    }

    fn load_file(cwd: &Path) -> Result<ConfigFile> {
        let (path, explicit) = match std::env::var("VACANCY_SCOUT_CONFIG") {
            Ok(path) => (FsOps::normalize_path(cwd, Path::new(&path)), true),
            Err(_) => (cwd.join(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(ConfigFile::default());
        }

        info!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        ConfigFile::from_yaml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Merge `env` over `file` over defaults. Relative paths resolve against `cwd`.
    pub fn resolve<F>(file: ConfigFile, cwd: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = env("VACANCY_DATA_DIR")
            .map(PathBuf::from)
            .or(file.data_dir)
            .map(|path| FsOps::normalize_path(cwd, &path))
            .unwrap_or_else(Self::default_data_dir);

        let store_name = env("VACANCY_STORE_NAME")
            .or(file.store_name)
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

        let log_file = env("VACANCY_LOG_FILE")
            .map(PathBuf::from)
            .or(file.log_file)
            .map(|path| FsOps::normalize_path(cwd, &path))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let api_url = env("HH_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_seconds = match env("HH_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("HH_TIMEOUT_SECONDS must be a whole number of seconds"))?,
            None => file.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let user_agent = env("HH_USER_AGENT")
            .or(file.user_agent)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            environment: EnvironmentConfig {
                data_path,
                store_name,
                log_file,
            },
            service: ServiceConfig {
                api_url,
                timeout_seconds,
                user_agent,
            },
        })
    }

    /// `data/` next to the crate manifest
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, store_name: Option<String>, data_dir: Option<PathBuf>) -> Self {
        if let Some(name) = store_name {
            self.environment.store_name = name;
        }
        if let Some(dir) = data_dir {
            self.environment.data_path = dir;
        }
        self
    }

    pub fn saver(&self) -> JsonSaver {
        JsonSaver::new(self.environment.data_path.clone(), &self.environment.store_name)
    }
}
