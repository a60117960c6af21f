// src/config.rs

use crate::errors::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;

const PLACEHOLDER: &str = "PASTE_HERE";

/// Runtime settings. Loaded from an optional JSON file named by `LEADS_CONFIG`,
/// then overridden by individual `LEADS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub db_path: String,
    pub listen_addr: String,
    pub max_workers: usize,
    pub poll_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "leads.sqlite3".into(),
            listen_addr: "127.0.0.1:3000".into(),
            max_workers: 8,
            poll_interval_secs: 5,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Same as `from_env` but reading from an explicit map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut cfg = match vars.get("LEADS_CONFIG") {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(v) = vars.get("LEADS_DB_PATH") {
            cfg.db_path = v.clone();
        }
        if let Some(v) = vars.get("LEADS_ADDR") {
            cfg.listen_addr = v.clone();
        }
        if let Some(v) = vars.get("LEADS_WORKERS") {
            cfg.max_workers = v.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "LEADS_WORKERS",
                reason: format!("{e}"),
            })?;
        }
        if let Some(v) = vars.get("LEADS_POLL_SECS") {
            cfg.poll_interval_secs = v.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "LEADS_POLL_SECS",
                reason: format!("{e}"),
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::File {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Rejects empty or placeholder values before anything touches the store.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_required("db_path", &self.db_path)?;
        check_required("listen_addr", &self.listen_addr)?;

        self.socket_addr()?;

        if self.max_workers == 0 {
            return Err(ConfigError::Invalid {
                name: "max_workers",
                reason: "must be at least 1".into(),
            });
        }
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "poll_interval_secs",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr
            .trim()
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "listen_addr",
                reason: format!("{e}"),
            })
    }
}

fn check_required(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Missing(name));
    }
    if value.contains(PLACEHOLDER) {
        return Err(ConfigError::Placeholder(name));
    }
    Ok(())
}
