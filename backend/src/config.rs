//! Server configuration.
//!
//! Settings are read from a YAML file whose path comes from
//! `SUPPORT_HUB_CONFIG` (default `support_hub.yaml` in the working directory).
//! A missing file means defaults. `SUPPORT_HUB_BIND` and
//! `SUPPORT_HUB_EXPORT_DIR` override the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shared::ExportFormat;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::storage::SessionLimits;

pub const CONFIG_PATH_VAR: &str = "SUPPORT_HUB_CONFIG";
pub const BIND_VAR: &str = "SUPPORT_HUB_BIND";
pub const EXPORT_DIR_VAR: &str = "SUPPORT_HUB_EXPORT_DIR";
pub const DEFAULT_CONFIG_FILE: &str = "support_hub.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub bind_address: String,
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    pub log_filter: String,
    pub cors_origin: String,
    /// Default directory for export-to-path; Documents then home when unset
    pub export_dir: Option<PathBuf>,
    pub default_export_format: ExportFormat,
    /// Check-ins returned when a request does not give a limit
    pub recent_limit: usize,
    /// Built frontend served for any non-API path
    pub static_dir: Option<PathBuf>,
    /// Live sessions allowed at once; new sessions get 503 beyond this
    pub max_sessions: usize,
    /// Minutes without a request before a session is dropped; 0 keeps it
    pub session_idle_minutes: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            log_filter: "info".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
            export_dir: None,
            default_export_format: ExportFormat::Csv,
            recent_limit: 10,
            static_dir: None,
            max_sessions: 1000,
            session_idle_minutes: 120,
        }
    }
}

impl HubConfig {
    /// Load from the configured path and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let config = Self::load_from(Path::new(&path))?;
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Read a YAML file, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&yaml)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply overrides from `lookup`, usually the process environment
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(BIND_VAR).filter(|v| !v.trim().is_empty()) {
            self.bind_address = bind.trim().to_string();
        }
        if let Some(dir) = lookup(EXPORT_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            self.export_dir = Some(PathBuf::from(dir.trim()));
        }
        self
    }

    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            max_sessions: self.max_sessions,
            idle_timeout: (self.session_idle_minutes > 0).then(|| Duration::from_secs(self.session_idle_minutes * 60)),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_address))
    }
}
