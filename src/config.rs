use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Upper bound on a single buffered request (head + body).
    pub max_request_bytes: usize,
    /// Idle read deadline. `None` waits forever.
    pub read_timeout_ms: Option<u64>,
    /// Encodings the server can apply, in preference order.
    pub supported_encodings: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Root directory backing the `/files/` routes.
    pub directory: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4221".to_string(),
            max_request_bytes: 30_000,
            read_timeout_ms: None,
            supported_encodings: vec!["gzip".to_string()],
        }
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_ms.map(Duration::from_millis)
    }
}

impl Config {
    /// Defaults, with `LISTEN` taking precedence over the listen address.
    pub fn load() -> Self {
        let mut cfg = Self::default();
        cfg.apply_env();
        cfg
    }

    /// Reads a YAML config file; missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cfg = Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.apply_env();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects settings that would make every connection fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.max_request_bytes == 0 {
            return Err(ConfigError::Invalid("server.max_request_bytes must be at least 1"));
        }
        if self.server.read_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid("server.read_timeout_ms must be at least 1"));
        }
        Ok(())
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    fn apply_env(&mut self) {
        if let Ok(addr) = std::env::var("LISTEN") {
            self.server.listen_addr = addr;
        }
    }
}
