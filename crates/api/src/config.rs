//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Directory of extra template JSON files.
    pub template_dir: Option<PathBuf>,
    /// Record deployments instead of calling the provider.
    pub dry_run: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `VOICE_MATRIX_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `VOICE_MATRIX_TEMPLATE_DIR` | Extra templates (`*.json`) | (none) |
    /// | `VOICE_MATRIX_DRY_RUN` | Use the recording deployer | `false` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("VOICE_MATRIX_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let template_dir = env::var("VOICE_MATRIX_TEMPLATE_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let dry_run = env::var("VOICE_MATRIX_DRY_RUN")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            addr,
            template_dir,
            dry_run,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid VOICE_MATRIX_ADDR format")]
    InvalidAddr,
}
