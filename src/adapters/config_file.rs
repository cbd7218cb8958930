//! File-backed configuration adapter.
//!
//! Implements [`ConfigPort`] by reading a [`ControllerConfig`] from disk.
//! Files ending in `.json` are parsed with `serde_json`; anything else is
//! treated as a postcard blob produced by [`ControllerConfig::to_blob`].

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::ControllerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Json,
    Postcard,
}

pub struct FileConfigAdapter {
    path: PathBuf,
}

impl FileConfigAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn encoding(&self) -> Encoding {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Encoding::Json,
            _ => Encoding::Postcard,
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<ControllerConfig, ConfigError> {
        match self.encoding() {
            Encoding::Json => serde_json::from_slice(bytes).map_err(|e| {
                warn!("{}: JSON parse error: {}", self.path.display(), e);
                ConfigError::Corrupted
            }),
            Encoding::Postcard => ControllerConfig::from_blob(bytes).map_err(|e| {
                warn!("{}: postcard decode error: {}", self.path.display(), e);
                ConfigError::Corrupted
            }),
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn load(&self) -> Result<ControllerConfig, ConfigError> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError,
        })?;
        let config = self.decode(&bytes)?;
        config.validate().map_err(ConfigError::ValidationFailed)?;
        info!(
            "Config loaded from {} ({:?}, {} profiles)",
            self.path.display(),
            self.encoding(),
            config.cooling.len()
        );
        Ok(config)
    }
}
