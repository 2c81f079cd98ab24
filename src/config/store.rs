//! Shared configuration storage.
//!
//! The file is the base layer; command-line values sit on top and are
//! re-applied on every reload so a reload never drops them.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
    pub no_auth: bool,
}

impl Overrides {
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if self.no_auth {
            config.auth.required = false;
        }
    }
}

/// Thread-safe config container.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
    overrides: Overrides,
}

impl ConfigStore {
    /// Wrap an already loaded config with no overrides.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides: Overrides::default(),
        }
    }

    /// Load `path`, apply `overrides` and validate the result.
    pub fn load(path: PathBuf, overrides: Overrides) -> Result<Self, ConfigError> {
        let config = read(&path, &overrides)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides,
        })
    }

    /// Snapshot of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Re-read the file. On failure the current config stays in place.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = read(&self.path, &self.overrides)?;
        *self.inner.write() = config;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read(path: &Path, overrides: &Overrides) -> Result<Config, ConfigError> {
    let mut config = Config::load_from(path)?;
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
