//! On-disk CLI configuration.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::CliConfig;

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `explicit` when given, otherwise `<config dir>/kargo/config.json`.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        match explicit {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(default_config_path()?)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is not an error; it yields the default config.
    pub fn load(&self) -> Result<CliConfig> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(CliConfig::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()));
            }
        };
        let cfg: CliConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(cfg)
    }

    pub fn save(&self, cfg: &CliConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.path, &bytes)
            .with_context(|| format!("write {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved cli config");
        Ok(())
    }

    /// Load, apply `f`, save, and return the saved config.
    pub fn update(&self, f: impl FnOnce(&mut CliConfig)) -> Result<CliConfig> {
        let mut cfg = self.load()?;
        f(&mut cfg);
        self.save(&cfg)?;
        Ok(cfg)
    }
}

fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("locate user config directory")?;
    Ok(dir.join("kargo").join("config.json"))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
