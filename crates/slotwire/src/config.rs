//! Builder configuration.
//!
//! ```toml
//! # slotwire.toml
//! source_root = "/srv/app"
//! first_id = 0
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`BuilderConfig::source_root`].
pub const SOURCE_ROOT_ENV: &str = "SLOTWIRE_SOURCE_ROOT";

/// Settings for [`IdBuilder`](crate::IdBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Directory that compiler-relative source paths are joined onto.
    ///
    /// When unset, namespaces use the path exactly as the compiler reports
    /// it, which is stable across runs but not absolute.
    pub source_root: Option<PathBuf>,

    /// First auto-assigned component ID.
    pub first_id: u64,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            source_root: None,
            first_id: 0,
        }
    }
}

impl BuilderConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading builder config");
        Self::from_toml_str(&text)
    }

    /// Applies `SLOTWIRE_SOURCE_ROOT` if it is set and non-empty.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.apply_source_root(std::env::var(SOURCE_ROOT_ENV).ok())
    }

    /// Replaces `source_root` with `root` unless it is missing or empty.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the new root is not absolute.
    pub fn apply_source_root(mut self, root: Option<String>) -> Result<Self> {
        if let Some(root) = root.filter(|root| !root.is_empty()) {
            tracing::debug!(%root, "overriding source_root");
            self.source_root = Some(PathBuf::from(root));
            self.validate()?;
        }
        Ok(self)
    }

    /// Checks invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(root) = &self.source_root
            && !root.is_absolute()
        {
            return Err(Error::config(format!(
                "source_root must be absolute, got {}",
                root.display()
            )));
        }
        Ok(())
    }

    /// Joins a relative source path onto `source_root`.
    pub fn resolve_source_path(&self, file: &Path) -> PathBuf {
        match &self.source_root {
            Some(root) if file.is_relative() => root.join(file),
            _ => file.to_path_buf(),
        }
    }
}
