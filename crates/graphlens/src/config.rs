//! Configuration for the `graphlens` CLI.
//!
//! Settings live in a YAML file (`graphlens.yaml` by default). Every field is
//! optional; a missing file means all defaults.
//!
//! ```yaml
//! default-mode: hops
//! default-max-hops: 8
//! duplicate-ids: keep-first
//! timeout-ms: 250
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::{DuplicatePolicy, IndexOptions};
use crate::path::{DEFAULT_MAX_HOPS, PathMode, SearchLimits};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "graphlens.yaml";

/// Smallest accepted `default-max-hops`
pub const MIN_MAX_HOPS: usize = 1;

/// Largest accepted `default-max-hops`
pub const MAX_MAX_HOPS: usize = 64;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct GraphlensConfig {
    /// Strategy used when `--mode` is not given
    pub default_mode: PathMode,

    /// Depth bound used when `--max-hops` is not given
    pub default_max_hops: usize,

    /// How repeated node ids in a snapshot are handled
    pub duplicate_ids: DuplicatePolicy,

    /// Search deadline in milliseconds, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for GraphlensConfig {
    fn default() -> Self {
        Self {
            default_mode: PathMode::default(),
            default_max_hops: DEFAULT_MAX_HOPS,
            duplicate_ids: DuplicatePolicy::default(),
            timeout_ms: None,
        }
    }
}

impl GraphlensConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load `graphlens.yaml` from `dir` if it exists, otherwise defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_MAX_HOPS..=MAX_MAX_HOPS).contains(&self.default_max_hops) {
            return Err(Error::Config(format!(
                "default-max-hops must be between {MIN_MAX_HOPS} and {MAX_MAX_HOPS}, got {}",
                self.default_max_hops
            )));
        }
        if self.timeout_ms == Some(0) {
            return Err(Error::Config(
                "timeout-ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Index options derived from this configuration
    #[must_use]
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            duplicates: self.duplicate_ids,
        }
    }

    /// Search limits derived from this configuration, starting now
    #[must_use]
    pub fn search_limits(&self) -> SearchLimits {
        match self.timeout_ms {
            Some(ms) => SearchLimits::none().with_timeout(Duration::from_millis(ms)),
            None => SearchLimits::none(),
        }
    }
}
