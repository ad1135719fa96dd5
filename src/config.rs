use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::matcher::Strictness;
use crate::status::StatusClass;

static CONFIG: OnceLock<MatcherConfig> = OnceLock::new();
static DEFAULT_CONFIG: Lazy<MatcherConfig> = Lazy::new(MatcherConfig::default);

/// Settings for a [`StatusMatcher`](crate::matcher::StatusMatcher), usually
/// read from TOML:
///
/// ```toml
/// strictness = "loose"
/// classes = ["4xx", "5xx"]
/// ```
///
/// Missing keys take their default: strict matching over all five classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    pub strictness: Strictness,
    pub classes: Vec<StatusClass>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::Strict,
            classes: StatusClass::ALL.to_vec(),
        }
    }
}

impl MatcherConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Like [`from_file`](Self::from_file) but never fails: on any error the
    /// problem is logged and the default config is returned.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Self {
        match Self::from_file(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("{err}");
                warn!("falling back to default matcher config");
                MatcherConfig::default()
            }
        }
    }
}

impl FromStr for MatcherConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { source })
    }
}

/// Install the process-wide config. Only the first call succeeds.
pub fn set_config(cfg: MatcherConfig) -> Result<(), ConfigError> {
    debug!("installing matcher config: {cfg:?}");
    CONFIG.set(cfg).map_err(|_| ConfigError::AlreadySet)
}

/// The process-wide config, or the default if none was installed.
///
/// Reading never installs anything, so a later [`set_config`] still succeeds.
pub fn config() -> &'static MatcherConfig {
    CONFIG.get().unwrap_or_else(|| &*DEFAULT_CONFIG)
}
