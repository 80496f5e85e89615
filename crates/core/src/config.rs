use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attributes::{FALLBACK_SRC_ATTRIBUTE, IMAGE_SET_ATTRIBUTE};

/// Re-render interval used when none (or zero) is configured.
pub const DEFAULT_THROTTLE_MS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Loader settings, usually read from a `lil.toml`.
///
/// Every field is optional in the file:
///
/// ```toml
/// throttle_ms = 300
/// image_set_attribute = "data-lil-image-set"
/// fallback_src_attribute = "data-lil-fallback-src"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Minimum time between two throttled re-renders, in milliseconds.
    /// `0` selects the default.
    pub throttle_ms: u64,
    /// Attribute holding the image-set descriptor.
    pub image_set_attribute: String,
    /// Attribute holding the explicit fallback source.
    pub fallback_src_attribute: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            image_set_attribute: IMAGE_SET_ATTRIBUTE.to_string(),
            fallback_src_attribute: FALLBACK_SRC_ATTRIBUTE.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Config with a custom throttle interval and default attribute names.
    pub fn with_throttle_ms(throttle_ms: u64) -> Self {
        Self {
            throttle_ms,
            ..Self::default()
        }
    }

    /// Effective throttle interval in milliseconds.
    pub fn throttle_interval_ms(&self) -> u64 {
        if self.throttle_ms == 0 {
            DEFAULT_THROTTLE_MS
        } else {
            self.throttle_ms
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded loader config");
        Ok(config)
    }
}
