/// Source configuration
use crate::error::{Result, SourceError};
use frames_core::{SampleRate, SignalInfo};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "frames.toml";

/// Environment variable prefix (`FRAMES_CHANNEL_COUNT`, `FRAMES_SAMPLE_RATE`)
pub const ENV_PREFIX: &str = "FRAMES";

/// Signal layout a source is opened with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    #[serde(default = "default_channel_count")]
    pub channel_count: u16,

    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl SourceConfig {
    /// Load configuration from `frames.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `path` (if present) and environment
    ///
    /// Environment variables prefixed with `FRAMES_` override file values.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let path = path.as_ref();
        if path.exists() {
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.signal_info().validate().map_err(|e| {
            SourceError::Config(format!("{} (check {}_* settings)", e, ENV_PREFIX))
        })
    }

    /// Signal layout described by this configuration
    pub fn signal_info(&self) -> SignalInfo {
        SignalInfo {
            channel_count: self.channel_count,
            sample_rate: SampleRate::new(self.sample_rate),
        }
    }
}

// Default values
fn default_channel_count() -> u16 {
    2
}

fn default_sample_rate() -> u32 {
    SampleRate::CD_QUALITY.as_hz()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            channel_count: default_channel_count(),
            sample_rate: default_sample_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_cd_quality() {
        let config = SourceConfig::default();
        assert_eq!(config.signal_info(), SignalInfo::cd_quality());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_channels() {
        let config = SourceConfig {
            channel_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SourceError::Config(_))));
    }
}
