/// Read modes
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FramesError;

/// How a read treats the decoded samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMode {
    /// Decode into the destination storage
    #[default]
    Normal,
    /// Advance past the frames without materializing them
    Skip,
}

impl ReadMode {
    /// Convert to string for settings persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Skip => "skip",
        }
    }

    /// Check if samples are materialized in this mode
    pub fn stores_samples(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl FromStr for ReadMode {
    type Err = FramesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "store" | "read" => Ok(Self::Normal),
            "skip" | "discard" => Ok(Self::Skip),
            other => Err(FramesError::InvalidReadMode(other.to_string())),
        }
    }
}

impl fmt::Display for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("Store".parse::<ReadMode>(), Ok(ReadMode::Normal));
        assert_eq!(" skip ".parse::<ReadMode>(), Ok(ReadMode::Skip));
        assert_eq!(
            "fast".parse::<ReadMode>(),
            Err(FramesError::InvalidReadMode("fast".to_string()))
        );
    }

    #[test]
    fn string_round_trip() {
        for mode in [ReadMode::Normal, ReadMode::Skip] {
            assert_eq!(mode.as_str().parse::<ReadMode>(), Ok(mode));
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ReadMode::Skip).unwrap(), "\"skip\"");
        let mode: ReadMode = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(mode, ReadMode::Normal);
    }
}
