//! Controller configuration.

use crate::types::ReadBack;
use serde::{Deserialize, Serialize};

/// Controller configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// How `one` and `two` read their result after mutating.
    pub read_back: ReadBack,
}

impl ControllerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Configuration reproducing the release-then-reread behavior.
    pub fn reacquire() -> Self {
        Self {
            read_back: ReadBack::Reacquire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = ControllerConfig::from_json("{}").unwrap();
        assert_eq!(config, ControllerConfig::default());
        assert_eq!(config.read_back, ReadBack::Downgrade);
    }

    #[test]
    fn test_parse_read_back() {
        let config = ControllerConfig::from_json(r#"{"read_back": "reacquire"}"#).unwrap();
        assert_eq!(config, ControllerConfig::reacquire());
    }

    #[test]
    fn test_unknown_mode_fails() {
        assert!(ControllerConfig::from_json(r#"{"read_back": "sideways"}"#).is_err());
    }
}
