//! Configuration for the OpenSwap engine.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for an offer registry instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum entries per offer/accept bundle. Caps the work a single
    /// call can demand from the transfer adapter.
    pub max_bundle_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_bundle_len: constants::DEFAULT_MAX_BUNDLE_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.max_bundle_len, constants::DEFAULT_MAX_BUNDLE_LEN);
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = EngineConfig { max_bundle_len: 8 };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_bundle_len, 8);
    }
}
