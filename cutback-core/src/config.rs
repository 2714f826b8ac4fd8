//! Recommendation tuning knobs.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub const DEFAULT_POOL_SIZE: usize = 12;
pub const DEFAULT_RESERVOIR_SIZE: usize = 5;

/// Rent and ATM withdrawal labels from the sample dictionary
pub const DEFAULT_EXCLUSIONS: [&str; 2] = ["RESIDENT", "BKOFAMERICA ATM"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// How many top-spend categories are eligible for sampling
    pub pool_size: usize,
    /// How many categories are recommended
    pub reservoir_size: usize,
    /// Essential-needs keywords never recommended
    pub exclusions: Vec<String>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            reservoir_size: DEFAULT_RESERVOIR_SIZE,
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RecommendConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.pool_size == 0 {
            return Err(CoreError::InvalidConfig("pool_size must be positive".into()));
        }
        if self.reservoir_size == 0 {
            return Err(CoreError::InvalidConfig("reservoir_size must be positive".into()));
        }
        if self.reservoir_size > self.pool_size {
            return Err(CoreError::InvalidConfig(format!(
                "reservoir_size ({}) exceeds pool_size ({})",
                self.reservoir_size, self.pool_size
            )));
        }
        if self.exclusions.iter().any(|e| e.is_empty()) {
            return Err(CoreError::InvalidConfig(
                "empty exclusion keyword would exclude every category".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RecommendConfig::default();
        assert_eq!(cfg.pool_size, 12);
        assert_eq!(cfg.reservoir_size, 5);
        assert_eq!(cfg.exclusions, vec!["RESIDENT", "BKOFAMERICA ATM"]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_merges_with_defaults() {
        let cfg: RecommendConfig = serde_json::from_str(r#"{"reservoir_size": 3}"#).unwrap();
        assert_eq!(cfg.reservoir_size, 3);
        assert_eq!(cfg.pool_size, 12);
        assert_eq!(cfg.exclusions.len(), 2);
    }

    #[test]
    fn test_reservoir_larger_than_pool_rejected() {
        let cfg = RecommendConfig {
            pool_size: 4,
            reservoir_size: 5,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let cfg = RecommendConfig {
            pool_size: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = RecommendConfig {
            reservoir_size: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_empty_exclusion_rejected() {
        let cfg = RecommendConfig {
            exclusions: vec![String::new()],
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
