//! CLI configuration file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solidkit_accounts::AccountPolicy;
use solidkit_pricing::PricingConfig;
use std::path::Path;

/// Both library configs in one file; missing sections use defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolidkitConfig {
    #[serde(default)]
    pub accounts: AccountPolicy,
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl SolidkitConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_path_uses_defaults() {
        let config = SolidkitConfig::load(None).unwrap();
        assert_eq!(config.accounts.minimum_balance, dec!(100));
        assert_eq!(config.pricing.discount_rates.get("VIP"), Some(&dec!(0.15)));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solidkit.json");
        std::fs::write(&path, r#"{ "accounts": { "overdraft_limit": "250" } }"#).unwrap();

        let config = SolidkitConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.accounts.overdraft_limit, dec!(250));
        assert_eq!(config.accounts.minimum_balance, dec!(100));
        assert_eq!(config.pricing.discount_rates.get("Regular"), Some(&dec!(0.05)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SolidkitConfig::load(Some(dir.path().join("nope.json").as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
