use crate::core::ConfigProvider;
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_percent, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

const MAX_PERCENT: f64 = 1000.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub labor_burden_percent: f64,
    pub overhead_percent: f64,
    pub profit_percent: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            labor_burden_percent: 35.0,
            overhead_percent: 15.0,
            profit_percent: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub currency_symbol: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
        }
    }
}

impl PricingConfig {
    /// Load pricing defaults from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PricingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the environment value. Unset names stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for PricingConfig {
    fn labor_burden_percent(&self) -> f64 {
        self.defaults.labor_burden_percent
    }

    fn overhead_percent(&self) -> f64 {
        self.defaults.overhead_percent
    }

    fn profit_percent(&self) -> f64 {
        self.defaults.profit_percent
    }

    fn currency_symbol(&self) -> &str {
        &self.output.currency_symbol
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<()> {
        validate_percent(
            "defaults.labor_burden_percent",
            self.defaults.labor_burden_percent,
            MAX_PERCENT,
        )?;
        validate_percent(
            "defaults.overhead_percent",
            self.defaults.overhead_percent,
            MAX_PERCENT,
        )?;
        validate_percent(
            "defaults.profit_percent",
            self.defaults.profit_percent,
            MAX_PERCENT,
        )?;
        validate_non_empty_string("output.currency_symbol", &self.output.currency_symbol)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[defaults]
labor_burden_percent = 30.0
overhead_percent = 20.0
profit_percent = 12.5

[output]
currency_symbol = "€"
"#;

        let config = PricingConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.labor_burden_percent(), 30.0);
        assert_eq!(config.overhead_percent(), 20.0);
        assert_eq!(config.profit_percent(), 12.5);
        assert_eq!(config.currency_symbol(), "€");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = PricingConfig::from_toml_str("[defaults]\noverhead_percent = 18\n").unwrap();
        assert_eq!(config.overhead_percent(), 18.0);
        assert_eq!(config.labor_burden_percent(), 35.0);
        assert_eq!(config.currency_symbol(), "$");

        let empty = PricingConfig::from_toml_str("").unwrap();
        assert_eq!(empty, PricingConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONTRACTOR_PRICING_TEST_OVERHEAD", "22.5");

        let config = PricingConfig::from_toml_str(
            "[defaults]\noverhead_percent = ${CONTRACTOR_PRICING_TEST_OVERHEAD}\n",
        )
        .unwrap();
        assert_eq!(config.overhead_percent(), 22.5);

        std::env::remove_var("CONTRACTOR_PRICING_TEST_OVERHEAD");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = PricingConfig::from_toml_str("[defaults\n").unwrap_err();
        assert!(matches!(err, PricingError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let config = PricingConfig::from_toml_str("[defaults]\nprofit_percent = -3.0\n").unwrap();
        assert!(config.validate().is_err());

        let config = PricingConfig::from_toml_str("[output]\ncurrency_symbol = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[defaults]\nlabor_burden_percent = 40\n")
            .unwrap();

        let config = PricingConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.labor_burden_percent(), 40.0);
    }
}
