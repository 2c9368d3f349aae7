use crate::config::validation::ValidationResult;
use crate::units::formatter::DEFAULT_SIGNIFICANT_DIGITS;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Significant digits used when displaying results
    #[serde(default = "default_significant_digits")]
    pub significant_digits: usize,

    // Category selected when an interactive session starts
    #[serde(default)]
    pub default_category: Option<String>,

    // Per-category default unit pair, keyed by category name
    #[serde(default)]
    pub defaults: HashMap<String, UnitPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnitPair {
    pub from: String,
    pub to: String,
}

fn default_significant_digits() -> usize {
    DEFAULT_SIGNIFICANT_DIGITS
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            significant_digits: default_significant_digits(),
            default_category: None,
            defaults: HashMap::new(),
        }
    }

    /// Default unit pair for a category, if one is configured
    pub fn unit_pair(&self, category: &str) -> Option<&UnitPair> {
        self.defaults.get(category)
    }

    /// Check category and unit names against the unit table
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.check_digits("significant_digits", self.significant_digits);

        if let Some(category) = &self.default_category {
            result.check_category("default_category", category);
        }

        let mut keys: Vec<&String> = self.defaults.keys().collect();
        keys.sort();

        for key in keys {
            let location = format!("defaults.{}", key);
            if let Some(def) = result.check_category(&location, key) {
                result.check_unit_pair(&location, def, &self.defaults[key]);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_valid() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.significant_digits, 6);
        assert!(config.default_category.is_none());
        assert!(config.defaults.is_empty());
        assert!(!config.validate().has_issues());
    }

    #[test]
    fn test_load_full_config() {
        let config = Config::load_from_str(
            r#"
significant_digits = 4
default_category = "Temperature"

[defaults."Temperature"]
from = "Kelvin"
to = "Celsius"

[defaults."Data Storage"]
from = "Gigabyte"
to = "Megabyte"
"#,
        )
        .unwrap();

        assert_eq!(config.significant_digits, 4);
        assert_eq!(config.default_category.as_deref(), Some("Temperature"));
        assert_eq!(
            config.unit_pair("Data Storage"),
            Some(&UnitPair {
                from: "Gigabyte".to_string(),
                to: "Megabyte".to_string(),
            })
        );
        assert!(config.validate().is_valid());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(Config::load_from_str("significant_digits = \"six\"").is_err());
        assert!(Config::load_from_str("[defaults.Weight]\nfrom = \"Gram\"").is_err());
    }

    #[test]
    fn test_validation_reports_unknown_names() {
        let config = Config::load_from_str(
            r#"
significant_digits = 0
default_category = "Speed"

[defaults.Weight]
from = "Kilogram"
to = "Liter"

[defaults.Volume]
from = "Liter"
to = "Milliliter"
"#,
        )
        .unwrap();

        let validation = config.validate();
        assert!(!validation.is_valid());
        assert_eq!(validation.errors().count(), 4);
        assert!(validation
            .errors()
            .any(|e| e.location.as_deref() == Some("defaults.Weight")
                && e.message.contains("Liter")));
    }

    #[test]
    fn test_same_unit_pair_is_only_a_warning() {
        let config = Config::load_from_str(
            "[defaults.Power]\nfrom = \"Watt\"\nto = \"Watt\"\n",
        )
        .unwrap();

        let validation = config.validate();
        assert!(validation.is_valid());
        assert_eq!(validation.warnings().count(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "significant_digits = 8").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.significant_digits, 8);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_file(dir.path().join("unitconv.toml")).is_err());
    }
}
