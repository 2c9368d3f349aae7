// Semantic checks on a parsed config file, run against the unit table.

use crate::config::settings::UnitPair;
use crate::units::formatter::MAX_SIGNIFICANT_DIGITS;
use crate::units::table::lookup_category;
use crate::units::types::CategoryDef;
use log::warn;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A single problem, located by its TOML key path (e.g. `defaults.Weight`)
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub message: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: IssueSeverity, location: &str, message: String) {
        self.issues.push(ValidationIssue {
            severity,
            message,
            location: Some(location.to_string()),
        });
    }

    /// Digit count must be one the formatter can honor
    pub fn check_digits(&mut self, location: &str, digits: usize) {
        if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&digits) {
            self.push(
                IssueSeverity::Error,
                location,
                format!(
                    "significant_digits must be between 1 and {}, got {}",
                    MAX_SIGNIFICANT_DIGITS, digits
                ),
            );
        }
    }

    /// Resolve a category name, recording an error when it is unknown
    pub fn check_category(&mut self, location: &str, name: &str) -> Option<&'static CategoryDef> {
        match lookup_category(name) {
            Ok(def) => Some(def),
            Err(e) => {
                self.push(IssueSeverity::Error, location, e.to_string());
                None
            }
        }
    }

    /// Both units must belong to the category; identical units only warn
    pub fn check_unit_pair(&mut self, location: &str, def: &CategoryDef, pair: &UnitPair) {
        for unit in [&pair.from, &pair.to] {
            if def.unit(unit).is_none() {
                self.push(
                    IssueSeverity::Error,
                    location,
                    format!("Unit '{}' is not part of category '{}'", unit, def.category),
                );
            }
        }

        if pair.from == pair.to {
            self.push(
                IssueSeverity::Warning,
                location,
                format!("'from' and 'to' are both '{}'", pair.from),
            );
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Emit every issue through the `log` facade
    pub fn log_issues(&self) {
        for issue in &self.issues {
            warn!("config {:?}: {}", issue.severity, issue);
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "[{}] {}", loc, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = [
            ("Errors", IssueSeverity::Error),
            ("Warnings", IssueSeverity::Warning),
        ];

        for (title, severity) in groups {
            let mut group = self
                .issues
                .iter()
                .filter(|i| i.severity == severity)
                .peekable();
            if group.peek().is_none() {
                continue;
            }
            writeln!(f, "{}:", title)?;
            for issue in group {
                writeln!(f, "  {}", issue)?;
            }
        }
        Ok(())
    }
}
