use crate::units::engine::convert_units;
use crate::units::error::ConversionError;
use crate::units::table::{find_unit_ignore_case, CATALOG};
use crate::units::types::Category;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Matches: number + unit + "to"/"in" + unit
    /// Examples: "1 Kilogram to Gram", "-40 celsius in fahrenheit", "2.5e3 Square Meter to Hectare"
    static ref EXPRESSION_PATTERN: Regex = Regex::new(
        r"(?i)^\s*(?P<value>[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:e[-+]?\d+)?)\s+(?P<from>.+?)\s+(?:to|in)\s+(?P<to>.+?)\s*$"
    ).unwrap();
}

/// A quick conversion request parsed from free text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionExpression {
    pub category: Category,
    pub from: &'static str,
    pub to: &'static str,
    pub value: f64,
}

impl ConversionExpression {
    pub fn evaluate(&self) -> Result<f64, ConversionError> {
        convert_units(self.category, self.from, self.to, self.value)
    }
}

/// Check if a string looks like a conversion expression
pub fn looks_like_expression(s: &str) -> bool {
    EXPRESSION_PATTERN.is_match(s)
}

/// Parse an expression such as `"1.5 Kilogram to Gram"`
///
/// Unit names are matched ignoring case and resolved to their canonical
/// spelling. The category is the first one containing the source unit; the
/// target must belong to that same category.
pub fn parse_expression(input: &str) -> Result<ConversionExpression, ConversionError> {
    let caps = EXPRESSION_PATTERN.captures(input).ok_or_else(|| {
        ConversionError::InvalidExpression(format!(
            "expected '<value> <unit> to <unit>', got '{}'",
            input.trim()
        ))
    })?;

    let value = caps["value"]
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidNumericInput(caps["value"].to_string()))?;
    let from_name = &caps["from"];
    let to_name = &caps["to"];

    let (category, from) = CATALOG
        .iter()
        .find_map(|def| find_unit_ignore_case(def.category, from_name).map(|u| (def.category, u)))
        .ok_or_else(|| {
            ConversionError::InvalidExpression(format!("unknown unit '{}'", from_name))
        })?;

    let to = find_unit_ignore_case(category, to_name).ok_or_else(|| {
        ConversionError::UnrecognizedUnit {
            category: category.name().to_string(),
            unit: to_name.to_string(),
        }
    })?;

    Ok(ConversionExpression {
        category,
        from: from.name,
        to: to.name,
        value,
    })
}
