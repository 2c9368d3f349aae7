// Unit conversion across the fixed category table.
// Linear categories chain through a base unit; Temperature uses pairwise affine formulas.

pub mod engine;
pub mod error;
pub mod expression;
pub mod formatter;
pub mod input;
pub mod table;
pub mod temperature;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{convert, convert_units};
pub use error::ConversionError;
pub use expression::{looks_like_expression, parse_expression, ConversionExpression};
pub use formatter::{
    format_significant, format_value, DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS,
};
pub use input::parse_numeric_input;
pub use table::{catalog_summary, categories, units_for, CATALOG};
pub use temperature::TemperatureScale;
pub use types::{Category, CategoryDef, UnitDef, UnitScale};
