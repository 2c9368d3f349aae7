use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    UnrecognizedCategory(String),
    UnrecognizedUnit { category: String, unit: String },
    InvalidNumericInput(String),
    InvalidExpression(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnrecognizedCategory(name) => {
                write!(f, "Unrecognized category: '{}'", name)
            }
            ConversionError::UnrecognizedUnit { category, unit } => {
                write!(f, "Unrecognized unit '{}' for category '{}'", unit, category)
            }
            ConversionError::InvalidNumericInput(text) => {
                write!(f, "Invalid numeric input: '{}'", text)
            }
            ConversionError::InvalidExpression(msg) => write!(f, "Invalid expression: {}", msg),
        }
    }
}

impl std::error::Error for ConversionError {}
