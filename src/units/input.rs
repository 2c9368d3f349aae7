use crate::units::error::ConversionError;

/// Parse user-entered text into a number
///
/// Surrounding whitespace is ignored. Anything else that does not parse as a
/// real number is rejected so callers can clear dependent fields instead of
/// showing a stale value. Finite spellings that overflow `f64` (`1e400`) are
/// out of range and rejected too; only an explicit `inf`/`infinity` yields an
/// infinite value.
pub fn parse_numeric_input(text: &str) -> Result<f64, ConversionError> {
    let invalid = || ConversionError::InvalidNumericInput(text.to_string());

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let value = trimmed.parse::<f64>().map_err(|_| invalid())?;
    if value.is_infinite() && !is_infinity_spelling(trimmed) {
        return Err(invalid());
    }

    Ok(value)
}

fn is_infinity_spelling(s: &str) -> bool {
    let unsigned = s.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
