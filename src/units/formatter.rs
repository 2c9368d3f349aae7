/// Significant digits used when rendering conversion results
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// Largest digit count that still distinguishes every f64
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Render a value with the default number of significant digits
pub fn format_value(value: f64) -> String {
    format_significant(value, DEFAULT_SIGNIFICANT_DIGITS)
}

/// Render a value the way C's `%.Ng` does
///
/// Keeps `digits` significant digits, switches to exponent notation for very
/// large or very small magnitudes, and drops trailing zeros so that results
/// like `1.9999999997` display as `2`. `digits` is clamped to
/// `1..=MAX_SIGNIFICANT_DIGITS`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let digits = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);

    // Rounding to `digits` first decides the exponent, e.g. 999999.5 -> 1e+06
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
