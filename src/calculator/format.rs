//! Display formatting for computed results.

/// Maximum characters an operand may grow to through key entry.
pub const MAX_OPERAND_LEN: usize = 8;

/// Fractional digits a computed result is rounded to.
pub const RESULT_PRECISION: usize = 6;

/// Widest result string the display accepts before falling back to
/// scientific notation.
pub const MAX_DISPLAY_LEN: usize = 12;

/// Format a computed result for display.
///
/// Rounds to [`RESULT_PRECISION`] fractional digits and strips trailing
/// zeros, so `8.0` renders as `"8"` and `0.1 + 0.2` as `"0.3"`. Results
/// wider than [`MAX_DISPLAY_LEN`] are re-rendered in scientific notation
/// rather than overflowing the display.
pub fn format_result(value: f64) -> String {
    let fixed = strip_trailing_zeros(&format!("{:.*}", RESULT_PRECISION, value));
    if fixed.len() <= MAX_DISPLAY_LEN {
        return fixed;
    }
    scientific(value)
}

fn scientific(value: f64) -> String {
    let rendered = format!("{:.*e}", RESULT_PRECISION, value);
    // `{:e}` keeps the trailing zeros the precision asked for; trim them
    // from the mantissa only.
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}e{}", strip_trailing_zeros(mantissa), exponent)
        }
        None => rendered,
    }
}

fn strip_trailing_zeros(rendered: &str) -> String {
    if !rendered.contains('.') {
        return rendered.to_string();
    }
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    // Rounding a small negative toward zero can leave "-0".
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}
