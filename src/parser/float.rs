//! `f64` parser backend.

use super::NumberParser;

/// Probes Rust's `f64` parser.
///
/// Digit strings beyond the representable range parse to the infinity
/// sentinel, so finiteness of the parsed value is the acceptance signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatParser;

impl NumberParser for FloatParser {
    fn label(&self) -> String {
        format!("Rust ({})", env!("NUMBOUND_RUSTC_VERSION"))
    }

    fn parses_finite(&self, digits: &str) -> bool {
        digits.parse::<f64>().is_ok_and(f64::is_finite)
    }
}
