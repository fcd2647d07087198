//! `u64` parser backend.

use super::NumberParser;

/// Probes Rust's `u64` parser.
///
/// Integer parsing has no infinity sentinel: out-of-range input fails to
/// parse, so a parse failure is the overflow signal and the search surfaces
/// the decimal ceiling of the type instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct UintParser;

impl NumberParser for UintParser {
    fn label(&self) -> String {
        "Rust (u64)".to_string()
    }

    fn parses_finite(&self, digits: &str) -> bool {
        digits.parse::<u64>().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_is_accepted() {
        assert!(UintParser.parses_finite("18446744073709551615"));
    }

    #[test]
    fn test_past_ceiling_is_rejected() {
        assert!(!UintParser.parses_finite("18446744073709551616"));
        assert!(!UintParser.parses_finite(&format!("1{}", "0".repeat(20))));
    }
}
