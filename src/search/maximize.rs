//! Maximization phase.
//!
//! Greedy per-position digit growth against the parser's boundary.

use crate::domain::DigitSequence;
use crate::parser::NumberParser;

use super::accepted;

/// Maximize each digit position, most significant first.
///
/// Each position is incremented (with full carry, which can grow the
/// sequence by one digit) until the parser rejects the string, then wound
/// back by exactly one step. Later positions are maximized against the
/// sequence as already modified by earlier ones. On return no
/// single-position increment keeps the sequence accepted.
///
/// The per-position search is a deliberate linear scan, not a binary
/// search: position count and per-position range are bounded by the
/// parser's exponent range, a few hundred probes in total.
pub fn maximize_digits<P: NumberParser>(parser: &P, digits: &mut DigitSequence) {
    let mut index = 0;
    while index < digits.len() {
        loop {
            if digits.increment_at(index) {
                // a carry inserted a leading digit; the position shifted
                index += 1;
            }
            if !accepted(parser, digits) {
                break;
            }
        }
        // the last increment overshot; wind it back, reversing a carry
        // expansion when one happened
        if digits.decrement_at(index) {
            index -= 1;
        }
        index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::magnitude_search;

    /// Accepts any value up to a fixed ceiling.
    struct CappedParser {
        ceiling: u64,
    }

    impl NumberParser for CappedParser {
        fn label(&self) -> String {
            format!("capped ({})", self.ceiling)
        }

        fn parses_finite(&self, digits: &str) -> bool {
            digits.parse::<u64>().is_ok_and(|value| value <= self.ceiling)
        }
    }

    #[test]
    fn test_converges_to_ceiling_digits() {
        let parser = CappedParser { ceiling: 2047 };
        let mut digits = magnitude_search(&parser);
        assert_eq!(digits.to_string(), "1000");

        maximize_digits(&parser, &mut digits);
        assert_eq!(digits.to_string(), "2047");
    }

    #[test]
    fn test_carry_probe_is_wound_back() {
        // maximizing the last position of 10x probes 110 via a carry and
        // must restore 109 exactly
        let parser = CappedParser { ceiling: 109 };
        let mut digits = magnitude_search(&parser);
        maximize_digits(&parser, &mut digits);
        assert_eq!(digits.to_string(), "109");
    }

    #[test]
    fn test_leading_digit_growth_is_wound_back() {
        // the single-digit base grows to 10 while probing and shrinks back
        let parser = CappedParser { ceiling: 9 };
        let mut digits = magnitude_search(&parser);
        assert_eq!(digits.to_string(), "1");

        maximize_digits(&parser, &mut digits);
        assert_eq!(digits.to_string(), "9");
    }

    #[test]
    fn test_result_length_matches_base() {
        let parser = CappedParser { ceiling: 999_999 };
        let mut digits = magnitude_search(&parser);
        let base_len = digits.len();

        maximize_digits(&parser, &mut digits);
        assert_eq!(digits.len(), base_len);
        assert_eq!(digits.to_string(), "999999");
    }
}
