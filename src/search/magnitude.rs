//! Magnitude phase.
//!
//! Finds the longest power-of-ten digit string the parser accepts.

use crate::domain::DigitSequence;
use crate::parser::NumberParser;

use super::accepted;

/// Find the longest digit sequence of the form `1` followed by zeros that
/// the parser accepts as finite.
///
/// The returned sequence is accepted, and appending one more zero to it
/// would not be. Assumes `"1"` itself is accepted, which holds for any
/// parser with a nontrivial range.
pub fn magnitude_search<P: NumberParser>(parser: &P) -> DigitSequence {
    let mut digits = DigitSequence::one();
    while accepted(parser, &digits) {
        digits.append_zero();
    }
    // the last append overshot
    let _ = digits.drop_last();
    digits
}
