// Digit extraction for calibration documents: every line's value is the
// two-digit number formed by its first and last digit.

use std::path::Path;

use crate::error::{PuzzleError, Result};
use crate::input;

pub const DEFAULT_LITERAL_INPUT: &str = "1a_input";
pub const DEFAULT_SPELLED_INPUT: &str = "1b_input";

/// An extraction policy: which parts of a line count as digits.
pub type DigitExtractor = fn(&str) -> Vec<u32>;

const DIGIT_WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

pub fn extract_digits(line: &str) -> Vec<u32> {
    line.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Like [`extract_digits`], but spelled-out lowercase words count too.
///
/// Every character position is checked on its own, so overlapping words all
/// contribute: "eightwo" gives [8, 2].
pub fn extract_digits_spelled(line: &str) -> Vec<u32> {
    (0..line.len())
        .filter_map(|i| line.get(i..))
        .filter_map(digit_at)
        .collect()
}

fn digit_at(tail: &str) -> Option<u32> {
    let first = tail.chars().next()?;
    if let Some(digit) = first.to_digit(10) {
        return Some(digit);
    }
    DIGIT_WORDS
        .iter()
        .find(|(word, _)| tail.starts_with(word))
        .map(|&(_, digit)| digit)
}

pub fn line_value(digits: &[u32]) -> Result<u32> {
    match (digits.first(), digits.last()) {
        (Some(first), Some(last)) => Ok(first * 10 + last),
        _ => Err(PuzzleError::NoDigits),
    }
}

pub fn sum_calibration<P: AsRef<Path>>(path: P, extract: DigitExtractor) -> Result<u64> {
    input::sum_file(path, |line| line_value(&extract(line)).map(u64::from))
}
