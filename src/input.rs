//! Input
//!
//! Console input is always raw text. These helpers turn it into explicit
//! results instead of guessing whether a string "looks numeric".

use thiserror::Error;

/// Reasons a line of console input is not a non-negative integer literal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Nothing was typed.
    #[error("no input")]
    Empty,

    /// Input contains something other than ASCII digits.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// All digits, but too large to represent.
    #[error("number too large: {0}")]
    TooLarge(String),
}

/// Strips a single trailing line terminator (`\n` or `\r\n`).
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);

    line.strip_suffix('\r').unwrap_or(line)
}

/// Parses a non-negative integer literal.
///
/// Only ASCII digits are accepted; signs, whitespace and decimal points are
/// rejected. Leading zeros are allowed.
///
/// # Errors
///
/// - [`InputError::Empty`]: the input is empty.
/// - [`InputError::NotANumber`]: the input contains a non-digit character.
/// - [`InputError::TooLarge`]: the value does not fit in a `u64`.
pub fn parse_number(input: &str) -> Result<u64, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    if !input.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(InputError::NotANumber(input.to_string()));
    }

    input
        .parse::<u64>()
        .map_err(|_err| InputError::TooLarge(input.to_string()))
}

/// Parses a quantity, falling back to 1 for anything that is not a valid
/// non-negative integer literal.
pub fn parse_quantity(input: &str) -> u32 {
    parse_number(input)
        .ok()
        .and_then(|quantity| u32::try_from(quantity).ok())
        .unwrap_or(1)
}

/// Whether a "keep ordering?" response asks to stop.
pub fn wants_to_stop(response: &str) -> bool {
    response.eq_ignore_ascii_case("n")
}
