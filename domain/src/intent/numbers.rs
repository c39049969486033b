//! Operand extraction from free text.

use regex::Regex;
use std::sync::LazyLock;

/// Integer type used for operands and integer results.
pub type Operand = i128;

/// Ordered operands pulled out of a question (Value Object)
///
/// Values appear in the order their digits appear in the text.
/// A digit run too long to fit in [`Operand`] cannot be represented; the
/// sequence then records the overflow and keeps the representable values,
/// and the dispatcher refuses to compute from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSequence {
    values: Vec<Operand>,
    overflowed: bool,
}

impl NumberSequence {
    pub fn new(values: Vec<Operand>) -> Self {
        Self {
            values,
            overflowed: false,
        }
    }

    pub fn as_slice(&self) -> &[Operand] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True if some digit run in the source text did not fit in an [`Operand`]
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl From<Vec<Operand>> for NumberSequence {
    fn from(values: Vec<Operand>) -> Self {
        NumberSequence::new(values)
    }
}

/// Maximal runs of decimal digits. `\d` is Unicode-aware, so any `Nd`
/// digit counts (Devanagari, Arabic-Indic, fullwidth, ...).
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// A single decimal digit character
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\d\z").expect("digit pattern is valid"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a decimal digit character.
///
/// `Nd` digits are encoded in contiguous runs starting at zero, so the value
/// is the distance to the start of the run, modulo 10.
fn digit_value(c: char) -> u32 {
    if let Some(value) = c.to_digit(10) {
        return value;
    }
    let mut offset = 0;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32)
        && is_decimal_digit(prev)
    {
        offset += 1;
        code -= 1;
    }
    offset % 10
}

fn parse_run(run: &str) -> Option<Operand> {
    run.chars().try_fold(0 as Operand, |acc, c| {
        acc.checked_mul(10)?.checked_add(Operand::from(digit_value(c)))
    })
}

/// Extract every maximal run of decimal digits from `text`, left to right.
///
/// Signs and decimal points are not part of a number: `"-3.5"` yields
/// `[3, 5]`. Never fails.
pub fn extract_numbers(text: &str) -> NumberSequence {
    let mut sequence = NumberSequence::default();
    for run in DIGIT_RUN.find_iter(text) {
        match parse_run(run.as_str()) {
            Some(value) => sequence.values.push(value),
            None => sequence.overflowed = true,
        }
    }
    sequence
}
