//! Intent dispatcher.
//!
//! Maps a predicted [`IntentLabel`] and the extracted operands to a computed
//! [`Answer`], or declines with an [`UnhandledReason`]. Declining is not an
//! error: it tells the caller to hand the question to the fallback model.
//!
//! The dispatcher is pure. It never performs I/O and never panics on
//! arithmetic; overflow and undefined inputs become [`Dispatch::Unhandled`].

use super::arithmetic::{self, ArithmeticError, overflow};
use super::label::IntentLabel;
use super::numbers::{NumberSequence, Operand};
use crate::core::answer::Answer;
use crate::core::error::DomainError;
use std::fmt;

pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero.";
pub const DIGIT_NOT_FOUND: &str = "Digit not found.";

/// Why the dispatcher declined to compute an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnhandledReason {
    /// The classifier produced nothing (failed, or returned a blank label)
    NoLabel,
    /// The classifier produced a label outside the known set
    UnknownLabel(String),
    /// The label is known but the question has too few numbers
    InsufficientOperands {
        intent: IntentLabel,
        required: usize,
        found: usize,
    },
    /// A number in the question was too large to represent
    OperandOverflow,
    /// The computation has no defined result for these operands
    Arithmetic {
        intent: IntentLabel,
        error: ArithmeticError,
    },
}

impl fmt::Display for UnhandledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnhandledReason::NoLabel => write!(f, "no intent label"),
            UnhandledReason::UnknownLabel(label) => write!(f, "unknown intent '{}'", label),
            UnhandledReason::InsufficientOperands {
                intent,
                required,
                found,
            } => write!(
                f,
                "{} needs {} number(s), found {}",
                intent, required, found
            ),
            UnhandledReason::OperandOverflow => write!(f, "operand too large"),
            UnhandledReason::Arithmetic { intent, error } => write!(f, "{}: {}", intent, error),
        }
    }
}

/// Outcome of dispatching a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Computed(Answer),
    Unhandled(UnhandledReason),
}

impl Dispatch {
    pub fn into_result(self) -> Result<Answer, UnhandledReason> {
        match self {
            Dispatch::Computed(answer) => Ok(answer),
            Dispatch::Unhandled(reason) => Err(reason),
        }
    }
}

/// Dispatch a raw classifier label against extracted operands.
///
/// `None` or a blank label means the classifier gave no answer. Labels that
/// do not parse, and sequences containing an unrepresentable number, are
/// declined before any arithmetic is attempted.
pub fn dispatch_label(raw_label: Option<&str>, numbers: &NumberSequence) -> Dispatch {
    match resolve_label(raw_label) {
        Ok(intent) => dispatch_sequence(intent, numbers),
        Err(reason) => Dispatch::Unhandled(reason),
    }
}

/// Parse a raw classifier label into a known intent.
pub fn resolve_label(raw_label: Option<&str>) -> Result<IntentLabel, UnhandledReason> {
    match raw_label.map(str::parse::<IntentLabel>) {
        None | Some(Err(DomainError::EmptyIntent)) => Err(UnhandledReason::NoLabel),
        Some(Err(DomainError::UnknownIntent(label))) => Err(UnhandledReason::UnknownLabel(label)),
        Some(Ok(intent)) => Ok(intent),
    }
}

/// Like [`dispatch`], but declines sequences that lost a number to overflow.
pub fn dispatch_sequence(intent: IntentLabel, numbers: &NumberSequence) -> Dispatch {
    if numbers.overflowed() {
        return Dispatch::Unhandled(UnhandledReason::OperandOverflow);
    }
    dispatch(intent, numbers.as_slice())
}

/// Compute the answer for `intent` from `numbers`.
///
/// Returns [`Dispatch::Unhandled`] when `numbers` is shorter than the
/// intent's arity or the computation is undefined for these operands.
pub fn dispatch(intent: IntentLabel, numbers: &[Operand]) -> Dispatch {
    let required = intent.arity();
    if numbers.len() < required {
        return Dispatch::Unhandled(UnhandledReason::InsufficientOperands {
            intent,
            required,
            found: numbers.len(),
        });
    }

    match compute(intent, numbers) {
        Ok(text) => Dispatch::Computed(Answer::new(text)),
        Err(error) => Dispatch::Unhandled(UnhandledReason::Arithmetic { intent, error }),
    }
}

// Callers guarantee numbers.len() >= intent.arity().
fn compute(intent: IntentLabel, n: &[Operand]) -> Result<String, ArithmeticError> {
    let text = match intent {
        IntentLabel::Addition => {
            let sum = n
                .iter()
                .try_fold(0 as Operand, |acc, &x| acc.checked_add(x));
            overflow(sum)?.to_string()
        }
        IntentLabel::Subtraction => overflow(n[0].checked_sub(n[1]))?.to_string(),
        IntentLabel::Multiplication | IntentLabel::AreaRectangle => {
            overflow(n[0].checked_mul(n[1]))?.to_string()
        }
        IntentLabel::Division => {
            if n[1] == 0 {
                DIVIDE_BY_ZERO.to_string()
            } else {
                arithmetic::format_real(n[0] as f64 / n[1] as f64)
            }
        }
        IntentLabel::PerimeterSquare => overflow(n[0].checked_mul(4))?.to_string(),
        IntentLabel::EvenOdd => {
            if n[0] % 2 == 0 {
                "Even".to_string()
            } else {
                "Odd".to_string()
            }
        }
        IntentLabel::PlaceValue => place_value(n[0], n[1])?,
        IntentLabel::Table => multiplication_table(n[0])?,
        IntentLabel::Lcm => arithmetic::lcm(n[0], n[1])?.to_string(),
        IntentLabel::Hcf => arithmetic::gcd(n[0], n[1])?.to_string(),
        IntentLabel::PrimeCheck => {
            if arithmetic::is_prime(n[0])? {
                "Prime".to_string()
            } else {
                "Not Prime".to_string()
            }
        }
        IntentLabel::Square => overflow(n[0].checked_pow(2))?.to_string(),
        IntentLabel::Cube | IntentLabel::VolumeCube => overflow(n[0].checked_pow(3))?.to_string(),
        IntentLabel::Factorial => arithmetic::factorial(n[0])?.to_string(),
        IntentLabel::AreaCircle => {
            let radius = n[0] as f64;
            format!("{:.2}", std::f64::consts::PI * radius * radius)
        }
        IntentLabel::VolumeCuboid => {
            let base = overflow(n[0].checked_mul(n[1]))?;
            overflow(base.checked_mul(n[2]))?.to_string()
        }
    };
    Ok(text)
}

/// Value of `digit` at its first position counted from the right of `number`.
///
/// The scan starts at the least-significant digit, so for `(3, 3243)` the
/// trailing 3 wins and the answer is `3`, not `3000`.
fn place_value(digit: Operand, number: Operand) -> Result<String, ArithmeticError> {
    if !(0..=9).contains(&digit) {
        return Err(ArithmeticError::NotADigit(digit));
    }
    let needle = char::from(b'0' + digit as u8);
    let position = number.to_string().chars().rev().position(|c| c == needle);

    match position {
        None => Ok(DIGIT_NOT_FOUND.to_string()),
        Some(p) => {
            let scale = overflow((10 as Operand).checked_pow(p as u32))?;
            Ok(overflow(digit.checked_mul(scale))?.to_string())
        }
    }
}

fn multiplication_table(base: Operand) -> Result<String, ArithmeticError> {
    let lines = (1..=10)
        .map(|i: Operand| {
            overflow(base.checked_mul(i)).map(|product| format!("{} x {} = {}", base, i, product))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computed(intent: IntentLabel, numbers: &[Operand]) -> String {
        match dispatch(intent, numbers) {
            Dispatch::Computed(answer) => answer.into_string(),
            Dispatch::Unhandled(reason) => panic!("expected an answer, got {}", reason),
        }
    }

    fn unhandled(intent: IntentLabel, numbers: &[Operand]) -> UnhandledReason {
        match dispatch(intent, numbers) {
            Dispatch::Unhandled(reason) => reason,
            Dispatch::Computed(answer) => panic!("expected unhandled, got {}", answer),
        }
    }

    // ==================== Per-intent rules ====================

    #[test]
    fn test_addition_sums_every_number() {
        assert_eq!(computed(IntentLabel::Addition, &[3, 4, 5]), "12");
        assert_eq!(computed(IntentLabel::Addition, &[3, 4]), "7");
    }

    #[test]
    fn test_subtraction_can_go_negative() {
        assert_eq!(computed(IntentLabel::Subtraction, &[10, 4]), "6");
        assert_eq!(computed(IntentLabel::Subtraction, &[4, 10]), "-6");
    }

    #[test]
    fn test_multiplication_uses_first_two() {
        assert_eq!(computed(IntentLabel::Multiplication, &[6, 7, 100]), "42");
    }

    #[test]
    fn test_division() {
        assert_eq!(computed(IntentLabel::Division, &[10, 4]), "2.5");
        assert_eq!(computed(IntentLabel::Division, &[10, 5]), "2.0");
        assert_eq!(computed(IntentLabel::Division, &[0, 5]), "0.0");
    }

    #[test]
    fn test_division_extreme_magnitudes() {
        assert_eq!(computed(IntentLabel::Division, &[100_000_000_000_000_000, 1]), "1e+17");
        assert_eq!(computed(IntentLabel::Division, &[1, 300_000]), "3.3333333333333333e-06");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(computed(IntentLabel::Division, &[7, 0]), DIVIDE_BY_ZERO);
    }

    #[test]
    fn test_area_rectangle() {
        assert_eq!(computed(IntentLabel::AreaRectangle, &[5, 8]), "40");
    }

    #[test]
    fn test_perimeter_square() {
        assert_eq!(computed(IntentLabel::PerimeterSquare, &[9]), "36");
    }

    #[test]
    fn test_even_odd() {
        assert_eq!(computed(IntentLabel::EvenOdd, &[0]), "Even");
        assert_eq!(computed(IntentLabel::EvenOdd, &[14]), "Even");
        assert_eq!(computed(IntentLabel::EvenOdd, &[7]), "Odd");
    }

    #[test]
    fn test_place_value_single_occurrence() {
        assert_eq!(computed(IntentLabel::PlaceValue, &[3, 3245]), "3000");
        assert_eq!(computed(IntentLabel::PlaceValue, &[4, 3245]), "40");
        assert_eq!(computed(IntentLabel::PlaceValue, &[5, 3245]), "5");
    }

    #[test]
    fn test_place_value_scans_from_least_significant_digit() {
        assert_eq!(computed(IntentLabel::PlaceValue, &[3, 3243]), "3");
        assert_eq!(computed(IntentLabel::PlaceValue, &[7, 7170]), "70");
    }

    #[test]
    fn test_place_value_zero_digit() {
        assert_eq!(computed(IntentLabel::PlaceValue, &[0, 105]), "0");
    }

    #[test]
    fn test_place_value_digit_not_found() {
        assert_eq!(computed(IntentLabel::PlaceValue, &[9, 3245]), DIGIT_NOT_FOUND);
    }

    #[test]
    fn test_place_value_rejects_multi_digit_needle() {
        assert_eq!(
            unhandled(IntentLabel::PlaceValue, &[12, 5123]),
            UnhandledReason::Arithmetic {
                intent: IntentLabel::PlaceValue,
                error: ArithmeticError::NotADigit(12),
            }
        );
    }

    #[test]
    fn test_table() {
        let expected = (1..=10)
            .map(|i| format!("7 x {} = {}", i, 7 * i))
            .collect::<Vec<_>>()
            .join("\n");
        let table = computed(IntentLabel::Table, &[7]);
        assert_eq!(table, expected);
        assert_eq!(table.lines().next(), Some("7 x 1 = 7"));
        assert_eq!(table.lines().last(), Some("7 x 10 = 70"));
        assert_eq!(table.lines().count(), 10);
    }

    #[test]
    fn test_lcm_and_hcf() {
        assert_eq!(computed(IntentLabel::Lcm, &[4, 6]), "12");
        assert_eq!(computed(IntentLabel::Hcf, &[12, 18]), "6");
        assert_eq!(computed(IntentLabel::Lcm, &[0, 6]), "0");
        assert_eq!(computed(IntentLabel::Hcf, &[0, 6]), "6");
    }

    #[test]
    fn test_prime_check() {
        assert_eq!(computed(IntentLabel::PrimeCheck, &[0]), "Not Prime");
        assert_eq!(computed(IntentLabel::PrimeCheck, &[1]), "Not Prime");
        assert_eq!(computed(IntentLabel::PrimeCheck, &[2]), "Prime");
        assert_eq!(computed(IntentLabel::PrimeCheck, &[17]), "Prime");
        assert_eq!(computed(IntentLabel::PrimeCheck, &[25]), "Not Prime");
    }

    #[test]
    fn test_powers() {
        assert_eq!(computed(IntentLabel::Square, &[12]), "144");
        assert_eq!(computed(IntentLabel::Cube, &[3]), "27");
        assert_eq!(computed(IntentLabel::VolumeCube, &[4]), "64");
    }

    #[test]
    fn test_factorial() {
        assert_eq!(computed(IntentLabel::Factorial, &[5]), "120");
        assert_eq!(computed(IntentLabel::Factorial, &[0]), "1");
    }

    #[test]
    fn test_negative_factorial_is_unhandled() {
        assert_eq!(
            unhandled(IntentLabel::Factorial, &[-1]),
            UnhandledReason::Arithmetic {
                intent: IntentLabel::Factorial,
                error: ArithmeticError::NegativeFactorial(-1),
            }
        );
    }

    #[test]
    fn test_area_circle_has_two_decimals() {
        assert_eq!(computed(IntentLabel::AreaCircle, &[2]), "12.57");
        assert_eq!(computed(IntentLabel::AreaCircle, &[1]), "3.14");
        assert_eq!(computed(IntentLabel::AreaCircle, &[0]), "0.00");
        assert_eq!(computed(IntentLabel::AreaCircle, &[10]), "314.16");
    }

    #[test]
    fn test_volume_cuboid() {
        assert_eq!(computed(IntentLabel::VolumeCuboid, &[2, 3, 4]), "24");
    }

    // ==================== Declines ====================

    #[test]
    fn test_arity_unmet() {
        assert_eq!(
            unhandled(IntentLabel::Addition, &[5]),
            UnhandledReason::InsufficientOperands {
                intent: IntentLabel::Addition,
                required: 2,
                found: 1,
            }
        );
        assert!(matches!(
            dispatch(IntentLabel::VolumeCuboid, &[2, 3]),
            Dispatch::Unhandled(UnhandledReason::InsufficientOperands { found: 2, .. })
        ));
        assert!(matches!(
            dispatch(IntentLabel::Square, &[]),
            Dispatch::Unhandled(UnhandledReason::InsufficientOperands { found: 0, .. })
        ));
    }

    #[test]
    fn test_overflow_is_unhandled() {
        let big = Operand::MAX;
        for (intent, numbers) in [
            (IntentLabel::Addition, vec![big, 1]),
            (IntentLabel::Multiplication, vec![big, 2]),
            (IntentLabel::Square, vec![big]),
            (IntentLabel::Cube, vec![big]),
            (IntentLabel::Factorial, vec![40]),
            (IntentLabel::Table, vec![big]),
            (IntentLabel::VolumeCuboid, vec![big, 2, 2]),
        ] {
            assert_eq!(
                unhandled(intent, &numbers),
                UnhandledReason::Arithmetic {
                    intent,
                    error: ArithmeticError::Overflow,
                },
                "{} should overflow",
                intent
            );
        }
    }

    #[test]
    fn test_unknown_label_string() {
        let numbers = NumberSequence::from(vec![1, 2]);
        assert_eq!(
            dispatch_label(Some("unknown_label"), &numbers),
            Dispatch::Unhandled(UnhandledReason::UnknownLabel("unknown_label".to_string()))
        );
    }

    #[test]
    fn test_missing_or_blank_label() {
        let numbers = NumberSequence::from(vec![1, 2]);
        assert_eq!(
            dispatch_label(None, &numbers),
            Dispatch::Unhandled(UnhandledReason::NoLabel)
        );
        assert_eq!(
            dispatch_label(Some("  "), &numbers),
            Dispatch::Unhandled(UnhandledReason::NoLabel)
        );
    }

    #[test]
    fn test_known_label_string() {
        let numbers = NumberSequence::from(vec![3, 4, 5]);
        let answer = dispatch_label(Some("addition"), &numbers).into_result();
        assert_eq!(answer, Ok(Answer::new("12")));
    }

    #[test]
    fn test_overflowed_sequence_is_unhandled() {
        let numbers = crate::intent::numbers::extract_numbers(&format!("{} plus 1", "9".repeat(50)));
        assert_eq!(
            dispatch_label(Some("addition"), &numbers),
            Dispatch::Unhandled(UnhandledReason::OperandOverflow)
        );
    }

    #[test]
    fn test_resolve_label() {
        assert_eq!(resolve_label(Some("hcf")), Ok(IntentLabel::Hcf));
        assert_eq!(resolve_label(None), Err(UnhandledReason::NoLabel));
        assert_eq!(
            resolve_label(Some("HCF")),
            Err(UnhandledReason::UnknownLabel("HCF".to_string()))
        );
    }

    #[test]
    fn test_reason_display() {
        let reason = UnhandledReason::InsufficientOperands {
            intent: IntentLabel::Lcm,
            required: 2,
            found: 0,
        };
        assert_eq!(reason.to_string(), "lcm needs 2 number(s), found 0");
    }
}
