//! Checked integer helpers used by the dispatcher.
//!
//! Every function here reports overflow or an undefined input as an
//! [`ArithmeticError`] instead of panicking or wrapping.

use super::numbers::Operand;
use thiserror::Error;

/// Computation failures with no defined answer for the student
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Integer overflow")]
    Overflow,

    #[error("Factorial is undefined for negative number {0}")]
    NegativeFactorial(Operand),

    #[error("{0} is not a single digit")]
    NotADigit(Operand),

    #[error("{0} is too large for a primality check")]
    TooLargeForPrimality(Operand),
}

pub(crate) fn overflow<T>(value: Option<T>) -> Result<T, ArithmeticError> {
    value.ok_or(ArithmeticError::Overflow)
}

/// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
pub fn gcd(a: Operand, b: Operand) -> Result<Operand, ArithmeticError> {
    let (mut x, mut y) = (a.unsigned_abs(), b.unsigned_abs());
    while y != 0 {
        (x, y) = (y, x % y);
    }
    Operand::try_from(x).map_err(|_| ArithmeticError::Overflow)
}

/// Least common multiple, always non-negative. Zero if either input is zero.
pub fn lcm(a: Operand, b: Operand) -> Result<Operand, ArithmeticError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let g = gcd(a, b)?;
    let product = overflow((a / g).checked_mul(b))?;
    overflow(product.checked_abs())
}

pub fn factorial(n: Operand) -> Result<Operand, ArithmeticError> {
    if n < 0 {
        return Err(ArithmeticError::NegativeFactorial(n));
    }
    let mut acc: Operand = 1;
    let mut i: Operand = 2;
    while i <= n {
        acc = overflow(acc.checked_mul(i))?;
        i += 1;
    }
    Ok(acc)
}

/// Above this, trial division is replaced by a deterministic Miller-Rabin test
/// that returns the same verdict in bounded time.
const TRIAL_DIVISION_LIMIT: Operand = 1_000_000_000_000;

/// Miller-Rabin with the first twelve primes as bases is exact below this bound.
const MILLER_RABIN_LIMIT: Operand = 3_317_044_064_679_887_385_961_981;

const WITNESSES: [u128; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Primality test. Values below 2 are not prime.
///
/// Small values use trial division over `2..=floor(sqrt(n))`; larger ones
/// use Miller-Rabin, and values past its exact range are an error.
pub fn is_prime(n: Operand) -> Result<bool, ArithmeticError> {
    if n < 2 {
        return Ok(false);
    }
    if n <= TRIAL_DIVISION_LIMIT {
        let mut i: Operand = 2;
        while i <= n / i {
            if n % i == 0 {
                return Ok(false);
            }
            i += 1;
        }
        return Ok(true);
    }
    if n >= MILLER_RABIN_LIMIT {
        return Err(ArithmeticError::TooLargeForPrimality(n));
    }
    Ok(miller_rabin(n as u128))
}

fn miller_rabin(n: u128) -> bool {
    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

// Operands stay below 2^82, so doubling never overflows u128.
fn mul_mod(mut a: u128, mut b: u128, m: u128) -> u128 {
    let mut result = 0;
    a %= m;
    while b > 0 {
        if b & 1 == 1 {
            result = (result + a) % m;
        }
        a = (a + a) % m;
        b >>= 1;
    }
    result
}

fn pow_mod(mut base: u128, mut exp: u128, m: u128) -> u128 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Render a real-number quotient the way the tutor has always shown it:
/// shortest round-trip digits, with `.0` kept on whole values (`2.0`, `2.5`)
/// and a signed two-digit exponent on very large or small ones (`1e+17`).
pub fn format_real(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}
