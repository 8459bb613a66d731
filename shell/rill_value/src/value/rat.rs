//! Arbitrary-precision rationals.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Largest decimal exponent accepted by [`Rat::parse`].
///
/// `1e999999999` would otherwise allocate a billion-digit integer.
pub const MAX_EXPONENT: u32 = 4096;

/// A rational number, always kept normalised.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rat(BigRational);

impl Rat {
    pub fn new(value: BigRational) -> Self {
        Rat(value)
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Rat(BigRational::from_integer(value.into()))
    }

    /// Parse rational text.
    ///
    /// Accepts an optional sign followed by an integer (`12`), a fraction
    /// with a non-zero denominator (`3/4`), or a decimal with an optional
    /// exponent (`1.25`, `.5`, `2.5E-2`). Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Option<Rat> {
        let text = text.trim();
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let value = match body.split_once('/') {
            Some((num, den)) => {
                let den = parse_digits(den)?;
                if den.is_zero() {
                    return None;
                }
                BigRational::new(parse_digits(num)?, den)
            }
            None => parse_decimal(body)?,
        };

        Some(Rat(if negative { -value } else { value }))
    }

    #[inline]
    pub fn value(&self) -> &BigRational {
        &self.0
    }

    /// The integer when the denominator is 1, else `num/den`.
    pub fn as_string(&self) -> String {
        if self.0.denom().is_one() {
            self.0.numer().to_string()
        } else {
            format!("{}/{}", self.0.numer(), self.0.denom())
        }
    }

    /// `(rat <as_string>)`.
    pub fn repr(&self) -> String {
        format!("(rat {})", self.as_string())
    }
}

impl fmt::Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

fn parse_digits(text: &str) -> Option<BigInt> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(text.as_bytes(), 10)
}

fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let exponent: i64 = text.parse().ok()?;
    (exponent.unsigned_abs() <= u64::from(MAX_EXPONENT)).then_some(exponent)
}

fn parse_decimal(text: &str) -> Option<BigRational> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(i) => (&text[..i], parse_exponent(&text[i + 1..])?),
        None => (text, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let digits = BigInt::parse_bytes(format!("{int_part}{frac_part}").as_bytes(), 10)?;
    let scale = exponent - i64::try_from(frac_part.len()).ok()?;
    let power = num_traits::pow(BigInt::from(10u32), usize::try_from(scale.unsigned_abs()).ok()?);
    Some(if scale >= 0 {
        BigRational::from_integer(digits * power)
    } else {
        BigRational::new(digits, power)
    })
}
