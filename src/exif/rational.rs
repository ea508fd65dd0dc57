//! Reduced fraction type for RATIONAL and SRATIONAL values

use std::fmt;
use log::debug;

/// A numerator/denominator pair kept in lowest terms
///
/// Pairs where either side is zero are stored unreduced. The sign ends up
/// wherever Euclid's remainder sequence leaves it, so `4/-6` becomes `-2/3`
/// while `-1/3` becomes `1/-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rational {
    numerator: i32,
    denominator: i32,
}

impl Rational {
    /// Creates a rational from a signed pair
    pub fn new(numerator: i32, denominator: i32) -> Self {
        let (numerator, denominator) = reduce(numerator as i64, denominator as i64)
            .unwrap_or((numerator, denominator));

        Rational { numerator, denominator }
    }

    /// Creates a rational from an unsigned pair
    ///
    /// Halves beyond `i32::MAX` that are still too large after reduction
    /// saturate at `i32::MAX`.
    pub fn from_unsigned(numerator: u32, denominator: u32) -> Self {
        let (n, d) = if numerator == 0 || denominator == 0 {
            (numerator, denominator)
        } else {
            let divisor = gcd_unsigned(numerator, denominator);
            (numerator / divisor, denominator / divisor)
        };

        if n > i32::MAX as u32 || d > i32::MAX as u32 {
            debug!("Rational {}/{} exceeds i32, clamping to i32::MAX", n, d);
        }

        Rational {
            numerator: i32::try_from(n).unwrap_or(i32::MAX),
            denominator: i32::try_from(d).unwrap_or(i32::MAX),
        }
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// Returns the quotient rounded to two decimal places
    ///
    /// A zero denominator yields `0.0`.
    pub fn to_double(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }

        round_to(self.numerator as f64 / self.denominator as f64, 2)
    }

    /// Renders `numerator{separator}denominator`
    pub fn to_string_with(&self, separator: &str) -> String {
        format!("{}{}{}", self.numerator, separator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Rounds to the given number of decimal places, ties to even
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

fn reduce(numerator: i64, denominator: i64) -> Option<(i32, i32)> {
    if numerator == 0 || denominator == 0 {
        return None;
    }

    let divisor = gcd(numerator, denominator);
    let n = i32::try_from(numerator / divisor).ok()?;
    let d = i32::try_from(denominator / divisor).ok()?;
    Some((n, d))
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        return a;
    }
    gcd(b, a % b)
}

fn gcd_unsigned(a: u32, b: u32) -> u32 {
    if b == 0 {
        return a;
    }
    gcd_unsigned(b, a % b)
}
