//! Tests for the Rational type

extern crate std;

use crate::exif::rational::{round_to, Rational};

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

#[test]
fn test_reduces_to_lowest_terms() {
    let r = Rational::new(28, 10);
    std::assert_eq!(r.numerator(), 14);
    std::assert_eq!(r.denominator(), 5);
    std::assert_eq!(r.to_string_with("/"), "14/5");
}

#[test]
fn test_unsigned_reduces_to_lowest_terms() {
    let r = Rational::from_unsigned(300, 2);
    std::assert_eq!((r.numerator(), r.denominator()), (150, 1));
}

#[test]
fn test_zero_sides_are_not_reduced() {
    let r = Rational::new(0, 8);
    std::assert_eq!((r.numerator(), r.denominator()), (0, 8));

    let r = Rational::from_unsigned(6, 0);
    std::assert_eq!((r.numerator(), r.denominator()), (6, 0));
}

#[test]
fn test_sign_follows_euclid_remainders() {
    let r = Rational::new(4, -6);
    std::assert_eq!((r.numerator(), r.denominator()), (-2, 3));

    let r = Rational::new(-4, 6);
    std::assert_eq!((r.numerator(), r.denominator()), (-2, 3));

    let r = Rational::new(-1, 3);
    std::assert_eq!((r.numerator(), r.denominator()), (1, -3));
}

#[test]
fn test_reduced_pairs_are_coprime() {
    let pairs = [(12, 18), (-35, 49), (1000, -250), (17, 5), (i32::MAX, 3), (i32::MIN, 2), (-9, -27)];
    for (n, d) in pairs {
        let r = Rational::new(n, d);
        std::assert_eq!(gcd(r.numerator() as i64, r.denominator() as i64), 1, "{}/{}", n, d);
    }
}

#[test]
fn test_min_over_minus_one_keeps_original_pair() {
    let r = Rational::new(i32::MIN, -1);
    std::assert_eq!((r.numerator(), r.denominator()), (i32::MIN, -1));
}

#[test]
fn test_unsigned_overflow_saturates() {
    let r = Rational::from_unsigned(u32::MAX, 1);
    std::assert_eq!((r.numerator(), r.denominator()), (i32::MAX, 1));
    std::assert_eq!(r.to_string(), "2147483647/1");

    // Reduction runs first, so these fit without clamping
    let r = Rational::from_unsigned(u32::MAX, 3);
    std::assert_eq!((r.numerator(), r.denominator()), (1431655765, 1));
    let r = Rational::from_unsigned(4_000_000_000, 2);
    std::assert_eq!((r.numerator(), r.denominator()), (2_000_000_000, 1));
}

#[test]
fn test_to_double_rounds_to_two_places() {
    std::assert_eq!(Rational::new(28, 10).to_double(), 2.8);
    std::assert_eq!(Rational::new(1, 3).to_double(), 0.33);
    std::assert_eq!(Rational::new(2, 3).to_double(), 0.67);
    std::assert_eq!(Rational::new(-7, 4).to_double(), -1.75);
    std::assert_eq!(Rational::from_unsigned(1, 250).to_double(), 0.0);
}

#[test]
fn test_to_double_matches_rounded_quotient() {
    for n in -50..50 {
        for d in [1, 2, 3, 7, 9, 11, -4, 250] {
            let expected = round_to(n as f64 / d as f64, 2);
            std::assert_eq!(Rational::new(n, d).to_double(), expected, "{}/{}", n, d);
        }
    }
}

#[test]
fn test_zero_denominator_yields_zero() {
    std::assert_eq!(Rational::new(5, 0).to_double(), 0.0);
    std::assert_eq!(Rational::new(0, 5).to_double(), 0.0);
    std::assert_eq!(Rational::from_unsigned(0, 0).to_double(), 0.0);
}

#[test]
fn test_custom_separator() {
    std::assert_eq!(Rational::new(3, 4).to_string_with(" over "), "3 over 4");
    std::assert_eq!(Rational::new(3, 4).to_string(), "3/4");
}

#[test]
fn test_round_to_ties_even() {
    std::assert_eq!(round_to(0.125, 2), 0.12);
    std::assert_eq!(round_to(0.375, 2), 0.38);
    std::assert_eq!(round_to(2.5, 0), 2.0);
}
