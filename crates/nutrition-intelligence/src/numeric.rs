// ABOUTME: Decimal rounding and magnitude+unit string helpers
// ABOUTME: Shared by table validation and nutrient aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Numeric helpers with decimal-formatting semantics.
//!
//! Rounding goes through fixed-precision formatting, which rounds the exact
//! binary value half-to-even. `(x * 100.0).round() / 100.0` is not equivalent:
//! it rounds ties away from zero and picks up error from the multiplication.

/// Round `value` to `places` decimal digits.
#[must_use]
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Split a micronutrient string such as `"14.8mg"` into `(14.8, "mg")`.
///
/// The magnitude is the leading run of digits and dots; the unit is every
/// alphabetic character after it. Returns `None` when there is no parseable
/// leading magnitude.
#[must_use]
pub fn split_magnitude(value: &str) -> Option<(f64, String)> {
    let magnitude_end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (magnitude, rest) = value.split_at(magnitude_end);
    let magnitude = magnitude.parse::<f64>().ok()?;
    let unit = rest.chars().filter(|c| c.is_alphabetic()).collect();
    Some((magnitude, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_places() {
        assert!((round_to(312.004, 2) - 312.0).abs() < f64::EPSILON);
        assert!((round_to(86.849_999, 2) - 86.85).abs() < f64::EPSILON);
        assert!((round_to(19.476, 2) - 19.48).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_passes_through_non_finite() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }

    #[test]
    fn test_split_magnitude() {
        assert_eq!(split_magnitude("0.4mg"), Some((0.4, "mg".to_owned())));
        assert_eq!(split_magnitude("483mcg"), Some((483.0, "mcg".to_owned())));
        assert_eq!(split_magnitude("12"), Some((12.0, String::new())));
    }

    #[test]
    fn test_split_magnitude_rejects_missing_number() {
        assert_eq!(split_magnitude("mg"), None);
        assert_eq!(split_magnitude(""), None);
        assert_eq!(split_magnitude("1.2.3mg"), None);
    }
}
