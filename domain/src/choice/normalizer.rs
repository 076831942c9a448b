//! Canonical numeric value of a free-form answer choice.
//!
//! Choice text arrives in whatever form the question author used:
//! `"3/8 cup"`, `"1 1/2"`, `"-2 1/4"`, `"0.375"`, `"5 cm"`. Each is reduced to
//! a finite `f64` or an explicit [`ChoiceParseError`]. A failed parse is never
//! reported as `0.0` or `NaN`.
//!
//! # Parsing order
//!
//! | Priority | Form | Example | Value |
//! |----------|------|---------|-------|
//! | 1 | Mixed fraction `W N/D` | `-2 1/4` | `-2.25` |
//! | 2 | Simple fraction `N/D` | `3/8 cup` | `0.375` |
//! | 3 | Decimal / integer with optional unit suffix | `5 cm` | `5.0` |
//!
//! Thousands separators and surrounding whitespace are stripped first, and
//! matching is case-insensitive.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Characters removed before matching.
const THOUSANDS_SEPARATORS: &[char] = &[','];

/// A unit suffix: optional whitespace, then something that cannot continue a number.
const UNIT_SUFFIX: &str = r"(?:\s*[^\s\d./].*)?$";

const NUMBER: &str = r"(?:\d+\.?\d*|\.\d+)";

static MIXED_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)^([+-]?)(\d+)\s+(\d+)\s*/\s*(\d+){UNIT_SUFFIX}"))
        .expect("mixed fraction pattern is valid")
});

static SIMPLE_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)^([+-]?{NUMBER})\s*/\s*([+-]?{NUMBER}){UNIT_SUFFIX}"
    ))
    .expect("simple fraction pattern is valid")
});

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)^([+-]?{NUMBER}(?:e[+-]?\d+)?){UNIT_SUFFIX}"))
        .expect("decimal pattern is valid")
});

/// Why a choice string has no canonical number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChoiceParseError {
    #[error("Choice is empty")]
    Empty,

    #[error("Zero denominator in '{0}'")]
    ZeroDenominator(String),

    #[error("Value of '{0}' is not finite")]
    NonFinite(String),

    #[error("Unrecognized numeric form: '{0}'")]
    Unrecognized(String),
}

/// Parse one raw answer choice into its canonical number.
///
/// # Examples
///
/// ```
/// use quizcheck_domain::choice::normalizer::normalize_choice;
///
/// assert_eq!(normalize_choice("-2 1/4"), Ok(-2.25));
/// assert_eq!(normalize_choice("3/8 cup"), Ok(0.375));
/// assert_eq!(normalize_choice("1,250 m"), Ok(1250.0));
/// assert!(normalize_choice("abc").is_err());
/// ```
pub fn normalize_choice(raw: &str) -> Result<f64, ChoiceParseError> {
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return Err(ChoiceParseError::Empty);
    }

    let value = if let Some(caps) = MIXED_FRACTION.captures(&cleaned) {
        let negative = &caps[1] == "-";
        let whole = parse_number(&caps[2], &cleaned)?;
        let fraction = divide(&caps[3], &caps[4], &cleaned)?;
        if negative {
            -(whole + fraction)
        } else {
            whole + fraction
        }
    } else if let Some(caps) = SIMPLE_FRACTION.captures(&cleaned) {
        divide(&caps[1], &caps[2], &cleaned)?
    } else if let Some(caps) = DECIMAL.captures(&cleaned) {
        parse_number(&caps[1], &cleaned)?
    } else {
        return Err(ChoiceParseError::Unrecognized(cleaned));
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChoiceParseError::NonFinite(cleaned))
    }
}

fn clean(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
        .map(|c| match c {
            '\u{2212}' => '-',
            '\u{2044}' => '/',
            other => other,
        })
        .collect()
}

fn parse_number(text: &str, context: &str) -> Result<f64, ChoiceParseError> {
    text.parse::<f64>()
        .map_err(|_| ChoiceParseError::Unrecognized(context.to_string()))
}

fn divide(numerator: &str, denominator: &str, context: &str) -> Result<f64, ChoiceParseError> {
    let n = parse_number(numerator, context)?;
    let d = parse_number(denominator, context)?;
    if d == 0.0 {
        return Err(ChoiceParseError::ZeroDenominator(context.to_string()));
    }
    Ok(n / d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(raw: &str, expected: f64) {
        let value = normalize_choice(raw).unwrap_or_else(|e| panic!("{raw}: {e}"));
        assert!(
            (value - expected).abs() < 1e-9,
            "{raw} normalized to {value}, expected {expected}"
        );
    }

    #[test]
    fn test_mixed_fractions() {
        assert_close("1 1/2", 1.5);
        assert_close("-2 1/4", -2.25);
        assert_close("+3 3/4", 3.75);
        assert_close("2 1 / 3", 2.0 + 1.0 / 3.0);
        assert_close("1 1/2 cups", 1.5);
    }

    #[test]
    fn test_negative_zero_whole_keeps_sign() {
        assert_close("-0 1/2", -0.5);
    }

    #[test]
    fn test_simple_fractions() {
        assert_close("3/8", 0.375);
        assert_close("3/8 cup", 0.375);
        assert_close("-5/4", -1.25);
        assert_close("1.5/3", 0.5);
    }

    #[test]
    fn test_decimals_and_units() {
        assert_close("0.375", 0.375);
        assert_close("24", 24.0);
        assert_close("5 cm", 5.0);
        assert_close("12.5%", 12.5);
        assert_close(".5", 0.5);
        assert_close("-7", -7.0);
        assert_close("  42  ", 42.0);
    }

    #[test]
    fn test_case_insensitive_exponent() {
        assert_close("1.5E2", 150.0);
        assert_close("1.5e-1", 0.15);
        assert_close("5 EM", 5.0);
    }

    #[test]
    fn test_thousands_separators() {
        assert_close("1,250", 1250.0);
        assert_close("-12,000.5 dollars", -12000.5);
    }

    #[test]
    fn test_unicode_minus() {
        assert_close("\u{2212}3", -3.0);
    }

    #[test]
    fn test_zero_denominator_fails() {
        assert!(matches!(
            normalize_choice("3/0"),
            Err(ChoiceParseError::ZeroDenominator(_))
        ));
        assert!(matches!(
            normalize_choice("1 1/0"),
            Err(ChoiceParseError::ZeroDenominator(_))
        ));
    }

    #[test]
    fn test_unparseable_is_explicit_failure() {
        assert!(matches!(
            normalize_choice("abc"),
            Err(ChoiceParseError::Unrecognized(_))
        ));
        assert_eq!(normalize_choice("   "), Err(ChoiceParseError::Empty));
        assert!(normalize_choice("x = 4").is_err());
        // A trailing number is not a unit
        assert!(normalize_choice("2 3").is_err());
    }

    #[test]
    fn test_overflow_is_not_finite() {
        assert!(matches!(
            normalize_choice("1e400"),
            Err(ChoiceParseError::NonFinite(_))
        ));
    }

    #[test]
    fn test_decimal_rendering_round_trips() {
        let values = [0.0, 0.375, -2.25, 1.0 / 3.0, 123456.789, -0.000125, 1e-7];
        for v in values {
            let rendered = format!("{v}");
            let parsed = normalize_choice(&rendered).unwrap();
            assert!((parsed - v).abs() < 1e-9, "{rendered} -> {parsed}");
        }
    }
}
