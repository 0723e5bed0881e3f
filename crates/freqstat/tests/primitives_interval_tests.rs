#![cfg(feature = "dev")]
//! Tests for class intervals and input rows.
//!
//! These tests verify:
//! - Parsing of `low-high` ranges and bare values
//! - Rejection of malformed interval and frequency text
//! - Midpoint, width, and display of intervals
//!
//! ## Test Organization
//!
//! 1. **Interval Parsing** - Accepted and rejected text
//! 2. **Interval Geometry** - Midpoint and width
//! 3. **Row Parsing** - Interval and frequency together

use approx::assert_relative_eq;

use freqstat::internals::primitives::errors::InputError;
use freqstat::internals::primitives::interval::{ClassInterval, Row};

// ============================================================================
// Interval Parsing Tests
// ============================================================================

/// Test parsing a continuous class.
#[test]
fn test_parse_range() {
    let interval: ClassInterval<f64> = "10-20".parse().unwrap();

    assert_eq!(interval, ClassInterval::range(10.0, 20.0));
    assert!(!interval.is_point());
}

/// Test parsing tolerates surrounding whitespace.
#[test]
fn test_parse_range_with_whitespace() {
    let interval: ClassInterval<f64> = " 10 - 20 ".parse().unwrap();
    assert_eq!(interval, ClassInterval::range(10.0, 20.0));
}

/// Test parsing a bare discrete value.
#[test]
fn test_parse_point() {
    let interval: ClassInterval<f64> = "2.5".parse().unwrap();

    assert_eq!(interval, ClassInterval::point(2.5));
    assert!(interval.is_point());
}

/// Test that reversed or empty ranges are rejected.
///
/// The entry form requires `low < high`.
#[test]
fn test_parse_rejects_non_increasing_range() {
    for text in ["20-10", "10-10"] {
        let res = text.parse::<ClassInterval<f64>>();
        assert!(
            matches!(res, Err(InputError::InvalidInterval(ref s)) if s == text),
            "'{text}' should be rejected"
        );
    }
}

/// Test that malformed text is rejected.
#[test]
fn test_parse_rejects_malformed_text() {
    for text in ["", "abc", "10-", "-10", "10-20-30", "1e3", "inf", "NaN", "+5", "1..2"] {
        assert!(
            text.parse::<ClassInterval<f64>>().is_err(),
            "'{text}' should be rejected"
        );
    }
}

// ============================================================================
// Interval Geometry Tests
// ============================================================================

/// Test midpoint and width of a range and a point.
#[test]
fn test_midpoint_and_width() {
    let range = ClassInterval::range(10.0f64, 20.0);
    assert_relative_eq!(range.midpoint(), 15.0);
    assert_relative_eq!(range.width(), 10.0);

    let point = ClassInterval::point(7.0f64);
    assert_relative_eq!(point.midpoint(), 7.0);
    assert_relative_eq!(point.width(), 0.0);
}

/// Test display of ranges and points.
#[test]
fn test_display() {
    assert_eq!(ClassInterval::range(10.0f64, 20.0).to_string(), "10-20");
    assert_eq!(ClassInterval::point(2.5f64).to_string(), "2.5");
}

/// Test intervals work with f32.
#[test]
fn test_f32_interval() {
    let interval: ClassInterval<f32> = "1-4".parse().unwrap();
    assert_relative_eq!(interval.midpoint(), 2.5f32);
}

// ============================================================================
// Row Parsing Tests
// ============================================================================

/// Test parsing a complete row.
#[test]
fn test_row_parse() {
    let row = Row::<f64>::parse("10-20", "5").unwrap();
    assert_eq!(row, Row::range(10.0, 20.0, 5));
}

/// Test that non-positive or non-integer frequencies are rejected.
#[test]
fn test_row_parse_rejects_bad_frequency() {
    for text in ["0", "-3", "2.5", "", "many"] {
        let res = Row::<f64>::parse("10-20", text);
        assert!(
            matches!(res, Err(InputError::InvalidFrequency(_))),
            "frequency '{text}' should be rejected"
        );
    }
}

/// Test that the interval is checked before the frequency.
#[test]
fn test_row_parse_reports_interval_first() {
    let res = Row::<f64>::parse("bad", "0");
    assert!(matches!(res, Err(InputError::InvalidInterval(_))));
}
