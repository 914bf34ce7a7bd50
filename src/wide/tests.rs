use super::*;

use proptest::prelude::*;

#[test]
fn test_parse_basic() {
    assert_eq!(parse_wide("0"), Ok(0));
    assert_eq!(parse_wide("42"), Ok(42));
    assert_eq!(parse_wide("1024"), Ok(1024));
    assert_eq!(parse_wide("-42"), Ok(-42));
    assert_eq!(parse_wide("-0"), Ok(0));
}

#[test]
fn test_parse_extremes() {
    assert_eq!(
        parse_wide("170141183460469231731687303715884105727"),
        Ok(i128::MAX)
    );
    assert_eq!(
        parse_wide("-170141183460469231731687303715884105728"),
        Ok(i128::MIN)
    );
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert_eq!(
        parse_wide("170141183460469231731687303715884105728"),
        Err(WideParseError::OutOfRange)
    );
    assert_eq!(
        parse_wide("-170141183460469231731687303715884105729"),
        Err(WideParseError::OutOfRange)
    );
    // Far past any 128-bit value
    assert_eq!(
        parse_wide("999999999999999999999999999999999999999999999"),
        Err(WideParseError::OutOfRange)
    );
}

#[test]
fn test_parse_rejects_malformed() {
    assert_eq!(parse_wide(""), Err(WideParseError::Empty));
    assert_eq!(parse_wide("-"), Err(WideParseError::Empty));
    assert_eq!(parse_wide("12a3"), Err(WideParseError::InvalidDigit('a')));
    assert_eq!(parse_wide("+5"), Err(WideParseError::InvalidDigit('+')));
    assert_eq!(parse_wide("1 2"), Err(WideParseError::InvalidDigit(' ')));
    assert_eq!(parse_wide("--1"), Err(WideParseError::InvalidDigit('-')));
}

#[test]
fn test_format_basic() {
    assert_eq!(format_wide(0), "0");
    assert_eq!(format_wide(7), "7");
    assert_eq!(format_wide(1024), "1024");
    assert_eq!(format_wide(-7), "-7");
    assert_eq!(format_wide(-1024), "-1024");
}

#[test]
fn test_format_extremes() {
    assert_eq!(
        format_wide(i128::MAX),
        "170141183460469231731687303715884105727"
    );
    assert_eq!(
        format_wide(i128::MIN),
        "-170141183460469231731687303715884105728"
    );
}

#[test]
fn test_round_trip_spot_values() {
    for v in [0i128, 1, -1, 10, 999999937, 1 << 100, -(1 << 100)] {
        assert_eq!(parse_wide(&format_wide(v)), Ok(v));
    }
}

proptest! {
    #[test]
    fn prop_format_parse_round_trip(v in any::<i128>()) {
        prop_assert_eq!(parse_wide(&format_wide(v)), Ok(v));
    }

    #[test]
    fn prop_format_matches_std_display(v in any::<i128>()) {
        prop_assert_eq!(format_wide(v), v.to_string());
    }
}
