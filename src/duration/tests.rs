use core::str::FromStr;

use alloc::{format, vec::Vec};
use num_traits::Bounded;
use writeable::assert_writeable_eq;

use crate::{
    format::format,
    parsers::{parse, parse_bytes},
    unit::Unit,
    ErrorKind, Sign,
};

use super::Duration;

const NS: i64 = 1;
const US: i64 = 1_000;
const MS: i64 = 1_000_000;
const S: i64 = 1_000_000_000;
const M: i64 = 60 * S;
const H: i64 = 60 * M;

const VALID: [(&str, i64); 42] = [
    // simple
    ("0", 0),
    ("5s", 5 * S),
    ("30s", 30 * S),
    ("1478s", 1478 * S),
    // sign
    ("-5s", -5 * S),
    ("+5s", 5 * S),
    ("-0", 0),
    ("+0", 0),
    // decimal
    ("5.0s", 5 * S),
    ("5.6s", 5 * S + 600 * MS),
    ("5.s", 5 * S),
    (".5s", 500 * MS),
    ("1.0s", S),
    ("1.00s", S),
    ("1.004s", S + 4 * MS),
    ("1.0040s", S + 4 * MS),
    ("100.00100s", 100 * S + MS),
    // different units
    ("10ns", 10 * NS),
    ("11us", 11 * US),
    ("12µs", 12 * US),
    ("12μs", 12 * US),
    ("13ms", 13 * MS),
    ("14s", 14 * S),
    ("15m", 15 * M),
    ("16h", 16 * H),
    // composite durations
    ("3h30m", 3 * H + 30 * M),
    ("10.5s4m", 4 * M + 10 * S + 500 * MS),
    ("-2m3.4s", -(2 * M + 3 * S + 400 * MS)),
    ("1h2m3s4ms5us6ns", H + 2 * M + 3 * S + 4 * MS + 5 * US + 6 * NS),
    ("39h9m14.425s", 39 * H + 9 * M + 14 * S + 425 * MS),
    ("1s1s1s", 3 * S),
    // large value
    ("52763797000ns", 52_763_797_000),
    // more than 9 digits after the decimal point
    ("0.3333333333333333333h", 20 * M),
    // 1 << 53 + 1 is not representable in an f64
    ("9007199254740993ns", (1 << 53) + 1),
    // largest duration
    ("9223372036854775807ns", i64::MAX),
    ("9223372036854775.807us", i64::MAX),
    ("9223372036s854ms775us807ns", i64::MAX),
    ("2562047h47m16.854775807s", i64::MAX),
    ("0.000000000000000000000000000000000001h", 0),
    // smallest duration
    ("-9223372036854775807ns", -i64::MAX),
    ("-2562047h47m16.854775807s", -i64::MAX),
    ("-9223372036854775.807us", -i64::MAX),
];

const GRAMMAR_ERRORS: [&str; 20] = [
    "", "3", "-", "s", ".", "-.", ".s", "+.s", "1.2.3s", "5 s", " 5s", "5s ", "1d", "1S", "1sec",
    "1h+2m", "--5s", "0x10s", "1e3s", "∞s",
];

const RANGE_ERRORS: [&str; 7] = [
    "3000000h",
    "9223372036854775808ns",
    "9223372036854775.808us",
    "9223372036854ms775us808ns",
    "-9223372036854775808ns",
    "18446744073709551616ns",
    "1000000000000000000000000000000s",
];

#[test]
fn parse_valid() {
    for (source, expected) in VALID {
        let duration = Duration::from_str(source)
            .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"));
        assert_eq!(duration.as_nanoseconds(), expected, "{source}");
    }
}

#[test]
fn parse_grammar_errors() {
    for source in GRAMMAR_ERRORS {
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Grammar, "{source}");
        assert_eq!(err.input(), Some(source));
    }
}

#[test]
fn parse_range_errors() {
    for source in RANGE_ERRORS {
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range, "{source}");
    }
}

#[test]
fn text_and_bytes_agree() {
    let sources = VALID
        .iter()
        .map(|(source, _)| *source)
        .chain(GRAMMAR_ERRORS)
        .chain(RANGE_ERRORS);
    for source in sources {
        assert_eq!(parse(source), parse_bytes(source.as_bytes()), "{source}");
        assert_eq!(
            parse(source),
            Duration::from_utf8(source.as_bytes()),
            "{source}"
        );
    }
    // Invalid UTF-8 is rejected as an unknown unit, never accepted.
    let err = parse_bytes(b"5\xce\xbc\xbcs").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Grammar);
    let err = parse_bytes(b"5\xces").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Grammar);
}

#[test]
fn canonical_strings() {
    let cases = [
        (0, "0s"),
        (5 * S, "5s"),
        (30 * S, "30s"),
        (1478 * S, "24m38s"),
        (-5 * S, "-5s"),
        (5 * S + 600 * MS, "5.6s"),
        (500 * MS, "500ms"),
        (S + 4 * MS, "1.004s"),
        (100 * S + MS, "1m40.001s"),
        (10 * NS, "10ns"),
        (11 * US, "11µs"),
        (1_500 * NS, "1.5µs"),
        (13 * MS, "13ms"),
        (13 * MS + 1, "13.000001ms"),
        (14 * S, "14s"),
        (15 * M, "15m0s"),
        (16 * H, "16h0m0s"),
        (3 * H + 30 * M, "3h30m0s"),
        (4 * M + 10 * S + 500 * MS, "4m10.5s"),
        (-(2 * M + 3 * S + 400 * MS), "-2m3.4s"),
        (H + 2 * M + 3 * S + 4 * MS + 5 * US + 6 * NS, "1h2m3.004005006s"),
        (39 * H + 9 * M + 14 * S + 425 * MS, "39h9m14.425s"),
        (52_763_797_000, "52.763797s"),
        (20 * M, "20m0s"),
        ((1 << 53) + 1, "2501h59m59.254740993s"),
        (i64::MAX, "2562047h47m16.854775807s"),
        (-i64::MAX, "-2562047h47m16.854775807s"),
    ];
    for (nanoseconds, expected) in cases {
        let duration = Duration::try_from_nanoseconds(nanoseconds).unwrap();
        assert_eq!(format(duration), expected);
        assert_eq!(format!("{duration}"), expected);
        assert_writeable_eq!(duration, expected);
        assert_eq!(parse(expected).unwrap(), duration, "{expected}");
    }
}

#[test]
fn round_trip_spread() {
    // A deterministic walk over magnitudes from nanoseconds to the limit.
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    let mut values = Vec::new();
    for shift in 0..63 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let magnitude = (state >> (shift + 1)) as i64;
        values.push(magnitude);
        values.push(-magnitude);
        values.push(1 << shift);
        values.push(-(1 << shift));
    }
    values.extend([i64::MAX, -i64::MAX, i64::MAX - 1, 999, 1_000, 999_999, 1_000_000]);

    for nanoseconds in values {
        let duration = Duration::try_from_nanoseconds(nanoseconds).unwrap();
        let text = format(duration);
        assert_eq!(parse(&text).unwrap(), duration, "{text}");
        assert_eq!(parse_bytes(text.as_bytes()).unwrap(), duration, "{text}");
        assert!(!text.contains(".0s") && !text.ends_with('.'), "{text}");
    }
}

#[test]
fn additive_segments() {
    let segments = ["1h", "2.5m", "3.000000001s", "4ms", "5.5us", "6ns", "0.1h"];
    for a in segments {
        for b in segments {
            let joined = format!("{a}{b}");
            let expected = parse(a).unwrap() + parse(b).unwrap();
            assert_eq!(parse(&joined).unwrap(), expected, "{joined}");
            assert_eq!(parse(&format!("-{joined}")).unwrap(), -expected, "{joined}");
        }
    }
}

#[test]
fn construction_and_conversion() {
    assert!(Duration::try_from_nanoseconds(i64::MIN)
        .unwrap_err()
        .is_range());
    assert!(Duration::try_from(i64::MIN).is_err());
    assert_eq!(i64::from(Duration::try_from(-7).unwrap()), -7);
    assert_eq!(
        Duration::from_unit(90, Unit::Minute).unwrap(),
        Duration::HOUR + Duration::MINUTE * 30
    );
    assert!(Duration::from_unit(3_000_000, Unit::Hour)
        .unwrap_err()
        .is_range());
    assert_eq!(<Duration as Bounded>::min_value(), Duration::MIN);
    assert_eq!(<Duration as Bounded>::max_value(), Duration::MAX);
    assert_eq!(-Duration::MIN, Duration::MAX);
    assert_eq!(Duration::MIN.abs(), Duration::MAX);
    assert_eq!(Duration::default(), Duration::ZERO);
}

#[test]
fn getters() {
    let duration = parse("1h30m1.5ms").unwrap();
    assert_eq!(duration.as_milliseconds(), 5_400_001);
    assert_eq!(duration.as_microseconds(), 5_400_001_500);
    assert_eq!((Duration::MINUTE * 90).as_hours_f64(), 1.5);
    assert_eq!((Duration::SECOND * -90).as_minutes_f64(), -1.5);
    assert_eq!(parse("1.25s").unwrap().as_seconds_f64(), 1.25);
    assert_eq!(Duration::MAX.as_hours_f64() as i64, 2_562_047);

    assert_eq!(Duration::ZERO.sign(), Sign::Zero);
    assert_eq!((-Duration::NANOSECOND).sign(), Sign::Negative);
    assert_eq!(Duration::NANOSECOND.sign(), Sign::Positive);
    assert!(parse("-0").unwrap().is_zero());
}

#[test]
fn checked_arithmetic() {
    assert!(Duration::MAX.checked_add(&Duration::NANOSECOND).unwrap_err().is_range());
    // -MAX - 1 fits in an i64 but is not a duration.
    assert!(Duration::MIN.checked_sub(&Duration::NANOSECOND).unwrap_err().is_range());
    assert!(Duration::HOUR.checked_mul(3_000_000).is_err());
    assert_eq!(
        Duration::SECOND.checked_mul(-3).unwrap(),
        parse("-3s").unwrap()
    );
    assert_eq!(
        Duration::MAX.checked_add(&Duration::MIN).unwrap(),
        Duration::ZERO
    );
}

#[test]
fn truncate_and_round() {
    let duration = parse("1h15m30.918273645s").unwrap();
    let cases = [
        ("1ns", "1h15m30.918273645s", "1h15m30.918273645s"),
        ("1us", "1h15m30.918273s", "1h15m30.918274s"),
        ("1ms", "1h15m30.918s", "1h15m30.918s"),
        ("1s", "1h15m30s", "1h15m31s"),
        ("2s", "1h15m30s", "1h15m30s"),
        ("1m", "1h15m0s", "1h16m0s"),
        ("10m", "1h10m0s", "1h20m0s"),
        ("1h", "1h0m0s", "1h0m0s"),
    ];
    for (multiple, truncated, rounded) in cases {
        let multiple = parse(multiple).unwrap();
        assert_eq!(format(duration.truncate(multiple)), truncated);
        assert_eq!(format(duration.round(multiple).unwrap()), rounded);
        assert_eq!(
            format(-duration.truncate(multiple)),
            format!("-{truncated}")
        );
        assert_eq!(
            format(-duration.round(multiple).unwrap()),
            format!("-{rounded}")
        );
        assert_eq!((-duration).truncate(multiple), -duration.truncate(multiple));
        assert_eq!(
            (-duration).round(multiple).unwrap(),
            -duration.round(multiple).unwrap()
        );
    }

    assert_eq!(parse("1.5s").unwrap().round(Duration::SECOND).unwrap(), Duration::SECOND * 2);
    assert_eq!(parse("-1.5s").unwrap().round(Duration::SECOND).unwrap(), Duration::SECOND * -2);
    assert_eq!(duration.round(Duration::ZERO).unwrap(), duration);
    assert_eq!(duration.truncate(-Duration::SECOND), duration);
    assert!(Duration::MAX.round(Duration::HOUR).unwrap_err().is_range());
    assert!(Duration::MIN.round(Duration::HOUR).unwrap_err().is_range());
    assert_writeable_eq!(Duration::MAX.truncate(Duration::HOUR), "2562047h0m0s");
}
