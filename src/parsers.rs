//! This module implements duration string parsing.
//!
//! A duration string is an optional sign followed either by the single
//! literal `0` or by one or more `<number><unit>` segments, e.g. `"-1h2m3.5s"`.
//! Segments are summed in any order and may repeat a unit.
//!
//! Fractions are scaled on the digit string itself, so every literal is
//! converted to the nearest nanosecond exactly, no matter how many digits it
//! carries.

use core::ops::Range;

use crate::{
    error::{DurationError, ErrorMessage},
    unit::Unit,
    Duration, DurationResult, Sign,
};
use alloc::string::String;

mod cursor;

pub(crate) use cursor::{ByteCursor, DurationCursor, StrCursor};

/// The largest magnitude of a duration, in nanoseconds.
const MAX_NANOSECONDS: u64 = i64::MAX as u64;

/// Parses a duration string.
///
/// ```rust
/// use duration_rs::{parsers::parse, Duration};
///
/// let duration = parse("1h15m30.5s").unwrap();
/// assert_eq!(duration.as_nanoseconds(), 4_530_500_000_000);
/// assert_eq!(parse("-0").unwrap(), Duration::ZERO);
/// ```
pub fn parse(source: &str) -> DurationResult<Duration> {
    parse_duration(&mut StrCursor::new(source))
}

/// Parses a duration string from its UTF-8 bytes.
///
/// This accepts and rejects exactly the same inputs as [`parse`], without
/// first validating or copying the input.
///
/// ```rust
/// use duration_rs::parsers::{parse, parse_bytes};
///
/// assert_eq!(parse_bytes("12µs".as_bytes()), parse("12µs"));
/// assert!(parse_bytes(b"12\xb5s").is_err());
/// ```
pub fn parse_bytes(source: &[u8]) -> DurationResult<Duration> {
    parse_duration(&mut ByteCursor::new(source))
}

pub(crate) fn parse_duration<C: DurationCursor>(cursor: &mut C) -> DurationResult<Duration> {
    let result = parse_nanoseconds(cursor)
        .map(Duration::new_unchecked)
        .map_err(|err| err.with_input(cursor.source()));
    #[cfg(feature = "log")]
    if let Err(err) = &result {
        log::debug!("{err}");
    }
    result
}

fn parse_nanoseconds<C: DurationCursor>(cursor: &mut C) -> DurationResult<i64> {
    if cursor.peek().is_none() {
        return Err(DurationError::grammar().with_enum(ErrorMessage::EmptyInput));
    }
    let sign = parse_sign(cursor);
    if cursor.peek().is_none() {
        return Err(DurationError::grammar());
    }
    if cursor.rest_is(b"0") {
        return Ok(0);
    }

    // A grammar error anywhere in the input takes precedence over an
    // overflow, so an overflow only marks the result until the end.
    let mut total = Some(0u64);
    while cursor.peek().is_some() {
        let segment = parse_segment(cursor)?;
        total = total
            .zip(segment)
            .and_then(|(total, segment)| total.checked_add(segment))
            .filter(|total| *total <= MAX_NANOSECONDS);
    }

    let magnitude = total
        .and_then(|total| i64::try_from(total).ok())
        .ok_or(DurationError::range())?;
    Ok(magnitude * i64::from(sign.as_sign_multiplier()))
}

fn parse_sign<C: DurationCursor>(cursor: &mut C) -> Sign {
    match cursor.peek() {
        Some(b'-') => {
            cursor.advance();
            Sign::Negative
        }
        Some(b'+') => {
            cursor.advance();
            Sign::Positive
        }
        _ => Sign::Positive,
    }
}

/// Parses one `<number><unit>` segment, returning its magnitude in
/// nanoseconds or `None` when it overflows.
fn parse_segment<C: DurationCursor>(cursor: &mut C) -> DurationResult<Option<u64>> {
    if matches!(cursor.peek(), Some(b'+' | b'-')) {
        return Err(DurationError::grammar().with_enum(ErrorMessage::DoubleSign));
    }
    let number = parse_number(cursor)?;
    let unit = parse_unit(cursor)?;
    Ok(number.to_nanoseconds(unit, cursor))
}

/// A decimal literal: the value of its integer part and the span of its
/// fraction digits within the input.
#[derive(Debug)]
struct DecimalLiteral {
    /// `None` if the integer part does not fit in a `u64`.
    integer: Option<u64>,
    fraction: Range<usize>,
}

fn parse_number<C: DurationCursor>(cursor: &mut C) -> DurationResult<DecimalLiteral> {
    let integer_start = cursor.pos();
    let mut integer = Some(0u64);
    while let Some(digit) = cursor.peek().filter(u8::is_ascii_digit) {
        integer = integer
            .and_then(|v| v.checked_mul(10))
            .and_then(|v| v.checked_add(u64::from(digit - b'0')));
        cursor.advance();
    }
    let has_integer = cursor.pos() > integer_start;

    let mut fraction = cursor.pos()..cursor.pos();
    if cursor.peek() == Some(b'.') {
        cursor.advance();
        let start = cursor.advance_while(|b| b.is_ascii_digit());
        fraction = start..cursor.pos();
    }

    if !has_integer && fraction.is_empty() {
        return Err(DurationError::grammar());
    }
    Ok(DecimalLiteral { integer, fraction })
}

/// Reads the run of bytes following a number and matches it against the
/// unit table.
fn parse_unit<C: DurationCursor>(cursor: &mut C) -> DurationResult<Unit> {
    let start = cursor.advance_while(|b| !matches!(b, b'0'..=b'9' | b'.' | b'+' | b'-'));
    let spelling = cursor.slice(start, cursor.pos());
    if spelling.is_empty() {
        return Err(DurationError::grammar().with_enum(ErrorMessage::MissingUnit));
    }
    Unit::from_bytes(spelling).ok_or_else(|| {
        DurationError::grammar()
            .with_enum(ErrorMessage::UnknownUnit)
            .with_unit(&String::from_utf8_lossy(spelling))
    })
}

impl DecimalLiteral {
    /// Scales the literal by `unit`, rounding to the nearest nanosecond with
    /// halves rounded up.
    fn to_nanoseconds<C: DurationCursor>(&self, unit: Unit, cursor: &C) -> Option<u64> {
        let whole = self.integer?.checked_mul(unit.nanoseconds())?;
        whole.checked_add(self.fraction_nanoseconds(unit, cursor))
    }

    /// The fraction's contribution, at most `unit.nanoseconds()`.
    fn fraction_nanoseconds<C: DurationCursor>(&self, unit: Unit, cursor: &C) -> u64 {
        let digit = |index: usize| u64::from(cursor.byte_at(index).map_or(0, |b| b - b'0'));

        // The leading fraction digits each land on a whole nanosecond.
        let split = self
            .fraction
            .end
            .min(self.fraction.start + unit.whole_fraction_digits() as usize);
        let mut place = unit.nanoseconds();
        let mut nanoseconds = 0;
        for index in self.fraction.start..split {
            place /= 10;
            nanoseconds += digit(index) * place;
        }
        if split == self.fraction.end {
            return nanoseconds;
        }

        // The remaining digits form 0.ddd..., which is multiplied by the
        // sub-nanosecond factor from the least significant digit upwards.
        // The final carry is the whole nanoseconds, and the last digit
        // written is the first digit after the nanosecond point.
        let factor = unit.sub_nanosecond_factor();
        let mut carry = 0;
        let mut first_digit = 0;
        for index in (split..self.fraction.end).rev() {
            let product = digit(index) * factor + carry;
            first_digit = product % 10;
            carry = product / 10;
        }
        nanoseconds + carry + u64::from(first_digit >= 5)
    }
}
