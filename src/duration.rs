//! This module implements `Duration` along with its methods.

use core::{
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use num_traits::Bounded;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    error::{DurationError, ErrorMessage},
    format::FormattableDuration,
    parsers,
    unit::{
        Unit, NS_PER_HOUR, NS_PER_MICROSECOND, NS_PER_MILLISECOND, NS_PER_MINUTE, NS_PER_SECOND,
    },
    DurationResult, Sign,
};

#[cfg(test)]
mod tests;

/// A signed span of time with nanosecond resolution.
///
/// A `Duration` holds a count of nanoseconds in the range
/// `-(2^63 - 1)..=2^63 - 1`. The most negative `i64` is deliberately not a
/// valid duration, so negating a duration never overflows.
///
/// ```rust
/// use duration_rs::Duration;
/// use core::str::FromStr;
///
/// let duration = Duration::from_str("1h30m").unwrap();
/// assert_eq!(duration, Duration::MINUTE * 90);
/// assert_eq!(duration.to_string(), "1h30m0s");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

// ==== Constants ====

impl Duration {
    /// The zero duration.
    pub const ZERO: Self = Self(0);
    /// One nanosecond.
    pub const NANOSECOND: Self = Self(1);
    /// One microsecond.
    pub const MICROSECOND: Self = Self(NS_PER_MICROSECOND as i64);
    /// One millisecond.
    pub const MILLISECOND: Self = Self(NS_PER_MILLISECOND as i64);
    /// One second.
    pub const SECOND: Self = Self(NS_PER_SECOND as i64);
    /// One minute.
    pub const MINUTE: Self = Self(NS_PER_MINUTE as i64);
    /// One hour.
    pub const HOUR: Self = Self(NS_PER_HOUR as i64);
    /// The largest duration, `2^63 - 1` nanoseconds.
    pub const MAX: Self = Self(i64::MAX);
    /// The smallest duration, `-(2^63 - 1)` nanoseconds.
    pub const MIN: Self = Self(-i64::MAX);
}

// ==== Creation ====

impl Duration {
    /// Creates a `Duration` without checking that `nanoseconds` is not
    /// `i64::MIN`.
    #[inline]
    pub(crate) const fn new_unchecked(nanoseconds: i64) -> Self {
        debug_assert!(nanoseconds != i64::MIN);
        Self(nanoseconds)
    }

    /// Creates a `Duration` from a count of nanoseconds.
    ///
    /// Fails with a range error for `i64::MIN`, which has no positive
    /// counterpart.
    #[inline]
    pub fn try_from_nanoseconds(nanoseconds: i64) -> DurationResult<Self> {
        if nanoseconds == i64::MIN {
            return Err(DurationError::range().with_enum(ErrorMessage::NanosecondsOutOfRange));
        }
        Ok(Self(nanoseconds))
    }

    /// Creates a `Duration` of `count` of `unit`.
    pub fn from_unit(count: i64, unit: Unit) -> DurationResult<Self> {
        let nanoseconds = count
            .checked_mul(unit.nanoseconds() as i64)
            .ok_or(DurationError::range())?;
        Self::try_from_nanoseconds(nanoseconds)
    }

    fn try_from_i128(nanoseconds: i128) -> DurationResult<Self> {
        i64::try_from(nanoseconds)
            .map_err(|_| DurationError::range())
            .and_then(Self::try_from_nanoseconds)
    }

    /// Parses a duration string from its UTF-8 bytes.
    ///
    /// See [`parsers::parse_bytes`].
    #[inline]
    pub fn from_utf8(source: &[u8]) -> DurationResult<Self> {
        parsers::parse_bytes(source)
    }
}

// ==== Getters ====

impl Duration {
    /// Returns the duration as a count of nanoseconds.
    #[inline]
    #[must_use]
    pub const fn as_nanoseconds(&self) -> i64 {
        self.0
    }

    /// Returns the duration as whole microseconds, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn as_microseconds(&self) -> i64 {
        self.0 / NS_PER_MICROSECOND as i64
    }

    /// Returns the duration as whole milliseconds, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn as_milliseconds(&self) -> i64 {
        self.0 / NS_PER_MILLISECOND as i64
    }

    /// Returns the duration in seconds.
    #[inline]
    #[must_use]
    pub fn as_seconds_f64(&self) -> f64 {
        self.as_unit_f64(Unit::Second)
    }

    /// Returns the duration in minutes.
    #[inline]
    #[must_use]
    pub fn as_minutes_f64(&self) -> f64 {
        self.as_unit_f64(Unit::Minute)
    }

    /// Returns the duration in hours.
    #[inline]
    #[must_use]
    pub fn as_hours_f64(&self) -> f64 {
        self.as_unit_f64(Unit::Hour)
    }

    // Split before converting so the whole part keeps its precision.
    fn as_unit_f64(&self, unit: Unit) -> f64 {
        let per_unit = unit.nanoseconds() as i64;
        let whole = self.0 / per_unit;
        let rest = self.0 % per_unit;
        whole as f64 + rest as f64 / per_unit as f64
    }

    /// Returns the sign of the duration.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::from(self.0.signum() as i8)
    }

    /// Returns whether the duration is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the absolute value of the duration.
    #[inline]
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

// ==== Arithmetic ====

impl Duration {
    /// Adds two durations.
    pub fn checked_add(&self, other: &Self) -> DurationResult<Self> {
        self.0
            .checked_add(other.0)
            .ok_or(DurationError::range())
            .and_then(Self::try_from_nanoseconds)
    }

    /// Subtracts `other` from this duration.
    pub fn checked_sub(&self, other: &Self) -> DurationResult<Self> {
        self.0
            .checked_sub(other.0)
            .ok_or(DurationError::range())
            .and_then(Self::try_from_nanoseconds)
    }

    /// Multiplies the duration by `rhs`.
    pub fn checked_mul(&self, rhs: i64) -> DurationResult<Self> {
        self.0
            .checked_mul(rhs)
            .ok_or(DurationError::range())
            .and_then(Self::try_from_nanoseconds)
    }

    /// Rounds the duration toward zero to a multiple of `multiple`.
    ///
    /// A zero or negative `multiple` returns the duration unchanged.
    #[must_use]
    pub fn truncate(&self, multiple: Self) -> Self {
        if multiple.0 <= 0 {
            return *self;
        }
        Self(self.0 - self.0 % multiple.0)
    }

    /// Rounds the duration to the nearest multiple of `multiple`, with
    /// halfway values rounded away from zero.
    ///
    /// A zero or negative `multiple` returns the duration unchanged. Fails
    /// with a range error if the rounded value is not a valid duration.
    pub fn round(&self, multiple: Self) -> DurationResult<Self> {
        if multiple.0 <= 0 {
            return Ok(*self);
        }
        let value = i128::from(self.0);
        let multiple = i128::from(multiple.0);
        let remainder = (value % multiple).abs();
        let rounded = if remainder * 2 < multiple {
            value - value.signum() * remainder
        } else {
            value + value.signum() * (multiple - remainder)
        };
        Self::try_from_i128(rounded)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// # Panics
///
/// Panics if the sum is not a valid duration. Use
/// [`Duration::checked_add`] to handle overflow.
impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(&rhs) {
            Ok(duration) => duration,
            Err(_) => panic!("overflow when adding durations"),
        }
    }
}

/// # Panics
///
/// Panics if the difference is not a valid duration. Use
/// [`Duration::checked_sub`] to handle overflow.
impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(&rhs) {
            Ok(duration) => duration,
            Err(_) => panic!("overflow when subtracting durations"),
        }
    }
}

/// # Panics
///
/// Panics if the product is not a valid duration. Use
/// [`Duration::checked_mul`] to handle overflow.
impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(duration) => duration,
            Err(_) => panic!("overflow when multiplying duration by scalar"),
        }
    }
}

impl Bounded for Duration {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

// ==== Conversions ====

impl TryFrom<i64> for Duration {
    type Error = DurationError;

    fn try_from(nanoseconds: i64) -> Result<Self, Self::Error> {
        Self::try_from_nanoseconds(nanoseconds)
    }
}

impl From<Duration> for i64 {
    fn from(duration: Duration) -> Self {
        duration.0
    }
}

// ==== FromStr trait impl ====

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse(s)
    }
}

// ==== Writeable trait impl ====

impl Writeable for Duration {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableDuration::from(*self).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableDuration::from(*self).writeable_length_hint()
    }
}

impl_display_with_writeable!(Duration);
