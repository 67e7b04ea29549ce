//! The unit table for duration strings.

use core::{fmt, str::FromStr};

/// Nanoseconds per microsecond.
pub const NS_PER_MICROSECOND: u64 = 1_000;
/// Nanoseconds per millisecond.
pub const NS_PER_MILLISECOND: u64 = 1_000_000;
/// Nanoseconds per second.
pub const NS_PER_SECOND: u64 = 1_000_000_000;
/// Nanoseconds per minute.
pub const NS_PER_MINUTE: u64 = 60 * NS_PER_SECOND;
/// Nanoseconds per hour.
pub const NS_PER_HOUR: u64 = 60 * NS_PER_MINUTE;

/// A unit that can follow a number in a duration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// The `Nanosecond` unit
    Nanosecond,
    /// The `Microsecond` unit
    Microsecond,
    /// The `Millisecond` unit
    Millisecond,
    /// The `Second` unit
    Second,
    /// The `Minute` unit
    Minute,
    /// The `Hour` unit
    Hour,
}

// Every accepted spelling. The micro sign (U+00B5) and the greek small
// letter mu (U+03BC) are both accepted for microseconds.
const UNIT_TABLE: [(&str, Unit); 8] = [
    ("ns", Unit::Nanosecond),
    ("us", Unit::Microsecond),
    ("\u{b5}s", Unit::Microsecond),
    ("\u{3bc}s", Unit::Microsecond),
    ("ms", Unit::Millisecond),
    ("s", Unit::Second),
    ("m", Unit::Minute),
    ("h", Unit::Hour),
];

impl Unit {
    /// Looks up a unit by its exact spelling.
    #[must_use]
    pub fn from_bytes(spelling: &[u8]) -> Option<Self> {
        UNIT_TABLE
            .iter()
            .find(|(s, _)| s.as_bytes() == spelling)
            .map(|(_, unit)| *unit)
    }

    /// Returns the number of nanoseconds in one of this unit.
    #[inline]
    #[must_use]
    pub const fn nanoseconds(self) -> u64 {
        match self {
            Self::Nanosecond => 1,
            Self::Microsecond => NS_PER_MICROSECOND,
            Self::Millisecond => NS_PER_MILLISECOND,
            Self::Second => NS_PER_SECOND,
            Self::Minute => NS_PER_MINUTE,
            Self::Hour => NS_PER_HOUR,
        }
    }

    /// Returns the spelling used when formatting this unit.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nanosecond => "ns",
            Self::Microsecond => "\u{b5}s",
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
        }
    }

    /// The number of fractional digits of this unit that still land on a
    /// whole nanosecond, i.e. the largest `p` such that
    /// `nanoseconds() % 10^p == 0`.
    #[inline]
    pub(crate) const fn whole_fraction_digits(self) -> u32 {
        match self {
            Self::Nanosecond => 0,
            Self::Microsecond => 3,
            Self::Millisecond => 6,
            Self::Second => 9,
            Self::Minute => 10,
            Self::Hour => 11,
        }
    }

    /// `nanoseconds() / 10^whole_fraction_digits()`, the nanoseconds
    /// contributed by a `1` in the last whole fraction digit.
    #[inline]
    pub(crate) const fn sub_nanosecond_factor(self) -> u64 {
        self.nanoseconds() / 10u64.pow(self.whole_fraction_digits())
    }
}

/// A parsing error for `Unit`
#[derive(Debug, Clone, Copy)]
pub struct ParseUnitError;

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid duration unit")
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes()).ok_or(ParseUnitError)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
