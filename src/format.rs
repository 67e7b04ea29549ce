//! This module implements the canonical duration string.
//!
//! The canonical string is the shortest string that parses back to the same
//! duration:
//!
//! - below one microsecond, whole nanoseconds: `10ns`
//! - below one second, microseconds or milliseconds with a trimmed
//!   fraction: `1.5µs`, `500ms`
//! - otherwise hours, minutes and seconds, where the seconds are always
//!   written once a larger unit is: `16h0m0s`, `1m40.001s`
//! - zero is `0s`

use alloc::string::String;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    unit::{Unit, NS_PER_MICROSECOND, NS_PER_MILLISECOND, NS_PER_SECOND},
    Duration, Sign,
};

/// Formats a duration into its canonical string.
///
/// ```rust
/// use duration_rs::{format::format, Duration};
///
/// assert_eq!(format(Duration::HOUR), "1h0m0s");
/// assert_eq!(format(-Duration::MILLISECOND * 1_500), "-1.5s");
/// ```
#[must_use]
pub fn format(duration: Duration) -> String {
    FormattableDuration::from(duration)
        .write_to_string()
        .into_owned()
}

/// The magnitude of a duration, decomposed into the fields that are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattableMagnitude {
    Zero,
    /// Below one microsecond.
    Nanoseconds(u64),
    /// Below one second, in microseconds or milliseconds. The fraction is
    /// the remainder in nanoseconds.
    Subsecond {
        whole: u64,
        fraction: u32,
        unit: Unit,
    },
    /// One second or more.
    Seconds {
        hours: u64,
        minutes: u64,
        seconds: u64,
        fraction: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableDuration {
    pub sign: Sign,
    pub magnitude: FormattableMagnitude,
}

impl From<Duration> for FormattableDuration {
    fn from(duration: Duration) -> Self {
        let ns = duration.as_nanoseconds().unsigned_abs();
        let magnitude = if ns == 0 {
            FormattableMagnitude::Zero
        } else if ns < NS_PER_MICROSECOND {
            FormattableMagnitude::Nanoseconds(ns)
        } else if ns < NS_PER_MILLISECOND {
            FormattableMagnitude::Subsecond {
                whole: ns / NS_PER_MICROSECOND,
                fraction: (ns % NS_PER_MICROSECOND) as u32,
                unit: Unit::Microsecond,
            }
        } else if ns < NS_PER_SECOND {
            FormattableMagnitude::Subsecond {
                whole: ns / NS_PER_MILLISECOND,
                fraction: (ns % NS_PER_MILLISECOND) as u32,
                unit: Unit::Millisecond,
            }
        } else {
            let seconds = ns / NS_PER_SECOND;
            FormattableMagnitude::Seconds {
                hours: seconds / 3600,
                minutes: seconds / 60 % 60,
                seconds: seconds % 60,
                fraction: (ns % NS_PER_SECOND) as u32,
            }
        };
        Self {
            sign: duration.sign(),
            magnitude,
        }
    }
}

impl Writeable for FormattableDuration {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.sign == Sign::Negative {
            sink.write_char('-')?;
        }
        match self.magnitude {
            FormattableMagnitude::Zero => sink.write_str("0s"),
            FormattableMagnitude::Nanoseconds(ns) => {
                ns.write_to(sink)?;
                sink.write_str(Unit::Nanosecond.as_str())
            }
            FormattableMagnitude::Subsecond {
                whole,
                fraction,
                unit,
            } => {
                whole.write_to(sink)?;
                write_fraction(fraction, unit, sink)?;
                sink.write_str(unit.as_str())
            }
            FormattableMagnitude::Seconds {
                hours,
                minutes,
                seconds,
                fraction,
            } => {
                if hours != 0 {
                    hours.write_to(sink)?;
                    sink.write_char('h')?;
                }
                if hours != 0 || minutes != 0 {
                    minutes.write_to(sink)?;
                    sink.write_char('m')?;
                }
                seconds.write_to(sink)?;
                write_fraction(fraction, Unit::Second, sink)?;
                sink.write_char('s')
            }
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let sign = (self.sign == Sign::Negative) as usize;
        let length = match self.magnitude {
            FormattableMagnitude::Zero => 2,
            FormattableMagnitude::Nanoseconds(ns) => decimal_length(ns) + 2,
            FormattableMagnitude::Subsecond {
                whole,
                fraction,
                unit,
            } => {
                decimal_length(whole) + fraction_length(fraction, unit) + unit.as_str().len()
            }
            FormattableMagnitude::Seconds {
                hours,
                minutes,
                seconds,
                fraction,
            } => {
                let hours_length = if hours != 0 {
                    decimal_length(hours) + 1
                } else {
                    0
                };
                let minutes_length = if hours != 0 || minutes != 0 {
                    decimal_length(minutes) + 1
                } else {
                    0
                };
                hours_length
                    + minutes_length
                    + decimal_length(seconds)
                    + fraction_length(fraction, Unit::Second)
                    + 1
            }
        };
        LengthHint::exact(sign + length)
    }
}

impl_display_with_writeable!(FormattableDuration);

/// Writes `.ddd` for a nonzero remainder below `unit`, without trailing
/// zeros.
fn write_fraction<W: core::fmt::Write + ?Sized>(
    fraction: u32,
    unit: Unit,
    sink: &mut W,
) -> core::fmt::Result {
    if fraction == 0 {
        return Ok(());
    }
    let (digits, precision) = fraction_digits(fraction, unit);
    sink.write_char('.')?;
    write_digits(&digits[..precision], sink)
}

fn fraction_length(fraction: u32, unit: Unit) -> usize {
    if fraction == 0 {
        return 0;
    }
    1 + fraction_digits(fraction, unit).1
}

/// Left aligns the remainder in a nine digit buffer so that its digits are
/// read the same way regardless of the unit's width.
fn fraction_digits(fraction: u32, unit: Unit) -> ([u8; 9], usize) {
    let shift = 9 - unit.whole_fraction_digits().min(9);
    nanosecond_digits(fraction * 10u32.pow(shift))
}

fn decimal_length(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Splits a nanosecond remainder into nine digits, returning them with the
/// number of digits up to and including the last nonzero one.
pub(crate) fn nanosecond_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    for i in (0..9).rev() {
        let digit = (value % 10) as u8;
        value /= 10;
        if precision == 0 && digit != 0 {
            precision = i + 1;
        }
        output[i] = digit;
    }
    (output, precision)
}

fn write_digits<W: core::fmt::Write + ?Sized>(
    digits: &[u8],
    sink: &mut W,
) -> core::fmt::Result {
    digits.iter().try_for_each(|digit| digit.write_to(sink))
}
