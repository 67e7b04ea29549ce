//! The `duration_rs` crate parses and formats signed, nanosecond resolution
//! durations written as human readable strings.
//!
//! ```rust
//! use duration_rs::{format, parse, Duration};
//!
//! let duration = parse("1h2m3.004005006s").unwrap();
//! assert_eq!(duration.as_nanoseconds(), 3_723_004_005_006);
//! assert_eq!(format(duration), "1h2m3.004005006s");
//!
//! // Segments may come in any order, the canonical form may not.
//! assert_eq!(format(parse("10.5s4m").unwrap()), "4m10.5s");
//! assert_eq!(parse("-90s").unwrap(), -Duration::SECOND * 90);
//! ```
//!
//! A duration string is an optional sign followed by `<number><unit>`
//! segments, where the unit is one of `ns`, `us` (or `µs`/`μs`), `ms`, `s`,
//! `m` and `h`. The bare literal `0` is also accepted. Parsing is exact:
//! fractions are scaled on their digits rather than through floating point,
//! and overflow past `±(2^63 - 1)` nanoseconds is always reported.
//!
//! Formatting produces the canonical string, which always parses back to
//! the same value. [`marshal_text`] and [`unmarshal_text`] wrap it in double
//! quotes for embedding in text documents, and with the `serde` feature
//! (enabled by default) `Duration` serializes as that same string.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // Casts between nanosecond counts are range checked by the callers.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod envelope;
pub mod error;
pub mod format;
pub mod parsers;
pub mod unit;

mod duration;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::{DurationError, ErrorKind};

/// The `duration_rs` result type
pub type DurationResult<T> = Result<T, DurationError>;

pub use crate::{
    duration::Duration,
    envelope::{marshal_text, unmarshal_bytes, unmarshal_text},
    format::format,
    parsers::{parse, parse_bytes},
    unit::Unit,
};

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl Sign {
    /// Coerces the current `Sign` to be either negative or positive.
    pub const fn as_sign_multiplier(&self) -> i8 {
        if matches!(self, Self::Zero) {
            return 1;
        }
        *self as i8
    }
}
