//! This module implements `DurationError`.

use alloc::{
    borrow::{Cow, ToOwned},
    string::String,
};
use core::fmt;

/// `DurationError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input does not match the duration grammar.
    #[default]
    Grammar,
    /// The input is well formed, but its value is not representable.
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grammar => "GrammarError",
            Self::Range => "RangeError",
        }
        .fmt(f)
    }
}

/// The error type for parsing and constructing a [`Duration`][crate::Duration].
///
/// The error carries the input that was rejected and, when one could be
/// identified, the unit spelling that caused the rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationError {
    kind: ErrorKind,
    msg: ErrorMessage,
    input: Option<String>,
    unit: Option<String>,
}

impl DurationError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind, msg: ErrorMessage) -> Self {
        Self {
            kind,
            msg,
            input: None,
            unit: None,
        }
    }

    /// Create a grammar error.
    #[inline]
    #[must_use]
    pub const fn grammar() -> Self {
        Self::new(ErrorKind::Grammar, ErrorMessage::InvalidDuration)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range, ErrorMessage::Overflow)
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Attach the rejected input to the error.
    #[inline]
    #[must_use]
    pub fn with_input<'a>(mut self, input: impl Into<Cow<'a, str>>) -> Self {
        self.input = Some(input.into().into_owned());
        self
    }

    /// Attach the offending unit spelling to the error.
    #[inline]
    #[must_use]
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_owned());
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.msg.as_str()
    }

    /// Returns the error message enum.
    #[inline]
    #[must_use]
    pub const fn message_enum(&self) -> ErrorMessage {
        self.msg
    }

    /// Returns the input that was rejected, if the error came from parsing.
    #[inline]
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Returns the offending unit spelling, if one was identified.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Returns whether this is a grammar error.
    #[inline]
    #[must_use]
    pub const fn is_grammar(&self) -> bool {
        matches!(self.kind, ErrorKind::Grammar)
    }

    /// Returns whether this is a range error.
    #[inline]
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self.kind, ErrorKind::Range)
    }
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg.as_str())?;
        if let Some(unit) = &self.unit {
            write!(f, " {unit:?}")?;
        }
        if let Some(input) = &self.input {
            write!(f, " in duration {input:?}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DurationError {}

/// The error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorMessage {
    // Grammar
    EmptyInput,
    InvalidDuration,
    MissingUnit,
    UnknownUnit,
    DoubleSign,
    InvalidEnvelope,

    // Range
    Overflow,
    NanosecondsOutOfRange,
}

impl ErrorMessage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "an empty string is not a valid duration",
            Self::InvalidDuration => "invalid duration",
            Self::MissingUnit => "missing unit",
            Self::UnknownUnit => "unknown unit",
            Self::DoubleSign => "a duration may only carry one leading sign",
            Self::InvalidEnvelope => "duration must be a double-quoted string",
            Self::Overflow => "duration overflows the nanosecond range",
            Self::NanosecondsOutOfRange => {
                "nanosecond value is outside the range of a duration"
            }
        }
    }
}
