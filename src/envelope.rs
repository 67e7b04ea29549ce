//! The quoted form of a duration, for embedding in text documents.
//!
//! A duration is embedded as its canonical string wrapped in double quotes,
//! e.g. `"1h30m0s"`, which makes it a valid JSON string scalar. With the
//! `serde` feature `Duration` serializes through the same form.

use alloc::string::String;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    error::{DurationError, ErrorMessage},
    format::FormattableDuration,
    parsers, Duration, DurationResult,
};

/// Returns the canonical string of `duration` in double quotes.
///
/// ```rust
/// use duration_rs::{marshal_text, Duration};
///
/// assert_eq!(marshal_text(Duration::SECOND * 5), r#""5s""#);
/// ```
#[must_use]
pub fn marshal_text(duration: Duration) -> String {
    QuotedDuration::from(duration)
        .write_to_string()
        .into_owned()
}

/// Parses a duration from its double quoted form.
///
/// The input must start and end with a `"`; the text in between is parsed
/// with [`parsers::parse`]. Escape sequences are not decoded, so an interior
/// `"` or `\` is rejected.
///
/// ```rust
/// use duration_rs::{unmarshal_text, Duration};
///
/// assert_eq!(unmarshal_text(r#""-5s""#).unwrap(), -Duration::SECOND * 5);
/// assert!(unmarshal_text("5s").is_err());
/// ```
pub fn unmarshal_text(source: &str) -> DurationResult<Duration> {
    let interior = source
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|interior| !interior.contains(['"', '\\']));
    match interior {
        Some(interior) => parsers::parse(interior),
        None => Err(envelope_error(source)),
    }
}

/// Parses a duration from the UTF-8 bytes of its double quoted form.
///
/// Accepts and rejects the same inputs as [`unmarshal_text`].
pub fn unmarshal_bytes(source: &[u8]) -> DurationResult<Duration> {
    match strip_quotes(source) {
        Some(interior) => parsers::parse_bytes(interior),
        None => Err(envelope_error(&String::from_utf8_lossy(source))),
    }
}

fn strip_quotes(source: &[u8]) -> Option<&[u8]> {
    source
        .strip_prefix(b"\"")
        .and_then(|rest| rest.strip_suffix(b"\""))
        .filter(|interior| !interior.iter().any(|b| matches!(b, b'"' | b'\\')))
}

fn envelope_error(source: &str) -> DurationError {
    let err = DurationError::grammar()
        .with_enum(ErrorMessage::InvalidEnvelope)
        .with_input(source);
    #[cfg(feature = "log")]
    log::debug!("{err}");
    err
}

/// A duration written in its double quoted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotedDuration(pub FormattableDuration);

impl From<Duration> for QuotedDuration {
    fn from(duration: Duration) -> Self {
        Self(FormattableDuration::from(duration))
    }
}

impl Writeable for QuotedDuration {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_char('"')?;
        self.0.write_to(sink)?;
        sink.write_char('"')
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.0.writeable_length_hint() + 2
    }
}

impl_display_with_writeable!(QuotedDuration);

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    use crate::{parsers, Duration};

    impl Serialize for Duration {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Duration {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(DurationVisitor)
        }
    }

    struct DurationVisitor;

    impl Visitor<'_> for DurationVisitor {
        type Value = Duration;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a duration string such as \"1h30m\"")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parsers::parse(v).map_err(E::custom)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parsers::parse_bytes(v).map_err(E::custom)
        }
    }
}
