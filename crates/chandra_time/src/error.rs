//! Error types for instant parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating a UTC instant.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The text is not an ISO-8601 date or date-time this crate understands.
    InvalidFormat(String),
    /// A calendar or clock field is outside its valid range.
    OutOfRange(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(msg) => write!(f, "invalid instant: {msg}"),
            Self::OutOfRange(field) => write!(f, "instant field out of range: {field}"),
        }
    }
}

impl Error for TimeError {}
