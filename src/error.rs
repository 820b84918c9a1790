//! Error types for textual time and date tokens.

use thiserror::Error;

/// Failure to parse a time range, clock time or calendar date token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token is not of the form "HH:MM-HH:MM".
    #[error("malformed time range `{0}`, expected HH:MM-HH:MM")]
    MalformedRange(String),
    /// Token is not a valid "HH:MM" clock time.
    #[error("invalid clock time `{0}`, expected HH:MM")]
    InvalidClock(String),
    /// Token is not a valid "YYYY-MM-DD" date.
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Range end is not after its start.
    #[error("time range `{0}` does not end after it starts")]
    EmptyRange(String),
}
