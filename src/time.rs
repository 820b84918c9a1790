//! Parsing of slot tokens, clock times and dates.
//!
//! Slots travel through the planner as text ("HH:MM-HH:MM") and are parsed
//! where they are consumed, so every consumer decides what a malformed token
//! means for it.

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

use crate::error::ParseError;

/// Duration reported for a slot token that cannot be parsed.
pub const DEFAULT_SLOT_HOURS: f64 = 1.0;

/// A contiguous time range within a single day, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse an "HH:MM-HH:MM" token.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let (start, end) = token
            .split_once('-')
            .ok_or_else(|| ParseError::MalformedRange(token.to_string()))?;
        if end.contains('-') {
            return Err(ParseError::MalformedRange(token.to_string()));
        }

        let start = parse_clock(start)?;
        let end = parse_clock(end)?;
        if end <= start {
            return Err(ParseError::EmptyRange(token.to_string()));
        }

        Ok(Self { start, end })
    }

    /// Length of the range in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Whether two ranges share any instant.
    ///
    /// Touching ranges (one ends exactly when the other starts) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

/// Parse an "HH:MM" clock time.
pub fn parse_clock(token: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(token.trim(), "%H:%M")
        .map_err(|_| ParseError::InvalidClock(token.to_string()))
}

/// Start clock of an "HH:MM-HH:MM" slot token. The end is not looked at.
pub fn parse_slot_start(token: &str) -> Result<NaiveTime, ParseError> {
    let (start, _) = token
        .split_once('-')
        .ok_or_else(|| ParseError::MalformedRange(token.to_string()))?;
    parse_clock(start)
}

/// Parse a "YYYY-MM-DD" calendar date.
pub fn parse_date(token: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(token.trim(), "%Y-%m-%d")
        .map_err(|_| ParseError::InvalidDate(token.to_string()))
}

/// Absolute distance between two clock times, in minutes.
pub fn minutes_between(a: NaiveTime, b: NaiveTime) -> i64 {
    (a - b).num_minutes().abs()
}

/// Duration of a slot token in hours.
pub fn parse_duration_hours(token: &str) -> Result<f64, ParseError> {
    TimeRange::parse(token).map(|range| range.duration_hours())
}

/// Duration of a slot token in hours, falling back to
/// [`DEFAULT_SLOT_HOURS`] when the token does not parse.
pub fn slot_duration(token: &str) -> f64 {
    match parse_duration_hours(token) {
        Ok(hours) => hours,
        Err(err) => {
            warn!(slot = token, error = %err, "slot duration fallback");
            DEFAULT_SLOT_HOURS
        }
    }
}
