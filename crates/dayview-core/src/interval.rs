#![forbid(unsafe_code)]

//! Minute intervals and the collision relation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed interval `[start, end]` in minutes relative to the track start.
///
/// Always satisfies `0 <= start < end`. The end is not clamped to the
/// visible track range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: i64,
    end: i64,
}

#[derive(Deserialize)]
struct RawInterval {
    start: i64,
    end: i64,
}

impl TryFrom<RawInterval> for Interval {
    type Error = IntervalError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl Interval {
    /// Create an interval, rejecting negative starts and empty spans.
    pub fn new(start: i64, end: i64) -> Result<Self, IntervalError> {
        if start < 0 {
            return Err(IntervalError::NegativeStart { start });
        }
        if start >= end {
            return Err(IntervalError::StartNotBeforeEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// First minute (inclusive).
    #[inline]
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Last minute (inclusive).
    #[inline]
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Length in minutes (`end - start`, always positive).
    #[inline]
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether minute `m` lies within the closed interval.
    #[inline]
    #[must_use]
    pub const fn contains(&self, minute: i64) -> bool {
        self.start <= minute && minute <= self.end
    }

    /// Endpoint-inclusive overlap test.
    ///
    /// Touching intervals collide: `[0, 100]` and `[100, 200]` share minute 100.
    #[inline]
    #[must_use]
    pub const fn collides_with(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Reasons an interval cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    NegativeStart { start: i64 },
    StartNotBeforeEnd { start: i64, end: i64 },
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeStart { start } => {
                write!(f, "interval start must not be negative (got {start})")
            }
            Self::StartNotBeforeEnd { start, end } => write!(
                f,
                "interval start must be lower than end ({start}:{end} passed)"
            ),
        }
    }
}

impl std::error::Error for IntervalError {}
