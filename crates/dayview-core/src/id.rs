#![forbid(unsafe_code)]

//! Stable event identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a laid-out event.
///
/// Derived from the event's interval plus an occurrence counter so that the
/// same `(start, end)` submitted several times still yields distinct ids.
/// The display form is `start-end-occurrence`, e.g. `540-600-0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId {
    start: i64,
    end: i64,
    occurrence: u32,
}

impl EventId {
    /// Create an id from its parts.
    #[must_use]
    pub const fn new(start: i64, end: i64, occurrence: u32) -> Self {
        Self {
            start,
            end,
            occurrence,
        }
    }

    /// Start minute of the identified event.
    #[must_use]
    pub const fn start(self) -> i64 {
        self.start
    }

    /// End minute of the identified event.
    #[must_use]
    pub const fn end(self) -> i64 {
        self.end
    }

    /// How many events with the same interval were inserted before this one.
    #[must_use]
    pub const fn occurrence(self) -> u32 {
        self.occurrence
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.start, self.end, self.occurrence)
    }
}

#[cfg(test)]
mod tests {
    use super::EventId;

    #[test]
    fn display_joins_parts_with_dashes() {
        assert_eq!(EventId::new(540, 600, 0).to_string(), "540-600-0");
        assert_eq!(EventId::new(30, 150, 2).to_string(), "30-150-2");
    }

    #[test]
    fn duplicates_differ_by_occurrence() {
        let first = EventId::new(10, 20, 0);
        let second = EventId::new(10, 20, 1);
        assert_ne!(first, second);
        assert!(first < second);
    }
}
