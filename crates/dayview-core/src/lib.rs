#![forbid(unsafe_code)]

//! Core: intervals, event identity, track geometry, and logging.

pub mod geometry;
pub mod id;
pub mod interval;
pub mod logging;

pub use geometry::{EventGeometry, Size, Track};
pub use id::EventId;
pub use interval::{Interval, IntervalError};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
