#![forbid(unsafe_code)]

//! Track dimensions and emitted event geometry.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::interval::Interval;

/// Width and height of a rendering surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The vertical day track events are laid out on.
///
/// Only used to scale final geometry; clustering and column assignment are
/// pure interval arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Horizontal space shared by the columns of a cluster.
    pub width: f64,
    /// Vertical space covering `range_end` minutes.
    pub height: f64,
    /// First visible minute.
    pub range_start: i64,
    /// Minute mapped to the bottom of the track.
    pub range_end: i64,
}

impl Track {
    /// Create a track.
    #[inline]
    pub const fn new(width: f64, height: f64, range_start: i64, range_end: i64) -> Self {
        Self {
            width,
            height,
            range_start,
            range_end,
        }
    }

    /// Surface units per minute (`height / range_end`).
    #[inline]
    pub fn unit(&self) -> f64 {
        self.height / self.range_end as f64
    }

    /// Width of a single column when a cluster is split into `lanes` columns.
    #[inline]
    pub fn column_width(&self, lanes: usize) -> f64 {
        self.width / lanes.max(1) as f64
    }

    /// Full geometry for an event placed at `column` of a `lanes`-wide cluster.
    pub fn place(
        &self,
        id: EventId,
        interval: Interval,
        column: usize,
        lanes: usize,
    ) -> EventGeometry {
        let unit = self.unit();
        let width = self.column_width(lanes);
        EventGeometry {
            id,
            start: interval.start(),
            end: interval.end(),
            column,
            width,
            left: column as f64 * width,
            top: unit * interval.start() as f64,
            height: unit * interval.duration() as f64,
        }
    }
}

/// Geometry handed to the renderer for one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventGeometry {
    pub id: EventId,
    pub start: i64,
    pub end: i64,
    pub column: usize,
    pub width: f64,
    pub left: f64,
    pub top: f64,
    pub height: f64,
}

impl EventGeometry {
    /// Right edge (`left + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
