#![forbid(unsafe_code)]

//! Day-view event layout.
//!
//! Places time intervals on a single vertical track so that events which
//! overlap in time never share a column, and every event in an overlap
//! cluster gets the same share of the track's width:
//!
//! - [`validate`](validate::validate) - well-formedness of raw `{start, end}` input
//! - [`EventStore`] - insertion-ordered events with stable ids
//! - [`cluster`](cluster::cluster) - transitive collision clusters
//! - [`assign`](column::assign) - first-fit column assignment
//! - [`width`] - cluster-wide width sharing
//! - [`LayoutEngine`] - wires the above together and drives a [`Renderer`]
//!
//! Collision is endpoint-inclusive: an event ending at minute 100 collides
//! with one starting at minute 100.
//!
//! # Example
//!
//! ```
//! use dayview_layout::{LayoutConfig, LayoutEngine, RecordingRenderer};
//! use serde_json::json;
//!
//! let config = LayoutConfig::default().track_width(600.0).track_height(720.0);
//! let mut engine = LayoutEngine::new(config, RecordingRenderer::new()).unwrap();
//!
//! let report = engine
//!     .add_events(&json!([
//!         {"start": 30, "end": 150},
//!         {"start": 540, "end": 600},
//!         {"start": 560, "end": 620},
//!         {"start": 610, "end": 670}
//!     ]))
//!     .unwrap();
//! assert!(report.is_clean());
//!
//! let widths: Vec<f64> = engine.layout().iter().map(|g| g.width).collect();
//! assert_eq!(widths, [600.0, 300.0, 300.0, 300.0]);
//! ```

pub mod cluster;
pub mod column;
pub mod config;
pub mod engine;
pub mod occupancy;
pub mod render;
pub mod store;
pub mod validate;
pub mod width;

pub use cluster::Cluster;
pub use config::{ConfigError, LayoutConfig, LayoutOptions};
pub use dayview_core::{EventGeometry, EventId, Interval, Size, Track};
pub use engine::{BatchReport, LayoutEngine, Rejection};
pub use occupancy::Occupancy;
pub use render::{FnRenderer, NullRenderer, RecordingRenderer, Renderer, from_fn};
pub use store::{Event, EventStore};
pub use validate::{Field, InputShapeError, ValidationError};
