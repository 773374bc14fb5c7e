#![forbid(unsafe_code)]

//! The layout engine.
//!
//! Per inserted event:
//!
//! ```text
//! raw -> validate -> store.insert -> cluster -> assign column
//!     -> recompute cluster widths -> render every cluster member
//! ```
//!
//! Siblings are re-rendered because admitting an event can shrink the
//! columns of events already placed in the same cluster.

use dayview_core::{EventGeometry, EventId, Interval, Track};
use serde_json::Value;

use crate::cluster::cluster;
use crate::column::assign;
use crate::config::{ConfigError, LayoutConfig, LayoutOptions};
use crate::render::Renderer;
use crate::store::{Event, EventStore};
use crate::validate::{InputShapeError, ValidationError, kind_name, validate};
use crate::width;

/// One rejected element of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the element in the batch.
    pub index: usize,
    pub error: ValidationError,
}

/// Outcome of [`LayoutEngine::add_events`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Ids of the events that were inserted, in batch order.
    pub accepted: Vec<EventId>,
    pub rejected: Vec<Rejection>,
}

impl BatchReport {
    /// Whether every element was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Lays out events on a single day track and drives a [`Renderer`].
///
/// The engine exclusively owns its event store; callers construct one engine
/// per track and pass it around explicitly.
#[derive(Debug)]
pub struct LayoutEngine<R> {
    config: LayoutConfig,
    track: Track,
    store: EventStore,
    renderer: R,
}

impl<R: Renderer> LayoutEngine<R> {
    /// Create an engine, measuring the renderer for unset track dimensions.
    pub fn new(config: LayoutConfig, renderer: R) -> Result<Self, ConfigError> {
        let track = config.resolve(renderer.surface_size())?;
        dayview_core::debug!(
            width = track.width,
            height = track.height,
            range_start = track.range_start,
            range_end = track.range_end,
            "layout engine created"
        );
        Ok(Self {
            config,
            track,
            store: EventStore::new(),
            renderer,
        })
    }

    /// Merge `options` over the current configuration.
    ///
    /// On success every stored event is re-rendered under the new track. On
    /// failure nothing changes.
    pub fn configure(&mut self, options: &LayoutOptions) -> Result<(), ConfigError> {
        let mut config = self.config;
        config.merge(options);
        let track = config.resolve(self.renderer.surface_size())?;
        self.config = config;
        self.track = track;

        dayview_core::debug!(
            width = track.width,
            height = track.height,
            events = self.store.len(),
            "layout reconfigured"
        );
        for event in self.store.all() {
            let geometry = track.place(event.id, event.interval, event.column, event.lanes);
            self.renderer.render(&geometry);
        }
        Ok(())
    }

    /// Validate and insert one raw `{start, end}` event.
    ///
    /// A rejected event leaves the store untouched and renders nothing.
    pub fn add_event(&mut self, raw: &Value) -> Result<Event, ValidationError> {
        match validate(raw) {
            Ok(interval) => Ok(self.add_interval(interval)),
            Err(err) => {
                dayview_core::warn!(reason = %err, "event rejected");
                Err(err)
            }
        }
    }

    /// Insert an already validated interval.
    pub fn add_interval(&mut self, interval: Interval) -> Event {
        let index = self.store.len();
        let id = self.store.insert(interval);

        let members = cluster(&self.store, index);
        let column = assign(&self.store, index, &members);
        if let Some(event) = self.store.get_mut(index) {
            event.column = column;
        }
        let placed = width::recompute(&mut self.store, &members, &self.track);

        let lanes = self.store.get(index).map_or(1, |event| event.lanes);
        dayview_core::debug!(
            %id,
            column,
            lanes,
            cluster = members.len(),
            "event placed"
        );

        for geometry in &placed {
            self.renderer.render(geometry);
        }

        Event {
            id,
            interval,
            column,
            lanes,
        }
    }

    /// Insert every element of a JSON array, in order.
    ///
    /// Invalid elements are reported and skipped; they never stop the rest
    /// of the batch. A non-array argument is rejected as a whole.
    pub fn add_events(&mut self, raw: &Value) -> Result<BatchReport, InputShapeError> {
        let Value::Array(items) = raw else {
            let found = kind_name(raw);
            dayview_core::warn!(found, "event batch rejected");
            return Err(InputShapeError { found });
        };

        let mut report = BatchReport::default();
        for (index, item) in items.iter().enumerate() {
            match self.add_event(item) {
                Ok(event) => report.accepted.push(event.id),
                Err(error) => report.rejected.push(Rejection { index, error }),
            }
        }
        dayview_core::debug!(
            accepted = report.accepted.len(),
            rejected = report.rejected.len(),
            "event batch processed"
        );
        Ok(report)
    }

    /// Stored events in insertion order.
    pub fn events(&self) -> &[Event] {
        self.store.all()
    }

    /// Look up a stored event.
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.store.find(id)
    }

    /// Current geometry of one event.
    pub fn geometry(&self, id: EventId) -> Option<EventGeometry> {
        self.store
            .find(id)
            .map(|e| self.track.place(e.id, e.interval, e.column, e.lanes))
    }

    /// Current geometry of every event, in insertion order.
    pub fn layout(&self) -> Vec<EventGeometry> {
        self.store
            .all()
            .iter()
            .map(|e| self.track.place(e.id, e.interval, e.column, e.lanes))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Resolved track dimensions.
    #[inline]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Tear the engine down, returning its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
