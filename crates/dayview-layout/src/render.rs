#![forbid(unsafe_code)]

//! The rendering collaborator seam.
//!
//! The engine owns no visual state. Whenever an event's geometry is computed
//! or recomputed it hands the result to a [`Renderer`], once per event.

use std::collections::HashMap;

use dayview_core::{EventGeometry, EventId, Size};

/// Receives geometry for laid-out events.
pub trait Renderer {
    /// Size of the drawing surface, if the renderer can measure it.
    ///
    /// Consulted once at engine construction (and on reconfiguration) for
    /// any track dimension the configuration leaves unset.
    fn surface_size(&self) -> Option<Size> {
        None
    }

    /// Draw, or move and resize, one event.
    fn render(&mut self, geometry: &EventGeometry);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn surface_size(&self) -> Option<Size> {
        (**self).surface_size()
    }

    fn render(&mut self, geometry: &EventGeometry) {
        (**self).render(geometry);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn surface_size(&self) -> Option<Size> {
        (**self).surface_size()
    }

    fn render(&mut self, geometry: &EventGeometry) {
        (**self).render(geometry);
    }
}

/// Renderer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _geometry: &EventGeometry) {}
}

/// Adapter turning a closure into a [`Renderer`].
pub struct FnRenderer<F> {
    surface: Option<Size>,
    f: F,
}

/// Render through a closure.
pub fn from_fn<F: FnMut(&EventGeometry)>(f: F) -> FnRenderer<F> {
    FnRenderer { surface: None, f }
}

impl<F> FnRenderer<F> {
    /// Report a measured surface size.
    #[must_use]
    pub fn with_surface(mut self, size: Size) -> Self {
        self.surface = Some(size);
        self
    }
}

impl<F: FnMut(&EventGeometry)> Renderer for FnRenderer<F> {
    fn surface_size(&self) -> Option<Size> {
        self.surface
    }

    fn render(&mut self, geometry: &EventGeometry) {
        (self.f)(geometry);
    }
}

/// Renderer that records every call, for tests and replay.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    surface: Option<Size>,
    calls: Vec<EventGeometry>,
    latest: HashMap<EventId, usize>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a measured surface size.
    #[must_use]
    pub fn with_surface(mut self, size: Size) -> Self {
        self.surface = Some(size);
        self
    }

    /// Every render call so far, oldest first.
    pub fn calls(&self) -> &[EventGeometry] {
        &self.calls
    }

    /// Most recent geometry rendered for `id`.
    pub fn latest(&self, id: EventId) -> Option<&EventGeometry> {
        self.latest.get(&id).and_then(|&i| self.calls.get(i))
    }

    /// Drain recorded calls, keeping the surface size.
    pub fn take(&mut self) -> Vec<EventGeometry> {
        self.latest.clear();
        std::mem::take(&mut self.calls)
    }
}

impl Renderer for RecordingRenderer {
    fn surface_size(&self) -> Option<Size> {
        self.surface
    }

    fn render(&mut self, geometry: &EventGeometry) {
        self.latest.insert(geometry.id, self.calls.len());
        self.calls.push(*geometry);
    }
}
