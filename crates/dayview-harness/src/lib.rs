#![forbid(unsafe_code)]

//! Command-line harness for the day-view layout engine.
//!
//! Reads a JSON array of `{start, end}` events, lays them out, and writes
//! every render call the engine makes, either as JSONL or as a text table.
//!
//! # Running
//!
//! ```sh
//! echo '[{"start":30,"end":150},{"start":540,"end":600}]' \
//!     | DAYVIEW_RENDERER=text cargo run -p dayview-harness
//! ```
//!
//! # Environment
//!
//! | Variable               | Meaning                                   |
//! |------------------------|-------------------------------------------|
//! | `DAYVIEW_TRACK_WIDTH`  | Track width (default 600)                 |
//! | `DAYVIEW_TRACK_HEIGHT` | Track height (default 1440)               |
//! | `DAYVIEW_RANGE_START`  | First minute (default 0)                  |
//! | `DAYVIEW_RANGE_END`    | Last minute (default 1440)                |
//! | `DAYVIEW_RENDERER`     | `json` (default) or `text`                |
//! | `DAYVIEW_INPUT`        | Input file; stdin when unset              |
//! | `DAYVIEW_LOG_JSON`     | Emit logs as JSON on stderr               |
//! | `RUST_LOG`             | Log filter (default `warn`)               |

use std::io::{self, Read, Write};
use std::path::PathBuf;

use dayview_layout::{
    EventGeometry, LayoutConfig, LayoutEngine, Rejection, Renderer, ValidationError,
};
use serde_json::Value;

/// Horizontal gap the text table subtracts from each event so that
/// neighbouring columns stay visually apart.
pub const HAIRLINE_INSET: f64 = 1.0;

/// Output format for render calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererKind {
    /// One JSON object per render call.
    #[default]
    Json,
    /// Fixed-width text table.
    Text,
}

impl RendererKind {
    /// Parse a renderer name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" | "jsonl" => Some(Self::Json),
            "text" | "table" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Harness settings gathered from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarnessConfig {
    pub layout: LayoutConfig,
    pub renderer: RendererKind,
    pub input: Option<PathBuf>,
    pub log_json: bool,
}

impl HarnessConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, so tests need not touch the real
    /// environment. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let string = |name: &str| {
            lookup(name).and_then(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };
        let float = |name: &str| string(name).and_then(|v| v.parse::<f64>().ok());
        let int = |name: &str| string(name).and_then(|v| v.parse::<i64>().ok());
        let flag = |name: &str| {
            string(name).is_some_and(|v| {
                matches!(
                    v.as_str(),
                    "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON"
                )
            })
        };

        let mut layout = LayoutConfig::default();
        layout.track_width = float("DAYVIEW_TRACK_WIDTH");
        layout.track_height = float("DAYVIEW_TRACK_HEIGHT");
        if let Some(start) = int("DAYVIEW_RANGE_START") {
            layout.range_start = start;
        }
        if let Some(end) = int("DAYVIEW_RANGE_END") {
            layout.range_end = end;
        }

        Self {
            layout,
            renderer: string("DAYVIEW_RENDERER")
                .and_then(|name| RendererKind::parse(&name))
                .unwrap_or_default(),
            input: string("DAYVIEW_INPUT").map(PathBuf::from),
            log_json: flag("DAYVIEW_LOG_JSON"),
        }
    }
}

/// Renderer writing each render call to `out`.
///
/// The first write error is kept and reported by [`StreamRenderer::finish`];
/// later calls become no-ops.
pub struct StreamRenderer<W: Write> {
    kind: RendererKind,
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> StreamRenderer<W> {
    pub fn new(kind: RendererKind, out: W) -> Self {
        Self {
            kind,
            out,
            error: None,
        }
    }

    /// Flush the output, surfacing any write error seen while rendering.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write(&mut self, geometry: &EventGeometry) -> io::Result<()> {
        match self.kind {
            RendererKind::Json => {
                serde_json::to_writer(&mut self.out, geometry)?;
                writeln!(self.out)
            }
            RendererKind::Text => writeln!(
                self.out,
                "{:<16} col={:<3} left={:>9.2} width={:>9.2} top={:>9.2} height={:>9.2}",
                geometry.id.to_string(),
                geometry.column,
                geometry.left,
                (geometry.width - HAIRLINE_INSET).max(0.0),
                geometry.top,
                geometry.height,
            ),
        }
    }
}

impl<W: Write> Renderer for StreamRenderer<W> {
    fn render(&mut self, geometry: &EventGeometry) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write(geometry) {
            tracing::error!(error = %err, "failed to write geometry");
            self.error = Some(err);
        }
    }
}

/// Result of one harness run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
    /// Final geometry of every event, in insertion order.
    pub layout: Vec<EventGeometry>,
}

/// Lay out the events read from `input`, streaming render calls to `output`.
pub fn run<R: Read, W: Write>(
    config: &HarnessConfig,
    input: R,
    output: W,
) -> io::Result<RunSummary> {
    let raw: Value = serde_json::from_reader(input)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    let renderer = StreamRenderer::new(config.renderer, output);
    let mut engine = LayoutEngine::new(config.layout, renderer)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let report = engine
        .add_events(&raw)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let layout = engine.layout();
    engine.into_renderer().finish()?;

    tracing::info!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "harness run complete"
    );
    Ok(RunSummary {
        accepted: report.accepted.len(),
        rejected: report.rejected,
        layout,
    })
}

/// One line describing a rejected batch element.
pub fn describe_rejection(index: usize, error: &ValidationError) -> String {
    format!("event #{index} rejected: {error}")
}
