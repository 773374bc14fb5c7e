#![forbid(unsafe_code)]

//! Track configuration and option merging.

use std::fmt;

use dayview_core::{Size, Track};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// First minute of the default track.
pub const DEFAULT_RANGE_START: i64 = 0;
/// One day in minutes.
pub const DEFAULT_RANGE_END: i64 = 1440;
/// Width used when neither the config nor the renderer provides one.
pub const DEFAULT_TRACK_WIDTH: f64 = 600.0;
/// Height used when neither the config nor the renderer provides one.
pub const DEFAULT_TRACK_HEIGHT: f64 = 1440.0;

/// Engine configuration.
///
/// `track_width` and `track_height` default to `None`, meaning "measure the
/// renderer's surface".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub track_width: Option<f64>,
    pub track_height: Option<f64>,
    pub range_start: i64,
    pub range_end: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            track_width: None,
            track_height: None,
            range_start: DEFAULT_RANGE_START,
            range_end: DEFAULT_RANGE_END,
        }
    }
}

impl LayoutConfig {
    /// Set an explicit track width.
    #[must_use]
    pub fn track_width(mut self, width: f64) -> Self {
        self.track_width = Some(width);
        self
    }

    /// Set an explicit track height.
    #[must_use]
    pub fn track_height(mut self, height: f64) -> Self {
        self.track_height = Some(height);
        self
    }

    /// Set the visible minute range.
    #[must_use]
    pub fn range(mut self, start: i64, end: i64) -> Self {
        self.range_start = start;
        self.range_end = end;
        self
    }

    /// Overlay every option that is set.
    pub fn merge(&mut self, options: &LayoutOptions) {
        if let Some(width) = options.track_width {
            self.track_width = Some(width);
        }
        if let Some(height) = options.track_height {
            self.track_height = Some(height);
        }
        if let Some(start) = options.range_start {
            self.range_start = start;
        }
        if let Some(end) = options.range_end {
            self.range_end = end;
        }
    }

    /// Resolve the concrete track, measuring `surface` for unset dimensions.
    pub fn resolve(&self, surface: Option<Size>) -> Result<Track, ConfigError> {
        let width = self
            .track_width
            .or(surface.map(|s| s.width))
            .unwrap_or(DEFAULT_TRACK_WIDTH);
        let height = self
            .track_height
            .or(surface.map(|s| s.height))
            .unwrap_or(DEFAULT_TRACK_HEIGHT);

        check_dimension("track width", width)?;
        check_dimension("track height", height)?;
        if self.range_start < 0 || self.range_end <= self.range_start {
            return Err(ConfigError::InvalidRange {
                start: self.range_start,
                end: self.range_end,
            });
        }

        Ok(Track::new(width, height, self.range_start, self.range_end))
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteDimension { name });
    }
    if value < 0.0 {
        return Err(ConfigError::NegativeDimension { name, value });
    }
    Ok(())
}

/// A partial configuration, merged over the current one by
/// [`LayoutEngine::configure`](crate::LayoutEngine::configure).
///
/// Unknown keys are ignored; they belong to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    pub track_width: Option<f64>,
    pub track_height: Option<f64>,
    pub range_start: Option<i64>,
    pub range_end: Option<i64>,
}

impl LayoutOptions {
    /// Parse options from a JSON object such as `{"trackWidth": 600}`.
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        Self::deserialize(value).map_err(|err| ConfigError::Malformed {
            message: err.to_string(),
        })
    }
}

/// Invalid track configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFiniteDimension { name: &'static str },
    NegativeDimension { name: &'static str, value: f64 },
    InvalidRange { start: i64, end: i64 },
    Malformed { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteDimension { name } => write!(f, "{name} must be finite"),
            Self::NegativeDimension { name, value } => {
                write!(f, "{name} must not be negative (got {value})")
            }
            Self::InvalidRange { start, end } => write!(
                f,
                "track range must satisfy 0 <= start < end (got {start}..{end})"
            ),
            Self::Malformed { message } => write!(f, "malformed layout options: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
