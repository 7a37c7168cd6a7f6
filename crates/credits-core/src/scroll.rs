//! Scroll parameter computation
//!
//! The credits container starts just below the viewport and travels upward
//! until every viewport-height of content has left the screen. Both the end
//! position and the pass duration are derived from how many viewports tall
//! the content is, so scroll speed stays roughly constant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CreditsError, Result};

/// Start position of the container, as a percentage of the viewport.
pub const START_OFFSET_PERCENT: f64 = 105.0;

/// Extra distance the padded variant travels past the last viewport.
pub const PADDED_OVERSCROLL_PERCENT: f64 = 10.0;

/// Milliseconds per percent of travel for the padded variant.
pub const PADDED_MS_PER_PERCENT: f64 = 60.0;

/// Milliseconds per viewport of content for the flush variant.
pub const FLUSH_MS_PER_VIEWPORT: f64 = 20_000.0;

/// How the end position and duration are derived from the content ratio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollVariant {
    /// Overscrolls by a further 10% and logs the end position
    #[default]
    Padded,
    /// Stops exactly at the last viewport boundary
    Flush,
}

impl ScrollVariant {
    /// All known variants
    pub const ALL: [ScrollVariant; 2] = [ScrollVariant::Padded, ScrollVariant::Flush];

    /// Compute scroll parameters for the given measurements
    pub fn compute(self, measurements: Measurements) -> Result<ScrollParams> {
        let ratio = measurements.ratio()?;
        let viewports = ratio.ceil();

        let params = match self {
            ScrollVariant::Padded => ScrollParams {
                credits_height: viewports * -100.0 - PADDED_OVERSCROLL_PERCENT,
                duration_ms: (ratio * 100.0 + 100.0) * PADDED_MS_PER_PERCENT,
            },
            ScrollVariant::Flush => ScrollParams {
                credits_height: viewports * -100.0,
                duration_ms: ratio * FLUSH_MS_PER_VIEWPORT,
            },
        };

        Ok(params.normalized())
    }

    /// Whether this variant reports the computed end position
    pub fn logs_end_position(self) -> bool {
        matches!(self, ScrollVariant::Padded)
    }

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollVariant::Padded => "padded",
            ScrollVariant::Flush => "flush",
        }
    }
}

impl fmt::Display for ScrollVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollVariant {
    type Err = CreditsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "padded" | "a" => Ok(ScrollVariant::Padded),
            "flush" | "b" => Ok(ScrollVariant::Flush),
            _ => Err(CreditsError::UnknownVariant(s.to_string())),
        }
    }
}

/// Heights read from the host at trigger time, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Rendered height of the credits container
    pub content_height: f64,
    /// Visible height of the viewport
    pub viewport_height: f64,
}

impl Measurements {
    pub fn new(content_height: f64, viewport_height: f64) -> Self {
        Self {
            content_height,
            viewport_height,
        }
    }

    /// How many viewports tall the content is
    pub fn ratio(&self) -> Result<f64> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(CreditsError::DegenerateViewport {
                height: self.viewport_height,
            });
        }
        if !self.content_height.is_finite() || self.content_height < 0.0 {
            return Err(CreditsError::InvalidMeasurement {
                what: "content height",
                value: self.content_height,
            });
        }

        Ok(self.content_height / self.viewport_height)
    }
}

/// Derived animation parameters for one scroll pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollParams {
    /// End position of the container, in percent of the viewport (non-positive)
    pub credits_height: f64,
    /// Duration of one pass in milliseconds
    pub duration_ms: f64,
}

impl ScrollParams {
    // ceil(0) * -100 yields -0.0, which would render as "-0%"
    fn normalized(mut self) -> Self {
        if self.credits_height == 0.0 {
            self.credits_height = 0.0;
        }
        self
    }

    /// End position formatted as a CSS percentage
    pub fn end_position(&self) -> String {
        format_percent(self.credits_height)
    }
}

/// Format a percentage for use as a CSS length
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}
