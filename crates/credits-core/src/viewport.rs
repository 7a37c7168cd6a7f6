//! Viewport measurement capability
//!
//! The scroller never touches the host directly; it asks an implementation
//! of [`ViewportMeasurement`] for the two heights it needs. The browser
//! bindings implement it over the DOM, tests and the server use
//! [`FixedViewport`].

use crate::error::Result;
use crate::scroll::Measurements;

/// Identifier of the element holding the scrolling credits.
pub const CONTAINER_ID: &str = "container";

/// Source of the heights the scroller is planned from
pub trait ViewportMeasurement {
    /// Rendered height of the credits container
    fn container_height(&self) -> Result<f64>;

    /// Visible height of the viewport
    fn viewport_height(&self) -> Result<f64>;

    /// Read both heights at once
    fn measure(&self) -> Result<Measurements> {
        Ok(Measurements::new(
            self.container_height()?,
            self.viewport_height()?,
        ))
    }
}

/// Measurement source returning preset heights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport {
    pub container_height: f64,
    pub viewport_height: f64,
}

impl FixedViewport {
    pub fn new(container_height: f64, viewport_height: f64) -> Self {
        Self {
            container_height,
            viewport_height,
        }
    }
}

impl ViewportMeasurement for FixedViewport {
    fn container_height(&self) -> Result<f64> {
        Ok(self.container_height)
    }

    fn viewport_height(&self) -> Result<f64> {
        Ok(self.viewport_height)
    }
}

impl From<Measurements> for FixedViewport {
    fn from(m: Measurements) -> Self {
        Self::new(m.content_height, m.viewport_height)
    }
}
