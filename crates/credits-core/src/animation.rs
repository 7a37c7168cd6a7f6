//! Keyframe animation plan for the credits container

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::ScrollConfig;
use crate::error::Result;
use crate::scroll::{format_percent, ScrollParams, ScrollVariant, START_OFFSET_PERCENT};
use crate::viewport::ViewportMeasurement;

/// Style property animated by the scroller.
pub const ANIMATED_PROPERTY: &str = "top";

/// One animation state: style property -> value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyframe(BTreeMap<String, String>);

impl Keyframe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property to this keyframe
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Repeat count of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Iterations {
    Count(u32),
    Infinite,
}

impl Iterations {
    /// Value accepted by the host animation API
    pub fn as_f64(self) -> f64 {
        match self {
            Iterations::Count(n) => f64::from(n),
            Iterations::Infinite => f64::INFINITY,
        }
    }
}

/// Everything the host needs to start the scroll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationPlan {
    pub variant: ScrollVariant,
    pub params: ScrollParams,
    pub keyframes: Vec<Keyframe>,
    pub duration_ms: f64,
    pub iterations: Iterations,
}

impl AnimationPlan {
    /// Build the two-keyframe `top` animation for the given parameters
    ///
    /// The container always starts just below the viewport, at
    /// [`START_OFFSET_PERCENT`].
    pub fn new(variant: ScrollVariant, params: ScrollParams) -> Self {
        let keyframes = vec![
            Keyframe::new().with(ANIMATED_PROPERTY, format_percent(START_OFFSET_PERCENT)),
            Keyframe::new().with(ANIMATED_PROPERTY, params.end_position()),
        ];

        Self {
            variant,
            params,
            keyframes,
            duration_ms: params.duration_ms,
            iterations: Iterations::Infinite,
        }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn iterations(&self) -> Iterations {
        self.iterations
    }
}

/// Plans the credits roll from host measurements
#[derive(Debug, Clone, Default)]
pub struct CreditsScroller {
    config: ScrollConfig,
}

impl CreditsScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Measure the host once and derive the animation plan
    pub fn plan(&self, viewport: &dyn ViewportMeasurement) -> Result<AnimationPlan> {
        let measurements = viewport.measure()?;
        let params = self.config.variant.compute(measurements)?;

        Ok(AnimationPlan::new(self.config.variant, params))
    }
}
