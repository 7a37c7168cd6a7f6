//! Credits Core - Scroll planning and roster types for the credits roll
//!
//! This crate holds everything about the credits roll that does not need a
//! live browser: the scroll formula, the viewport-measurement capability the
//! browser bindings implement, the keyframe plan handed to the host
//! animation engine, the roster of credited names and the page they are
//! rendered into.
//!
//! # Modules
//!
//! - [`scroll`] - End position and duration from content/viewport heights
//! - [`viewport`] - Measurement capability injected into the scroller
//! - [`animation`] - Keyframe plan and the [`CreditsScroller`]
//! - [`roster`] - Credited names grouped by category
//! - [`page`] - HTML page hosting the credits container
//! - [`config`] - Configuration types
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use credits_core::{CreditsScroller, FixedViewport};
//!
//! let plan = CreditsScroller::default()
//!     .plan(&FixedViewport::new(2000.0, 1000.0))
//!     .unwrap();
//! assert_eq!(plan.params.credits_height, -210.0);
//! assert_eq!(plan.duration_ms, 18000.0);
//! ```

pub mod scroll;
pub mod viewport;
pub mod animation;
pub mod roster;
pub mod page;

// Infrastructure modules
pub mod config;
pub mod error;

// Re-exports for convenience
pub use error::{CreditsError, Result};

pub use scroll::{Measurements, ScrollParams, ScrollVariant};
pub use viewport::{FixedViewport, ViewportMeasurement, CONTAINER_ID};
pub use animation::{AnimationPlan, CreditsScroller, Iterations, Keyframe};
pub use roster::{CreditCategory, CreditsRoster, RosterSnapshot};
pub use page::{render_credits_page, PageOptions};
pub use config::{CreditsConfig, LoggingConfig, ScrollConfig, ServerConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
