//! timeline-rs: reactive state and scale-derivation core for interactive
//! timeline charts.
//!
//! A single-writer store ingests data, view, orientation, zoom and drag
//! actions; memoized selectors derive time/band scales and rectangle
//! geometry from each snapshot; a [`render::Renderer`] consumes the result.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod selector;
pub mod store;
pub mod telemetry;

pub use api::{Timeline, TimelineConfig};
pub use error::{TimelineError, TimelineResult};
