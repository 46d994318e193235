mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::core::TimelineScene;
use crate::error::TimelineResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully derived `TimelineScene`, so drawing code stays
/// isolated from state and interaction logic.
pub trait Renderer {
    fn render(&mut self, scene: &TimelineScene) -> TimelineResult<()>;
}
