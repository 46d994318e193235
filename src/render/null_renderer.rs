use crate::core::TimelineScene;
use crate::error::TimelineResult;
use crate::render::Renderer;

/// Headless renderer: validates each scene and records what it would draw.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: u64,
    pub last_rect_count: usize,
    pub last_band_count: usize,
    pub last_tick_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &TimelineScene) -> TimelineResult<()> {
        scene.validate()?;
        self.frames_rendered += 1;
        self.last_rect_count = scene.event_rectangles.len();
        self.last_band_count = scene.resource_bands.len();
        self.last_tick_count = scene.time_ticks.len();
        Ok(())
    }
}
