//! Host-facing timeline widget.
//!
//! [`Timeline`] owns one store, one selector graph with its cache and one
//! renderer. Every input method dispatches exactly one action; the derived
//! accessors read the current snapshot through the memoized selectors.

mod json_contract;
mod timeline_config;

pub use json_contract::{
    TIMELINE_SCENE_JSON_SCHEMA_V1, TIMELINE_STATE_JSON_SCHEMA_V1, TimelineSceneJsonContractV1,
    TimelineStateJsonContractV1, TimelineStateSummary,
};
pub use timeline_config::TimelineConfig;

use std::sync::Arc;

use tracing::debug;

use crate::core::{
    Activity, ActivityId, AxisLines, BandScale, EventRectangle, Orientation, Point,
    PositionedActivity, RectSizer, ResourceBand, TimeScale, TimeTick, TimelineScene, View,
    validate_activities,
};
use crate::error::TimelineResult;
use crate::interaction::{DragGesture, InteractionMode, PointerEvent, ZoomTransform};
use crate::render::Renderer;
use crate::selector::{
    Selector, SelectorCache, SelectorCacheStats, SharedSelector, TimelineSelectors,
};
use crate::store::{StateSubscription, TimelineAction, TimelineState, TimelineStore};

pub struct Timeline<R: Renderer> {
    renderer: R,
    store: TimelineStore,
    selectors: TimelineSelectors,
    cache: SelectorCache,
}

impl<R: Renderer> Timeline<R> {
    /// Builds the widget and reports the configured view and orientation
    /// to the store.
    pub fn new(renderer: R, config: TimelineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let mut store = TimelineStore::new(config.store_config())?;
        store.dispatch(TimelineAction::ViewChanged(config.view));
        store.dispatch(TimelineAction::OrientationChanged(config.time_orientation));

        let mut cache = SelectorCache::new();
        let selectors = TimelineSelectors::new(&mut cache);
        debug!(
            width = config.view.width,
            height = config.view.height,
            time_orientation = ?config.time_orientation,
            "timeline created"
        );

        Ok(Self {
            renderer,
            store,
            selectors,
            cache,
        })
    }

    pub fn set_data(&mut self, data: impl Into<Arc<[Activity]>>) {
        self.dispatch(TimelineAction::DataChanged(data.into()));
    }

    /// Same as [`Self::set_data`] but rejects invalid activities first.
    pub fn try_set_data(&mut self, data: impl Into<Arc<[Activity]>>) -> TimelineResult<()> {
        let data = data.into();
        validate_activities(&data)?;
        self.dispatch(TimelineAction::DataChanged(data));
        Ok(())
    }

    pub fn set_view(&mut self, view: View) -> TimelineResult<()> {
        let view = view.validate()?;
        self.dispatch(TimelineAction::ViewChanged(view));
        Ok(())
    }

    pub fn set_orientation(&mut self, time_orientation: Orientation) {
        self.dispatch(TimelineAction::OrientationChanged(time_orientation));
    }

    pub fn zoom(&mut self, transform: ZoomTransform) {
        self.dispatch(TimelineAction::from(transform));
    }

    pub fn drag_start(&mut self, id: impl Into<ActivityId>, event: PointerEvent) {
        self.gesture(DragGesture::Start {
            id: id.into(),
            event,
        });
    }

    pub fn drag(&mut self, id: impl Into<ActivityId>, event: PointerEvent) {
        self.gesture(DragGesture::Move {
            id: id.into(),
            event,
        });
    }

    pub fn drag_end(&mut self) {
        self.gesture(DragGesture::End);
    }

    pub fn gesture(&mut self, gesture: DragGesture) {
        self.dispatch(TimelineAction::from(gesture));
    }

    pub fn dispatch(&mut self, action: TimelineAction) {
        self.store.dispatch(action);
    }

    /// See [`TimelineStore::dispatch_json`].
    pub fn dispatch_json(&mut self, input: &str) -> TimelineResult<bool> {
        self.store.dispatch_json(input)
    }

    #[must_use]
    pub fn state(&self) -> Arc<TimelineState> {
        self.store.state()
    }

    pub fn subscribe(&mut self) -> StateSubscription {
        self.store.subscribe()
    }

    #[must_use]
    pub fn store(&self) -> &TimelineStore {
        &self.store
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        InteractionMode::from_drag_event(self.store.state().drag_event())
    }

    fn read_selector<T: Clone>(
        &mut self,
        pick: impl FnOnce(&TimelineSelectors) -> &SharedSelector<TimelineState, T>,
    ) -> T {
        let state = self.store.state();
        pick(&self.selectors).select(&state, &mut self.cache)
    }

    pub fn time_scale(&mut self) -> TimeScale {
        self.read_selector(|selectors| &selectors.time_scale)
    }

    pub fn band_scale(&mut self) -> BandScale {
        self.read_selector(|selectors| &selectors.band_scale)
    }

    pub fn rect_sizer(&mut self) -> RectSizer {
        self.read_selector(|selectors| &selectors.rect_sizer)
    }

    /// Activities with the tentative drop applied to the dragged one.
    pub fn positioned_activities(&mut self) -> Arc<[PositionedActivity]> {
        self.read_selector(|selectors| &selectors.positioned_activities)
    }

    pub fn drop_activity(&mut self) -> Option<PositionedActivity> {
        self.read_selector(|selectors| &selectors.drop_activity)
    }

    pub fn event_rectangles(&mut self) -> Arc<[EventRectangle]> {
        self.read_selector(|selectors| &selectors.event_rectangles)
    }

    pub fn resource_bands(&mut self) -> Arc<[ResourceBand]> {
        self.read_selector(|selectors| &selectors.resource_bands)
    }

    pub fn axis_lines(&mut self) -> AxisLines {
        self.read_selector(|selectors| &selectors.axis_lines)
    }

    pub fn time_ticks(&mut self) -> Arc<[TimeTick]> {
        self.read_selector(|selectors| &selectors.time_ticks)
    }

    pub fn drag_offset(&mut self) -> Option<Point> {
        self.read_selector(|selectors| &selectors.drag_offset)
    }

    pub fn scene(&mut self) -> Arc<TimelineScene> {
        self.read_selector(|selectors| &selectors.scene)
    }

    /// Derives the scene for the current state and hands it to the renderer.
    pub fn render(&mut self) -> TimelineResult<()> {
        let scene = self.scene();
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn selector_cache_stats(&self) -> SelectorCacheStats {
        self.cache.stats()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
