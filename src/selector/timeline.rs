use std::rc::Rc;
use std::sync::Arc;

use crate::core::{
    Activity, AxisLines, AxisOrientations, BandScale, DragEvent, EventRectangle, Orientation, Point,
    PositionedActivity, RectSizer, ResourceBand, TimeScale, TimeTick, TimelineScene, View,
    drag_event_offset, drop_activity, event_rectangle, position_activities, resource_bands,
};
use crate::store::TimelineState;

use super::{FieldSelector, InputEq, Memo, SelectorCache, SelectorInputs, SharedSelector};

pub const TIME_TICK_TARGET_SPACING_PX: f64 = 80.0;
const TIME_TICK_MIN_COUNT: usize = 2;
const TIME_TICK_MAX_COUNT: usize = 12;

/// Tick count aiming at one tick per `TIME_TICK_TARGET_SPACING_PX`.
#[must_use]
pub fn time_tick_target_count(axis_span_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return TIME_TICK_MIN_COUNT;
    }
    let raw = (axis_span_px / TIME_TICK_TARGET_SPACING_PX).floor() as usize + 1;
    raw.clamp(TIME_TICK_MIN_COUNT, TIME_TICK_MAX_COUNT)
}

type Shared<T> = SharedSelector<TimelineState, T>;

fn field<T: Clone + 'static>(read: fn(&TimelineState) -> T) -> Shared<T> {
    Rc::new(FieldSelector::new(read))
}

fn memo<I, T>(
    cache: &mut SelectorCache,
    label: &'static str,
    inputs: I,
    combine: impl Fn(&I::Values) -> T + 'static,
) -> Shared<T>
where
    I: SelectorInputs<TimelineState> + 'static,
    I::Values: InputEq,
    T: Clone + 'static,
{
    Memo::new(cache, label, inputs, combine).shared()
}

/// Selector graph from raw state to renderable geometry.
///
/// Cached values live in the [`SelectorCache`] passed to [`Self::new`]; the
/// same cache must be used when reading.
pub struct TimelineSelectors {
    pub data: Shared<Arc<[Activity]>>,
    pub view: Shared<View>,
    pub time_orientation: Shared<Orientation>,
    pub time_scale: Shared<TimeScale>,
    pub band_scale: Shared<BandScale>,
    pub drag_event: Shared<Option<DragEvent>>,
    pub time_extent: Shared<f64>,
    pub resource_breadth: Shared<f64>,
    pub rect_sizer: Shared<RectSizer>,
    pub base_positioned: Shared<Arc<[PositionedActivity]>>,
    pub drop_activity: Shared<Option<PositionedActivity>>,
    pub positioned_activities: Shared<Arc<[PositionedActivity]>>,
    pub event_rectangles: Shared<Arc<[EventRectangle]>>,
    pub resource_bands: Shared<Arc<[ResourceBand]>>,
    pub axis_lines: Shared<AxisLines>,
    pub time_ticks: Shared<Arc<[TimeTick]>>,
    pub drag_offset: Shared<Option<Point>>,
    pub scene: Shared<Arc<TimelineScene>>,
}

impl TimelineSelectors {
    pub fn new(cache: &mut SelectorCache) -> Self {
        let data = field(|state: &TimelineState| Arc::clone(&state.data));
        let view = field(|state: &TimelineState| state.view);
        let axis_orientations = field(|state: &TimelineState| state.axis_orientations);
        let time_orientation = field(|state: &TimelineState| state.axis_orientations.time());
        let time_scale = field(|state: &TimelineState| state.time_scale);
        let band_scale = field(|state: &TimelineState| state.band_scale.clone());
        let drag_event = field(|state: &TimelineState| state.drag_event.clone());

        let time_extent = memo(
            cache,
            "time_extent",
            (Rc::clone(&view), Rc::clone(&time_orientation)),
            |(view, orientation): &(View, Orientation)| view.extent(*orientation),
        );

        let resource_breadth = memo(
            cache,
            "resource_breadth",
            (Rc::clone(&band_scale),),
            |(band_scale,): &(BandScale,)| band_scale.bandwidth(),
        );

        let rect_sizer = memo(
            cache,
            "rect_sizer",
            (
                Rc::clone(&time_orientation),
                Rc::clone(&time_scale),
                Rc::clone(&resource_breadth),
            ),
            |(time_orientation, time_scale, breadth): &(Orientation, TimeScale, f64)| RectSizer {
                time_orientation: *time_orientation,
                time_scale: *time_scale,
                breadth_in_resource_axis: *breadth,
            },
        );

        let base_positioned = memo(
            cache,
            "base_positioned",
            (Rc::clone(&data),),
            |(data,): &(Arc<[Activity]>,)| -> Arc<[PositionedActivity]> {
                Arc::from(position_activities(data))
            },
        );

        let drop_activity = memo(
            cache,
            "drop_activity",
            (
                Rc::clone(&band_scale),
                Rc::clone(&time_scale),
                Rc::clone(&base_positioned),
                Rc::clone(&drag_event),
                Rc::clone(&time_orientation),
            ),
            |(band_scale, time_scale, positioned, drag_event, time_orientation): &(
                BandScale,
                TimeScale,
                Arc<[PositionedActivity]>,
                Option<DragEvent>,
                Orientation,
            )| {
                drop_activity(
                    band_scale,
                    time_scale,
                    positioned,
                    drag_event.as_ref(),
                    *time_orientation,
                )
            },
        );

        let positioned_activities = memo(
            cache,
            "positioned_activities",
            (Rc::clone(&base_positioned), Rc::clone(&drop_activity)),
            |(base, dropped): &(Arc<[PositionedActivity]>, Option<PositionedActivity>)|
             -> Arc<[PositionedActivity]> {
                let Some(dropped) = dropped else {
                    return Arc::clone(base);
                };
                base.iter()
                    .map(|activity| {
                        if activity.id() == dropped.id() {
                            dropped.clone()
                        } else {
                            activity.clone()
                        }
                    })
                    .collect()
            },
        );

        let event_rectangles = memo(
            cache,
            "event_rectangles",
            (
                Rc::clone(&rect_sizer),
                Rc::clone(&band_scale),
                Rc::clone(&positioned_activities),
            ),
            |(sizer, band_scale, positioned): &(RectSizer, BandScale, Arc<[PositionedActivity]>)|
             -> Arc<[EventRectangle]> {
                positioned
                    .iter()
                    .filter_map(|activity| event_rectangle(sizer, band_scale, activity))
                    .collect()
            },
        );

        let resource_bands = memo(
            cache,
            "resource_bands",
            (Rc::clone(&band_scale), Rc::clone(&time_extent)),
            |(band_scale, time_extent): &(BandScale, f64)| -> Arc<[ResourceBand]> {
                Arc::from(resource_bands(band_scale, *time_extent))
            },
        );

        let axis_lines = memo(
            cache,
            "axis_lines",
            (Rc::clone(&view), axis_orientations),
            |(view, orientations): &(View, AxisOrientations)| {
                AxisLines::for_view(*view, *orientations)
            },
        );

        let time_ticks = memo(
            cache,
            "time_ticks",
            (Rc::clone(&time_scale), Rc::clone(&time_extent)),
            |(time_scale, time_extent): &(TimeScale, f64)| -> Arc<[TimeTick]> {
                time_scale
                    .visible_ticks(*time_extent, time_tick_target_count(*time_extent))
                    .into_iter()
                    .map(|time| TimeTick {
                        time,
                        position: time_scale.time_to_pixel(time),
                    })
                    .collect()
            },
        );

        let drag_offset = memo(
            cache,
            "drag_offset",
            (Rc::clone(&drag_event),),
            |(drag_event,): &(Option<DragEvent>,)| drag_event_offset(drag_event.as_ref()),
        );

        let scene = memo(
            cache,
            "scene",
            (
                Rc::clone(&view),
                Rc::clone(&axis_lines),
                Rc::clone(&time_ticks),
                Rc::clone(&resource_bands),
                Rc::clone(&event_rectangles),
                Rc::clone(&drag_event),
            ),
            |(view, axis_lines, time_ticks, resource_bands, event_rectangles, drag_event): &(
                View,
                AxisLines,
                Arc<[TimeTick]>,
                Arc<[ResourceBand]>,
                Arc<[EventRectangle]>,
                Option<DragEvent>,
            )| {
                Arc::new(TimelineScene {
                    view: *view,
                    axis_lines: *axis_lines,
                    time_ticks: Arc::clone(time_ticks),
                    resource_bands: Arc::clone(resource_bands),
                    event_rectangles: Arc::clone(event_rectangles),
                    dragged_activity: drag_event.as_ref().map(|drag| drag.id.clone()),
                    drag_offset: drag_event_offset(drag_event.as_ref()),
                })
            },
        );

        Self {
            data,
            view,
            time_orientation,
            time_scale,
            band_scale,
            drag_event,
            time_extent,
            resource_breadth,
            rect_sizer,
            base_positioned,
            drop_activity,
            positioned_activities,
            event_rectangles,
            resource_bands,
            axis_lines,
            time_ticks,
            drag_offset,
            scene,
        }
    }
}
