use serde::{Deserialize, Serialize};

use crate::core::{
    ActivityId, BandScale, Orientation, Point, PositionedActivity, TimeScale, inverse_band_scale,
};

/// Pointer sample reported by the host drag gesture.
///
/// `dx`/`dy` are the movement since the previous sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self { x, y, dx, dy }
    }

    /// Sample with no movement, as reported on gesture start.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }
}

/// In-progress drag gesture with cumulative movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragEvent {
    pub id: ActivityId,
    pub dx: f64,
    pub dy: f64,
    pub x: f64,
    pub y: f64,
}

impl DragEvent {
    /// Folds a pointer sample into the drag of `id`.
    ///
    /// Movement accumulates onto `prior` when it tracks the same activity;
    /// otherwise the gesture starts from zero.
    #[must_use]
    pub fn merge(prior: Option<&DragEvent>, id: &ActivityId, event: PointerEvent) -> Self {
        let (dx, dy) = prior
            .filter(|prior| &prior.id == id)
            .map_or((0.0, 0.0), |prior| (prior.dx, prior.dy));
        Self {
            id: id.clone(),
            dx: dx + event.dx,
            dy: dy + event.dy,
            x: event.x,
            y: event.y,
        }
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        Point::new(self.dx, self.dy)
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Linear lookup of the dragged activity.
#[must_use]
pub fn currently_dragged_activity<'a>(
    positioned_activities: &'a [PositionedActivity],
    drag_event_id: Option<&ActivityId>,
) -> Option<&'a PositionedActivity> {
    let id = drag_event_id?;
    positioned_activities
        .iter()
        .find(|activity| activity.id() == id)
}

/// Resolves where the dragged activity would land.
///
/// The series comes from the pointer coordinate across the time axis. The
/// times are shifted in pixel space along the time axis and inverted back,
/// so the shift follows the current (possibly zoomed) scale.
///
/// Returns `None` when nothing is being dragged or the id is unknown.
#[must_use]
pub fn drop_activity(
    band_scale: &BandScale,
    time_scale: &TimeScale,
    positioned_activities: &[PositionedActivity],
    drag_event: Option<&DragEvent>,
    time_orientation: Orientation,
) -> Option<PositionedActivity> {
    let drag_event = drag_event?;
    let dragging = currently_dragged_activity(positioned_activities, Some(&drag_event.id))?;

    let resource_orientation = time_orientation.flip();
    let updated_series = if band_scale.step() > 0.0 {
        inverse_band_scale(band_scale)(drag_event.pointer().along(resource_orientation))
    } else {
        None
    }
    .unwrap_or_else(|| dragging.updated_series.clone());

    let delta = drag_event.offset().along(time_orientation);
    let pixels_per_time_unit = time_scale.pixels_per_time_unit();
    let invertible = pixels_per_time_unit.is_finite() && pixels_per_time_unit != 0.0;
    let shift = |time: f64| {
        // Zero movement must not pick up round-trip error, and a collapsed
        // pixel range has no pixel-to-time mapping.
        if delta == 0.0 || !invertible {
            return time;
        }
        time_scale.pixel_to_time(time_scale.time_to_pixel(time) + delta)
    };

    Some(PositionedActivity {
        activity: dragging.activity.clone(),
        updated_start: shift(dragging.updated_start),
        updated_finish: shift(dragging.updated_finish),
        updated_series,
    })
}

/// Visual translation of the dragged rectangle.
#[must_use]
pub fn drag_event_offset(drag_event: Option<&DragEvent>) -> Option<Point> {
    drag_event.map(DragEvent::offset)
}
