use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::core::{
    Activity, AxisOrientations, DragEvent, configure_band_scale, configure_time_scale,
    drop_activity, position_activities, rescale_time,
};

use super::{StoreConfig, TimelineAction, TimelineState};

/// Applies one action to a snapshot, producing the next snapshot.
///
/// Pure: the input snapshot is never modified.
#[must_use]
pub fn reduce(state: &TimelineState, action: &TimelineAction, config: &StoreConfig) -> TimelineState {
    match action {
        TimelineAction::DataChanged(data) => {
            debug!(count = data.len(), "data changed");
            with_configured_scales(
                TimelineState {
                    data: Arc::clone(data),
                    ..state.clone()
                },
                config,
            )
        }
        TimelineAction::ViewChanged(view) => {
            debug!(width = view.width, height = view.height, "view changed");
            with_configured_scales(
                TimelineState {
                    view: *view,
                    ..state.clone()
                },
                config,
            )
        }
        TimelineAction::OrientationChanged(time_orientation) => {
            debug!(?time_orientation, "orientation changed");
            with_configured_scales(
                TimelineState {
                    axis_orientations: AxisOrientations::from_time(*time_orientation),
                    ..state.clone()
                },
                config,
            )
        }
        TimelineAction::Zoomed(transform) => {
            trace!(k = transform.k, x = transform.x, y = transform.y, "zoomed");
            TimelineState {
                time_scale: rescale_time(
                    &state.data,
                    state.view,
                    state.axis_orientations.time(),
                    *transform,
                ),
                ..state.clone()
            }
        }
        TimelineAction::DragStarted { id, event } | TimelineAction::Dragging { id, event } => {
            let drag_event = DragEvent::merge(state.drag_event.as_ref(), id, *event);
            trace!(id = %drag_event.id, dx = drag_event.dx, dy = drag_event.dy, "drag moved");
            TimelineState {
                drag_event: Some(drag_event),
                ..state.clone()
            }
        }
        TimelineAction::DragEnded => drop_on_drag_end(state, config),
    }
}

/// Rebuilds both scales from data, view and orientations, dropping any zoom.
fn with_configured_scales(state: TimelineState, config: &StoreConfig) -> TimelineState {
    let time_scale = configure_time_scale(&state.data, state.view, state.axis_orientations.time());
    let band_scale = configure_band_scale(
        &state.data,
        state.view,
        state.axis_orientations.resource(),
        config.band_padding,
    );
    TimelineState {
        time_scale,
        band_scale,
        ..state
    }
}

/// Commits the resolved drop into the data and returns to idle.
///
/// Scales are rebuilt for the edited data; the current zoom is kept so the
/// view does not jump on release.
fn drop_on_drag_end(state: &TimelineState, config: &StoreConfig) -> TimelineState {
    let positioned = position_activities(&state.data);
    let dropped = drop_activity(
        &state.band_scale,
        &state.time_scale,
        &positioned,
        state.drag_event.as_ref(),
        state.axis_orientations.time(),
    );

    let Some(dropped) = dropped else {
        if let Some(drag_event) = &state.drag_event {
            warn!(id = %drag_event.id, "drag ended without a matching activity");
        }
        return TimelineState {
            drag_event: None,
            ..state.clone()
        };
    };

    debug!(
        id = %dropped.id(),
        start = dropped.updated_start,
        finish = dropped.updated_finish,
        series = %dropped.updated_series,
        "activity dropped"
    );
    let committed = dropped.commit();
    let data: Arc<[Activity]> = state
        .data
        .iter()
        .map(|activity| {
            if activity.id == committed.id {
                committed.clone()
            } else {
                activity.clone()
            }
        })
        .collect();

    let time_orientation = state.axis_orientations.time();
    TimelineState {
        time_scale: rescale_time(&data, state.view, time_orientation, state.time_scale.transform()),
        band_scale: configure_band_scale(
            &data,
            state.view,
            state.axis_orientations.resource(),
            config.band_padding,
        ),
        data,
        drag_event: None,
        ..state.clone()
    }
}
