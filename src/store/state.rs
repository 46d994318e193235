use std::sync::Arc;

use serde::Serialize;

use crate::core::{
    Activity, AxisOrientations, BandScale, DragEvent, Orientation, TimeScale, View,
    configure_band_scale, configure_time_scale,
};

/// One immutable snapshot of the timeline.
///
/// `time_scale` and `band_scale` are derived from `data`, `view` and
/// `axis_orientations`; the time scale additionally carries the last zoom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineState {
    pub(crate) data: Arc<[Activity]>,
    pub(crate) view: View,
    pub(crate) axis_orientations: AxisOrientations,
    pub(crate) time_scale: TimeScale,
    pub(crate) band_scale: BandScale,
    pub(crate) drag_event: Option<DragEvent>,
}

impl TimelineState {
    /// Empty snapshot: no data, zero-sized view, horizontal time axis.
    #[must_use]
    pub fn initial(band_padding: f64) -> Self {
        let data: Arc<[Activity]> = Arc::from(Vec::new());
        let view = View::default();
        let axis_orientations = AxisOrientations::from_time(Orientation::Horizontal);
        Self {
            time_scale: configure_time_scale(&data, view, axis_orientations.time()),
            band_scale: configure_band_scale(
                &data,
                view,
                axis_orientations.resource(),
                band_padding,
            ),
            data,
            view,
            axis_orientations,
            drag_event: None,
        }
    }

    #[must_use]
    pub fn data(&self) -> &Arc<[Activity]> {
        &self.data
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn axis_orientations(&self) -> AxisOrientations {
        self.axis_orientations
    }

    #[must_use]
    pub fn time_orientation(&self) -> Orientation {
        self.axis_orientations.time()
    }

    #[must_use]
    pub fn resource_orientation(&self) -> Orientation {
        self.axis_orientations.resource()
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn band_scale(&self) -> &BandScale {
        &self.band_scale
    }

    #[must_use]
    pub fn drag_event(&self) -> Option<&DragEvent> {
        self.drag_event.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_event.is_some()
    }
}
