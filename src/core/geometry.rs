use serde::Serialize;

use crate::core::{
    AxisOrientations, BandScale, Orientation, PositionedActivity, ResourceKey, TimeScale, View,
};

/// Extent of an activity rectangle along the time axis.
///
/// Non-negative for activities with `finish >= start`.
#[must_use]
pub fn rect_breadth_in_time_axis(time_scale: &TimeScale, activity: &PositionedActivity) -> f64 {
    time_scale.time_to_pixel(activity.updated_finish) - time_scale.time_to_pixel(activity.updated_start)
}

#[must_use]
pub fn rect_width(
    time_orientation: Orientation,
    breadth_in_time_axis: f64,
    breadth_in_resource_axis: f64,
) -> f64 {
    match time_orientation {
        Orientation::Horizontal => breadth_in_time_axis,
        Orientation::Vertical => breadth_in_resource_axis,
    }
}

#[must_use]
pub fn rect_height(
    time_orientation: Orientation,
    breadth_in_time_axis: f64,
    breadth_in_resource_axis: f64,
) -> f64 {
    match time_orientation {
        Orientation::Horizontal => breadth_in_resource_axis,
        Orientation::Vertical => breadth_in_time_axis,
    }
}

/// Everything needed to size activity rectangles for one state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectSizer {
    pub time_orientation: Orientation,
    pub time_scale: TimeScale,
    pub breadth_in_resource_axis: f64,
}

impl RectSizer {
    #[must_use]
    pub fn new(time_orientation: Orientation, time_scale: TimeScale, band_scale: &BandScale) -> Self {
        Self {
            time_orientation,
            time_scale,
            breadth_in_resource_axis: band_scale.bandwidth(),
        }
    }

    #[must_use]
    pub fn breadth_in_time_axis(&self, activity: &PositionedActivity) -> f64 {
        rect_breadth_in_time_axis(&self.time_scale, activity)
    }

    #[must_use]
    pub fn width(&self, activity: &PositionedActivity) -> f64 {
        rect_width(
            self.time_orientation,
            self.breadth_in_time_axis(activity),
            self.breadth_in_resource_axis,
        )
    }

    #[must_use]
    pub fn height(&self, activity: &PositionedActivity) -> f64 {
        rect_height(
            self.time_orientation,
            self.breadth_in_time_axis(activity),
            self.breadth_in_resource_axis,
        )
    }
}

/// Pixel rectangle of one activity, in view coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRectangle {
    pub activity: PositionedActivity,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Places `activity` at its updated time and series.
///
/// Returns `None` when the updated series is not in the band domain.
#[must_use]
pub fn event_rectangle(
    sizer: &RectSizer,
    band_scale: &BandScale,
    activity: &PositionedActivity,
) -> Option<EventRectangle> {
    let time_position = sizer.time_scale.time_to_pixel(activity.updated_start);
    let resource_position = band_scale.band_start(&activity.updated_series)?;
    let (x, y) = match sizer.time_orientation {
        Orientation::Horizontal => (time_position, resource_position),
        Orientation::Vertical => (resource_position, time_position),
    };
    Some(EventRectangle {
        activity: activity.clone(),
        x,
        y,
        width: sizer.width(activity),
        height: sizer.height(activity),
    })
}

/// Background rectangle of one resource lane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceBand {
    pub key: ResourceKey,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lanes spanning the full time axis extent, one per band.
#[must_use]
pub fn resource_bands(band_scale: &BandScale, time_extent: f64) -> Vec<ResourceBand> {
    let bandwidth = band_scale.bandwidth();
    band_scale
        .bands()
        .map(|(key, start)| match band_scale.orientation() {
            Orientation::Vertical => ResourceBand {
                key: key.clone(),
                x: 0.0,
                y: start,
                width: time_extent,
                height: bandwidth,
            },
            Orientation::Horizontal => ResourceBand {
                key: key.clone(),
                x: start,
                y: 0.0,
                width: bandwidth,
                height: time_extent,
            },
        })
        .collect()
}

/// Axis line segment in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl AxisLine {
    /// Line from the origin running `length` pixels in `orientation`.
    #[must_use]
    pub fn from_origin(orientation: Orientation, length: f64) -> Self {
        match orientation {
            Orientation::Horizontal => Self {
                x1: 0.0,
                y1: 0.0,
                x2: length,
                y2: 0.0,
            },
            Orientation::Vertical => Self {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: length,
            },
        }
    }
}

/// The two axis lines of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLines {
    pub time: AxisLine,
    pub resource: AxisLine,
}

impl AxisLines {
    /// Both axes start at the view origin and span the view along their
    /// orientation.
    #[must_use]
    pub fn for_view(view: View, orientations: AxisOrientations) -> Self {
        Self {
            time: AxisLine::from_origin(orientations.time(), view.extent(orientations.time())),
            resource: AxisLine::from_origin(
                orientations.resource(),
                view.extent(orientations.resource()),
            ),
        }
    }
}

/// Tick mark on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeTick {
    pub time: f64,
    pub position: f64,
}
