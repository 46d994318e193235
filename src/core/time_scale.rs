use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Activity, LinearScale, Orientation, View};

/// Domain used when there is no data to fit.
pub const EMPTY_TIME_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Zoom/pan transform reported by the host gesture: `px' = translate + k * px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    #[must_use]
    pub fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    /// Translation component along an axis running in `orientation`.
    #[must_use]
    pub fn translate_along(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    #[must_use]
    pub fn apply_along(self, pixel: f64, orientation: Orientation) -> f64 {
        self.translate_along(orientation) + self.k * pixel
    }
}

/// Invertible time to pixel mapping for one axis orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
    orientation: Orientation,
    transform: ZoomTransform,
}

impl Default for TimeScale {
    fn default() -> Self {
        configure_time_scale(&[], View::default(), Orientation::default())
    }
}

impl TimeScale {
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn transform(self) -> ZoomTransform {
        self.transform
    }

    #[must_use]
    pub fn time_to_pixel(self, time: f64) -> f64 {
        self.linear.domain_to_pixel(time)
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.linear.pixel_to_domain(pixel)
    }

    #[must_use]
    pub fn pixels_per_time_unit(self) -> f64 {
        self.linear.pixels_per_unit()
    }

    /// Time window visible in `[0, extent]` pixels after zoom/pan.
    #[must_use]
    pub fn visible_window(self, extent: f64) -> (f64, f64) {
        (self.pixel_to_time(0.0), self.pixel_to_time(extent))
    }

    /// Nice ticks over the whole domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (start, end) = self.domain();
        nice_ticks(start, end, count)
    }

    /// Nice ticks over the window visible in `[0, extent]` pixels.
    #[must_use]
    pub fn visible_ticks(self, extent: f64, count: usize) -> Vec<f64> {
        let (start, end) = self.visible_window(extent);
        nice_ticks(start, end, count)
    }
}

/// Returns "nice" tick values (1, 2 or 5 times a power of ten apart)
/// inside `[start, end]`, aiming for roughly `count` ticks.
#[must_use]
pub fn nice_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }

    let (low, high) = (start.min(end), start.max(end));
    let step = nice_tick_step(high - low, count);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }

    let first = (low / step).ceil() as i64;
    let last = (high / step).floor() as i64;
    (first..=last).map(|index| index as f64 * step).collect()
}

fn nice_tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Time extent `[min start, max finish]` of the data set.
#[must_use]
pub fn time_domain(data: &[Activity]) -> (f64, f64) {
    let min = data.iter().map(|activity| OrderedFloat(activity.start)).min();
    let max = data.iter().map(|activity| OrderedFloat(activity.finish)).max();
    match (min, max) {
        (Some(min), Some(max)) => (min.0, max.0),
        _ => EMPTY_TIME_DOMAIN,
    }
}

/// Builds the un-zoomed time scale for the current data and view.
#[must_use]
pub fn configure_time_scale(data: &[Activity], view: View, orientation: Orientation) -> TimeScale {
    TimeScale {
        linear: LinearScale::new(time_domain(data), (0.0, view.extent(orientation))),
        orientation,
        transform: ZoomTransform::IDENTITY,
    }
}

/// Builds the time scale with `transform` applied on top of the base scale.
///
/// The domain stays the data extent; the range is mapped through the
/// transform component of the time axis.
#[must_use]
pub fn rescale_time(
    data: &[Activity],
    view: View,
    orientation: Orientation,
    transform: ZoomTransform,
) -> TimeScale {
    let base = configure_time_scale(data, view, orientation);
    let (range_start, range_end) = base.range();
    TimeScale {
        linear: base.linear.with_range((
            transform.apply_along(range_start, orientation),
            transform.apply_along(range_end, orientation),
        )),
        orientation,
        transform,
    }
}
