use std::sync::Arc;

use serde::Serialize;

use crate::core::{
    ActivityId, AxisLine, AxisLines, EventRectangle, Point, ResourceBand, TimeTick, View,
};
use crate::error::{TimelineError, TimelineResult};

/// Backend-agnostic geometry for one timeline draw pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineScene {
    pub view: View,
    pub axis_lines: AxisLines,
    pub time_ticks: Arc<[TimeTick]>,
    pub resource_bands: Arc<[ResourceBand]>,
    /// Final positions. The dragged activity is already placed at its
    /// tentative drop, so renderers draw these as-is.
    pub event_rectangles: Arc<[EventRectangle]>,
    pub dragged_activity: Option<ActivityId>,
    /// Cumulative pointer movement of the active drag, for cursors and
    /// drag affordances. Never add it to `event_rectangles`.
    pub drag_offset: Option<Point>,
}

impl TimelineScene {
    pub fn validate(&self) -> TimelineResult<()> {
        self.view.validate()?;

        for line in [self.axis_lines.time, self.axis_lines.resource] {
            validate_line(line)?;
        }
        for tick in self.time_ticks.iter() {
            if !tick.time.is_finite() || !tick.position.is_finite() {
                return Err(TimelineError::InvalidData(
                    "time tick must be finite".to_owned(),
                ));
            }
        }
        for band in self.resource_bands.iter() {
            validate_rect(band.x, band.y, band.width, band.height, "resource band")?;
        }
        for rect in self.event_rectangles.iter() {
            validate_rect(rect.x, rect.y, rect.width, rect.height, "event rectangle")?;
        }
        if let Some(offset) = self.drag_offset {
            if !offset.x.is_finite() || !offset.y.is_finite() {
                return Err(TimelineError::InvalidData(
                    "drag offset must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event_rectangles.is_empty() && self.resource_bands.is_empty()
    }
}

fn validate_line(line: AxisLine) -> TimelineResult<()> {
    if !line.x1.is_finite() || !line.y1.is_finite() || !line.x2.is_finite() || !line.y2.is_finite()
    {
        return Err(TimelineError::InvalidData(
            "axis line coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}

fn validate_rect(x: f64, y: f64, width: f64, height: f64, what: &str) -> TimelineResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(TimelineError::InvalidData(format!(
            "{what} position must be finite"
        )));
    }
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(TimelineError::InvalidData(format!(
            "{what} size must be finite and >= 0"
        )));
    }
    Ok(())
}
