use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Pixel size of the timeline viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub width: f64,
    pub height: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

impl View {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.is_valid() {
            return Err(TimelineError::InvalidView {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Pixel extent along an axis running in `orientation`.
    #[must_use]
    pub fn extent(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

impl From<[f64; 2]> for View {
    fn from([width, height]: [f64; 2]) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Orientations of the time and resource axes.
///
/// Only constructible from the time orientation, so the two axes are always
/// perpendicular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisOrientations {
    time: Orientation,
    resource: Orientation,
}

impl Default for AxisOrientations {
    fn default() -> Self {
        Self::from_time(Orientation::default())
    }
}

impl AxisOrientations {
    #[must_use]
    pub fn from_time(time: Orientation) -> Self {
        Self {
            time,
            resource: time.flip(),
        }
    }

    #[must_use]
    pub fn time(self) -> Orientation {
        self.time
    }

    #[must_use]
    pub fn resource(self) -> Orientation {
        self.resource
    }
}

/// Pixel-space offset or position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component along an axis running in `orientation`.
    #[must_use]
    pub fn along(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }
}
