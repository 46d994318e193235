use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{Activity, ActivityId, Orientation, PointerEvent, View, ZoomTransform};

/// The closed set of state mutations.
///
/// JSON form is adjacently tagged: `{"type": "view_changed", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum TimelineAction {
    DataChanged(Arc<[Activity]>),
    ViewChanged(View),
    OrientationChanged(Orientation),
    Zoomed(ZoomTransform),
    DragStarted { id: ActivityId, event: PointerEvent },
    Dragging { id: ActivityId, event: PointerEvent },
    DragEnded,
}

impl TimelineAction {
    /// Wire names of every variant, in declaration order.
    pub const KINDS: [&'static str; 7] = [
        "data_changed",
        "view_changed",
        "orientation_changed",
        "zoomed",
        "drag_started",
        "dragging",
        "drag_ended",
    ];

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DataChanged(_) => Self::KINDS[0],
            Self::ViewChanged(_) => Self::KINDS[1],
            Self::OrientationChanged(_) => Self::KINDS[2],
            Self::Zoomed(_) => Self::KINDS[3],
            Self::DragStarted { .. } => Self::KINDS[4],
            Self::Dragging { .. } => Self::KINDS[5],
            Self::DragEnded => Self::KINDS[6],
        }
    }

    #[must_use]
    pub fn is_known_kind(kind: &str) -> bool {
        Self::KINDS.contains(&kind)
    }

    /// `true` for the continuous gesture actions (zoom and drag).
    #[must_use]
    pub fn is_high_frequency(&self) -> bool {
        matches!(
            self,
            Self::Zoomed(_) | Self::DragStarted { .. } | Self::Dragging { .. }
        )
    }
}

impl From<Vec<Activity>> for TimelineAction {
    fn from(data: Vec<Activity>) -> Self {
        Self::DataChanged(Arc::from(data))
    }
}
