//! Host gesture vocabulary.
//!
//! Hosts capture pointer and wheel input themselves and report drag samples
//! as [`PointerEvent`]s and zoom/pan as a [`ZoomTransform`]. This module
//! maps those reports onto store actions.

use serde::{Deserialize, Serialize};

pub use crate::core::{DragEvent, PointerEvent, ZoomTransform};
use crate::core::ActivityId;
use crate::store::TimelineAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

impl InteractionMode {
    #[must_use]
    pub fn from_drag_event(drag_event: Option<&DragEvent>) -> Self {
        match drag_event {
            Some(_) => Self::Dragging,
            None => Self::Idle,
        }
    }
}

/// One report of the host's drag gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DragGesture {
    Start { id: ActivityId, event: PointerEvent },
    Move { id: ActivityId, event: PointerEvent },
    End,
}

impl From<DragGesture> for TimelineAction {
    fn from(gesture: DragGesture) -> Self {
        match gesture {
            DragGesture::Start { id, event } => Self::DragStarted { id, event },
            DragGesture::Move { id, event } => Self::Dragging { id, event },
            DragGesture::End => Self::DragEnded,
        }
    }
}

impl From<ZoomTransform> for TimelineAction {
    fn from(transform: ZoomTransform) -> Self {
        Self::Zoomed(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::{DragGesture, InteractionMode, PointerEvent};
    use crate::core::{ActivityId, DragEvent};
    use crate::store::TimelineAction;

    #[test]
    fn drag_gestures_map_one_to_one() {
        let id = ActivityId::from("a");
        let event = PointerEvent::at(3.0, 4.0);
        assert_eq!(
            TimelineAction::from(DragGesture::Start {
                id: id.clone(),
                event
            }),
            TimelineAction::DragStarted {
                id: id.clone(),
                event
            }
        );
        assert_eq!(
            TimelineAction::from(DragGesture::End),
            TimelineAction::DragEnded
        );
    }

    #[test]
    fn mode_follows_drag_event_presence() {
        let drag = DragEvent::merge(None, &ActivityId::from("a"), PointerEvent::at(0.0, 0.0));
        assert_eq!(InteractionMode::from_drag_event(None), InteractionMode::Idle);
        assert_eq!(
            InteractionMode::from_drag_event(Some(&drag)),
            InteractionMode::Dragging
        );
    }
}
