pub mod activity;
pub mod band_scale;
pub mod drag;
pub mod geometry;
pub mod primitives;
pub mod scale;
pub mod scene;
pub mod time_scale;
pub mod types;

pub use activity::{
    Activity, ActivityId, PositionedActivity, ResourceKey, position_activities,
    validate_activities,
};
pub use band_scale::{
    BandScale, DEFAULT_BAND_PADDING, configure_band_scale, inverse_band_scale, resource_domain,
};
pub use drag::{
    DragEvent, PointerEvent, currently_dragged_activity, drag_event_offset, drop_activity,
};
pub use geometry::{
    AxisLine, AxisLines, EventRectangle, RectSizer, ResourceBand, TimeTick, event_rectangle,
    rect_breadth_in_time_axis, rect_height, rect_width, resource_bands,
};
pub use primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
pub use scale::LinearScale;
pub use scene::TimelineScene;
pub use time_scale::{
    EMPTY_TIME_DOMAIN, TimeScale, ZoomTransform, configure_time_scale, nice_ticks, rescale_time,
    time_domain,
};
pub use types::{AxisOrientations, Orientation, Point, View};
