pub mod axis;
pub mod config;
pub mod drag;
pub mod event;
pub mod fade;
pub mod geometry;
pub mod host;
pub mod metrics;
pub mod observer;
pub mod render;
pub mod scrollbar;
pub mod state;
pub mod visibility;

pub use axis::{Axis, AxisSpec, PerAxis};
pub use config::{ConfigError, ScrollbarConfig, Thickness};
pub use drag::{DragController, DragPhase, DragWriteGuard, SelectionLock};
pub use event::{Event, EventResult, PointerId};
pub use fade::{Easing, FadeAnimation};
pub use geometry::{ContentMetrics, Point, ScrollOffset, Size};
pub use host::{Listener, ScrollHost, Subscriptions};
pub use metrics::{
    compute_scroll_from_drag, compute_thumb_metrics, max_scroll, scroll_for_thumb_position,
    thumb_position_for_scroll, track_size, ThumbMetrics, MIN_THUMB_SIZE, TRACK_PADDING,
};
pub use observer::ObserverBridge;
pub use render::{AxisRender, RenderSnapshot};
pub use scrollbar::{OverlayScrollbar, FRAME_INTERVAL};
pub use state::{AxisState, DragAnchor, ScrollbarsState, Transition};
pub use visibility::{VisibilityScheduler, VisibilityState};
