use crate::axis::Axis;
use crate::geometry::{Point, Size};

/// Identifies the pointer that started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

/// Events the host delivers to the scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer pressed on an axis' thumb (element scope).
    ThumbPointerDown {
        axis: Axis,
        pointer_id: PointerId,
        position: Point,
    },
    /// Pointer moved anywhere in the document.
    PointerMove {
        pointer_id: PointerId,
        position: Point,
    },
    /// Pointer released anywhere in the document.
    PointerUp { pointer_id: PointerId },
    /// Pointer interaction cancelled by the platform.
    PointerCancel { pointer_id: PointerId },
    /// Pointer entered an axis' track or thumb.
    TrackEnter { axis: Axis },
    /// Pointer left an axis' track or thumb.
    TrackLeave { axis: Axis },
    /// Content scrolled (wheel, keyboard, touch or programmatic).
    Scroll,
    /// Viewport or content changed size.
    Resize,
    /// Mouse left the document; `window` is the window's inner size.
    DocumentLeave { position: Point, window: Size },
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event changed scrollbar state or scheduling.
    Consumed,
    /// The event did not apply.
    Ignored,
}

impl EventResult {
    pub fn from_bool(consumed: bool) -> Self {
        if consumed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
