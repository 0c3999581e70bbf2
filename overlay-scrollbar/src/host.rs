//! The presentation layer the engine drives.
//!
//! A host owns the real viewport and content elements, the rendered thumbs
//! and document-level event delivery. Readouts return `None` while the
//! corresponding element is not mounted.

use std::collections::HashSet;

use crate::axis::Axis;
use crate::geometry::{ContentMetrics, ScrollOffset, Size};

/// A document- or element-level listener the engine asks the host to
/// deliver events for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Content scroll events.
    Scroll,
    /// Viewport/content size-change notifications.
    Resize,
    /// Document mouse-leave.
    DocumentLeave,
    /// Document pointer move, for an active drag on `axis`.
    PointerMove(Axis),
    /// Document pointer up, for an active drag on `axis`.
    PointerUp(Axis),
    /// Document pointer cancel, for an active drag on `axis`.
    PointerCancel(Axis),
}

impl Listener {
    /// The global listeners a drag session on `axis` needs.
    pub fn drag_session(axis: Axis) -> [Listener; 3] {
        [
            Listener::PointerMove(axis),
            Listener::PointerUp(axis),
            Listener::PointerCancel(axis),
        ]
    }
}

pub trait ScrollHost {
    /// Visible size of the viewport (container) element.
    fn viewport_size(&self) -> Option<Size>;

    /// Scroll and client extents of the content element.
    fn content_metrics(&self) -> Option<ContentMetrics>;

    /// Current content scroll offset.
    fn scroll_offset(&self) -> Option<ScrollOffset>;

    /// Write the content scroll offset along `axis`.
    fn set_scroll_offset(&mut self, axis: Axis, value: f64);

    /// Move the rendered thumb directly, outside the declarative state.
    fn write_thumb_position(&mut self, axis: Axis, position: f64);

    /// Allow or suppress text selection on the document.
    fn set_text_selection(&mut self, enabled: bool);

    /// Start delivering events for `listener`.
    fn attach(&mut self, listener: Listener);

    /// Stop delivering events for `listener`.
    fn detach(&mut self, listener: Listener);
}

/// Listeners currently attached on the host, so they can all be detached
/// on unmount.
#[derive(Debug, Default)]
pub struct Subscriptions {
    active: HashSet<Listener>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach<H: ScrollHost + ?Sized>(&mut self, host: &mut H, listener: Listener) {
        if self.active.insert(listener) {
            host.attach(listener);
        }
    }

    pub fn detach<H: ScrollHost + ?Sized>(&mut self, host: &mut H, listener: Listener) {
        if self.active.remove(&listener) {
            host.detach(listener);
        }
    }

    pub fn detach_all<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        for listener in self.active.drain() {
            host.detach(listener);
        }
    }

    pub fn is_attached(&self, listener: Listener) -> bool {
        self.active.contains(&listener)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
