//! Pointer-drag scrubbing on a thumb.
//!
//! During a drag the thumb is written straight to the host on every pointer
//! move and the declarative [`ScrollbarsState`] is left alone. The last
//! written position is kept on the controller and reconciled into the state
//! when the drag ends.

use std::time::Instant;

use crate::axis::Axis;
use crate::event::PointerId;
use crate::geometry::Point;
use crate::host::{Listener, ScrollHost, Subscriptions};
use crate::metrics::{compute_scroll_from_drag, max_scroll, thumb_position_for_scroll, track_size};
use crate::state::{DragAnchor, ScrollbarsState, Transition};
use crate::visibility::VisibilityScheduler;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Set while a drag write is in flight; released at the next tick.
///
/// Observer callbacks that run while the guard is held are no-ops, so they
/// cannot overwrite the position the drag just wrote.
#[derive(Debug, Default)]
pub struct DragWriteGuard {
    held: bool,
}

impl DragWriteGuard {
    pub fn hold(&mut self) {
        self.held = true;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Reference-counted text-selection suppression.
///
/// Both axes may drag at once; selection comes back only when the last
/// drag ends.
#[derive(Debug, Default)]
pub struct SelectionLock {
    holders: u32,
}

impl SelectionLock {
    pub fn acquire<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.holders == 0 {
            host.set_text_selection(false);
        }
        self.holders += 1;
    }

    pub fn release<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.holders == 0 {
            return;
        }
        self.holders -= 1;
        if self.holders == 0 {
            host.set_text_selection(true);
        }
    }

    pub fn release_all<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.holders > 0 {
            self.holders = 0;
            host.set_text_selection(true);
        }
    }

    pub fn is_held(&self) -> bool {
        self.holders > 0
    }
}

/// The parts of the component a drag touches besides the host.
pub struct DragEnv<'a> {
    pub state: &'a mut ScrollbarsState,
    pub visibility: &'a mut VisibilityScheduler,
    pub selection: &'a mut SelectionLock,
    pub listeners: &'a mut Subscriptions,
    pub guard: &'a mut DragWriteGuard,
    pub thickness: f64,
}

/// Drag state machine for one axis: `Idle -> Dragging -> Idle`.
#[derive(Debug)]
pub struct DragController {
    axis: Axis,
    phase: DragPhase,
    /// Pointer that owns the session.
    pointer_id: Option<PointerId>,
    /// Last thumb position written directly to the host.
    last_position: f64,
}

impl DragController {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            phase: DragPhase::Idle,
            pointer_id: None,
            last_position: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Returns true if `pointer_id` drives the active session.
    pub fn owns(&self, pointer_id: PointerId) -> bool {
        self.is_dragging() && self.pointer_id == Some(pointer_id)
    }

    /// The last directly written thumb position.
    pub fn last_position(&self) -> f64 {
        self.last_position
    }

    /// Pointer down on the thumb. Returns true if a drag began.
    pub fn begin<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        env: DragEnv<'_>,
        pointer_id: PointerId,
        pointer: Point,
    ) -> bool {
        if self.is_dragging() {
            log::trace!("[drag] {} already dragging", self.axis);
            return false;
        }
        if host.viewport_size().is_none() || host.content_metrics().is_none() {
            log::debug!("[drag] {} pointer down ignored, host not mounted", self.axis);
            return false;
        }

        let spec = self.axis.spec();
        let start_position = (spec.coordinate)(pointer);
        let start_thumb_position = env.state.axis(self.axis).thumb_position;

        env.state.apply(Transition::SetDragging {
            axis: self.axis,
            value: true,
            anchor: Some(DragAnchor {
                start_position,
                start_thumb_position,
            }),
        });
        self.phase = DragPhase::Dragging;
        self.pointer_id = Some(pointer_id);
        self.last_position = start_thumb_position;

        env.visibility.force_show();
        env.selection.acquire(host);
        for listener in Listener::drag_session(self.axis) {
            env.listeners.attach(host, listener);
        }

        log::debug!(
            "[drag] {} begin at {} (thumb {})",
            self.axis,
            start_position,
            start_thumb_position
        );
        true
    }

    /// Global pointer move. Returns true if the content was scrolled.
    pub fn move_to<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        env: DragEnv<'_>,
        pointer: Point,
    ) -> bool {
        if !self.is_dragging() {
            return false;
        }
        // Geometry is read live: the container may have resized mid-drag.
        let (Some(viewport), Some(content)) = (host.viewport_size(), host.content_metrics()) else {
            log::debug!("[drag] {} move ignored, host not mounted", self.axis);
            return false;
        };

        let spec = self.axis.spec();
        let track = track_size((spec.extent)(viewport), env.thickness);
        let max = max_scroll(
            (spec.extent)(content.scroll_size),
            (spec.extent)(content.client_size),
        );

        let axis_state = *env.state.axis(self.axis);
        let delta = (spec.coordinate)(pointer) - axis_state.start_position;
        let scroll = compute_scroll_from_drag(
            delta,
            axis_state.start_thumb_position,
            track,
            axis_state.thumb_size,
            max,
        );
        let thumb_position = thumb_position_for_scroll(scroll, track, axis_state.thumb_size, max);

        env.guard.hold();
        host.set_scroll_offset(self.axis, scroll);
        host.write_thumb_position(self.axis, thumb_position);
        self.last_position = thumb_position;

        log::trace!(
            "[drag] {} delta {} -> scroll {} thumb {}",
            self.axis,
            delta,
            scroll,
            thumb_position
        );
        true
    }

    /// Pointer up or cancel. Returns true if a drag ended.
    pub fn end<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        env: DragEnv<'_>,
        now: Instant,
    ) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.phase = DragPhase::Idle;
        self.pointer_id = None;

        env.state.apply(Transition::SetDragging {
            axis: self.axis,
            value: false,
            anchor: None,
        });
        env.state.apply(Transition::SetThumbPosition {
            axis: self.axis,
            value: self.last_position,
        });

        env.selection.release(host);
        for listener in Listener::drag_session(self.axis) {
            env.listeners.detach(host, listener);
        }
        env.visibility.schedule_hide(self.axis, now, env.state.pins());

        log::debug!("[drag] {} end at thumb {}", self.axis, self.last_position);
        true
    }

    /// Drop the session without reconciling (unmount).
    pub fn abandon(&mut self) {
        self.phase = DragPhase::Idle;
        self.pointer_id = None;
    }
}
