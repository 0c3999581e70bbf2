//! The overlay scrollbar component.
//!
//! [`OverlayScrollbar`] owns both axes' state and wires the drag controllers,
//! the observer bridge and the visibility scheduler together. It runs on the
//! host's single-threaded event loop; the host drives it with four kinds of
//! calls:
//!
//! - [`OverlayScrollbar::handle_event`] for every delivered event,
//! - [`OverlayScrollbar::run_tick`] after each event has been dispatched
//!   (the zero-delay tick that releases the drag write guard),
//! - [`OverlayScrollbar::run_frame`] on each animation frame,
//! - [`OverlayScrollbar::poll_timers`] whenever time has advanced.
//!
//! [`OverlayScrollbar::next_wakeup`] tells the host when the next of these is
//! due.

use std::time::{Duration, Instant};

use crate::axis::{Axis, PerAxis};
use crate::config::ScrollbarConfig;
use crate::drag::{DragController, DragEnv, DragPhase, DragWriteGuard, SelectionLock};
use crate::event::{Event, EventResult, PointerId};
use crate::fade::{Easing, FadeAnimation};
use crate::geometry::{Point, Size};
use crate::host::{Listener, ScrollHost, Subscriptions};
use crate::observer::ObserverBridge;
use crate::render::{AxisRender, RenderSnapshot};
use crate::state::{ScrollbarsState, Transition};
use crate::visibility::{VisibilityScheduler, VisibilityState};

/// Interval between animation frames the engine asks for.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Listeners attached for the whole time the component is mounted.
const MOUNT_LISTENERS: [Listener; 3] =
    [Listener::Scroll, Listener::Resize, Listener::DocumentLeave];

#[derive(Debug)]
pub struct OverlayScrollbar {
    config: ScrollbarConfig,
    state: ScrollbarsState,
    visibility: VisibilityScheduler,
    fade: FadeAnimation,
    drags: PerAxis<DragController>,
    observer: ObserverBridge,
    guard: DragWriteGuard,
    selection: SelectionLock,
    listeners: Subscriptions,
    mounted: bool,
}

impl OverlayScrollbar {
    pub fn new(config: ScrollbarConfig) -> Self {
        Self {
            visibility: VisibilityScheduler::new(config.fade_timeout),
            fade: FadeAnimation::new(config.fade_duration, Easing::EaseOut),
            config,
            state: ScrollbarsState::new(),
            drags: PerAxis::from_fn(DragController::new),
            observer: ObserverBridge::new(),
            guard: DragWriteGuard::default(),
            selection: SelectionLock::default(),
            listeners: Subscriptions::new(),
            mounted: false,
        }
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollbarsState {
        &self.state
    }

    /// Acknowledge a re-render of the current state.
    pub fn clear_dirty(&mut self) {
        self.state.clear_dirty();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn visibility_state(&self) -> VisibilityState {
        self.visibility.state(self.state.pins())
    }

    /// Pending hide deadline of one axis.
    pub fn hide_deadline(&self, axis: Axis) -> Option<Instant> {
        self.visibility.deadline(axis)
    }

    pub fn drag_phase(&self, axis: Axis) -> DragPhase {
        self.drags[axis].phase()
    }

    /// Last thumb position written directly to the host during a drag.
    pub fn last_drag_position(&self, axis: Axis) -> f64 {
        self.drags[axis].last_position()
    }

    pub fn is_write_guard_held(&self) -> bool {
        self.guard.is_held()
    }

    pub fn frame_pending(&self) -> bool {
        self.observer.frame_pending()
    }

    pub fn listeners(&self) -> &Subscriptions {
        &self.listeners
    }

    fn thickness(&self) -> f64 {
        self.config.thickness.px()
    }

    fn drag_parts(&mut self) -> (&mut PerAxis<DragController>, DragEnv<'_>) {
        let thickness = self.config.thickness.px();
        (
            &mut self.drags,
            DragEnv {
                state: &mut self.state,
                visibility: &mut self.visibility,
                selection: &mut self.selection,
                listeners: &mut self.listeners,
                guard: &mut self.guard,
                thickness,
            },
        )
    }

    fn sync_fade(&mut self, now: Instant) {
        self.fade.retarget(self.visibility.is_visible(), now);
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Attach listeners and size both axes from the first layout pass.
    pub fn mount<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.mounted {
            log::debug!("[scrollbar] mount ignored, already mounted");
            return;
        }
        self.mounted = true;
        for listener in MOUNT_LISTENERS {
            self.listeners.attach(host, listener);
        }
        let thickness = self.thickness();
        self.observer.layout_pass(host, &mut self.state, thickness);
        log::debug!(
            "[scrollbar] mounted, thumbs v={} h={}",
            self.state.axis(Axis::Vertical).thumb_size,
            self.state.axis(Axis::Horizontal).thumb_size
        );
    }

    /// Cancel the pending frame and both hide timers, end any drag without
    /// reconciling, restore text selection and detach every listener.
    pub fn unmount<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if !self.mounted {
            return;
        }
        self.mounted = false;

        self.observer.cancel_frame();
        self.visibility.force_hide();
        for axis in Axis::ALL {
            self.drags[axis].abandon();
        }
        self.selection.release_all(host);
        self.listeners.detach_all(host);
        self.guard.release();
        self.state.reset_interaction();
        self.fade = FadeAnimation::new(self.config.fade_duration, Easing::EaseOut);
        log::debug!("[scrollbar] unmounted");
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn handle_event<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: Event,
        now: Instant,
    ) -> EventResult {
        if !self.mounted {
            log::trace!("[scrollbar] {:?} ignored, not mounted", event);
            return EventResult::Ignored;
        }

        let consumed = match event {
            Event::ThumbPointerDown {
                axis,
                pointer_id,
                position,
            } => self.thumb_pointer_down(host, axis, pointer_id, position),
            Event::PointerMove {
                pointer_id,
                position,
            } => self.pointer_move(host, pointer_id, position),
            Event::PointerUp { pointer_id } | Event::PointerCancel { pointer_id } => {
                self.pointer_up(host, pointer_id, now)
            }
            Event::TrackEnter { axis } => self.track_enter(axis),
            Event::TrackLeave { axis } => self.track_leave(axis, now),
            Event::Scroll => self.observer.on_scroll(&self.state),
            Event::Resize => self.resize(host),
            Event::DocumentLeave { position, window } => self.document_leave(position, window),
        };

        self.sync_fade(now);
        EventResult::from_bool(consumed)
    }

    fn thumb_pointer_down<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        axis: Axis,
        pointer_id: PointerId,
        position: Point,
    ) -> bool {
        if !self.state.axis(axis).has_thumb() {
            log::trace!("[scrollbar] {} has no thumb, pointer down ignored", axis);
            return false;
        }
        if !self.visibility.is_visible() {
            log::trace!("[scrollbar] bars hidden, pointer down passes through");
            return false;
        }
        let (drags, env) = self.drag_parts();
        drags[axis].begin(host, env, pointer_id, position)
    }

    fn pointer_move<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        pointer_id: PointerId,
        position: Point,
    ) -> bool {
        let mut moved = false;
        for axis in Axis::ALL {
            if !self.listeners.is_attached(Listener::PointerMove(axis))
                || !self.drags[axis].owns(pointer_id)
            {
                continue;
            }
            let (drags, env) = self.drag_parts();
            moved |= drags[axis].move_to(host, env, position);
        }
        moved
    }

    fn pointer_up<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        pointer_id: PointerId,
        now: Instant,
    ) -> bool {
        let mut ended = false;
        for axis in Axis::ALL {
            if !self.drags[axis].owns(pointer_id) {
                continue;
            }
            let (drags, env) = self.drag_parts();
            ended |= drags[axis].end(host, env, now);
        }
        ended
    }

    fn track_enter(&mut self, axis: Axis) -> bool {
        if !self.state.axis(axis).has_thumb() || !self.visibility.is_visible() {
            return false;
        }
        self.state.apply(Transition::SetHovered { axis, value: true });
        self.visibility.force_show();
        true
    }

    fn track_leave(&mut self, axis: Axis, now: Instant) -> bool {
        if !self.state.axis(axis).is_hovered {
            return false;
        }
        self.state.apply(Transition::SetHovered { axis, value: false });
        self.visibility.schedule_hide(axis, now, self.state.pins());
        true
    }

    fn resize<H: ScrollHost + ?Sized>(&mut self, host: &H) -> bool {
        let thickness = self.thickness();
        self.observer.on_resize(host, &mut self.state, thickness)
    }

    fn document_leave(&mut self, position: Point, window: Size) -> bool {
        self.observer
            .on_document_leave(position, window, &mut self.state, &mut self.visibility)
    }

    // -------------------------------------------------------------------------
    // Event loop hooks
    // -------------------------------------------------------------------------

    /// Zero-delay tick after an event dispatch: releases the drag write guard.
    pub fn run_tick(&mut self) {
        self.guard.release();
    }

    /// Animation frame. Returns true if a coalesced scroll recomputation ran.
    pub fn run_frame<H: ScrollHost + ?Sized>(&mut self, host: &H, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        let thickness = self.thickness();
        let ran = self.observer.run_frame(
            host,
            &mut self.state,
            &mut self.visibility,
            &self.guard,
            thickness,
            now,
        );
        self.sync_fade(now);
        self.fade.prune(now);
        ran
    }

    /// Fire elapsed hide deadlines. Returns true if the bars became hidden.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        let hidden = self.visibility.poll(now, self.state.pins());
        self.sync_fade(now);
        self.fade.prune(now);
        hidden
    }

    /// When the host should next call back: the next frame while a frame or
    /// fade is pending, otherwise the earliest hide deadline.
    pub fn next_wakeup(&self, now: Instant) -> Option<Instant> {
        let mut next = self.visibility.next_deadline();
        if self.observer.frame_pending() || self.fade.is_animating(now) || self.guard.is_held() {
            let frame = now + FRAME_INTERVAL;
            next = Some(next.map_or(frame, |cur| cur.min(frame)));
        }
        next
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn axis_render(&self, axis: Axis) -> AxisRender {
        AxisRender::new(axis, self.state.axis(axis), &self.config)
    }

    pub fn snapshot(&self, now: Instant) -> RenderSnapshot {
        let visible = self.visibility.is_visible();
        RenderSnapshot {
            vertical: self.axis_render(Axis::Vertical),
            horizontal: self.axis_render(Axis::Horizontal),
            visible,
            interactive: visible,
            opacity: self.fade.opacity(now),
        }
    }
}
