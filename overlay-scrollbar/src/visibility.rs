//! Show/hide arbitration for both bars.
//!
//! The bars share one visibility flag and fade as a unit. Each axis owns its
//! own hide deadline; when a deadline passes, the scheduler re-reads the live
//! hover/drag flags of *both* axes (passed in by the caller at poll time) and
//! hides only if nothing pins the bars and no other deadline is still
//! pending.

use std::time::{Duration, Instant};

use crate::axis::{Axis, PerAxis};

/// Observable visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Hidden,
    /// Shown, with a hide deadline counting down.
    VisibleWithTimer,
    /// Shown and held open by hover or drag.
    VisiblePinned,
}

#[derive(Debug, Clone)]
pub struct VisibilityScheduler {
    fade_timeout: Duration,
    visible: bool,
    deadlines: PerAxis<Option<Instant>>,
}

impl VisibilityScheduler {
    pub fn new(fade_timeout: Duration) -> Self {
        Self {
            fade_timeout,
            visible: false,
            deadlines: PerAxis::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self, pins: PerAxis<bool>) -> VisibilityState {
        if !self.visible {
            VisibilityState::Hidden
        } else if pins.any(|pinned| *pinned) {
            VisibilityState::VisiblePinned
        } else {
            VisibilityState::VisibleWithTimer
        }
    }

    /// Pending hide deadline of one axis.
    pub fn deadline(&self, axis: Axis) -> Option<Instant> {
        self.deadlines[axis]
    }

    /// Earliest pending hide deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().filter_map(|(_, d)| *d).min()
    }

    /// Show immediately and cancel every pending hide.
    /// Returns true if the bars were hidden before.
    pub fn force_show(&mut self) -> bool {
        self.cancel_all();
        let was_hidden = !self.visible;
        self.visible = true;
        was_hidden
    }

    /// Arm this axis' hide deadline unless something pins the bars.
    pub fn schedule_hide(&mut self, axis: Axis, now: Instant, pins: PerAxis<bool>) {
        if pins.any(|pinned| *pinned) {
            log::trace!("[visibility] {} hide not armed, bars pinned", axis);
            self.deadlines[axis] = None;
            return;
        }
        self.deadlines[axis] = Some(now + self.fade_timeout);
    }

    /// Show, then start the countdown on both axes (used after a scroll tick).
    /// Returns true if the bars were hidden before.
    pub fn show_scrollbar(&mut self, now: Instant, pins: PerAxis<bool>) -> bool {
        let was_hidden = self.force_show();
        for axis in Axis::ALL {
            self.schedule_hide(axis, now, pins);
        }
        was_hidden
    }

    /// Hide immediately, ignoring pending deadlines.
    /// Returns true if the bars were visible before.
    pub fn force_hide(&mut self) -> bool {
        self.cancel_all();
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }

    /// Fire every deadline that has passed.
    ///
    /// `pins` must be the live flags at `now`. Returns true if the bars
    /// became hidden.
    pub fn poll(&mut self, now: Instant, pins: PerAxis<bool>) -> bool {
        let mut fired = false;
        for axis in Axis::ALL {
            if self.deadlines[axis].is_some_and(|deadline| deadline <= now) {
                self.deadlines[axis] = None;
                fired = true;
            }
        }

        if !fired || !self.visible {
            return false;
        }
        if pins.any(|pinned| *pinned) {
            log::trace!("[visibility] hide deadline passed while pinned, staying visible");
            return false;
        }
        if self.next_deadline().is_some() {
            return false;
        }

        log::debug!("[visibility] fade timeout elapsed, hiding");
        self.visible = false;
        true
    }

    pub fn cancel_all(&mut self) {
        self.deadlines = PerAxis::default();
    }
}
