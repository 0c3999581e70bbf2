//! Keeps thumb geometry in step with the content's scroll offset and size.

use std::time::Instant;

use crate::axis::Axis;
use crate::drag::DragWriteGuard;
use crate::geometry::{Point, Size};
use crate::host::ScrollHost;
use crate::metrics::{compute_thumb_metrics, track_size, ThumbMetrics};
use crate::state::{ScrollbarsState, Transition};
use crate::visibility::VisibilityScheduler;

/// Measure one axis from live host geometry.
///
/// Returns the thumb metrics and the track length, or `None` while the host
/// is not mounted.
pub fn measure_axis<H: ScrollHost + ?Sized>(
    host: &H,
    axis: Axis,
    thickness: f64,
) -> Option<(ThumbMetrics, f64)> {
    let viewport = host.viewport_size()?;
    let content = host.content_metrics()?;
    let offset = host.scroll_offset()?;

    let spec = axis.spec();
    let viewport_extent = (spec.extent)(viewport);
    let metrics = compute_thumb_metrics(
        viewport_extent,
        thickness,
        (spec.extent)(content.scroll_size),
        (spec.extent)(content.client_size),
        (spec.scroll)(offset),
    );
    Some((metrics, track_size(viewport_extent, thickness).max(0.0)))
}

/// Scroll/resize observer.
///
/// Scroll events are coalesced: at most one frame callback is pending, and a
/// new scroll event replaces it.
#[derive(Debug, Default)]
pub struct ObserverBridge {
    frame_pending: bool,
}

impl ObserverBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn cancel_frame(&mut self) {
        self.frame_pending = false;
    }

    /// First layout pass and every size-change notification: thumb sizes for
    /// both axes, then positions for every axis that is not being dragged.
    pub fn layout_pass<H: ScrollHost + ?Sized>(
        &mut self,
        host: &H,
        state: &mut ScrollbarsState,
        thickness: f64,
    ) -> bool {
        let sized = self.recompute_sizes(host, state, thickness);
        let placed = self.recompute_positions(host, state, thickness);
        sized || placed
    }

    /// Size-change notification for the viewport or the content.
    pub fn on_resize<H: ScrollHost + ?Sized>(
        &mut self,
        host: &H,
        state: &mut ScrollbarsState,
        thickness: f64,
    ) -> bool {
        let changed = self.layout_pass(host, state, thickness);
        if changed {
            log::debug!("[observer] resize changed thumb geometry");
        }
        changed
    }

    pub fn recompute_sizes<H: ScrollHost + ?Sized>(
        &self,
        host: &H,
        state: &mut ScrollbarsState,
        thickness: f64,
    ) -> bool {
        let mut changed = false;
        for axis in Axis::ALL {
            let Some((metrics, track)) = measure_axis(host, axis, thickness) else {
                log::debug!("[observer] size pass skipped, host not mounted");
                return changed;
            };
            changed |= state.apply(Transition::SetThumbSize {
                axis,
                thumb_size: metrics.thumb_size,
                track_size: track,
            });
        }
        changed
    }

    pub fn recompute_positions<H: ScrollHost + ?Sized>(
        &self,
        host: &H,
        state: &mut ScrollbarsState,
        thickness: f64,
    ) -> bool {
        let mut changed = false;
        for axis in Axis::ALL {
            if state.axis(axis).is_dragging {
                continue;
            }
            let Some((metrics, _)) = measure_axis(host, axis, thickness) else {
                log::debug!("[observer] position pass skipped, host not mounted");
                return changed;
            };
            changed |= state.apply(Transition::SetThumbPosition {
                axis,
                value: metrics.thumb_position,
            });
        }
        changed
    }

    /// Content scrolled. Returns true if a frame callback is now pending.
    pub fn on_scroll(&mut self, state: &ScrollbarsState) -> bool {
        if state.any_dragging() {
            log::trace!("[observer] scroll ignored, drag in progress");
            return false;
        }
        if self.frame_pending {
            log::trace!("[observer] scroll coalesced into pending frame");
        }
        self.frame_pending = true;
        true
    }

    /// Animation frame callback. Returns true if the pending recomputation ran.
    pub fn run_frame<H: ScrollHost + ?Sized>(
        &mut self,
        host: &H,
        state: &mut ScrollbarsState,
        visibility: &mut VisibilityScheduler,
        guard: &DragWriteGuard,
        thickness: f64,
        now: Instant,
    ) -> bool {
        if !self.frame_pending {
            return false;
        }
        self.frame_pending = false;

        // The frame is consumed here; the next scroll event schedules another.
        if guard.is_held() {
            log::trace!("[observer] frame skipped, drag write in flight");
            return false;
        }

        self.recompute_positions(host, state, thickness);
        visibility.show_scrollbar(now, state.pins());
        true
    }

    /// Document mouse-leave. Hides the bars at once if the pointer left the
    /// window, unless a drag is still in progress.
    pub fn on_document_leave(
        &self,
        pointer: Point,
        window: Size,
        state: &mut ScrollbarsState,
        visibility: &mut VisibilityScheduler,
    ) -> bool {
        if window.strictly_contains(pointer) {
            return false;
        }

        // Track leave events are lost once the pointer is outside the window.
        for axis in Axis::ALL {
            state.apply(Transition::SetHovered { axis, value: false });
        }

        if state.any_dragging() {
            log::debug!("[observer] pointer left window during drag, keeping bars");
            visibility.cancel_all();
            return false;
        }

        log::debug!("[observer] pointer left window, hiding");
        visibility.force_hide();
        true
    }
}
