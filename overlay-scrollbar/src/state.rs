//! Declarative per-axis scrollbar state.
//!
//! [`ScrollbarsState`] is the single source of truth the presentation layer
//! reads. It only changes through [`ScrollbarsState::apply`], and every
//! thumb position it stores is clamped into its track.

use crate::axis::{Axis, PerAxis};

/// State of one axis' bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisState {
    /// A pointer drag on the thumb is in progress.
    pub is_dragging: bool,
    /// The pointer is over the track or thumb.
    pub is_hovered: bool,
    /// Thumb length in pixels. Zero means the axis does not overflow.
    pub thumb_size: f64,
    /// Thumb leading-edge offset within the track.
    pub thumb_position: f64,
    /// Track length the position is clamped against.
    pub track_size: f64,
    /// Pointer coordinate captured when the drag began.
    pub start_position: f64,
    /// Thumb position captured when the drag began.
    pub start_thumb_position: f64,
}

impl AxisState {
    /// Largest valid thumb position.
    pub fn max_thumb_position(&self) -> f64 {
        (self.track_size - self.thumb_size).max(0.0)
    }

    /// True if hover or drag holds the bars visible.
    pub fn is_pinned(&self) -> bool {
        self.is_dragging || self.is_hovered
    }

    /// True if the bar has a thumb to render.
    pub fn has_thumb(&self) -> bool {
        self.thumb_size > 0.0
    }
}

/// Pointer anchor captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub start_position: f64,
    pub start_thumb_position: f64,
}

/// The closed set of state mutations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    SetDragging {
        axis: Axis,
        value: bool,
        anchor: Option<DragAnchor>,
    },
    SetHovered {
        axis: Axis,
        value: bool,
    },
    /// Thumb length together with the track it lives in.
    SetThumbSize {
        axis: Axis,
        thumb_size: f64,
        track_size: f64,
    },
    SetThumbPosition {
        axis: Axis,
        value: f64,
    },
}

/// Both axes' state plus a dirty flag for re-rendering.
#[derive(Debug, Clone, Default)]
pub struct ScrollbarsState {
    axes: PerAxis<AxisState>,
    dirty: bool,
}

impl ScrollbarsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(&self, axis: Axis) -> &AxisState {
        &self.axes[axis]
    }

    pub fn axes(&self) -> &PerAxis<AxisState> {
        &self.axes
    }

    /// Live pinned flags, read at the moment of the call.
    pub fn pins(&self) -> PerAxis<bool> {
        PerAxis::from_fn(|axis| self.axes[axis].is_pinned())
    }

    pub fn any_dragging(&self) -> bool {
        self.axes.any(|a| a.is_dragging)
    }

    /// Apply a transition. Returns true if the state changed.
    pub fn apply(&mut self, transition: Transition) -> bool {
        let before = self.axes;

        match transition {
            Transition::SetDragging {
                axis,
                value,
                anchor,
            } => {
                let state = &mut self.axes[axis];
                state.is_dragging = value;
                if let Some(anchor) = anchor {
                    state.start_position = anchor.start_position;
                    state.start_thumb_position = anchor.start_thumb_position;
                }
            }
            Transition::SetHovered { axis, value } => {
                self.axes[axis].is_hovered = value;
            }
            Transition::SetThumbSize {
                axis,
                thumb_size,
                track_size,
            } => {
                let state = &mut self.axes[axis];
                state.thumb_size = sanitize(thumb_size);
                state.track_size = sanitize(track_size);
                state.thumb_position = clamp_position(state, state.thumb_position);
            }
            Transition::SetThumbPosition { axis, value } => {
                let state = &mut self.axes[axis];
                state.thumb_position = clamp_position(state, value);
            }
        }

        let changed = before != self.axes;
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Check if the state has been modified since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Drop transient interaction flags (used on unmount).
    pub(crate) fn reset_interaction(&mut self) {
        for axis in Axis::ALL {
            self.apply(Transition::SetDragging {
                axis,
                value: false,
                anchor: None,
            });
            self.apply(Transition::SetHovered { axis, value: false });
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn clamp_position(state: &AxisState, value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, state.max_thumb_position())
}
