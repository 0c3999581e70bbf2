//! Render data handed to the presentation layer.

use crate::axis::Axis;
use crate::config::ScrollbarConfig;
use crate::metrics::TRACK_PADDING;
use crate::state::AxisState;

/// Everything needed to draw one axis' bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRender {
    pub axis: Axis,
    pub thumb_size: f64,
    /// Declarative thumb position. While dragging, the host's directly
    /// written position is newer.
    pub thumb_position: f64,
    pub is_dragging: bool,
    /// Animate thumb movement; off while dragging so the thumb tracks the
    /// pointer exactly.
    pub animate_thumb: bool,
    /// Track length along the axis.
    pub track_length: f64,
    /// Size across the axis.
    pub thickness: f64,
    pub corner_radius: f64,
    /// Space left free at the end of the track, where the bars meet.
    pub end_inset: f64,
    /// Draw the track background, or only the thumb.
    pub track_background: bool,
}

impl AxisRender {
    pub fn new(axis: Axis, state: &AxisState, config: &ScrollbarConfig) -> Self {
        let thickness = config.thickness.px();
        Self {
            axis,
            thumb_size: state.thumb_size,
            thumb_position: state.thumb_position,
            is_dragging: state.is_dragging,
            animate_thumb: !state.is_dragging,
            track_length: state.track_size,
            thickness,
            corner_radius: thickness / 2.0,
            end_inset: thickness + TRACK_PADDING,
            track_background: config.track_visible,
        }
    }

    /// Axes without overflow render nothing.
    pub fn is_rendered(&self) -> bool {
        self.thumb_size > 0.0
    }
}

/// Snapshot of both bars and their shared visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    pub vertical: AxisRender,
    pub horizontal: AxisRender,
    pub visible: bool,
    /// Hidden bars let pointer events through to the content.
    pub interactive: bool,
    /// Current fade opacity, 0.0 to 1.0.
    pub opacity: f32,
}

impl RenderSnapshot {
    pub fn axis(&self, axis: Axis) -> &AxisRender {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }
}
