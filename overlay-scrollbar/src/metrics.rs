//! Pure mapping between scroll offsets and thumb geometry.
//!
//! All functions here are side-effect free and total: degenerate geometry
//! (an empty track, nothing to scroll) produces zero results instead of
//! dividing by zero.

/// Space reserved at the end of each track so the two bars never overlap
/// in the corner.
pub const TRACK_PADDING: f64 = 10.0;

/// Smallest thumb length that is still comfortable to grab.
pub const MIN_THUMB_SIZE: f64 = 40.0;

/// Thumb length and leading-edge offset along one axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbMetrics {
    pub thumb_size: f64,
    pub thumb_position: f64,
}

impl ThumbMetrics {
    pub const NONE: ThumbMetrics = ThumbMetrics {
        thumb_size: 0.0,
        thumb_position: 0.0,
    };
}

/// Length of the lane the thumb slides in.
pub fn track_size(viewport_extent: f64, bar_thickness: f64) -> f64 {
    viewport_extent - (bar_thickness + TRACK_PADDING)
}

/// Largest scroll offset the content accepts.
pub fn max_scroll(content_extent: f64, visible_extent: f64) -> f64 {
    (content_extent - visible_extent).max(0.0)
}

/// Compute thumb size and position for one axis.
///
/// Returns [`ThumbMetrics::NONE`] when the content does not overflow or the
/// track has no length. When the track is shorter than [`MIN_THUMB_SIZE`]
/// the thumb fills the whole track.
pub fn compute_thumb_metrics(
    viewport_extent: f64,
    bar_thickness: f64,
    content_extent: f64,
    visible_extent: f64,
    scroll_offset: f64,
) -> ThumbMetrics {
    if content_extent <= visible_extent {
        return ThumbMetrics::NONE;
    }

    let track = track_size(viewport_extent, bar_thickness);
    if track <= 0.0 {
        return ThumbMetrics::NONE;
    }

    let max = max_scroll(content_extent, visible_extent);
    let ratio = visible_extent / content_extent;
    let thumb_size = (ratio * track).max(MIN_THUMB_SIZE).min(track);

    ThumbMetrics {
        thumb_size,
        thumb_position: thumb_position_for_scroll(scroll_offset, track, thumb_size, max),
    }
}

/// Map a thumb drag back to a content scroll offset.
///
/// `drag_delta` is the pointer travel since the drag began. The far edge of
/// the track maps to exactly `max_scroll`.
pub fn compute_scroll_from_drag(
    drag_delta: f64,
    start_thumb_position: f64,
    track_size: f64,
    thumb_size: f64,
    max_scroll: f64,
) -> f64 {
    let available = track_size - thumb_size;
    if available <= 0.0 || max_scroll <= 0.0 {
        return 0.0;
    }

    let new_thumb_pos = (start_thumb_position + drag_delta).clamp(0.0, available);
    if new_thumb_pos >= available {
        return max_scroll;
    }
    (new_thumb_pos / available) * max_scroll
}

/// Thumb offset that mirrors a scroll offset.
///
/// Offsets outside `0..=max_scroll` (overscroll) are clamped. Reaching the
/// scroll end puts the thumb exactly on the far edge.
pub fn thumb_position_for_scroll(
    scroll_offset: f64,
    track_size: f64,
    thumb_size: f64,
    max_scroll: f64,
) -> f64 {
    let available = track_size - thumb_size;
    if available <= 0.0 || max_scroll <= 0.0 {
        return 0.0;
    }
    if scroll_offset >= max_scroll {
        return available;
    }
    ((scroll_offset / max_scroll) * available).clamp(0.0, available)
}

/// Scroll offset that corresponds to a thumb offset.
pub fn scroll_for_thumb_position(
    thumb_position: f64,
    track_size: f64,
    thumb_size: f64,
    max_scroll: f64,
) -> f64 {
    compute_scroll_from_drag(0.0, thumb_position, track_size, thumb_size, max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_size_subtracts_thickness_and_padding() {
        assert_eq!(track_size(500.0, 8.0), 482.0);
        assert_eq!(track_size(10.0, 4.0), -4.0);
    }

    #[test]
    fn test_max_scroll_never_negative() {
        assert_eq!(max_scroll(2000.0, 500.0), 1500.0);
        assert_eq!(max_scroll(100.0, 500.0), 0.0);
    }
}
