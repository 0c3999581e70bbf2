mod common;

use std::time::Instant;

use common::{mounted, ms, pointer_down, pointer_up, scroll_and_frame, FADE};
use overlay_scrollbar::{Axis, Event, PerAxis, VisibilityScheduler, VisibilityState};

const UNPINNED: PerAxis<bool> = PerAxis {
    vertical: false,
    horizontal: false,
};

// =============================================================================
// Scheduler
// =============================================================================

#[test]
fn test_scheduler_starts_hidden() {
    let scheduler = VisibilityScheduler::new(FADE);
    assert!(!scheduler.is_visible());
    assert_eq!(scheduler.state(UNPINNED), VisibilityState::Hidden);
    assert_eq!(scheduler.next_deadline(), None);
}

#[test]
fn test_scroll_show_then_timeout_hides() {
    let t0 = Instant::now();
    let mut scheduler = VisibilityScheduler::new(FADE);

    assert!(scheduler.show_scrollbar(t0, UNPINNED));
    assert_eq!(scheduler.state(UNPINNED), VisibilityState::VisibleWithTimer);
    assert_eq!(scheduler.next_deadline(), Some(t0 + FADE));

    assert!(!scheduler.poll(t0 + ms(999), UNPINNED));
    assert!(scheduler.is_visible());

    assert!(scheduler.poll(t0 + FADE, UNPINNED));
    assert_eq!(scheduler.state(UNPINNED), VisibilityState::Hidden);
}

#[test]
fn test_repeated_scroll_restarts_countdown() {
    let t0 = Instant::now();
    let mut scheduler = VisibilityScheduler::new(FADE);

    scheduler.show_scrollbar(t0, UNPINNED);
    scheduler.show_scrollbar(t0 + ms(600), UNPINNED);

    assert!(!scheduler.poll(t0 + ms(1200), UNPINNED));
    assert!(scheduler.poll(t0 + ms(1600), UNPINNED));
}

#[test]
fn test_later_deadline_wins() {
    let t0 = Instant::now();
    let mut scheduler = VisibilityScheduler::new(FADE);
    scheduler.force_show();

    scheduler.schedule_hide(Axis::Vertical, t0, UNPINNED);
    scheduler.schedule_hide(Axis::Horizontal, t0 + ms(300), UNPINNED);

    // The vertical deadline fires but the horizontal one is still pending.
    assert!(!scheduler.poll(t0 + FADE, UNPINNED));
    assert!(scheduler.is_visible());
    assert_eq!(scheduler.deadline(Axis::Vertical), None);

    assert!(scheduler.poll(t0 + ms(1300), UNPINNED));
    assert!(!scheduler.is_visible());
}

#[test]
fn test_pinned_at_poll_time_keeps_visible() {
    let t0 = Instant::now();
    let mut scheduler = VisibilityScheduler::new(FADE);
    scheduler.show_scrollbar(t0, UNPINNED);

    // A drag started after the timer was armed.
    let dragging = PerAxis::new(true, false);
    assert!(!scheduler.poll(t0 + ms(1500), dragging));
    assert!(scheduler.is_visible());
    assert_eq!(scheduler.state(dragging), VisibilityState::VisiblePinned);
}

#[test]
fn test_schedule_while_pinned_arms_nothing() {
    let t0 = Instant::now();
    let mut scheduler = VisibilityScheduler::new(FADE);
    scheduler.force_show();

    scheduler.schedule_hide(Axis::Vertical, t0, PerAxis::new(false, true));
    assert_eq!(scheduler.next_deadline(), None);
}

#[test]
fn test_force_hide_cancels_deadlines() {
    let t0 = Instant::now();
    let mut scheduler = VisibilityScheduler::new(FADE);
    scheduler.show_scrollbar(t0, UNPINNED);

    assert!(scheduler.force_hide());
    assert_eq!(scheduler.next_deadline(), None);
    assert!(!scheduler.force_hide());
}

// =============================================================================
// Hover and Drag Through the Component
// =============================================================================

#[test]
fn test_two_axes_unhovered_hide_after_later_leave() {
    let (mut bar, mut host, t0) = mounted();
    scroll_and_frame(&mut bar, &mut host, Axis::Vertical, 100.0, t0);

    bar.handle_event(&mut host, Event::TrackEnter { axis: Axis::Vertical }, t0);
    bar.handle_event(&mut host, Event::TrackEnter { axis: Axis::Horizontal }, t0);
    assert_eq!(bar.visibility_state(), VisibilityState::VisiblePinned);

    let first_leave = t0 + ms(100);
    let later_leave = t0 + ms(300);
    bar.handle_event(&mut host, Event::TrackLeave { axis: Axis::Vertical }, first_leave);
    bar.handle_event(&mut host, Event::TrackLeave { axis: Axis::Horizontal }, later_leave);

    assert!(!bar.poll_timers(first_leave + FADE));
    assert!(bar.is_visible());
    assert!(!bar.poll_timers(later_leave + FADE - ms(1)));
    assert!(bar.is_visible());

    assert!(bar.poll_timers(later_leave + FADE));
    assert_eq!(bar.visibility_state(), VisibilityState::Hidden);
}

#[test]
fn test_simultaneous_unhover_hides_after_timeout() {
    let (mut bar, mut host, t0) = mounted();
    scroll_and_frame(&mut bar, &mut host, Axis::Vertical, 100.0, t0);

    bar.handle_event(&mut host, Event::TrackEnter { axis: Axis::Vertical }, t0);
    bar.handle_event(&mut host, Event::TrackEnter { axis: Axis::Horizontal }, t0);

    let leave = t0 + ms(200);
    bar.handle_event(&mut host, Event::TrackLeave { axis: Axis::Vertical }, leave);
    bar.handle_event(&mut host, Event::TrackLeave { axis: Axis::Horizontal }, leave);

    assert!(!bar.poll_timers(leave + ms(999)));
    assert!(bar.poll_timers(leave + FADE));
}

#[test]
fn test_drag_started_during_scroll_timer_is_not_hidden() {
    let (mut bar, mut host, t0) = mounted();
    scroll_and_frame(&mut bar, &mut host, Axis::Vertical, 0.0, t0);
    assert_eq!(bar.hide_deadline(Axis::Vertical), Some(t0 + FADE));

    let down = t0 + ms(500);
    let result = bar.handle_event(&mut host, pointer_down(Axis::Vertical, 495.0, 50.0), down);
    assert!(result.is_consumed());

    assert!(!bar.poll_timers(t0 + ms(1500)));
    assert!(!bar.poll_timers(t0 + ms(5000)));
    assert!(bar.is_visible());
    assert_eq!(bar.visibility_state(), VisibilityState::VisiblePinned);
}

#[test]
fn test_drag_end_arms_hide() {
    let (mut bar, mut host, t0) = mounted();
    scroll_and_frame(&mut bar, &mut host, Axis::Vertical, 0.0, t0);

    bar.handle_event(&mut host, pointer_down(Axis::Vertical, 495.0, 50.0), t0);
    let up = t0 + ms(2000);
    bar.handle_event(&mut host, pointer_up(), up);

    assert_eq!(bar.hide_deadline(Axis::Vertical), Some(up + FADE));
    assert!(!bar.poll_timers(up + ms(999)));
    assert!(bar.poll_timers(up + FADE));
}

#[test]
fn test_drag_end_while_hovered_waits_for_leave() {
    let (mut bar, mut host, t0) = mounted();
    scroll_and_frame(&mut bar, &mut host, Axis::Vertical, 0.0, t0);

    bar.handle_event(&mut host, Event::TrackEnter { axis: Axis::Vertical }, t0);
    bar.handle_event(&mut host, pointer_down(Axis::Vertical, 495.0, 50.0), t0);
    bar.handle_event(&mut host, pointer_up(), t0 + ms(100));

    assert_eq!(bar.hide_deadline(Axis::Vertical), None);
    assert!(!bar.poll_timers(t0 + ms(5000)));
    assert!(bar.is_visible());

    let leave = t0 + ms(6000);
    bar.handle_event(&mut host, Event::TrackLeave { axis: Axis::Vertical }, leave);
    assert!(bar.poll_timers(leave + FADE));
}

#[test]
fn test_hidden_bars_ignore_hover() {
    let (mut bar, mut host, t0) = mounted();
    assert!(!bar.is_visible());

    let result = bar.handle_event(&mut host, Event::TrackEnter { axis: Axis::Vertical }, t0);
    assert!(!result.is_consumed());
    assert!(!bar.state().axis(Axis::Vertical).is_hovered);
}
