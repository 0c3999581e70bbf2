//! Recording host shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::time::{Duration, Instant};

use overlay_scrollbar::{
    Axis, ContentMetrics, Event, Listener, OverlayScrollbar, Point, PointerId, ScrollHost,
    ScrollOffset, ScrollbarConfig, Size, Thickness,
};

/// Every side effect the engine asked the host for, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetScroll(Axis, f64),
    WriteThumb(Axis, f64),
    TextSelection(bool),
    Attach(Listener),
    Detach(Listener),
}

#[derive(Debug)]
pub struct FakeHost {
    pub mounted: bool,
    pub viewport: Size,
    pub content: Size,
    pub offset: ScrollOffset,
    pub calls: Vec<HostCall>,
    pub attached: HashSet<Listener>,
    pub selection_enabled: bool,
}

impl FakeHost {
    /// A viewport showing `viewport` pixels of `content`, scrolled to the top.
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            mounted: true,
            viewport,
            content,
            offset: ScrollOffset::default(),
            calls: Vec::new(),
            attached: HashSet::new(),
            selection_enabled: true,
        }
    }

    /// 500x500 viewport over content 1000 wide and 2000 tall.
    pub fn standard() -> Self {
        Self::new(Size::new(500.0, 500.0), Size::new(1000.0, 2000.0))
    }

    pub fn thumb_writes(&self, axis: Axis) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::WriteThumb(a, pos) if *a == axis => Some(*pos),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Scroll the content as a wheel or keyboard would.
    pub fn scroll_to(&mut self, axis: Axis, value: f64) {
        self.offset = (axis.spec().with_scroll)(self.offset, value);
    }
}

impl ScrollHost for FakeHost {
    fn viewport_size(&self) -> Option<Size> {
        self.mounted.then_some(self.viewport)
    }

    fn content_metrics(&self) -> Option<ContentMetrics> {
        self.mounted
            .then_some(ContentMetrics::new(self.content, self.viewport))
    }

    fn scroll_offset(&self) -> Option<ScrollOffset> {
        self.mounted.then_some(self.offset)
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f64) {
        self.scroll_to(axis, value);
        self.calls.push(HostCall::SetScroll(axis, value));
    }

    fn write_thumb_position(&mut self, axis: Axis, position: f64) {
        self.calls.push(HostCall::WriteThumb(axis, position));
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
        self.calls.push(HostCall::TextSelection(enabled));
    }

    fn attach(&mut self, listener: Listener) {
        self.attached.insert(listener);
        self.calls.push(HostCall::Attach(listener));
    }

    fn detach(&mut self, listener: Listener) {
        self.attached.remove(&listener);
        self.calls.push(HostCall::Detach(listener));
    }
}

pub const FADE: Duration = Duration::from_millis(1000);

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Medium bars, 1s fade timeout, no opacity animation.
pub fn config() -> ScrollbarConfig {
    ScrollbarConfig::new()
        .thickness(Thickness::Medium)
        .fade_timeout(FADE)
        .fade_duration(Duration::ZERO)
}

/// A mounted scrollbar over [`FakeHost::standard`].
pub fn mounted() -> (OverlayScrollbar, FakeHost, Instant) {
    let mut host = FakeHost::standard();
    let mut bar = OverlayScrollbar::new(config());
    bar.mount(&mut host);
    (bar, host, Instant::now())
}

/// Scroll the content and run the coalesced frame, which shows the bars.
pub fn scroll_and_frame(
    bar: &mut OverlayScrollbar,
    host: &mut FakeHost,
    axis: Axis,
    value: f64,
    now: Instant,
) {
    host.scroll_to(axis, value);
    bar.handle_event(host, Event::Scroll, now);
    bar.run_tick();
    bar.run_frame(host, now);
}

pub fn pointer_down(axis: Axis, x: f64, y: f64) -> Event {
    Event::ThumbPointerDown {
        axis,
        pointer_id: PointerId(1),
        position: Point::new(x, y),
    }
}

pub fn pointer_move(x: f64, y: f64) -> Event {
    Event::PointerMove {
        pointer_id: PointerId(1),
        position: Point::new(x, y),
    }
}

pub fn pointer_up() -> Event {
    Event::PointerUp {
        pointer_id: PointerId(1),
    }
}
