//! Terminal implementation of the scroll host.
//!
//! Every cell stands for a fixed block of pixels, so the engine's pixel
//! metrics apply unchanged and only drawing rounds to cells.

use std::collections::HashSet;

use overlay_scrollbar::{
    max_scroll, Axis, ContentMetrics, Listener, PerAxis, Point, ScrollHost, ScrollOffset, Size,
};

use crate::document::Document;

pub const PX_PER_COL: f64 = 8.0;
pub const PX_PER_ROW: f64 = 16.0;

pub struct TerminalHost {
    document: Document,
    cols: u16,
    rows: u16,
    offset: ScrollOffset,
    /// Thumb positions written directly during a drag.
    direct_thumbs: PerAxis<Option<f64>>,
    attached: HashSet<Listener>,
    selection_enabled: bool,
}

impl TerminalHost {
    /// A viewport of `cols` x `rows` cells over `document`.
    pub fn new(document: Document, cols: u16, rows: u16) -> Self {
        Self {
            document,
            cols,
            rows,
            offset: ScrollOffset::default(),
            direct_thumbs: PerAxis::default(),
            attached: HashSet::new(),
            selection_enabled: true,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    pub fn is_listening(&self, listener: Listener) -> bool {
        self.attached.contains(&listener)
    }

    /// Any axis has an active drag session.
    pub fn drag_listening(&self) -> bool {
        Axis::ALL
            .iter()
            .any(|axis| self.is_listening(Listener::PointerMove(*axis)))
    }

    pub fn direct_thumb(&self, axis: Axis) -> Option<f64> {
        self.direct_thumbs[axis]
    }

    pub fn clear_direct_thumb(&mut self, axis: Axis) {
        self.direct_thumbs[axis] = None;
    }

    /// The terminal changed size. Returns true if the viewport changed.
    pub fn resize(&mut self, cols: u16, rows: u16) -> bool {
        if (cols, rows) == (self.cols, self.rows) {
            return false;
        }
        self.cols = cols;
        self.rows = rows;
        for axis in Axis::ALL {
            let current = (axis.spec().scroll)(self.offset);
            self.offset = (axis.spec().with_scroll)(self.offset, self.clamp_scroll(axis, current));
        }
        true
    }

    /// Native scrolling (wheel, keys). Returns true if the offset moved.
    pub fn scroll_by(&mut self, axis: Axis, delta: f64) -> bool {
        let current = (axis.spec().scroll)(self.offset);
        let next = self.clamp_scroll(axis, current + delta);
        if next == current {
            return false;
        }
        self.offset = (axis.spec().with_scroll)(self.offset, next);
        true
    }

    /// Centre of a cell in pixels.
    pub fn cell_to_point(col: u16, row: u16) -> Point {
        Point::new(
            (col as f64 + 0.5) * PX_PER_COL,
            (row as f64 + 0.5) * PX_PER_ROW,
        )
    }

    fn viewport(&self) -> Size {
        Size::new(self.cols as f64 * PX_PER_COL, self.rows as f64 * PX_PER_ROW)
    }

    fn content(&self) -> ContentMetrics {
        let client = self.viewport();
        let scroll = Size::new(
            (self.document.width() as f64 * PX_PER_COL).max(client.width),
            (self.document.height() as f64 * PX_PER_ROW).max(client.height),
        );
        ContentMetrics::new(scroll, client)
    }

    fn clamp_scroll(&self, axis: Axis, value: f64) -> f64 {
        let spec = axis.spec();
        let content = self.content();
        let max = max_scroll(
            (spec.extent)(content.scroll_size),
            (spec.extent)(content.client_size),
        );
        value.clamp(0.0, max)
    }
}

impl ScrollHost for TerminalHost {
    fn viewport_size(&self) -> Option<Size> {
        Some(self.viewport())
    }

    fn content_metrics(&self) -> Option<ContentMetrics> {
        Some(self.content())
    }

    fn scroll_offset(&self) -> Option<ScrollOffset> {
        Some(self.offset)
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f64) {
        let value = self.clamp_scroll(axis, value);
        self.offset = (axis.spec().with_scroll)(self.offset, value);
    }

    fn write_thumb_position(&mut self, axis: Axis, position: f64) {
        self.direct_thumbs[axis] = Some(position);
    }

    fn set_text_selection(&mut self, enabled: bool) {
        log::debug!("[host] text selection {}", if enabled { "on" } else { "off" });
        self.selection_enabled = enabled;
    }

    fn attach(&mut self, listener: Listener) {
        log::trace!("[host] attach {:?}", listener);
        self.attached.insert(listener);
    }

    fn detach(&mut self, listener: Listener) {
        log::trace!("[host] detach {:?}", listener);
        self.attached.remove(&listener);
    }
}
