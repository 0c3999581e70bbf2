mod document;
mod draw;
mod host;
mod terminal;

use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use overlay_scrollbar::{
    Axis, Event, EventResult, Listener, OverlayScrollbar, PerAxis, Point, PointerId,
    ScrollbarConfig, Size, Thickness,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::document::Document;
use crate::draw::{draw, BarCells, Frame};
use crate::host::{TerminalHost, PX_PER_COL, PX_PER_ROW};
use crate::terminal::Terminal;

const DOCUMENT_LINES: usize = 400;
const WHEEL_ROWS: f64 = 3.0;
const MOUSE: PointerId = PointerId(0);

const USAGE: &str = "usage: overlay-scrollbar-demo [thin|medium|<px>] [fade-ms]";

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_config(&args)?;

    let log_file = File::create("overlay-scrollbar-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;
    log::info!("[demo] starting with {:?}", config);

    let mut term = Terminal::new()?;
    let (cols, rows) = term.size()?;
    let mut app = App::new(config, cols, rows);
    app.bar.mount(&mut app.host);

    let result = app.run(&mut term);
    app.bar.unmount(&mut app.host);
    result
}

fn parse_config(args: &[String]) -> io::Result<ScrollbarConfig> {
    let mut config = ScrollbarConfig::new();
    if let Some(token) = args.first() {
        let thickness: Thickness = token.parse().map_err(io::Error::other)?;
        config = config.thickness(thickness);
    }
    if let Some(token) = args.get(1) {
        let ms: u64 = token.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid fade timeout '{}'\n{}", token, USAGE),
            )
        })?;
        config = config.fade_timeout(Duration::from_millis(ms));
    }
    config.validated().map_err(io::Error::other)
}

struct App {
    bar: OverlayScrollbar,
    host: TerminalHost,
    bars: PerAxis<Option<BarCells>>,
}

impl App {
    fn new(config: ScrollbarConfig, cols: u16, rows: u16) -> Self {
        // Last row is the status line.
        let host = TerminalHost::new(
            Document::generate(DOCUMENT_LINES),
            cols,
            rows.saturating_sub(1),
        );
        Self {
            bar: OverlayScrollbar::new(config),
            host,
            bars: PerAxis::default(),
        }
    }

    fn run(&mut self, term: &mut Terminal) -> io::Result<()> {
        loop {
            let now = Instant::now();
            self.bar.poll_timers(now);
            self.bar.run_frame(&self.host, now);
            self.render(term, now)?;

            let timeout = self
                .bar
                .next_wakeup(now)
                .map(|at| at.saturating_duration_since(Instant::now()));

            for event in term.poll(timeout)? {
                let now = Instant::now();
                match event {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key.code, now) {
                            return Ok(());
                        }
                    }
                    CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse, now),
                    CrosstermEvent::Resize(cols, rows) => {
                        self.resize(cols, rows.saturating_sub(1), now)
                    }
                    CrosstermEvent::FocusLost => self.document_leave(now),
                    _ => {}
                }
            }
        }
    }

    /// Deliver one event, then run the zero-delay tick the way an event
    /// loop would after dispatch.
    fn dispatch(&mut self, event: Event, now: Instant) -> EventResult {
        let result = self.bar.handle_event(&mut self.host, event, now);
        self.bar.run_tick();
        result
    }

    fn native_scroll(&mut self, axis: Axis, delta: f64, now: Instant) {
        if self.host.scroll_by(axis, delta) && self.host.is_listening(Listener::Scroll) {
            self.dispatch(Event::Scroll, now);
        }
    }

    /// Returns true to quit.
    fn handle_key(&mut self, code: KeyCode, now: Instant) -> bool {
        let page = self.host.rows().saturating_sub(1).max(1) as f64 * PX_PER_ROW;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Down => self.native_scroll(Axis::Vertical, PX_PER_ROW, now),
            KeyCode::Up => self.native_scroll(Axis::Vertical, -PX_PER_ROW, now),
            KeyCode::Right => self.native_scroll(Axis::Horizontal, 4.0 * PX_PER_COL, now),
            KeyCode::Left => self.native_scroll(Axis::Horizontal, -4.0 * PX_PER_COL, now),
            KeyCode::PageDown => self.native_scroll(Axis::Vertical, page, now),
            KeyCode::PageUp => self.native_scroll(Axis::Vertical, -page, now),
            KeyCode::Home => self.native_scroll(Axis::Vertical, f64::NEG_INFINITY, now),
            KeyCode::End => self.native_scroll(Axis::Vertical, f64::INFINITY, now),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let (col, row) = (mouse.column, mouse.row);
        let position = TerminalHost::cell_to_point(col, row);
        let wheel = WHEEL_ROWS * PX_PER_ROW;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = Axis::ALL.into_iter().find(|axis| {
                    self.bars[*axis]
                        .as_ref()
                        .is_some_and(|bar| bar.thumb_contains(col, row))
                });
                if let Some(axis) = hit {
                    self.dispatch(
                        Event::ThumbPointerDown {
                            axis,
                            pointer_id: MOUSE,
                            position,
                        },
                        now,
                    );
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.host.drag_listening() {
                    self.dispatch(
                        Event::PointerMove {
                            pointer_id: MOUSE,
                            position,
                        },
                        now,
                    );
                }
                self.update_hover(col, row, now);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.host.drag_listening() {
                    self.dispatch(Event::PointerUp { pointer_id: MOUSE }, now);
                }
            }
            MouseEventKind::Moved => self.update_hover(col, row, now),
            MouseEventKind::ScrollDown => self.native_scroll(Axis::Vertical, wheel, now),
            MouseEventKind::ScrollUp => self.native_scroll(Axis::Vertical, -wheel, now),
            MouseEventKind::ScrollRight => self.native_scroll(Axis::Horizontal, wheel, now),
            MouseEventKind::ScrollLeft => self.native_scroll(Axis::Horizontal, -wheel, now),
            _ => {}
        }
    }

    /// Turn pointer motion into track enter/leave. An enter the engine
    /// ignores (bars hidden) is retried on the next motion.
    fn update_hover(&mut self, col: u16, row: u16, now: Instant) {
        for axis in Axis::ALL {
            let over = self.bars[axis]
                .as_ref()
                .is_some_and(|bar| bar.track_contains(col, row));
            let hovered = self.bar.state().axis(axis).is_hovered;
            if over && !hovered {
                self.dispatch(Event::TrackEnter { axis }, now);
            } else if !over && hovered {
                self.dispatch(Event::TrackLeave { axis }, now);
            }
        }
    }

    fn resize(&mut self, cols: u16, rows: u16, now: Instant) {
        if self.host.resize(cols, rows) && self.host.is_listening(Listener::Resize) {
            self.dispatch(Event::Resize, now);
        }
    }

    /// Terminals report focus loss instead of the pointer leaving.
    fn document_leave(&mut self, now: Instant) {
        if !self.host.is_listening(Listener::DocumentLeave) {
            return;
        }
        let window = Size::new(
            self.host.cols() as f64 * PX_PER_COL,
            (self.host.rows() + 1) as f64 * PX_PER_ROW,
        );
        self.dispatch(
            Event::DocumentLeave {
                position: Point::new(-1.0, -1.0),
                window,
            },
            now,
        );
    }

    fn render(&mut self, term: &mut Terminal, now: Instant) -> io::Result<()> {
        let snapshot = self.bar.snapshot(now);
        for axis in Axis::ALL {
            let render = snapshot.axis(axis);
            if !render.is_dragging {
                self.host.clear_direct_thumb(axis);
            }
            self.bars[axis] = BarCells::new(render, self.host.direct_thumb(axis), &self.host);
        }

        let offset = self.host.offset();
        let status = format!(
            " {}px  fade {}ms  scroll {:.0},{:.0}  {:?}  opacity {:.2}  selection {}  | q quits",
            self.bar.config().thickness.px(),
            self.bar.config().fade_timeout.as_millis(),
            offset.left,
            offset.top,
            self.bar.visibility_state(),
            snapshot.opacity,
            if self.host.selection_enabled() { "on" } else { "off" },
        );

        let hovered = Axis::ALL.map(|axis| self.bar.state().axis(axis).is_hovered);
        let frame = Frame {
            host: &self.host,
            snapshot: &snapshot,
            bars: [self.bars.vertical.clone(), self.bars.horizontal.clone()],
            hovered,
            status,
        };
        draw(term, &frame)?;
        self.bar.clear_dirty();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_config_defaults() {
        let config = parse_config(&[]).unwrap();
        assert_eq!(config, ScrollbarConfig::default());
    }

    #[test]
    fn test_parse_config_thickness_and_fade() {
        let config = parse_config(&args(&["medium", "2500"])).unwrap();
        assert_eq!(config.thickness, Thickness::Medium);
        assert_eq!(config.fade_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_parse_config_rejects_bad_input() {
        assert!(parse_config(&args(&["huge"])).is_err());
        assert!(parse_config(&args(&["thin", "soon"])).is_err());
        assert!(parse_config(&args(&["thin", "0"])).is_err());
    }
}
