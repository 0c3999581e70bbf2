use std::io;
use std::ops::Range;

use overlay_scrollbar::{Axis, AxisRender, RenderSnapshot};

use crate::host::{TerminalHost, PX_PER_COL, PX_PER_ROW};
use crate::terminal::Terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const BACKGROUND: Rgb = Rgb::new(24, 24, 30);
const TEXT: Rgb = Rgb::new(196, 198, 206);
const STATUS_BG: Rgb = Rgb::new(44, 46, 58);
const TRACK: Rgb = Rgb::new(62, 64, 80);
const THUMB: Rgb = Rgb::new(128, 140, 220);
const THUMB_ACTIVE: Rgb = Rgb::new(176, 190, 255);

/// Blend two colours in OKLCH, taking the short way round the hue circle.
pub fn blend(from: Rgb, to: Rgb, t: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let to_oklch = |c: Rgb| -> Oklch {
        Srgb::new(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0).into_color()
    };
    let a = to_oklch(from);
    let b = to_oklch(to);
    let t = t.clamp(0.0, 1.0);

    let from_h = a.hue.into_positive_degrees();
    let mut dh = b.hue.into_positive_degrees() - from_h;
    if dh > 180.0 {
        dh -= 360.0;
    } else if dh < -180.0 {
        dh += 360.0;
    }

    let mixed = Oklch::new(
        a.l + (b.l - a.l) * t,
        a.chroma + (b.chroma - a.chroma) * t,
        (from_h + dh * t).rem_euclid(360.0),
    );
    let srgb: Srgb = mixed.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

/// One bar laid out in terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct BarCells {
    axis: Axis,
    /// Column of the vertical bar, or row of the horizontal one.
    lane: u16,
    track: Range<u16>,
    thumb: Range<u16>,
}

impl BarCells {
    /// Lay out a bar. `direct` is the thumb position the host was told to
    /// show during a drag; it wins over the declarative one.
    pub fn new(render: &AxisRender, direct: Option<f64>, host: &TerminalHost) -> Option<Self> {
        if !render.is_rendered() {
            return None;
        }
        let (lane, cell_px, cells) = match render.axis {
            Axis::Vertical => (host.cols().checked_sub(1)?, PX_PER_ROW, host.rows()),
            Axis::Horizontal => (host.rows().checked_sub(1)?, PX_PER_COL, host.cols()),
        };

        let position = match direct {
            Some(position) if render.is_dragging => position,
            _ => render.thumb_position,
        };
        let floor_cell = |px: f64| ((px / cell_px).max(0.0) as u16).min(cells);
        let ceil_cell = |px: f64| ((px / cell_px).ceil().max(0.0) as u16).min(cells);

        let track = 0..ceil_cell(render.track_length);
        let start = floor_cell(position);
        let end = ceil_cell(position + render.thumb_size).max(start + 1);
        let thumb = start..end;

        Some(Self {
            axis: render.axis,
            lane,
            track,
            thumb,
        })
    }

    fn split(&self, col: u16, row: u16) -> Option<u16> {
        let (lane, along) = match self.axis {
            Axis::Vertical => (col, row),
            Axis::Horizontal => (row, col),
        };
        (lane == self.lane).then_some(along)
    }

    pub fn track_contains(&self, col: u16, row: u16) -> bool {
        self.split(col, row).is_some_and(|c| self.track.contains(&c))
    }

    pub fn thumb_contains(&self, col: u16, row: u16) -> bool {
        self.split(col, row).is_some_and(|c| self.thumb.contains(&c))
    }

    fn cell(&self, along: u16) -> (u16, u16) {
        match self.axis {
            Axis::Vertical => (self.lane, along),
            Axis::Horizontal => (along, self.lane),
        }
    }
}

fn glyph(axis: Axis, thickness: f64) -> &'static str {
    match axis {
        Axis::Vertical if thickness <= PX_PER_COL / 2.0 => "▐",
        Axis::Horizontal if thickness <= PX_PER_ROW / 2.0 => "▄",
        _ => "█",
    }
}

/// Everything the frame shows besides the engine's snapshot.
pub struct Frame<'a> {
    pub host: &'a TerminalHost,
    pub snapshot: &'a RenderSnapshot,
    pub bars: [Option<BarCells>; 2],
    pub hovered: [bool; 2],
    pub status: String,
}

pub fn draw(term: &mut Terminal, frame: &Frame<'_>) -> io::Result<()> {
    let host = frame.host;
    let offset = host.offset();
    let first_row = (offset.top / PX_PER_ROW) as usize;
    let first_col = (offset.left / PX_PER_COL) as usize;
    let cols = host.cols() as usize;

    for row in 0..host.rows() {
        let line = host.document().slice(first_row + row as usize, first_col, cols);
        term.put(0, row, &line, TEXT, BACKGROUND)?;
    }

    let opacity = frame.snapshot.opacity;
    if opacity > 0.0 {
        for (i, bar) in frame.bars.iter().enumerate() {
            let Some(bar) = bar else { continue };
            let render = frame.snapshot.axis(bar.axis);
            let glyph = glyph(bar.axis, render.thickness);

            if render.track_background {
                let track = blend(BACKGROUND, TRACK, opacity);
                for along in bar.track.clone() {
                    let (x, y) = bar.cell(along);
                    term.put(x, y, glyph, track, BACKGROUND)?;
                }
            }

            let accent = if render.is_dragging || frame.hovered[i] {
                THUMB_ACTIVE
            } else {
                THUMB
            };
            let thumb = blend(BACKGROUND, accent, opacity);
            for along in bar.thumb.clone() {
                let (x, y) = bar.cell(along);
                term.put(x, y, glyph, thumb, BACKGROUND)?;
            }
        }
    }

    let status = format!("{:<width$}", frame.status, width = cols);
    term.put(0, host.rows(), &status, TEXT, STATUS_BG)?;
    term.flush()
}
