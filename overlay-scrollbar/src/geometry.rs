/// A pointer coordinate in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of an element in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if the point lies strictly inside `(0, 0)..(width, height)`.
    ///
    /// Points on the edge count as outside: a pointer leaving the window is
    /// reported with a coordinate on (or past) the border.
    pub fn strictly_contains(&self, point: Point) -> bool {
        point.x > 0.0 && point.y > 0.0 && point.x < self.width && point.y < self.height
    }
}

/// Scroll offset of the content element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Size readouts of the scrollable content element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentMetrics {
    /// Total scrollable extent (`scrollWidth` / `scrollHeight`).
    pub scroll_size: Size,
    /// Visible extent of the content box (`clientWidth` / `clientHeight`).
    pub client_size: Size,
}

impl ContentMetrics {
    pub const fn new(scroll_size: Size, client_size: Size) -> Self {
        Self {
            scroll_size,
            client_size,
        }
    }
}
