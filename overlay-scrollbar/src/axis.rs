//! The two scroll axes and the accessors that make per-axis code generic.
//!
//! Every piece of per-axis logic reads coordinates, extents and scroll
//! offsets through an [`AxisSpec`], so the vertical and horizontal bars share
//! one implementation and differ only in the record they are handed.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::geometry::{Point, ScrollOffset, Size};

/// One of the two scroll directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Vertical, Axis::Horizontal];

    /// The accessor record for this axis.
    pub fn spec(self) -> &'static AxisSpec {
        match self {
            Axis::Vertical => &VERTICAL,
            Axis::Horizontal => &HORIZONTAL,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// Capability record for one axis.
#[derive(Debug)]
pub struct AxisSpec {
    pub name: &'static str,
    /// Pointer coordinate along the axis (`clientY` / `clientX`).
    pub coordinate: fn(Point) -> f64,
    /// Size along the axis (`height` / `width`).
    pub extent: fn(Size) -> f64,
    /// Scroll offset along the axis (`scrollTop` / `scrollLeft`).
    pub scroll: fn(ScrollOffset) -> f64,
    /// Replace the scroll offset along the axis, keeping the other one.
    pub with_scroll: fn(ScrollOffset, f64) -> ScrollOffset,
}

static VERTICAL: AxisSpec = AxisSpec {
    name: "vertical",
    coordinate: |p| p.y,
    extent: |s| s.height,
    scroll: |o| o.top,
    with_scroll: |o, top| ScrollOffset { top, ..o },
};

static HORIZONTAL: AxisSpec = AxisSpec {
    name: "horizontal",
    coordinate: |p| p.x,
    extent: |s| s.width,
    scroll: |o| o.left,
    with_scroll: |o, left| ScrollOffset { left, ..o },
};

/// One value per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerAxis<T> {
    pub vertical: T,
    pub horizontal: T,
}

impl<T> PerAxis<T> {
    pub fn new(vertical: T, horizontal: T) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Build both values from the axis.
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            vertical: f(Axis::Vertical),
            horizontal: f(Axis::Horizontal),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        [
            (Axis::Vertical, &self.vertical),
            (Axis::Horizontal, &self.horizontal),
        ]
        .into_iter()
    }

    pub fn any(&self, mut f: impl FnMut(&T) -> bool) -> bool {
        f(&self.vertical) || f(&self.horizontal)
    }
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }
}

impl<T> IndexMut<Axis> for PerAxis<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }
}
