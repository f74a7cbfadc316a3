#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are `f32` in parent-local units (origin at top-left,
//! y growing downward), matching what the host layout system hands to
//! `measure`/`arrange`.

use bitflags::bitflags;

/// A 2D point or offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Componentwise clamp into `[lo, hi]`.
    ///
    /// Callers must ensure `lo ≤ hi` componentwise.
    #[inline]
    pub fn clamp(self, lo: Point, hi: Point) -> Point {
        self.max(lo).min(hi)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add<Size> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Size) -> Point {
        Point::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl std::ops::Sub<Size> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Size) -> Point {
        Point::new(self.x - rhs.width, self.y - rhs.height)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero extent.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// An explicitly requested size; `None` per axis means "unset" (the host
/// keeps whatever the layout pass produced for that axis).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl SetSize {
    /// Both axes unset.
    pub const UNSET: SetSize = SetSize {
        width: None,
        height: None,
    };

    /// Request both axes.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Check if either axis carries a request.
    #[inline]
    pub const fn is_set(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Resolve against a fallback size, per axis.
    #[inline]
    pub fn resolve(&self, fallback: Size) -> Size {
        Size::new(
            self.width.unwrap_or(fallback.width),
            self.height.unwrap_or(fallback.height),
        )
    }
}

impl From<Size> for SetSize {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// An axis-aligned rectangle stored as edge positions.
///
/// Invariant: `left ≤ right` and `top ≤ bottom`. Operations that move an
/// edge are responsible for bounding it against the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Box2 {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Box2 {
    /// Create a rectangle from edge positions.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from a top-left corner and an extent.
    #[inline]
    pub fn from_pos_size(pos: Point, size: Size) -> Self {
        Self::new(pos.x, pos.y, pos.x + size.width, pos.y + size.height)
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Extent of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Top-left corner.
    #[inline]
    pub const fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Bottom-right corner.
    #[inline]
    pub const fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// Check if a point is inside the rectangle (edges inclusive on the
    /// left/top, exclusive on the right/bottom).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

bitflags! {
    /// Compass directions, used for per-edge containment policy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        const NORTH = 0b0001;
        const SOUTH = 0b0010;
        const EAST  = 0b0100;
        const WEST  = 0b1000;
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::empty()
    }
}
