#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are CSS-style pixels: `f64`, origin at the top-left of the
//! viewport, `y` growing downward. Fractional values are expected (centering
//! an odd-width popup yields half pixels) and are never rounded here.

/// An axis-aligned rectangle, as reported by a `getBoundingClientRect`-like
/// measurement.
///
/// Stored as origin plus size; the right and bottom edges are derived.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width. Callers guarantee this is non-negative.
    pub width: f64,
    /// Height. Callers guarantee this is non-negative.
    pub height: f64,
}

impl Bounds {
    /// Create a rectangle from its origin and size.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges.
    #[inline]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal midpoint.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Width and height.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Origin.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Same rectangle moved by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Bounds {
        Bounds::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Whether `other` lies within this rectangle's left and right edges.
    ///
    /// Edges are inclusive: a rectangle flush against an edge is contained.
    #[inline]
    pub fn contains_horizontally(&self, other: &Bounds) -> bool {
        other.left >= self.left && other.right() <= self.right()
    }

    /// Whether `other` lies within this rectangle on both axes (inclusive).
    #[inline]
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains_horizontally(other)
            && other.top >= self.top
            && other.bottom() <= self.bottom()
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size; what a detached element measures as.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The viewport origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
