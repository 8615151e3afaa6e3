#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are CSS-style pixels in viewport coordinates (origin at the
//! top-left of the visible area, y grows downward). A [`Rect`] is a snapshot
//! taken at read time; scrolling moves the trigger, so callers re-read it on
//! every recompute instead of caching page-relative coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default panel size used when the caller has not measured its content.
pub const DEFAULT_PANEL_SIZE: Size = Size::new(256.0, 400.0);

/// An axis-aligned, viewport-relative rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle from its origin and extent.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges, the shape returned by
    /// `getBoundingClientRect`-style layout APIs.
    ///
    /// Inverted edges produce a zero-sized rectangle anchored at `(left, top)`.
    #[inline]
    pub fn from_edges(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Left edge.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.left
    }

    /// Top edge.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.top
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

    /// Extent of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if `other` lies entirely inside this rectangle (edges inclusive).
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Move the rectangle by the given delta.
    #[inline]
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Create a new rectangle inside the current one with the given margin.
    ///
    /// Margins larger than the rectangle collapse it to zero size.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            left: self.left + margin.left,
            top: self.top + margin.top,
            width: (self.width - margin.horizontal_sum()).max(0.0),
            height: (self.height - margin.vertical_sum()).max(0.0),
        }
    }
}

/// Width and height of a panel or of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether this size fits inside `other` on both axes.
    #[inline]
    pub fn fits_within(&self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

/// Per-edge distances, used for boundary insets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Minimum distance a panel keeps from each viewport edge.
pub type BoundaryInset = Sides;

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: f64) -> Self {
        Self {
            top: 0.0,
            right: val,
            bottom: 0.0,
            left: val,
        }
    }

    /// Create new sides with vertical values only.
    pub const fn vertical(val: f64) -> Self {
        Self {
            top: val,
            right: 0.0,
            bottom: val,
            left: 0.0,
        }
    }

    /// Create new sides with specific values (CSS order).
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }

    /// The region of a `viewport` that panels are allowed to occupy.
    #[inline]
    pub fn safe_area(&self, viewport: Size) -> Rect {
        Rect::from_size(viewport).inner(*self)
    }
}

impl From<f64> for Sides {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

impl From<(f64, f64)> for Sides {
    fn from((vertical, horizontal): (f64, f64)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl From<(f64, f64, f64, f64)> for Sides {
    fn from((top, right, bottom, left): (f64, f64, f64, f64)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}
