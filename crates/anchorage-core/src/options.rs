#![forbid(unsafe_code)]

//! Placement configuration and the engine's output type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Sides, Size};
use crate::placement::Placement;

/// Default gap between trigger and panel, in pixels.
pub const DEFAULT_OFFSET: f64 = 4.0;

/// Default minimum distance from every viewport edge, in pixels.
pub const DEFAULT_BOUNDARY: f64 = 8.0;

/// Configuration for one position computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementOptions {
    /// Placement to try first.
    pub preferred_placement: Placement,
    /// Gap between the trigger and the panel along the primary axis.
    pub offset: f64,
    /// Minimum distance the panel keeps from each viewport edge.
    pub boundary: Sides,
    /// Mirror the side when the preferred one overflows and the other fits.
    pub allow_flip: bool,
    /// Clamp the final position into the safe area.
    pub allow_shift: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            preferred_placement: Placement::BottomStart,
            offset: DEFAULT_OFFSET,
            boundary: Sides::all(DEFAULT_BOUNDARY),
            allow_flip: true,
            allow_shift: true,
        }
    }
}

impl PlacementOptions {
    /// Default options with a different preferred placement.
    #[must_use]
    pub fn new(preferred_placement: Placement) -> Self {
        Self {
            preferred_placement,
            ..Self::default()
        }
    }

    /// Set the preferred placement.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.preferred_placement = placement;
        self
    }

    /// Set the trigger/panel gap.
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the boundary insets.
    #[must_use]
    pub fn boundary(mut self, boundary: impl Into<Sides>) -> Self {
        self.boundary = boundary.into();
        self
    }

    /// Enable or disable flipping.
    #[must_use]
    pub fn allow_flip(mut self, allow: bool) -> Self {
        self.allow_flip = allow;
        self
    }

    /// Enable or disable shifting.
    #[must_use]
    pub fn allow_shift(mut self, allow: bool) -> Self {
        self.allow_shift = allow;
        self
    }
}

/// Top-left corner of a panel, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub top: f64,
    pub left: f64,
}

impl Point {
    #[inline]
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// The rectangle a panel of `size` occupies at this point.
    #[inline]
    pub const fn rect(self, size: Size) -> Rect {
        Rect::new(self.left, self.top, size.width, size.height)
    }
}

/// Resolved panel position.
///
/// `placement` is the placement actually used, which differs from the
/// preferred one when a flip happened. Coordinates are fixed-layout offsets
/// that can be applied to the panel as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub top: f64,
    pub left: f64,
    pub placement: Placement,
}

impl Position {
    #[inline]
    pub const fn new(top: f64, left: f64, placement: Placement) -> Self {
        Self {
            top,
            left,
            placement,
        }
    }

    /// Top-left corner without the placement.
    #[inline]
    pub const fn point(&self) -> Point {
        Point::new(self.top, self.left)
    }

    /// The rectangle a panel of `size` occupies at this position.
    #[inline]
    pub const fn rect(&self, size: Size) -> Rect {
        self.point().rect(size)
    }
}
