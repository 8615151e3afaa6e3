#![forbid(unsafe_code)]

//! Shift strategy: clamp a position into the viewport's safe area.

use crate::geometry::{Sides, Size};
use crate::options::Point;

/// Translate `point` so a panel of `size` stays inside `viewport` minus
/// `boundary`, without changing its placement side.
///
/// Each axis clamps the trailing edge first and the leading edge second, so
/// when the panel is larger than the safe area the leading (top/left) edge
/// wins and the panel overflows past the trailing edge.
#[must_use]
pub fn shift(point: Point, size: Size, viewport: Size, boundary: &Sides) -> Point {
    let left = clamp_axis(
        point.left,
        size.width,
        viewport.width,
        boundary.left,
        boundary.right,
    );
    let top = clamp_axis(
        point.top,
        size.height,
        viewport.height,
        boundary.top,
        boundary.bottom,
    );

    #[cfg(feature = "tracing")]
    if top != point.top || left != point.left {
        tracing::trace!(
            from_top = point.top,
            from_left = point.left,
            top,
            left,
            "position shifted"
        );
    }

    Point::new(top, left)
}

fn clamp_axis(start: f64, extent: f64, viewport: f64, lead: f64, trail: f64) -> f64 {
    let mut start = start;
    if start + extent > viewport - trail {
        start = viewport - extent - trail;
    }
    if start < lead {
        start = lead;
    }
    start
}
