#![forbid(unsafe_code)]

//! Initial trigger-anchored position for a placement.

use crate::geometry::{Rect, Size};
use crate::options::Point;
use crate::placement::Placement;

/// Compute the raw position of a panel of `size` placed at `placement`
/// around `trigger`, separated by `offset` along the primary axis.
///
/// | placement      | top                               | left                              |
/// |----------------|-----------------------------------|-----------------------------------|
/// | `bottom-start` | `trigger.bottom + offset`         | `trigger.left`                    |
/// | `bottom-end`   | `trigger.bottom + offset`         | `trigger.right - width`           |
/// | `top-start`    | `trigger.top - height - offset`   | `trigger.left`                    |
/// | `top-end`      | `trigger.top - height - offset`   | `trigger.right - width`           |
/// | `right-start`  | `trigger.top`                     | `trigger.right + offset`          |
/// | `right-end`    | `trigger.bottom - height`         | `trigger.right + offset`          |
/// | `left-start`   | `trigger.top`                     | `trigger.left - width - offset`   |
/// | `left-end`     | `trigger.bottom - height`         | `trigger.left - width - offset`   |
///
/// Pure arithmetic with no viewport awareness; zero-sized inputs give a
/// degenerate but well-defined point.
#[must_use]
pub fn resolve(trigger: &Rect, size: Size, placement: Placement, offset: f64) -> Point {
    Point::new(
        resolve_top(trigger, size, placement, offset),
        resolve_left(trigger, size, placement, offset),
    )
}

/// Vertical component of [`resolve`].
#[must_use]
pub fn resolve_top(trigger: &Rect, size: Size, placement: Placement, offset: f64) -> f64 {
    match placement {
        Placement::BottomStart | Placement::BottomEnd => trigger.bottom() + offset,
        Placement::TopStart | Placement::TopEnd => trigger.top() - size.height - offset,
        Placement::LeftStart | Placement::RightStart => trigger.top(),
        Placement::LeftEnd | Placement::RightEnd => trigger.bottom() - size.height,
    }
}

/// Horizontal component of [`resolve`].
#[must_use]
pub fn resolve_left(trigger: &Rect, size: Size, placement: Placement, offset: f64) -> f64 {
    match placement {
        Placement::BottomStart | Placement::TopStart => trigger.left(),
        Placement::BottomEnd | Placement::TopEnd => trigger.right() - size.width,
        Placement::RightStart | Placement::RightEnd => trigger.right() + offset,
        Placement::LeftStart | Placement::LeftEnd => trigger.left() - size.width - offset,
    }
}
