#![forbid(unsafe_code)]

//! Flip strategy: mirror the placement side when it overflows.
//!
//! Only the primary axis of the placement is considered. A `bottom-*`
//! candidate may become `top-*` (and vice versa); a `right-*` candidate may
//! become `left-*` (and vice versa). Overflow on the cross axis is left to
//! the shift strategy. Each call evaluates the mirror once: when the
//! opposite side has no room either, the candidate is returned unchanged and
//! shifting becomes the fallback. This is best effort, not a search over all
//! eight placements.

use crate::geometry::{Rect, Sides, Size};
use crate::options::Point;
use crate::placement::{Placement, Side};
use crate::resolver;

/// Decide whether `candidate` (computed for `placement`) should be mirrored.
///
/// Returns the possibly-recomputed point and the placement it belongs to.
#[must_use]
pub fn flip(
    candidate: Point,
    trigger: &Rect,
    size: Size,
    viewport: Size,
    boundary: &Sides,
    offset: f64,
    placement: Placement,
) -> (Point, Placement) {
    let rect = candidate.rect(size);
    let should_flip = match placement.side() {
        Side::Bottom => {
            rect.bottom() > viewport.height - boundary.bottom
                && trigger.top() - size.height - offset > boundary.top
        }
        Side::Top => {
            rect.top() < boundary.top
                && trigger.bottom() + offset + size.height < viewport.height - boundary.bottom
        }
        Side::Right => {
            rect.right() > viewport.width - boundary.right
                && trigger.left() - size.width - offset > boundary.left
        }
        Side::Left => {
            rect.left() < boundary.left
                && trigger.right() + offset + size.width < viewport.width - boundary.right
        }
    };

    if !should_flip {
        return (candidate, placement);
    }

    let flipped = placement.opposite();
    let point = if placement.is_vertical() {
        Point::new(
            resolver::resolve_top(trigger, size, flipped, offset),
            candidate.left,
        )
    } else {
        Point::new(
            candidate.top,
            resolver::resolve_left(trigger, size, flipped, offset),
        )
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        from = %placement,
        to = %flipped,
        top = point.top,
        left = point.left,
        "placement flipped"
    );

    (point, flipped)
}
