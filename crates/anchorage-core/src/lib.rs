#![forbid(unsafe_code)]

//! Core: placement, flip and shift solvers for anchored floating panels.
//!
//! # Role in Anchorage
//! `anchorage-core` is the pure geometry layer. Given the viewport rectangle
//! of a trigger element, the size of the panel to open next to it and the
//! viewport size, it answers one question: where does the panel go?
//!
//! # Pipeline
//! 1. [`resolver::resolve`] anchors the panel to the trigger at the
//!    preferred [`Placement`].
//! 2. [`flip::flip`] mirrors the side if it overflows and the other side fits.
//! 3. [`shift::shift`] clamps the result into the viewport minus the
//!    boundary insets.
//!
//! [`resolve_position`] runs all three. Nothing here holds state or does
//! I/O; the reactive wrapper lives in `anchorage-runtime`.
//!
//! ```
//! use anchorage_core::{resolve_position, Placement, PlacementOptions, Rect, Size};
//!
//! let trigger = Rect::from_edges(700.0, 100.0, 200.0, 730.0);
//! let position = resolve_position(
//!     &trigger,
//!     Size::new(256.0, 400.0),
//!     Size::new(1024.0, 768.0),
//!     &PlacementOptions::default(),
//! );
//! assert_eq!(position.placement, Placement::TopStart);
//! assert_eq!((position.top, position.left), (296.0, 100.0));
//! ```

pub mod flip;
pub mod geometry;
pub mod options;
pub mod placement;
pub mod resolver;
pub mod shift;

pub use geometry::{BoundaryInset, DEFAULT_PANEL_SIZE, Rect, Sides, Size};
pub use options::{DEFAULT_BOUNDARY, DEFAULT_OFFSET, PlacementOptions, Point, Position};
pub use placement::{Alignment, ParsePlacementError, Placement, Side};

/// Compute the final position of a panel of `size` anchored to `trigger`
/// inside a viewport of `viewport` size.
///
/// Same inputs always give the same output. The returned placement differs
/// from `options.preferred_placement` only when a flip happened.
#[must_use]
pub fn resolve_position(
    trigger: &Rect,
    size: Size,
    viewport: Size,
    options: &PlacementOptions,
) -> Position {
    let placement = options.preferred_placement;
    let mut point = resolver::resolve(trigger, size, placement, options.offset);
    let mut resolved = placement;

    if options.allow_flip {
        (point, resolved) = flip::flip(
            point,
            trigger,
            size,
            viewport,
            &options.boundary,
            options.offset,
            placement,
        );
    }

    if options.allow_shift {
        point = shift::shift(point, size, viewport, &options.boundary);
    }

    Position::new(point.top, point.left, resolved)
}
