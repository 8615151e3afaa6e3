//! Property-based invariant tests for the positioning pipeline.
//!
//! ## Invariants
//!
//! 1. Containment: with shifting enabled and a panel that fits the safe
//!    area, the resolved rectangle lies inside the safe area.
//! 2. Idempotence: identical inputs give identical outputs.
//! 3. Leading-edge clamp: with shifting enabled the panel never starts
//!    before the top/left boundary, whatever its size.
//! 4. Flip correctness: a flipped `top-*` result sits entirely above the
//!    trigger, separated by the offset.
//! 5. Flip only mirrors the side: the alignment is always preserved.
//! 6. No overflow, no change: when the preferred placement fits, the result
//!    equals the raw resolver output.
//!
//! Coordinates are drawn from integers so every comparison is exact.

use anchorage_core::{
    Placement, PlacementOptions, Rect, Sides, Size, resolve_position, resolver,
};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

fn arb_placement() -> impl Strategy<Value = Placement> {
    prop::sample::select(Placement::ALL.to_vec())
}

fn arb_viewport() -> impl Strategy<Value = Size> {
    (320i32..=2560, 240i32..=1600).prop_map(|(w, h)| Size::new(f64::from(w), f64::from(h)))
}

fn arb_boundary() -> impl Strategy<Value = Sides> {
    (0i32..=24, 0i32..=24, 0i32..=24, 0i32..=24).prop_map(|(t, r, b, l)| {
        Sides::new(f64::from(t), f64::from(r), f64::from(b), f64::from(l))
    })
}

/// Trigger anywhere around (and partly outside) the viewport.
fn arb_trigger(viewport: Size) -> impl Strategy<Value = Rect> {
    let max_x = viewport.width as i32;
    let max_y = viewport.height as i32;
    (-200..max_x + 200, -200..max_y + 200, 0i32..=300, 0i32..=120).prop_map(
        |(x, y, w, h)| Rect::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h)),
    )
}

/// Panel no larger than the safe area.
fn arb_fitting_size(viewport: Size, boundary: Sides) -> impl Strategy<Value = Size> {
    let max_w = (viewport.width - boundary.horizontal_sum()) as i32;
    let max_h = (viewport.height - boundary.vertical_sum()) as i32;
    (0..=max_w, 0..=max_h).prop_map(|(w, h)| Size::new(f64::from(w), f64::from(h)))
}

fn arb_any_size() -> impl Strategy<Value = Size> {
    (0i32..=4000, 0i32..=4000).prop_map(|(w, h)| Size::new(f64::from(w), f64::from(h)))
}

fn arb_options(boundary: Sides) -> impl Strategy<Value = PlacementOptions> {
    (arb_placement(), 0i32..=16, any::<bool>()).prop_map(move |(placement, offset, flip)| {
        PlacementOptions::new(placement)
            .offset(f64::from(offset))
            .boundary(boundary)
            .allow_flip(flip)
            .allow_shift(true)
    })
}

#[derive(Debug, Clone)]
struct Case {
    viewport: Size,
    trigger: Rect,
    size: Size,
    options: PlacementOptions,
}

fn arb_fitting_case() -> impl Strategy<Value = Case> {
    (arb_viewport(), arb_boundary()).prop_flat_map(|(viewport, boundary)| {
        (
            arb_trigger(viewport),
            arb_fitting_size(viewport, boundary),
            arb_options(boundary),
        )
            .prop_map(move |(trigger, size, options)| Case {
                viewport,
                trigger,
                size,
                options,
            })
    })
}

fn arb_any_case() -> impl Strategy<Value = Case> {
    (arb_viewport(), arb_boundary()).prop_flat_map(|(viewport, boundary)| {
        (arb_trigger(viewport), arb_any_size(), arb_options(boundary)).prop_map(
            move |(trigger, size, options)| Case {
                viewport,
                trigger,
                size,
                options,
            },
        )
    })
}

// ── 1. Containment ────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn fitting_panel_is_contained(case in arb_fitting_case()) {
        let position = resolve_position(&case.trigger, case.size, case.viewport, &case.options);
        let safe = case.options.boundary.safe_area(case.viewport);
        prop_assume!(case.size.fits_within(safe.size()));
        let rect = position.rect(case.size);
        prop_assert!(
            safe.contains_rect(&rect),
            "rect {rect:?} escapes safe area {safe:?} ({case:?})"
        );
    }
}

// ── 2. Idempotence ────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resolve_is_deterministic(case in arb_any_case()) {
        let a = resolve_position(&case.trigger, case.size, case.viewport, &case.options);
        let b = resolve_position(&case.trigger, case.size, case.viewport, &case.options);
        prop_assert_eq!(a, b);
    }
}

// ── 3. Leading-edge clamp ─────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn never_starts_before_leading_boundary(case in arb_any_case()) {
        let position = resolve_position(&case.trigger, case.size, case.viewport, &case.options);
        prop_assert!(position.left >= case.options.boundary.left);
        prop_assert!(position.top >= case.options.boundary.top);
    }
}

// ── 4. Flip correctness ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn flipped_to_top_sits_above_trigger(
        left in 0i32..700,
        gap in 1i32..60,
        height in 60i32..300,
    ) {
        // Trigger hugging the bottom edge with room above.
        let viewport = Size::new(1024.0, 768.0);
        let size = Size::new(256.0, f64::from(height));
        let bottom = viewport.height - f64::from(gap);
        let trigger = Rect::from_edges(bottom - 30.0, f64::from(left), f64::from(left) + 100.0, bottom);
        let options = PlacementOptions::default();

        let position = resolve_position(&trigger, size, viewport, &options);
        prop_assert_eq!(position.placement, Placement::TopStart);
        prop_assert!(position.top + size.height <= trigger.top() - options.offset);
    }

    #[test]
    fn flip_preserves_alignment(case in arb_any_case()) {
        let position = resolve_position(&case.trigger, case.size, case.viewport, &case.options);
        let preferred = case.options.preferred_placement;
        prop_assert_eq!(position.placement.alignment(), preferred.alignment());
        prop_assert!(
            position.placement == preferred || position.placement == preferred.opposite()
        );
        if !case.options.allow_flip {
            prop_assert_eq!(position.placement, preferred);
        }
    }
}

// ── 6. No overflow, no change ─────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fitting_preferred_placement_is_untouched(
        placement in arb_placement(),
        x in 300i32..600,
        y in 250i32..400,
    ) {
        let viewport = Size::new(1600.0, 1200.0);
        let size = Size::new(200.0, 200.0);
        let trigger = Rect::new(f64::from(x), f64::from(y), 80.0, 30.0);
        let options = PlacementOptions::new(placement);

        let raw = resolver::resolve(&trigger, size, placement, options.offset);
        let position = resolve_position(&trigger, size, viewport, &options);
        prop_assert_eq!(position.placement, placement);
        prop_assert_eq!(position.point(), raw);
    }
}
