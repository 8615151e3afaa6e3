#![no_main]

use anchorage_core::{Placement, PlacementOptions, Rect, Sides, Size, resolve_position};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    trigger: (i16, i16, u16, u16),
    panel: (u16, u16),
    viewport: (u16, u16),
    boundary: (u8, u8, u8, u8),
    offset: u8,
    placement: u8,
    allow_flip: bool,
    allow_shift: bool,
}

fuzz_target!(|input: Input| {
    let (x, y, w, h) = input.trigger;
    let trigger = Rect::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h));
    let size = Size::new(f64::from(input.panel.0), f64::from(input.panel.1));
    let viewport = Size::new(f64::from(input.viewport.0), f64::from(input.viewport.1));
    let (bt, br, bb, bl) = input.boundary;
    let boundary = Sides::new(f64::from(bt), f64::from(br), f64::from(bb), f64::from(bl));
    let placement = Placement::ALL[usize::from(input.placement) % Placement::ALL.len()];

    let options = PlacementOptions::new(placement)
        .offset(f64::from(input.offset))
        .boundary(boundary)
        .allow_flip(input.allow_flip)
        .allow_shift(input.allow_shift);

    let position = resolve_position(&trigger, size, viewport, &options);

    // Post-conditions that must always hold:
    assert!(position.top.is_finite() && position.left.is_finite());
    assert_eq!(
        position,
        resolve_position(&trigger, size, viewport, &options),
        "not deterministic"
    );
    assert_eq!(position.placement.alignment(), placement.alignment());
    if !input.allow_flip {
        assert_eq!(position.placement, placement);
    }

    if input.allow_shift {
        assert!(position.top >= boundary.top, "top above safe area");
        assert!(position.left >= boundary.left, "left before safe area");

        let safe = boundary.safe_area(viewport);
        if size.fits_within(safe.size()) && !safe.is_empty() {
            assert!(
                safe.contains_rect(&position.rect(size)),
                "fitting panel escaped safe area"
            );
        }
    }
});
