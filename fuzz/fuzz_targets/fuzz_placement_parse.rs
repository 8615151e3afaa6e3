#![no_main]

use anchorage_core::Placement;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 256 {
        return;
    }

    // Parsing must never panic; a successful parse must round-trip.
    if let Ok(placement) = text.parse::<Placement>() {
        assert_eq!(placement.as_str().parse::<Placement>(), Ok(placement));
        assert!(text.trim().eq_ignore_ascii_case(placement.as_str()));
    }
});
