//! Fuzz target for name normalization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rollcall::normalize;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let once = normalize(raw);
    assert_eq!(normalize(once.as_str()), once);
    assert!(!once.as_str().contains("  "));
});
