//! Fuzz target for the upload parser and the check pipeline behind it.
//!
//! Any byte string must either parse into a table or produce an error.
//! Parsed tables must then run through detection and reconciliation
//! without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rollcall::{Parser, Rollcall};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok((table, _)) = Parser::new().parse_bytes(data, "fuzz.csv") else {
        return;
    };

    if let Ok(result) = Rollcall::new().check_table(&table, None) {
        assert_eq!(
            result.responded_count + result.not_responded_count,
            result.total_students
        );
    }
});
