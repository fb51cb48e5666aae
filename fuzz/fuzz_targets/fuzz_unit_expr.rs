//! Fuzz target for the unit expression parser
//!
//! Arbitrary input must produce a signature or a `UnitError`, never a panic.
//! Successful parses are re-rendered and checked for consistency.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sipp::dynamic::UnitRegistry;

fuzz_target!(|data: &[u8]| {
    let Ok(expr) = std::str::from_utf8(data) else {
        return;
    };
    let registry = UnitRegistry::with_si();
    if let Ok(sig) = registry.parse(expr) {
        // Dividing by itself always cancels
        if let Ok(ratio) = sig.div(&sig) {
            assert!(ratio.is_dimensionless());
        }
        let _ = sig.to_string();
    }
});
