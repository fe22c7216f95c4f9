//! Fuzz target for document scanning and analysis.
//!
//! Goal: The scanner should **never panic** on any input.
//! Invalid UTF-8 must surface as a structured error, not a crash.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_scan
//! ```

#![no_main]

use cuiguard_engine::{AnalysisContext, InspectionPolicy, Ruleset, RulesetProfile};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Keep inputs bounded so fuzzing stays fast.
    if data.len() > 64 * 1024 {
        return;
    }

    let ruleset = Ruleset::load(RulesetProfile::Defense).expect("builtin ruleset loads");
    let policy = InspectionPolicy::standard();

    let ctx = AnalysisContext {
        run_id: "fuzz".to_string(),
        document_ref: "fuzz.txt".to_string(),
        created_at: time::OffsetDateTime::UNIX_EPOCH,
    };

    // Errors are fine; panics are not.
    let _ = cuiguard_engine::analyze(data, &ruleset, &policy, ctx);
});
