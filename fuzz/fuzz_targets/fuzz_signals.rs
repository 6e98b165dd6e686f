//! Fuzz target for runtime signals attached to a page.
//!
//! Goal: arbitrary selectors and signal JSON may be rejected, but must **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_signals
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seoaudit_page::{RuntimeSignals, StaticPage};

#[derive(Arbitrary, Debug)]
struct SignalsInput {
    html: String,
    signals_json: String,
}

fuzz_target!(|input: SignalsInput| {
    if input.html.len() > 16 * 1024 || input.signals_json.len() > 4096 {
        return;
    }
    let Ok(signals) = RuntimeSignals::parse(&input.signals_json) else {
        return;
    };
    let _ = StaticPage::with_signals(&input.html, signals);
});
