//! Fuzz target for HTML snapshot parsing and element inspection.
//!
//! Goal: building a page and reading every accessor on every element should **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_page_inspect
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let html = String::from_utf8_lossy(data);
    let _ = seoaudit_page::fuzz::inspect_page(&html);
});
