//! Fuzz target for `seoaudit.toml` parsing and resolution.
//!
//! Goal: invalid configs produce errors, never panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use seoaudit_settings::{Overrides, parse_config_toml, resolve_config};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = parse_config_toml(text) {
        let _ = resolve_config(cfg, Overrides::default());
    }
});
