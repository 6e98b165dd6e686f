//! Renderers for a finished [`AuditResult`](seoaudit_types::AuditResult).
//!
//! All three formats read the same result and never re-derive any of it.

#![forbid(unsafe_code)]

mod html;
mod json;
mod narrative;

pub use html::{escape_html, render_html_fragment};
pub use json::render_json;
pub use narrative::render_narrative;

use seoaudit_types::Status;

fn glyph(status: Status) -> &'static str {
    match status {
        Status::Pass => "✅",
        Status::Warning => "⚠️",
        Status::Error => "❌",
        Status::Info => "ℹ️",
    }
}
