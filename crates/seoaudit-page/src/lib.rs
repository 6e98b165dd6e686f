//! Static page snapshots for the audit engine.
//!
//! [`StaticPage`] implements [`seoaudit_domain::Document`] over parsed HTML
//! text. Layout and timing data that only a browser can produce are supplied
//! through [`RuntimeSignals`]; anything missing falls back to what the markup
//! itself declares.
//!
//! This crate does not touch the filesystem. Callers read the HTML and signals
//! files and hand over strings.

#![forbid(unsafe_code)]

mod page;
mod signals;

pub use page::StaticPage;
pub use signals::RuntimeSignals;

/// Fuzz-friendly entry point: parse arbitrary text as a page and run every
/// accessor once. **Never panics** on any input.
pub mod fuzz {
    use seoaudit_domain::Document;

    pub fn inspect_page(html: &str) -> usize {
        let page = super::StaticPage::parse(html);
        let Ok(all) = page.select("*") else {
            return 0;
        };
        for el in &all {
            let _ = page.tag_name(*el);
            let _ = page.text_content(*el);
            let _ = page.computed_style(*el, "font-size");
            let _ = page.bounding_geometry(*el);
        }
        all.len()
    }
}
