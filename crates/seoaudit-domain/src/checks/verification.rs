use crate::checks::utils::exists;
use crate::collect::Collector;
use crate::document::{AccessError, Document};
use crate::policy::{CheckPolicy, EffectiveConfig};
use seoaudit_types::{Finding, ids};

pub fn run(
    doc: &dyn Document,
    _cfg: &EffectiveConfig,
    _policy: &CheckPolicy,
    out: &mut Collector,
) -> Result<(), AccessError> {
    if exists(doc, r#"meta[name="google-site-verification"]"#)? {
        out.push(Finding::pass(
            ids::CATEGORY_GOOGLE_VERIFICATION,
            "Google verification meta tag found",
        ));
    } else {
        out.push(Finding::info(
            ids::CATEGORY_GOOGLE_VERIFICATION,
            "Google verification meta tag not found (optional if using file method)",
        ));
    }

    if exists(doc, r#"meta[name="msvalidate.01"]"#)? {
        out.push(Finding::pass(
            ids::CATEGORY_BING_VERIFICATION,
            "Bing verification meta tag found",
        ));
    } else {
        out.push(Finding::warning(
            ids::CATEGORY_BING_VERIFICATION,
            "Bing verification meta tag not found",
        ))
        .recommend(
            r#"Add Bing Webmaster verification: <meta name="msvalidate.01" content="YOUR_CODE">"#,
        );
    }

    if exists(doc, r#"meta[name="yandex-verification"]"#)? {
        out.push(Finding::pass(
            ids::CATEGORY_YANDEX_VERIFICATION,
            "Yandex verification meta tag found",
        ));
    } else {
        out.push(Finding::info(
            ids::CATEGORY_YANDEX_VERIFICATION,
            "Yandex verification not configured",
        ));
    }

    Ok(())
}
