use crate::checks::utils::{exists, first};
use crate::collect::Collector;
use crate::document::{AccessError, Document};
use crate::policy::{CheckPolicy, EffectiveConfig};
use seoaudit_types::{Finding, ids};

const OPEN_GRAPH_PROPERTIES: &[&str] = &["og:title", "og:description", "og:image"];

pub fn run(
    doc: &dyn Document,
    cfg: &EffectiveConfig,
    _policy: &CheckPolicy,
    out: &mut Collector,
) -> Result<(), AccessError> {
    check_description(doc, cfg, out)?;

    if exists(doc, r#"meta[name="viewport"]"#)? {
        out.push(Finding::pass(
            ids::CATEGORY_META_VIEWPORT,
            "Viewport meta tag present for mobile responsiveness",
        ));
    } else {
        out.push(Finding::error(
            ids::CATEGORY_META_VIEWPORT,
            "Missing viewport meta tag",
        ))
        .critical("Viewport meta tag is missing - critical for mobile SEO");
    }

    match first(doc, r#"link[rel="canonical"]"#)? {
        Some(link) => {
            let href = doc.attribute(link, "href").unwrap_or_default();
            out.push(Finding::pass(
                ids::CATEGORY_CANONICAL_URL,
                format!("Canonical: {href}"),
            ));
        }
        None => {
            out.push(Finding::warning(
                ids::CATEGORY_CANONICAL_URL,
                "Missing canonical link tag",
            ))
            .recommend("Add canonical link to prevent duplicate content issues");
        }
    }

    let mut missing = Vec::new();
    for property in OPEN_GRAPH_PROPERTIES {
        if !exists(doc, &format!(r#"meta[property="{property}"]"#))? {
            missing.push(*property);
        }
    }
    if missing.is_empty() {
        out.push(Finding::pass(
            ids::CATEGORY_OPEN_GRAPH,
            "All required OG tags present",
        ));
    } else {
        out.push(Finding::warning(
            ids::CATEGORY_OPEN_GRAPH,
            format!("Missing: {}", missing.join(", ")),
        ))
        .recommend("Add missing Open Graph tags for better social media sharing");
    }

    if exists(doc, r#"meta[name="twitter:card"]"#)? {
        out.push(Finding::pass(
            ids::CATEGORY_TWITTER_CARD,
            "Twitter Card tag present",
        ));
    } else {
        out.push(Finding::warning(
            ids::CATEGORY_TWITTER_CARD,
            "Missing Twitter Card tag",
        ))
        .recommend("Add Twitter Card meta tags for better Twitter sharing");
    }

    Ok(())
}

fn check_description(
    doc: &dyn Document,
    cfg: &EffectiveConfig,
    out: &mut Collector,
) -> Result<(), AccessError> {
    let Some(meta) = first(doc, r#"meta[name="description"]"#)? else {
        out.push(Finding::error(
            ids::CATEGORY_META_DESCRIPTION,
            "Missing meta description tag",
        ))
        .critical("Meta description tag is missing");
        return Ok(());
    };

    let min = cfg.thresholds.meta_description_min;
    let max = cfg.thresholds.meta_description_max;
    let length = doc
        .attribute(meta, "content")
        // UTF-16 code units, the unit search engines and browsers report.
        .map(|c| c.encode_utf16().count())
        .unwrap_or(0);

    if (min..=max).contains(&length) {
        out.push(Finding::pass(
            ids::CATEGORY_META_DESCRIPTION,
            format!("Length: {length} characters (optimal: {min}-{max})"),
        ));
    } else if length > 0 {
        out.push(Finding::warning(
            ids::CATEGORY_META_DESCRIPTION,
            format!("Length: {length} characters (optimal: {min}-{max})"),
        ))
        .recommend(format!(
            "Optimize meta description length to {min}-{max} characters for better search result snippets"
        ));
    } else {
        out.push(Finding::error(
            ids::CATEGORY_META_DESCRIPTION,
            "Missing meta description",
        ))
        .critical("Meta description is missing");
    }

    Ok(())
}
