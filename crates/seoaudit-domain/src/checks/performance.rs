use crate::collect::Collector;
use crate::document::{AccessError, Document};
use crate::policy::{CheckPolicy, EffectiveConfig};
use seoaudit_types::{Finding, ids};

pub fn run(
    doc: &dyn Document,
    cfg: &EffectiveConfig,
    _policy: &CheckPolicy,
    out: &mut Collector,
) -> Result<(), AccessError> {
    // No timing (or a load that has not finished yet) yields no finding.
    if let Some(timing) = doc.navigation_timing() {
        let load_ms = timing.load_time_ms();
        let seconds = load_ms / 1000.0;
        if load_ms > 0.0 && load_ms < cfg.thresholds.max_load_time_ms {
            out.push(Finding::pass(
                ids::CATEGORY_PAGE_LOAD_TIME,
                format!("Load time: {seconds:.2}s (good)"),
            ));
        } else if load_ms >= cfg.thresholds.max_load_time_ms {
            out.push(Finding::warning(
                ids::CATEGORY_PAGE_LOAD_TIME,
                format!("Load time: {seconds:.2}s (consider optimizing)"),
            ))
            .recommend("Optimize page load time for better user experience and SEO");
        }
    }

    let scripts = doc.select("script[src]")?.len();
    let stylesheets = doc.select(r#"link[rel="stylesheet"]"#)?.len();
    out.push(Finding::info(
        ids::CATEGORY_RESOURCES,
        format!("{scripts} external scripts, {stylesheets} stylesheets"),
    ));

    Ok(())
}
