use crate::checks::utils::{first, parse_leading_number};
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
    let device_width = first(doc, r#"meta[name="viewport"]"#)?
        .and_then(|viewport| doc.attribute(viewport, "content"))
        .is_some_and(|content| content.contains("width=device-width"));

    if device_width {
        out.push(Finding::pass(
            ids::CATEGORY_MOBILE_RESPONSIVE,
            "Viewport configured for mobile devices",
        ));
    } else {
        out.push(Finding::error(
            ids::CATEGORY_MOBILE_RESPONSIVE,
            "Mobile viewport not properly configured",
        ))
        .critical("Mobile viewport configuration is critical for mobile SEO");
    }

    let min_font = cfg.thresholds.min_font_size_px;
    let font_size = first(doc, "body")?.and_then(|body| doc.computed_style(body, "font-size"));
    let shown = font_size.as_deref().unwrap_or("unknown");
    match font_size.as_deref().and_then(parse_leading_number) {
        Some(px) if px >= min_font => {
            out.push(Finding::pass(
                ids::CATEGORY_FONT_SIZE,
                format!("Base font size: {shown} (mobile-friendly)"),
            ));
        }
        _ => {
            out.push(Finding::warning(
                ids::CATEGORY_FONT_SIZE,
                format!("Base font size: {shown} (consider increasing to {min_font}px for mobile)"),
            ));
        }
    }

    let min_target = cfg.thresholds.min_touch_target_px;
    // Targets without known geometry are not counted either way.
    let measured: Vec<_> = doc
        .select("a, button")?
        .into_iter()
        .filter_map(|target| doc.bounding_geometry(target))
        .collect();
    let undersized = measured
        .iter()
        .filter(|g| g.width < min_target || g.height < min_target)
        .count();

    if undersized > 0 {
        out.push(Finding::warning(
            ids::CATEGORY_TOUCH_TARGETS,
            format!(
                "{undersized} elements smaller than {min_target}x{min_target}px (harder to tap on mobile)"
            ),
        ))
        .recommend(format!(
            "Increase touch target sizes to at least {min_target}x{min_target}px for better mobile usability"
        ));
    } else {
        out.push(Finding::pass(
            ids::CATEGORY_TOUCH_TARGETS,
            format!(
                "All {} measured touch targets are appropriately sized",
                measured.len()
            ),
        ));
    }

    Ok(())
}
