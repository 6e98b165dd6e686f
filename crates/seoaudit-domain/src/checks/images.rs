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
    let images = doc.select("img")?;
    if images.is_empty() {
        out.push(Finding::info(ids::CATEGORY_IMAGES, "No images found on page"));
        return Ok(());
    }

    let total = images.len();
    let without_alt = images
        .iter()
        .filter(|img| {
            doc.attribute(**img, "alt")
                .is_none_or(|alt| alt.trim().is_empty())
        })
        .count();

    if without_alt == 0 {
        out.push(Finding::pass(
            ids::CATEGORY_IMAGE_ALT_TEXT,
            format!("All {total} images have alt attributes"),
        ));
    } else {
        out.push(Finding::warning(
            ids::CATEGORY_IMAGE_ALT_TEXT,
            format!("{without_alt}/{total} images missing or have empty alt text"),
        ))
        .recommend("Add descriptive alt text to all images for accessibility and SEO");
    }

    let limit = cfg.thresholds.max_image_dimension_px;
    let oversized = images
        .iter()
        .filter_map(|img| doc.bounding_geometry(*img))
        .filter(|g| g.width > limit || g.height > limit)
        .count();

    if oversized > 0 {
        out.push(Finding::warning(
            ids::CATEGORY_IMAGE_SIZE,
            format!("{oversized} images may be oversized (>{limit}px)"),
        ))
        .recommend("Optimize large images to improve page load speed");
    }

    Ok(())
}
