use crate::collect::Collector;
use crate::document::{AccessError, Document};
use crate::policy::{CheckPolicy, EffectiveConfig};
use seoaudit_types::{Finding, ids};

const H1_EXCERPT_CHARS: usize = 50;

pub fn run(
    doc: &dyn Document,
    _cfg: &EffectiveConfig,
    _policy: &CheckPolicy,
    out: &mut Collector,
) -> Result<(), AccessError> {
    let h1s = doc.select("h1")?;
    match h1s.as_slice() {
        [] => {
            out.push(Finding::error(ids::CATEGORY_H1_HEADING, "Missing H1 tag"))
                .critical("Page has no H1 heading - critical for SEO");
        }
        [only] => {
            let text = doc.text_content(*only);
            out.push(Finding::pass(
                ids::CATEGORY_H1_HEADING,
                format!("One H1 found: \"{}\"", excerpt(text.trim())),
            ));
        }
        many => {
            out.push(Finding::warning(
                ids::CATEGORY_H1_HEADING,
                format!("Multiple H1s found ({})", many.len()),
            ))
            .recommend("Use only one H1 tag per page");
        }
    }

    let h2_count = doc.select("h2")?.len();
    if h2_count > 0 {
        out.push(Finding::pass(
            ids::CATEGORY_H2_HEADINGS,
            format!("{h2_count} H2 headings found"),
        ));
    } else {
        out.push(Finding::warning(
            ids::CATEGORY_H2_HEADINGS,
            "No H2 headings found",
        ))
        .recommend("Add H2 headings to structure content");
    }

    let levels: Vec<u8> = doc
        .select("h1, h2, h3, h4, h5, h6")?
        .into_iter()
        .filter_map(|h| heading_level(&doc.tag_name(h)))
        .collect();

    // Only the first skip is reported.
    if let Some(pair) = levels.windows(2).find(|w| w[1] > w[0] + 1) {
        out.push(Finding::warning(
            ids::CATEGORY_HEADING_HIERARCHY,
            format!("Heading levels skip (H{} to H{})", pair[0], pair[1]),
        ))
        .recommend("Maintain proper heading hierarchy (H1 → H2 → H3, not H1 → H3)");
    }

    Ok(())
}

fn heading_level(tag: &str) -> Option<u8> {
    let digit = tag.strip_prefix(['h', 'H'])?;
    match digit.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(H1_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
