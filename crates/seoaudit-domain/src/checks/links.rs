use crate::checks::utils::{build_allowlist, host_of, is_allowed};
use crate::collect::Collector;
use crate::document::{AccessError, Document};
use crate::policy::{CheckPolicy, EffectiveConfig};
use globset::GlobSet;
use seoaudit_types::{Finding, ids};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LinkKind {
    Internal,
    External,
    Other,
}

pub fn run(
    doc: &dyn Document,
    cfg: &EffectiveConfig,
    policy: &CheckPolicy,
    out: &mut Collector,
) -> Result<(), AccessError> {
    let allow = build_allowlist(&policy.allow);
    let hostname = doc.hostname();

    let mut internal = 0usize;
    let mut external = 0usize;
    let mut without_nofollow = 0usize;

    for link in doc.select("a")? {
        let Some(href) = doc.attribute(link, "href") else {
            continue;
        };
        match classify(&href, &hostname, allow.as_ref()) {
            LinkKind::Internal => internal += 1,
            LinkKind::External => {
                external += 1;
                let nofollow = doc.attribute(link, "rel").is_some_and(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|token| token.eq_ignore_ascii_case("nofollow"))
                });
                if !nofollow {
                    without_nofollow += 1;
                }
            }
            LinkKind::Other => {}
        }
    }

    out.push(Finding::info(
        ids::CATEGORY_INTERNAL_LINKS,
        format!("{internal} internal links found"),
    ));
    out.push(Finding::info(
        ids::CATEGORY_EXTERNAL_LINKS,
        format!("{external} external links found"),
    ));

    if without_nofollow > cfg.thresholds.max_external_links_without_nofollow {
        out.push(Finding::warning(
            ids::CATEGORY_EXTERNAL_LINK_ATTRIBUTES,
            format!("{without_nofollow} external links without rel=\"nofollow\""),
        ))
        .recommend("Consider adding rel=\"nofollow\" to external links that pass SEO value");
    }

    Ok(())
}

fn classify(href: &str, hostname: &str, allow: Option<&GlobSet>) -> LinkKind {
    if href.starts_with("http") {
        let own_host = !hostname.is_empty() && href.contains(hostname);
        let allowed = host_of(href).is_some_and(|host| is_allowed(allow, host));
        if own_host || allowed {
            // Absolute links to the page's own host are neither counted as
            // internal nor external.
            return LinkKind::Other;
        }
        return LinkKind::External;
    }

    let relative = ["/", "./", "../", "#"].iter().any(|p| href.starts_with(p));
    if relative && href != "#" {
        LinkKind::Internal
    } else {
        LinkKind::Other
    }
}
