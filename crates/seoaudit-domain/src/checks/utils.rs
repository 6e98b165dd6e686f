use crate::document::{AccessError, Document, Element};
use globset::{Glob, GlobSet, GlobSetBuilder};

pub fn first(doc: &dyn Document, selector: &str) -> Result<Option<Element>, AccessError> {
    Ok(doc.select(selector)?.into_iter().next())
}

pub fn exists(doc: &dyn Document, selector: &str) -> Result<bool, AccessError> {
    Ok(first(doc, selector)?.is_some())
}

pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        // Host globs are matched case-insensitively, like hostnames.
        let glob = Glob::new(&pattern.to_ascii_lowercase())
            .expect("allowlist patterns must be validated in seoaudit-settings");
        builder.add(glob);
    }
    Some(
        builder
            .build()
            .expect("allowlist patterns must be validated in seoaudit-settings"),
    )
}

pub fn is_allowed(allow: Option<&GlobSet>, value: &str) -> bool {
    allow
        .map(|set| set.is_match(value.to_ascii_lowercase()))
        .unwrap_or(false)
}

/// Leading numeric prefix of a CSS length, e.g. `15.5px` -> `15.5`.
pub fn parse_leading_number(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Host part of an absolute `http(s)` URL.
pub fn host_of(href: &str) -> Option<&str> {
    let rest = href
        .strip_prefix("https://")
        .or_else(|| href.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host_port = authority.rsplit('@').next().unwrap_or(authority);
    let host = host_port.split(':').next().unwrap_or(host_port);
    (!host.is_empty()).then_some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_number_parses_css_lengths() {
        assert_eq!(parse_leading_number("16px"), Some(16.0));
        assert_eq!(parse_leading_number("  15.5px"), Some(15.5));
        assert_eq!(parse_leading_number("1.2em"), Some(1.2));
        assert_eq!(parse_leading_number("px"), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn host_of_extracts_authority() {
        assert_eq!(host_of("https://example.com/a"), Some("example.com"));
        assert_eq!(host_of("http://user@cdn.example.com:8080?q"), Some("cdn.example.com"));
        assert_eq!(host_of("httpfoo"), None);
        assert_eq!(host_of("/relative"), None);
    }

    #[test]
    fn allowlist_matches_case_insensitively() {
        let set = build_allowlist(&["*.Example.com".to_string()]);
        assert!(is_allowed(set.as_ref(), "CDN.example.com"));
        assert!(!is_allowed(set.as_ref(), "example.org"));
        assert!(!is_allowed(None, "example.com"));
    }
}
