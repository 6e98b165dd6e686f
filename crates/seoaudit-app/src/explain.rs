//! The `explain` use case: look up remediation guidance for a check or finding category.

use seoaudit_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the available check ids.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a check id or finding category.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    for (label, markup) in [
        ("Before (finding):", exp.examples.before),
        ("After (fixed):", exp.examples.after),
    ] {
        out.push_str(label);
        out.push_str("\n```html\n");
        out.push_str(markup);
        out.push_str("\n```\n");
        if label.starts_with("Before") {
            out.push('\n');
        }
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, check_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown check id or category: {identifier}\n\n"));
    out.push_str("Available check ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {id}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_check_id() {
        let output = run_explain("seo.headings");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_known_category() {
        let ExplainOutput::Found(exp) = run_explain("Meta Description") else {
            panic!("expected Found");
        };
        let ExplainOutput::Found(by_id) = run_explain("seo.meta") else {
            panic!("expected Found");
        };
        assert_eq!(exp.title, by_id.title);
    }

    #[test]
    fn explain_unknown() {
        let ExplainOutput::NotFound {
            identifier,
            available_check_ids,
        } = run_explain("seo.nope")
        else {
            panic!("expected NotFound");
        };
        assert_eq!(identifier, "seo.nope");
        assert_eq!(available_check_ids.len(), 8);
    }

    #[test]
    fn format_explanation_output() {
        let ExplainOutput::Found(exp) = run_explain("seo.structured_data") else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with(exp.title));
        assert!(formatted.contains("Remediation"));
        assert!(formatted.contains("Before (finding):\n```html\n"));
        assert!(formatted.contains("After (fixed):\n```html\n"));
        assert!(formatted.ends_with("```\n"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["seo.one", "seo.two"]);
        assert!(formatted.contains("Unknown check id or category: missing"));
        assert!(formatted.contains("Available check ids:"));
        assert!(formatted.contains("  - seo.one\n"));
        assert!(formatted.contains("  - seo.two\n"));
    }
}
