use crate::glyph;
use seoaudit_types::AuditResult;

/// Embeddable `<div class="seo-audit-report">` fragment. Every piece of text
/// taken from the result is escaped.
pub fn render_html_fragment(result: &AuditResult) -> String {
    let mut out = String::new();

    out.push_str("<div class=\"seo-audit-report\">\n");
    out.push_str("  <h2>🔍 SEO Audit Report</h2>\n");
    out.push_str("  <div class=\"score-box\">\n");
    out.push_str(&format!(
        "    <div class=\"score {}\">{}</div>\n",
        score_tier(result.score),
        result.score
    ));
    out.push_str("    <span>Overall SEO Score</span>\n");
    if result.incomplete {
        out.push_str("    <span class=\"incomplete\">Incomplete: no checks produced findings</span>\n");
    }
    out.push_str("  </div>\n");

    if !result.errors.is_empty() {
        push_list(
            &mut out,
            "errors",
            &format!("❌ Critical Issues ({})", result.errors.len()),
            result.errors.iter().map(|e| escape_html(e)),
        );
    }

    if !result.recommendations.is_empty() {
        push_list(
            &mut out,
            "recommendations",
            &format!("💡 Recommendations ({})", result.recommendations.len()),
            result.recommendations.iter().map(|r| escape_html(r)),
        );
    }

    push_list(
        &mut out,
        "checks",
        "📋 Detailed Checks",
        result.checks.iter().map(|c| {
            format!(
                "<strong>{} {}:</strong> {}",
                glyph(c.status),
                escape_html(&c.category),
                escape_html(&c.message)
            )
        }),
    );

    out.push_str("</div>\n");
    out
}

fn push_list(out: &mut String, class: &str, heading: &str, items: impl Iterator<Item = String>) {
    out.push_str(&format!("  <div class=\"section {class}\">\n"));
    out.push_str(&format!("    <h3>{heading}</h3>\n"));
    out.push_str("    <ul>\n");
    for item in items {
        out.push_str(&format!("      <li>{item}</li>\n"));
    }
    out.push_str("    </ul>\n");
    out.push_str("  </div>\n");
}

fn score_tier(score: u8) -> &'static str {
    match score {
        80.. => "good",
        50..=79 => "fair",
        _ => "poor",
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
