use crate::glyph;
use seoaudit_types::AuditResult;

const RULE_WIDTH: usize = 60;

/// Plain-text console report.
pub fn render_narrative(result: &AuditResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\n🔍 SEO AUDIT REPORT\n{rule}\n"));
    if result.incomplete {
        out.push_str(&format!(
            "\n📊 Overall SEO Score: {}/100 (incomplete: no checks produced findings)\n\n",
            result.score
        ));
    } else {
        out.push_str(&format!("\n📊 Overall SEO Score: {}/100\n\n", result.score));
    }

    if !result.errors.is_empty() {
        out.push_str("❌ CRITICAL ISSUES:\n");
        for (i, err) in result.errors.iter().enumerate() {
            out.push_str(&format!("   {}. {}\n", i + 1, err));
        }
        out.push('\n');
    }

    if !result.recommendations.is_empty() {
        out.push_str("💡 RECOMMENDATIONS:\n");
        for (i, rec) in result.recommendations.iter().enumerate() {
            out.push_str(&format!("   {}. {}\n", i + 1, rec));
        }
        out.push('\n');
    }

    out.push_str("📋 DETAILED CHECKS:\n");
    for check in &result.checks {
        out.push_str(&format!(
            "   {} {}: {}\n",
            glyph(check.status),
            check.category,
            check.message
        ));
    }

    out.push_str(&format!("\n{rule}\n"));
    out
}
