//! Render use cases over a saved or in-memory report.

use anyhow::Context;
use seoaudit_types::AuditReport;

pub fn render_text(report: &AuditReport) -> String {
    seoaudit_render::render_narrative(&report.result)
}

pub fn render_html(report: &AuditReport) -> String {
    seoaudit_render::render_html_fragment(&report.result)
}

/// The bare result as pretty JSON, without the envelope.
pub fn render_result_json(report: &AuditReport) -> anyhow::Result<String> {
    seoaudit_render::render_json(&report.result).context("render result json")
}
