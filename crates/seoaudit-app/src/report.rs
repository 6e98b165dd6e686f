use anyhow::Context;
use seoaudit_types::{AuditReport, SCHEMA_REPORT_V1};

/// Parse a saved report, rejecting envelopes with an unknown schema id.
pub fn parse_report_json(text: &str) -> anyhow::Result<AuditReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    match schema.as_str() {
        SCHEMA_REPORT_V1 => serde_json::from_value(value).context("parse seoaudit v1 report"),
        "" => anyhow::bail!("report has no schema field"),
        other => anyhow::bail!("unknown report schema: {other} (expected {SCHEMA_REPORT_V1})"),
    }
}

pub fn serialize_report(report: &AuditReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// JSON schema of the report envelope.
pub fn report_schema() -> anyhow::Result<serde_json::Value> {
    let schema = schemars::schema_for!(AuditReport);
    serde_json::to_value(&schema).context("serialize report schema")
}
