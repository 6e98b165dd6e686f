use seoaudit_types::AuditResult;

/// Pretty-printed JSON of the bare result (no report envelope).
pub fn render_json(result: &AuditResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
