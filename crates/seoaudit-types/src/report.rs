use crate::AuditResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for seoaudit reports.
pub const SCHEMA_REPORT_V1: &str = "seoaudit.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// What was audited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceMeta {
    /// Display name of the snapshot (usually the HTML file path).
    pub document: String,
    /// Hostname used to classify links as internal or external.
    pub hostname: String,
}

/// Report envelope written by the CLI.
///
/// The envelope adds run metadata around an [`AuditResult`]; renderers only ever
/// see the inner result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub source: SourceMeta,
    pub profile: String,
    pub result: AuditResult,
}
