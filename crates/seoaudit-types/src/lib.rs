//! Stable DTOs and IDs used across the seoaudit workspace.
//!
//! This crate is intentionally boring:
//! - the finding and audit result model
//! - the report envelope written by the CLI
//! - stable string IDs for checks and finding categories
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;
pub mod report;

pub use explain::{ExamplePair, Explanation, all_check_ids, lookup_explanation};
pub use receipt::{AuditResult, Finding, Status};
pub use report::{AuditReport, SCHEMA_REPORT_V1, SourceMeta, ToolMeta};
