//! Use case orchestration for seoaudit.
//!
//! This crate provides the application layer: use cases that coordinate the settings, page,
//! domain and render layers. It takes file contents as strings and leaves reading and writing
//! files to the caller.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod render;
mod report;

pub use audit::{AuditInput, AuditOutput, run_audit, score_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_html, render_result_json, render_text};
pub use report::{parse_report_json, report_schema, serialize_report};
pub use seoaudit_types::AuditReport;
