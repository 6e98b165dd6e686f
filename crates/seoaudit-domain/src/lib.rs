//! Pure audit evaluation (no IO).
//!
//! Input: a [`Document`] snapshot implemented elsewhere.
//! Output: an [`AuditResult`](seoaudit_types::AuditResult) with findings, annotations and score.

#![forbid(unsafe_code)]

pub mod collect;
pub mod document;
pub mod policy;
pub mod score;

mod engine;
pub mod checks;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use document::{AccessError, Document, Element, Geometry, NavigationTiming};
pub use engine::{AuditError, run_audit};
