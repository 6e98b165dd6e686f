use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of a single inspection.
///
/// Variants are declared in severity order, so `Ord` ranks `Error` highest.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Info,
    Warning,
    Error,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Info => "info",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub category: String,
    pub status: Status,
    pub message: String,
}

impl Finding {
    pub fn new(category: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            status,
            message: message.into(),
        }
    }

    pub fn pass(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(category, Status::Pass, message)
    }

    pub fn info(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(category, Status::Info, message)
    }

    pub fn warning(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(category, Status::Warning, message)
    }

    pub fn error(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(category, Status::Error, message)
    }
}

/// Complete output of one audit run.
///
/// `checks` holds every finding in rule execution order. `errors` and
/// `recommendations` are annotations recorded by the same rule call that
/// appended the triggering finding; they are never re-derived from `checks`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditResult {
    pub score: u8,
    pub checks: Vec<Finding>,
    pub errors: Vec<String>,
    pub warnings_count: u32,
    pub recommendations: Vec<String>,

    /// Set when no finding was produced, so `score` carries no signal.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub incomplete: bool,
}

impl AuditResult {
    pub fn count(&self, status: Status) -> usize {
        self.checks.iter().filter(|f| f.status == status).count()
    }
}
