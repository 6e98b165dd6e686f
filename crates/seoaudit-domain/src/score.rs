//! Severity-weighted score reduction.

use seoaudit_types::{Finding, Status};

pub const ERROR_PENALTY: i64 = 10;
pub const WARNING_PENALTY: i64 = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pass: u32,
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl StatusCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = StatusCounts::default();
        for f in findings {
            match f.status {
                Status::Pass => counts.pass += 1,
                Status::Info => counts.info += 1,
                Status::Warning => counts.warning += 1,
                Status::Error => counts.error += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.pass + self.info + self.warning + self.error
    }
}

/// Reduce findings to a score in `0..=100`.
///
/// `round(100 * pass / total) - 10 * errors - 5 * warnings`, clamped.
/// Returns `None` when there are no findings, since the ratio is undefined.
pub fn calculate_score(findings: &[Finding]) -> Option<u8> {
    let counts = StatusCounts::from_findings(findings);
    let total = counts.total();
    if total == 0 {
        return None;
    }

    // f64::round rounds half away from zero.
    let base = (100.0 * f64::from(counts.pass) / f64::from(total)).round() as i64;
    let score = base
        - ERROR_PENALTY * i64::from(counts.error)
        - WARNING_PENALTY * i64::from(counts.warning);

    Some(score.clamp(0, 100) as u8)
}
