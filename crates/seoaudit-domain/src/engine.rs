use crate::checks;
use crate::collect::Collector;
use crate::document::{AccessError, Document};
use crate::policy::EffectiveConfig;
use crate::score::calculate_score;
use seoaudit_types::{AuditResult, Finding, Status, ids};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("document could not be read by any of the {attempted} enabled rule modules")]
    DocumentUnreadable {
        attempted: usize,
        #[source]
        source: AccessError,
    },
}

/// Run every enabled rule module against `doc`, in registration order, and
/// score the result.
///
/// A module that fails on document access is recorded as an error finding and
/// the run continues. Only when every enabled module fails does the run itself
/// fail.
pub fn run_audit(doc: &dyn Document, cfg: &EffectiveConfig) -> Result<AuditResult, AuditError> {
    let mut out = Collector::new();
    let mut attempted = 0usize;
    let mut last_failure: Option<AccessError> = None;
    let mut failed = 0usize;

    for rule in checks::registry() {
        let Some(policy) = cfg.check_policy(rule.id) else {
            debug!(check_id = rule.id, "check disabled");
            continue;
        };
        attempted += 1;

        let before = out.findings().len();
        match (rule.run)(doc, cfg, policy, &mut out) {
            Ok(()) => {
                debug!(
                    check_id = rule.id,
                    findings = out.findings().len() - before,
                    "check complete"
                );
            }
            Err(err) => {
                warn!(check_id = rule.id, error = %err, "document access failed");
                out.push(Finding::error(
                    ids::CATEGORY_DOCUMENT_ACCESS,
                    format!("{} could not inspect the document: {}", rule.id, err),
                ))
                .critical(format!("Document could not be inspected for {}", rule.id));
                failed += 1;
                last_failure = Some(err);
            }
        }
    }

    if attempted > 0
        && failed == attempted
        && let Some(source) = last_failure
    {
        return Err(AuditError::DocumentUnreadable { attempted, source });
    }

    let (checks, errors, recommendations) = out.into_parts();
    let score = calculate_score(&checks);
    if score.is_none() {
        warn!("no findings were produced; audit is incomplete");
    }

    let warnings_count = checks.iter().filter(|f| f.status == Status::Warning).count() as u32;

    Ok(AuditResult {
        score: score.unwrap_or(0),
        checks,
        errors,
        warnings_count,
        recommendations,
        incomplete: score.is_none(),
    })
}
