//! The `audit` use case: resolve config, build the page snapshot, run the engine and wrap the
//! result in a report envelope.

use anyhow::Context;
use seoaudit_page::{RuntimeSignals, StaticPage};
use seoaudit_settings::{Overrides, ResolvedConfig};
use seoaudit_types::{AuditReport, SCHEMA_REPORT_V1, SourceMeta, ToolMeta};
use time::OffsetDateTime;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Display name of the snapshot, recorded in the report.
    pub document: &'a str,
    /// HTML text of the page.
    pub html: &'a str,
    /// Runtime signals JSON, if captured.
    pub signals_text: Option<&'a str>,
    /// Hostname override; takes precedence over the signals file.
    pub hostname: Option<String>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: AuditReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the audit use case.
pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        seoaudit_settings::SeoauditConfigV1::default()
    } else {
        seoaudit_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        seoaudit_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let signals = match input.signals_text {
        Some(text) => RuntimeSignals::parse(text)?,
        None => RuntimeSignals::default(),
    };
    let mut page = StaticPage::with_signals(input.html, signals).context("build page snapshot")?;
    if let Some(hostname) = input.hostname {
        page.set_hostname(hostname);
    }
    let hostname = seoaudit_domain::Document::hostname(&page);

    tracing::info!(
        document = input.document,
        profile = %resolved.effective.profile,
        elements = page.element_count(),
        "running audit"
    );
    let result = seoaudit_domain::run_audit(&page, &resolved.effective)
        .with_context(|| format!("audit {}", input.document))?;

    let finished_at = OffsetDateTime::now_utc();
    tracing::info!(
        score = result.score,
        findings = result.checks.len(),
        incomplete = result.incomplete,
        "audit finished"
    );

    let report = AuditReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "seoaudit".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        source: SourceMeta {
            document: input.document.to_string(),
            hostname,
        },
        profile: resolved.effective.profile.clone(),
        result,
    };

    Ok(AuditOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map the score to an exit code: 2 when below `min_score`, 0 otherwise.
pub fn score_exit_code(score: u8, min_score: Option<u8>) -> i32 {
    match min_score {
        Some(min) if score < min => 2,
        _ => 0,
    }
}
