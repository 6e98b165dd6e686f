//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, SeoauditConfigV1, ThresholdsConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `seoaudit.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SeoauditConfigV1> {
    let cfg: SeoauditConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile + overrides + per-check config).
pub fn resolve_config(
    cfg: SeoauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
