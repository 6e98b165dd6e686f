use crate::model::{SeoauditConfigV1, ThresholdsConfig};
use crate::presets;
use anyhow::Context;
use globset::Glob;
use seoaudit_domain::policy::{CheckPolicy, EffectiveConfig, Thresholds};
use seoaudit_types::all_check_ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: SeoauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .or(cfg.profile)
        .unwrap_or_else(|| "full".to_string());

    let mut effective = presets::preset(&profile);

    // per-check overrides
    for (check_id, cc) in &cfg.checks {
        if !all_check_ids().contains(&check_id.as_str()) {
            anyhow::bail!(
                "unknown check id in [checks]: {check_id} (expected one of: {})",
                all_check_ids().join(", ")
            );
        }
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(check_id, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    apply_thresholds(&mut effective.thresholds, &cfg.thresholds).context("invalid [thresholds]")?;

    Ok(ResolvedConfig { effective })
}

fn validate_allowlist(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid allow glob for {check_id}: {pattern}"))?;
    }
    Ok(())
}

fn apply_thresholds(t: &mut Thresholds, cfg: &ThresholdsConfig) -> anyhow::Result<()> {
    if let Some(v) = cfg.meta_description_min {
        t.meta_description_min = v;
    }
    if let Some(v) = cfg.meta_description_max {
        t.meta_description_max = v;
    }
    if let Some(v) = cfg.max_external_links_without_nofollow {
        t.max_external_links_without_nofollow = v;
    }
    t.max_image_dimension_px = positive(
        "max_image_dimension_px",
        cfg.max_image_dimension_px,
        t.max_image_dimension_px,
    )?;
    t.max_load_time_ms = positive("max_load_time_ms", cfg.max_load_time_ms, t.max_load_time_ms)?;
    t.min_font_size_px = positive("min_font_size_px", cfg.min_font_size_px, t.min_font_size_px)?;
    t.min_touch_target_px = positive(
        "min_touch_target_px",
        cfg.min_touch_target_px,
        t.min_touch_target_px,
    )?;

    if t.meta_description_min > t.meta_description_max {
        anyhow::bail!(
            "meta_description_min ({}) is greater than meta_description_max ({})",
            t.meta_description_min,
            t.meta_description_max
        );
    }
    Ok(())
}

fn positive(name: &str, value: Option<f64>, default: f64) -> anyhow::Result<f64> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => anyhow::bail!("{name} must be a positive number, got {v}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use seoaudit_types::ids;

    fn resolve(toml: &str) -> anyhow::Result<EffectiveConfig> {
        let cfg = parse_config_toml(toml)?;
        Ok(resolve_config(cfg, Overrides::default())?.effective)
    }

    #[test]
    fn empty_config_is_full_profile_with_defaults() {
        let effective = resolve("").expect("resolve");
        assert_eq!(effective.profile, "full");
        assert_eq!(effective.thresholds, Thresholds::default());
        assert_eq!(effective.checks.len(), all_check_ids().len());
    }

    #[test]
    fn cli_profile_overrides_config_profile() {
        let cfg = parse_config_toml(r#"profile = "full""#).expect("parse");
        let effective = resolve_config(
            cfg,
            Overrides {
                profile: Some("static".to_string()),
            },
        )
        .expect("resolve")
        .effective;
        assert_eq!(effective.profile, "static");
        assert!(effective.check_policy(ids::CHECK_SEO_PERFORMANCE).is_none());
    }

    #[test]
    fn per_check_settings_apply() {
        let effective = resolve(
            r#"
[checks."seo.verification"]
enabled = false

[checks."seo.links"]
allow = ["*.cdn.example", "partner.example"]
"#,
        )
        .expect("resolve");

        assert!(effective.check_policy(ids::CHECK_SEO_VERIFICATION).is_none());
        let links = effective
            .check_policy(ids::CHECK_SEO_LINKS)
            .expect("links enabled");
        assert_eq!(links.allow, ["*.cdn.example", "partner.example"]);
    }

    #[test]
    fn config_can_enable_check_disabled_by_profile() {
        let effective = resolve(
            r#"
profile = "static"

[checks."seo.performance"]
enabled = true
"#,
        )
        .expect("resolve");
        assert!(effective.check_policy(ids::CHECK_SEO_PERFORMANCE).is_some());
    }

    #[test]
    fn thresholds_override_defaults() {
        let effective = resolve(
            r#"
[thresholds]
meta_description_min = 100
max_load_time_ms = 2500
min_touch_target_px = 48
"#,
        )
        .expect("resolve");
        assert_eq!(effective.thresholds.meta_description_min, 100);
        assert_eq!(effective.thresholds.meta_description_max, 160);
        assert_eq!(effective.thresholds.max_load_time_ms, 2500.0);
        assert_eq!(effective.thresholds.min_touch_target_px, 48.0);
    }

    #[test]
    fn inverted_description_range_is_rejected() {
        let err = resolve(
            r#"
[thresholds]
meta_description_min = 200
"#,
        )
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid [thresholds]"), "{msg}");
        assert!(msg.contains("meta_description_min (200)"), "{msg}");
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let err = resolve("[thresholds]\nmin_font_size_px = 0\n").unwrap_err();
        assert!(format!("{err:#}").contains("min_font_size_px must be a positive number"));
    }

    #[test]
    fn invalid_glob_is_rejected_with_context() {
        let err = resolve(
            r#"
[checks."seo.links"]
allow = ["[unclosed"]
"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid allow glob for seo.links: [unclosed"));
    }

    #[test]
    fn unknown_check_id_is_rejected() {
        let err = resolve(
            r#"
[checks."seo.typo"]
enabled = false
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown check id in [checks]: seo.typo"));
    }

    #[test]
    fn unknown_threshold_key_fails_to_parse() {
        assert!(parse_config_toml("[thresholds]\nmax_words = 3\n").is_err());
    }
}
