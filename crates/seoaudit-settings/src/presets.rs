use seoaudit_domain::policy::{CheckPolicy, EffectiveConfig, Thresholds};
use seoaudit_types::{all_check_ids, ids};

/// Preset profiles.
///
/// `static` is for snapshots taken without a browser, where navigation timing
/// does not exist.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "static" => static_profile(),
        // default
        _ => full_profile(),
    }
}

fn full_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "full".to_string(),
        checks: all_check_ids()
            .iter()
            .map(|id| (id.to_string(), CheckPolicy::enabled()))
            .collect(),
        thresholds: Thresholds::default(),
    }
}

fn static_profile() -> EffectiveConfig {
    let mut cfg = full_profile();
    cfg.profile = "static".to_string();
    cfg.checks.insert(
        ids::CHECK_SEO_PERFORMANCE.to_string(),
        CheckPolicy::disabled(),
    );
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_enables_every_check() {
        let cfg = preset("full");
        assert_eq!(cfg.profile, "full");
        for id in all_check_ids() {
            assert!(cfg.check_policy(id).is_some(), "{id} should be enabled");
        }
    }

    #[test]
    fn static_disables_performance_only() {
        let cfg = preset("static");
        assert_eq!(cfg.profile, "static");
        assert!(cfg.check_policy(ids::CHECK_SEO_PERFORMANCE).is_none());
        assert!(cfg.check_policy(ids::CHECK_SEO_MOBILE).is_some());
    }

    #[test]
    fn unknown_profile_falls_back_to_full() {
        assert_eq!(preset("nope").profile, "full");
    }
}
