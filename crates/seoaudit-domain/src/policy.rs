use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct CheckPolicy {
    pub enabled: bool,
    /// Check-specific allowlist (host globs for `seo.links`).
    pub allow: Vec<String>,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            allow: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            allow: Vec::new(),
        }
    }
}

/// Numeric limits the rule modules grade against.
#[derive(Clone, Debug, PartialEq)]
pub struct Thresholds {
    pub meta_description_min: usize,
    pub meta_description_max: usize,
    pub max_external_links_without_nofollow: usize,
    pub max_image_dimension_px: f64,
    pub max_load_time_ms: f64,
    pub min_font_size_px: f64,
    pub min_touch_target_px: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            meta_description_min: 120,
            meta_description_max: 160,
            max_external_links_without_nofollow: 10,
            max_image_dimension_px: 2000.0,
            max_load_time_ms: 3000.0,
            min_font_size_px: 16.0,
            min_touch_target_px: 44.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub checks: BTreeMap<String, CheckPolicy>,
    pub thresholds: Thresholds,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
