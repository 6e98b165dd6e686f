use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `seoaudit.toml` schema v1.
///
/// Every field is optional; anything left out comes from the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeoauditConfigV1 {
    /// Optional schema string for tooling (`seoaudit.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile: `full` (default) or `static`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,

    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Host globs treated as internal (`seo.links`).
    #[serde(default)]
    pub allow: Vec<String>,
}

/// Grading limits. Unset fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ThresholdsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description_min: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description_max: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_external_links_without_nofollow: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_image_dimension_px: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_load_time_ms: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_font_size_px: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_touch_target_px: Option<f64>,
}
