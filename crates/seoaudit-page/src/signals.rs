use anyhow::Context;
use seoaudit_domain::{Geometry, NavigationTiming};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Browser-side measurements captured alongside an HTML snapshot.
///
/// Every field is optional. Style and geometry entries are keyed by CSS
/// selector and applied to every element the selector matches; when several
/// selectors match one element, later keys (in sorted order) win.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSignals {
    pub hostname: Option<String>,
    pub navigation_timing: Option<NavigationTiming>,
    pub computed_styles: BTreeMap<String, BTreeMap<String, String>>,
    pub geometry: BTreeMap<String, Geometry>,
}

impl RuntimeSignals {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("parse runtime signals JSON")
    }
}

/// Split an inline `style` attribute into lowercase property names and values.
pub(crate) fn inline_declarations(style: &str) -> impl Iterator<Item = (String, &str)> {
    style.split(';').filter_map(|decl| {
        let (property, value) = decl.split_once(':')?;
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            return None;
        }
        Some((property.to_ascii_lowercase(), value))
    })
}

/// Parse a plain or `px`-suffixed length. Relative units are rejected.
pub(crate) fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite() && *n >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_signals() {
        let signals = RuntimeSignals::parse(
            r#"{"hostname": "example.com", "computed_styles": {"body": {"font-size": "18px"}}}"#,
        )
        .expect("parse");
        assert_eq!(signals.hostname.as_deref(), Some("example.com"));
        assert!(signals.navigation_timing.is_none());
        assert_eq!(signals.computed_styles["body"]["font-size"], "18px");
        assert!(signals.geometry.is_empty());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(
            RuntimeSignals::parse("{}").expect("parse"),
            RuntimeSignals::default()
        );
    }

    #[test]
    fn malformed_signals_carry_context() {
        let err = RuntimeSignals::parse("{not json").unwrap_err();
        assert!(format!("{err:#}").contains("parse runtime signals JSON"));
    }

    #[test]
    fn inline_declarations_skip_blank_entries() {
        let decls: Vec<_> =
            inline_declarations("Font-Size: 14px; ; width:; height : 20px").collect();
        assert_eq!(
            decls,
            vec![
                ("font-size".to_string(), "14px"),
                ("height".to_string(), "20px")
            ]
        );
    }

    #[test]
    fn parse_px_accepts_plain_and_px_lengths() {
        assert_eq!(parse_px("300"), Some(300.0));
        assert_eq!(parse_px(" 44px "), Some(44.0));
        assert_eq!(parse_px("2.5px"), Some(2.5));
        assert_eq!(parse_px("50%"), None);
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px("-4px"), None);
    }
}
