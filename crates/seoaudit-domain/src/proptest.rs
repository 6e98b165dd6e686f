//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - score bounds and the penalty formula
//! - determinism of repeated audits
//! - count consistency between findings and summary fields

use crate::engine::run_audit;
use crate::score::{ERROR_PENALTY, WARNING_PENALTY, calculate_score};
use crate::test_support::{FakeDocument, FakeElement, config_all};
use proptest::prelude::*;
use seoaudit_types::{Finding, Status};

// ============================================================================
// Strategies
// ============================================================================

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Pass),
        Just(Status::Info),
        Just(Status::Warning),
        Just(Status::Error),
    ]
}

fn arb_findings() -> impl Strategy<Value = Vec<Finding>> {
    prop::collection::vec(
        (arb_status(), "[A-Z][a-z]{2,12}", "[a-z ]{0,30}")
            .prop_map(|(status, category, message)| Finding::new(category, status, message)),
        0..60,
    )
}

/// One element of a page, drawn from the shapes the rule modules look at.
fn arb_element() -> impl Strategy<Value = FakeElement> {
    prop_oneof![
        (1u8..=6, "[A-Za-z ]{0,80}")
            .prop_map(|(level, text)| FakeElement::new(&format!("h{level}")).text(&text)),
        (0usize..220).prop_map(|len| {
            FakeElement::new("meta")
                .attr("name", "description")
                .attr("content", &"x".repeat(len))
        }),
        prop_oneof![
            Just("width=device-width, initial-scale=1"),
            Just("width=1024"),
        ]
        .prop_map(|content| FakeElement::new("meta")
            .attr("name", "viewport")
            .attr("content", content)),
        (
            prop::option::of("[a-z ]{0,10}"),
            prop::option::of((1.0f64..4000.0, 1.0f64..4000.0))
        )
            .prop_map(|(alt, size)| {
                let mut img = FakeElement::new("img");
                if let Some(alt) = alt {
                    img = img.attr("alt", &alt);
                }
                if let Some((w, h)) = size {
                    img = img.size(w, h);
                }
                img
            }),
        (
            prop_oneof![
                Just("/about".to_string()),
                Just("#".to_string()),
                Just("mailto:hi@example.com".to_string()),
                "https://[a-z]{3,8}\\.(com|org)/",
            ],
            any::<bool>(),
            10.0f64..80.0
        )
            .prop_map(|(href, nofollow, side)| {
                let mut a = FakeElement::new("a").attr("href", &href).size(side, side);
                if nofollow {
                    a = a.attr("rel", "nofollow");
                }
                a
            }),
        prop_oneof![
            Just(r#"{"@context":"https://schema.org","@type":"Organization"}"#),
            Just(r#"[{"@context":"https://schema.org","@type":"WebSite"}]"#),
            Just(r#"{"@type": }"#),
        ]
        .prop_map(|body| FakeElement::new("script")
            .attr("type", "application/ld+json")
            .text(body)),
        (8u32..24).prop_map(|px| FakeElement::new("body").style("font-size", &format!("{px}px"))),
    ]
}

fn arb_document() -> impl Strategy<Value = FakeDocument> {
    (
        prop::collection::vec(arb_element(), 0..30),
        prop::option::of((0.0f64..1000.0, 0.0f64..8000.0)),
    )
        .prop_map(|(elements, timing)| {
            let doc = FakeDocument::new("example.com").with_all(elements);
            match timing {
                Some((start, end)) => doc.timing(start, end),
                None => doc,
            }
        })
}

// ============================================================================
// Score invariants
// ============================================================================

proptest! {
    /// The score never leaves 0..=100, whatever the mix of statuses.
    #[test]
    fn score_stays_in_range(findings in arb_findings()) {
        match calculate_score(&findings) {
            Some(score) => prop_assert!(score <= 100),
            None => prop_assert!(findings.is_empty()),
        }
    }

    /// With no warnings or errors the score is the rounded pass ratio.
    #[test]
    fn score_without_penalties_is_pass_ratio(pass in 0u32..50, info in 1u32..50) {
        let findings: Vec<Finding> = (0..pass)
            .map(|_| Finding::pass("Cat", "ok"))
            .chain((0..info).map(|_| Finding::info("Cat", "fyi")))
            .collect();
        let expected = (100.0 * f64::from(pass) / f64::from(pass + info)).round() as u8;
        prop_assert_eq!(calculate_score(&findings), Some(expected));
    }

    /// Adding an error never raises the score.
    #[test]
    fn errors_never_raise_score(findings in arb_findings()) {
        prop_assume!(!findings.is_empty());
        let before = calculate_score(&findings).unwrap_or(0);
        let mut more = findings.clone();
        more.push(Finding::error("Cat", "broken"));
        let after = calculate_score(&more).unwrap_or(0);
        prop_assert!(after <= before, "before={before} after={after}");
    }

    /// Enough penalties always floor the score at zero.
    #[test]
    fn heavy_penalties_clamp_to_zero(errors in 0u32..20, warnings in 0u32..20) {
        prop_assume!(i64::from(errors) * ERROR_PENALTY + i64::from(warnings) * WARNING_PENALTY >= 100);
        let findings: Vec<Finding> = (0..errors)
            .map(|_| Finding::error("Cat", "e"))
            .chain((0..warnings).map(|_| Finding::warning("Cat", "w")))
            .collect();
        prop_assert_eq!(calculate_score(&findings), Some(0));
    }
}

// ============================================================================
// Audit invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Auditing the same snapshot twice yields byte-identical output.
    #[test]
    fn audit_is_deterministic(doc in arb_document()) {
        let cfg = config_all();
        let a = run_audit(&doc, &cfg).expect("audit");
        let b = run_audit(&doc, &cfg).expect("audit");
        prop_assert_eq!(
            serde_json::to_string(&a).expect("serialize"),
            serde_json::to_string(&b).expect("serialize")
        );
    }

    /// Summary fields agree with the findings they summarize.
    #[test]
    fn audit_summary_matches_findings(doc in arb_document()) {
        let result = run_audit(&doc, &config_all()).expect("audit");
        prop_assert!(result.score <= 100);
        prop_assert!(!result.incomplete);
        prop_assert_eq!(result.warnings_count as usize, result.count(Status::Warning));
        prop_assert_eq!(Some(result.score), calculate_score(&result.checks));
        // Every error entry stems from an error finding.
        prop_assert!(result.errors.len() <= result.count(Status::Error));
    }
}
