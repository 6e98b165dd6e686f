//! Explain registry for checks.
//!
//! Maps check IDs (and the finding categories they emit) to human-readable
//! explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check.
    pub title: &'static str,
    /// What the check inspects and how findings are graded.
    pub description: &'static str,
    /// How to fix findings.
    pub remediation: &'static str,
    /// Before/after markup examples.
    pub examples: ExamplePair,
}

/// Before and after markup examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Markup that would trigger a finding.
    pub before: &'static str,
    /// Markup that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or finding category.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_SEO_VERIFICATION
        | ids::CATEGORY_GOOGLE_VERIFICATION
        | ids::CATEGORY_BING_VERIFICATION
        | ids::CATEGORY_YANDEX_VERIFICATION => Some(explain_verification()),

        ids::CHECK_SEO_META
        | ids::CATEGORY_META_DESCRIPTION
        | ids::CATEGORY_META_VIEWPORT
        | ids::CATEGORY_CANONICAL_URL
        | ids::CATEGORY_OPEN_GRAPH
        | ids::CATEGORY_TWITTER_CARD => Some(explain_meta()),

        ids::CHECK_SEO_HEADINGS
        | ids::CATEGORY_H1_HEADING
        | ids::CATEGORY_H2_HEADINGS
        | ids::CATEGORY_HEADING_HIERARCHY => Some(explain_headings()),

        ids::CHECK_SEO_IMAGES
        | ids::CATEGORY_IMAGES
        | ids::CATEGORY_IMAGE_ALT_TEXT
        | ids::CATEGORY_IMAGE_SIZE => Some(explain_images()),

        ids::CHECK_SEO_LINKS
        | ids::CATEGORY_INTERNAL_LINKS
        | ids::CATEGORY_EXTERNAL_LINKS
        | ids::CATEGORY_EXTERNAL_LINK_ATTRIBUTES => Some(explain_links()),

        ids::CHECK_SEO_STRUCTURED_DATA | ids::CATEGORY_STRUCTURED_DATA => {
            Some(explain_structured_data())
        }

        ids::CHECK_SEO_PERFORMANCE | ids::CATEGORY_PAGE_LOAD_TIME | ids::CATEGORY_RESOURCES => {
            Some(explain_performance())
        }

        ids::CHECK_SEO_MOBILE
        | ids::CATEGORY_MOBILE_RESPONSIVE
        | ids::CATEGORY_FONT_SIZE
        | ids::CATEGORY_TOUCH_TARGETS => Some(explain_mobile()),

        _ => None,
    }
}

/// List all known check IDs, in registration order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_SEO_VERIFICATION,
        ids::CHECK_SEO_META,
        ids::CHECK_SEO_HEADINGS,
        ids::CHECK_SEO_IMAGES,
        ids::CHECK_SEO_LINKS,
        ids::CHECK_SEO_STRUCTURED_DATA,
        ids::CHECK_SEO_PERFORMANCE,
        ids::CHECK_SEO_MOBILE,
    ]
}

fn explain_verification() -> Explanation {
    Explanation {
        title: "Search Engine Verification",
        description: "\
Looks for the ownership verification meta tags used by webmaster consoles.

- Google (`google-site-verification`) and Yandex (`yandex-verification`) are
  optional: a missing tag is reported as info, since both also accept file or
  DNS verification.
- Bing (`msvalidate.01`) missing is a warning.",
        remediation: "\
Copy the verification code from the webmaster console and add the matching
meta tag inside <head>.",
        examples: ExamplePair {
            before: r#"<head>
  <title>Example</title>
</head>"#,
            after: r#"<head>
  <title>Example</title>
  <meta name="google-site-verification" content="abc123">
  <meta name="msvalidate.01" content="DEF456">
</head>"#,
        },
    }
}

fn explain_meta() -> Explanation {
    Explanation {
        title: "Meta and Social Tags",
        description: "\
Inspects the tags search engines and social networks read for snippets.

- Meta description: error when absent or empty, warning when its length is
  outside 120-160 characters.
- Viewport: error when absent.
- Canonical link: warning when absent.
- Open Graph: warning when any of og:title, og:description, og:image is missing.
- Twitter Card: warning when `twitter:card` is absent.",
        remediation: "\
Add the missing tags to <head>. Write a description between 120 and 160
characters that summarizes the page.",
        examples: ExamplePair {
            before: r#"<head>
  <title>Example</title>
</head>"#,
            after: r#"<head>
  <title>Example</title>
  <meta name="description" content="A 120-160 character summary of the page...">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="canonical" href="https://example.com/">
  <meta property="og:title" content="Example">
  <meta property="og:description" content="Summary for social cards">
  <meta property="og:image" content="https://example.com/card.png">
  <meta name="twitter:card" content="summary_large_image">
</head>"#,
        },
    }
}

fn explain_headings() -> Explanation {
    Explanation {
        title: "Heading Structure",
        description: "\
Checks the outline formed by <h1>..<h6>.

- Exactly one <h1> passes. No <h1> is an error; several are a warning.
- At least one <h2> is expected.
- Walking headings in document order, the first jump of more than one level
  (e.g. <h2> followed by <h4>) is a warning.",
        remediation: "\
Give the page a single <h1>, structure sections with <h2>, and never skip a
level when nesting.",
        examples: ExamplePair {
            before: r#"<h1>Title</h1>
<h2>Section</h2>
<h4>Detail</h4>"#,
            after: r#"<h1>Title</h1>
<h2>Section</h2>
<h3>Detail</h3>"#,
        },
    }
}

fn explain_images() -> Explanation {
    Explanation {
        title: "Image Accessibility",
        description: "\
Checks every <img> for alternative text and oversized dimensions.

- A page without images yields a single info finding.
- Images with a missing or blank `alt` are a warning.
- Images larger than 2000px in either dimension are a warning.",
        remediation: "\
Describe each image in its `alt` attribute and resize large images before
publishing.",
        examples: ExamplePair {
            before: r#"<img src="hero.jpg" width="4000" height="2500">"#,
            after: r#"<img src="hero-1600.jpg" alt="Team at the spring workshop" width="1600" height="1000">"#,
        },
    }
}

fn explain_links() -> Explanation {
    Explanation {
        title: "Link Hygiene",
        description: "\
Counts internal and external links (info) and warns when more than 10 external
links lack `rel=\"nofollow\"`.

A link is external when its href starts with `http` and does not mention the
current hostname or an allowlisted host.",
        remediation: "\
Add `rel=\"nofollow\"` to external links that should not pass ranking signals,
or allowlist hosts you own under `[checks.\"seo.links\"] allow`.",
        examples: ExamplePair {
            before: r#"<a href="https://partner.example.org/">Partner</a>"#,
            after: r#"<a href="https://partner.example.org/" rel="nofollow noopener">Partner</a>"#,
        },
    }
}

fn explain_structured_data() -> Explanation {
    Explanation {
        title: "Structured Data (JSON-LD)",
        description: "\
Parses every <script type=\"application/ld+json\"> block.

- No block at all is a warning.
- A block that is not valid JSON is an error.
- Blocks declaring both `@context` and `@type` count as valid schemas.",
        remediation: "\
Describe the page with schema.org vocabulary in a JSON-LD block and validate
the JSON syntax.",
        examples: ExamplePair {
            before: r#"<script type="application/ld+json">
  { "@context": "https://schema.org", "@type": "LocalBusiness", }
</script>"#,
            after: r#"<script type="application/ld+json">
  { "@context": "https://schema.org", "@type": "LocalBusiness" }
</script>"#,
        },
    }
}

fn explain_performance() -> Explanation {
    Explanation {
        title: "Performance Signals",
        description: "\
Reads navigation timing when available: a load time under 3 seconds passes,
slower loads are a warning. The number of external scripts and stylesheets is
reported as info.",
        remediation: "\
Defer non-critical scripts, combine stylesheets, and compress assets.",
        examples: ExamplePair {
            before: r#"<script src="a.js"></script>
<script src="b.js"></script>"#,
            after: r#"<script src="bundle.js" defer></script>"#,
        },
    }
}

fn explain_mobile() -> Explanation {
    Explanation {
        title: "Mobile Friendliness",
        description: "\
- The viewport must declare `width=device-width` (error otherwise).
- The body font size should be at least 16px (warning otherwise).
- Links and buttons should measure at least 44x44px (warning otherwise).",
        remediation: "\
Configure the viewport for device width, raise the base font size, and pad
interactive elements to a comfortable tap size.",
        examples: ExamplePair {
            before: r#"<meta name="viewport" content="width=1024">
<a href="/" style="width: 20px; height: 20px">x</a>"#,
            after: r#"<meta name="viewport" content="width=device-width, initial-scale=1">
<a href="/" style="width: 48px; height: 48px">Home</a>"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_check_id() {
        for id in all_check_ids() {
            assert!(
                lookup_explanation(id).is_some(),
                "check_id {} should be in registry",
                id
            );
        }
    }

    #[test]
    fn lookup_by_category() {
        assert_eq!(
            lookup_explanation(ids::CATEGORY_META_DESCRIPTION).map(|e| e.title),
            Some("Meta and Social Tags")
        );
        assert_eq!(
            lookup_explanation(ids::CATEGORY_TOUCH_TARGETS).map(|e| e.title),
            Some("Mobile Friendliness")
        );
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("seo.unknown").is_none());
        assert!(lookup_explanation("").is_none());
    }
}
