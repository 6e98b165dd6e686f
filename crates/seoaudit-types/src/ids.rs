//! Stable identifiers for checks and finding categories.
//!
//! `check_id` is a dotted namespace naming one rule module. A category is the
//! human-readable label carried by every finding a module emits.

// Checks, in registration order.
pub const CHECK_SEO_VERIFICATION: &str = "seo.verification";
pub const CHECK_SEO_META: &str = "seo.meta";
pub const CHECK_SEO_HEADINGS: &str = "seo.headings";
pub const CHECK_SEO_IMAGES: &str = "seo.images";
pub const CHECK_SEO_LINKS: &str = "seo.links";
pub const CHECK_SEO_STRUCTURED_DATA: &str = "seo.structured_data";
pub const CHECK_SEO_PERFORMANCE: &str = "seo.performance";
pub const CHECK_SEO_MOBILE: &str = "seo.mobile";

// Categories: seo.verification
pub const CATEGORY_GOOGLE_VERIFICATION: &str = "Google Verification";
pub const CATEGORY_BING_VERIFICATION: &str = "Bing Verification";
pub const CATEGORY_YANDEX_VERIFICATION: &str = "Yandex Verification";

// Categories: seo.meta
pub const CATEGORY_META_DESCRIPTION: &str = "Meta Description";
pub const CATEGORY_META_VIEWPORT: &str = "Meta Viewport";
pub const CATEGORY_CANONICAL_URL: &str = "Canonical URL";
pub const CATEGORY_OPEN_GRAPH: &str = "Open Graph Tags";
pub const CATEGORY_TWITTER_CARD: &str = "Twitter Card";

// Categories: seo.headings
pub const CATEGORY_H1_HEADING: &str = "H1 Heading";
pub const CATEGORY_H2_HEADINGS: &str = "H2 Headings";
pub const CATEGORY_HEADING_HIERARCHY: &str = "Heading Hierarchy";

// Categories: seo.images
pub const CATEGORY_IMAGES: &str = "Images";
pub const CATEGORY_IMAGE_ALT_TEXT: &str = "Image Alt Text";
pub const CATEGORY_IMAGE_SIZE: &str = "Image Size";

// Categories: seo.links
pub const CATEGORY_INTERNAL_LINKS: &str = "Internal Links";
pub const CATEGORY_EXTERNAL_LINKS: &str = "External Links";
pub const CATEGORY_EXTERNAL_LINK_ATTRIBUTES: &str = "External Link Attributes";

// Categories: seo.structured_data
pub const CATEGORY_STRUCTURED_DATA: &str = "Structured Data (JSON-LD)";

// Categories: seo.performance
pub const CATEGORY_PAGE_LOAD_TIME: &str = "Page Load Time";
pub const CATEGORY_RESOURCES: &str = "Resources";

// Categories: seo.mobile
pub const CATEGORY_MOBILE_RESPONSIVE: &str = "Mobile Responsive";
pub const CATEGORY_FONT_SIZE: &str = "Font Size";
pub const CATEGORY_TOUCH_TARGETS: &str = "Touch Targets";

// Engine-level
pub const CATEGORY_DOCUMENT_ACCESS: &str = "Document Access";
