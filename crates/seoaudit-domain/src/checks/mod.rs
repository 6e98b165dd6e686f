use crate::collect::Collector;
use crate::document::{AccessError, Document};
use crate::policy::{CheckPolicy, EffectiveConfig};
use seoaudit_types::ids;

mod headings;
mod images;
mod links;
mod meta;
mod mobile;
mod performance;
mod structured_data;
mod utils;
mod verification;


pub type RuleFn =
    fn(&dyn Document, &EffectiveConfig, &CheckPolicy, &mut Collector) -> Result<(), AccessError>;

/// One registered rule module.
pub struct Rule {
    pub id: &'static str,
    pub run: RuleFn,
}

const REGISTRY: &[Rule] = &[
    Rule {
        id: ids::CHECK_SEO_VERIFICATION,
        run: verification::run,
    },
    Rule {
        id: ids::CHECK_SEO_META,
        run: meta::run,
    },
    Rule {
        id: ids::CHECK_SEO_HEADINGS,
        run: headings::run,
    },
    Rule {
        id: ids::CHECK_SEO_IMAGES,
        run: images::run,
    },
    Rule {
        id: ids::CHECK_SEO_LINKS,
        run: links::run,
    },
    Rule {
        id: ids::CHECK_SEO_STRUCTURED_DATA,
        run: structured_data::run,
    },
    Rule {
        id: ids::CHECK_SEO_PERFORMANCE,
        run: performance::run,
    },
    Rule {
        id: ids::CHECK_SEO_MOBILE,
        run: mobile::run,
    },
];

/// Rule modules in execution order.
pub fn registry() -> &'static [Rule] {
    REGISTRY
}
