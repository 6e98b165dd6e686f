use crate::document::{AccessError, Document, Element, Geometry, NavigationTiming};
use crate::policy::{CheckPolicy, EffectiveConfig, Thresholds};
use seoaudit_types::explain::all_check_ids;
use std::collections::{BTreeMap, BTreeSet};

/// In-memory element for [`FakeDocument`].
#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    tag: String,
    attrs: BTreeMap<String, String>,
    text: String,
    styles: BTreeMap<String, String>,
    geometry: Option<Geometry>,
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.styles.insert(property.to_string(), value.to_string());
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.geometry = Some(Geometry { width, height });
        self
    }
}

/// Flat synthetic document supporting `tag`, `tag[attr]` and
/// `tag[attr="value"]` selectors joined by commas.
#[derive(Clone, Debug, Default)]
pub struct FakeDocument {
    hostname: String,
    elements: Vec<FakeElement>,
    timing: Option<NavigationTiming>,
    denied: BTreeSet<String>,
    deny_all: bool,
}

impl FakeDocument {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            ..Self::default()
        }
    }

    pub fn with(mut self, element: FakeElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_all(mut self, elements: impl IntoIterator<Item = FakeElement>) -> Self {
        self.elements.extend(elements);
        self
    }

    pub fn timing(mut self, navigation_start: f64, load_event_end: f64) -> Self {
        self.timing = Some(NavigationTiming {
            navigation_start,
            load_event_end,
        });
        self
    }

    pub fn deny_selector(mut self, selector: &str) -> Self {
        self.denied.insert(selector.to_string());
        self
    }

    pub fn deny_all(mut self) -> Self {
        self.deny_all = true;
        self
    }

    fn element(&self, element: Element) -> &FakeElement {
        &self.elements[element.index()]
    }
}

struct SimpleSelector {
    tag: String,
    attr: Option<(String, Option<String>)>,
}

impl SimpleSelector {
    fn parse(part: &str) -> Self {
        let part = part.trim();
        let Some((tag, rest)) = part.split_once('[') else {
            return Self {
                tag: part.to_string(),
                attr: None,
            };
        };
        let inner = rest.trim_end_matches(']');
        let attr = match inner.split_once('=') {
            Some((name, value)) => (name.to_string(), Some(value.trim_matches('"').to_string())),
            None => (inner.to_string(), None),
        };
        Self {
            tag: tag.to_string(),
            attr: Some(attr),
        }
    }

    fn matches(&self, el: &FakeElement) -> bool {
        if el.tag != self.tag {
            return false;
        }
        match &self.attr {
            None => true,
            Some((name, None)) => el.attrs.contains_key(name),
            Some((name, Some(value))) => el.attrs.get(name) == Some(value),
        }
    }
}

impl Document for FakeDocument {
    fn select(&self, selector: &str) -> Result<Vec<Element>, AccessError> {
        if self.deny_all {
            return Err(AccessError::Unreadable("access denied".to_string()));
        }
        if self.denied.contains(selector) {
            return Err(AccessError::InvalidSelector {
                selector: selector.to_string(),
                reason: "denied by test".to_string(),
            });
        }

        let parts: Vec<SimpleSelector> = selector.split(',').map(SimpleSelector::parse).collect();
        Ok(self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| parts.iter().any(|p| p.matches(el)))
            .map(|(i, _)| Element::new(i))
            .collect())
    }

    fn tag_name(&self, element: Element) -> String {
        self.element(element).tag.clone()
    }

    fn attribute(&self, element: Element, name: &str) -> Option<String> {
        self.element(element).attrs.get(name).cloned()
    }

    fn text_content(&self, element: Element) -> String {
        self.element(element).text.clone()
    }

    fn computed_style(&self, element: Element, property: &str) -> Option<String> {
        self.element(element).styles.get(property).cloned()
    }

    fn bounding_geometry(&self, element: Element) -> Option<Geometry> {
        self.element(element).geometry
    }

    fn navigation_timing(&self) -> Option<NavigationTiming> {
        self.timing
    }

    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}

pub fn config_with_checks(check_ids: &[&str]) -> EffectiveConfig {
    let checks = check_ids
        .iter()
        .map(|id| (id.to_string(), CheckPolicy::enabled()))
        .collect();
    EffectiveConfig {
        profile: "test".to_string(),
        checks,
        thresholds: Thresholds::default(),
    }
}

pub fn config_all() -> EffectiveConfig {
    config_with_checks(all_check_ids())
}
