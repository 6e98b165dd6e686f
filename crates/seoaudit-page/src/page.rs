use crate::signals::{RuntimeSignals, inline_declarations, parse_px};
use anyhow::{Context, anyhow};
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use seoaudit_domain::{AccessError, Document, Element, Geometry, NavigationTiming};
use std::collections::{BTreeMap, HashMap};

/// CSS initial value of `font-size` (`medium`).
const INITIAL_FONT_SIZE: &str = "16px";

/// A parsed HTML page plus the runtime signals recorded for it.
///
/// An [`Element`] handle is the element's position in a pre-order walk of
/// the tree, so handles from [`Document::select`] stay valid for the lifetime
/// of the page.
pub struct StaticPage {
    html: Html,
    /// Element node ids in document order; an [`Element`] indexes into this.
    order: Vec<NodeId>,
    styles: HashMap<usize, BTreeMap<String, String>>,
    geometry: HashMap<usize, Geometry>,
    timing: Option<NavigationTiming>,
    hostname: String,
}

impl StaticPage {
    /// Parse HTML without runtime signals. HTML parsing is lenient and never
    /// fails.
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        let order = html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|el| el.id())
            .collect();
        Self {
            html,
            order,
            styles: HashMap::new(),
            geometry: HashMap::new(),
            timing: None,
            hostname: String::new(),
        }
    }

    /// Parse HTML and attach runtime signals.
    ///
    /// Fails when a selector key in the signals is not valid CSS.
    pub fn with_signals(html: &str, signals: RuntimeSignals) -> anyhow::Result<Self> {
        let mut page = Self::parse(html);
        page.timing = signals.navigation_timing;
        page.hostname = signals.hostname.unwrap_or_default();

        for (selector, properties) in signals.computed_styles {
            let matched = page
                .resolve(&selector)
                .with_context(|| format!("computed_styles entry `{selector}`"))?;
            for index in matched {
                let entry = page.styles.entry(index).or_default();
                for (property, value) in &properties {
                    entry.insert(property.to_ascii_lowercase(), value.clone());
                }
            }
        }

        for (selector, geometry) in signals.geometry {
            let matched = page
                .resolve(&selector)
                .with_context(|| format!("geometry entry `{selector}`"))?;
            for index in matched {
                page.geometry.insert(index, geometry);
            }
        }

        tracing::debug!(
            elements = page.order.len(),
            styled = page.styles.len(),
            measured = page.geometry.len(),
            has_timing = page.timing.is_some(),
            "page snapshot ready"
        );
        Ok(page)
    }

    /// Override the hostname used for link classification.
    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        self.hostname = hostname.into();
    }

    pub fn element_count(&self) -> usize {
        self.order.len()
    }

    fn resolve(&self, selector: &str) -> anyhow::Result<Vec<usize>> {
        let parsed =
            Selector::parse(selector).map_err(|err| anyhow!("invalid selector: {err:?}"))?;
        Ok(self.matches(&parsed))
    }

    fn node(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    fn matches(&self, selector: &Selector) -> Vec<usize> {
        self.order
            .iter()
            .enumerate()
            .filter(|(_, id)| self.node(**id).is_some_and(|el| selector.matches(&el)))
            .map(|(index, _)| index)
            .collect()
    }

    /// Constant-time handle lookup.
    fn element_ref(&self, element: Element) -> Option<ElementRef<'_>> {
        let id = *self.order.get(element.index())?;
        self.node(id)
    }

    fn inline_style(&self, element: Element, property: &str) -> Option<String> {
        let style = self.element_ref(element)?.value().attr("style")?;
        // Later declarations override earlier ones.
        inline_declarations(style)
            .filter(|(name, _)| name == property)
            .last()
            .map(|(_, value)| value.to_string())
    }

    fn declared_length(&self, element: Element, dimension: &str) -> Option<f64> {
        let el = self.element_ref(element)?;
        el.value()
            .attr(dimension)
            .and_then(parse_px)
            .or_else(|| {
                self.inline_style(element, dimension)
                    .as_deref()
                    .and_then(parse_px)
            })
    }
}

impl Document for StaticPage {
    fn select(&self, selector: &str) -> Result<Vec<Element>, AccessError> {
        let parsed = Selector::parse(selector).map_err(|err| AccessError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{err:?}"),
        })?;
        Ok(self.matches(&parsed).into_iter().map(Element::new).collect())
    }

    fn tag_name(&self, element: Element) -> String {
        self.element_ref(element)
            .map(|el| el.value().name().to_ascii_lowercase())
            .unwrap_or_default()
    }

    fn attribute(&self, element: Element, name: &str) -> Option<String> {
        self.element_ref(element)?
            .value()
            .attr(name)
            .map(str::to_string)
    }

    fn text_content(&self, element: Element) -> String {
        self.element_ref(element)
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }

    fn computed_style(&self, element: Element, property: &str) -> Option<String> {
        self.element_ref(element)?;
        let property = property.to_ascii_lowercase();
        if let Some(value) = self
            .styles
            .get(&element.index())
            .and_then(|props| props.get(&property))
        {
            return Some(value.clone());
        }
        self.inline_style(element, &property).or_else(|| {
            (property == "font-size").then(|| INITIAL_FONT_SIZE.to_string())
        })
    }

    fn bounding_geometry(&self, element: Element) -> Option<Geometry> {
        if let Some(geometry) = self.geometry.get(&element.index()) {
            return Some(*geometry);
        }
        let width = self.declared_length(element, "width")?;
        let height = self.declared_length(element, "height")?;
        Some(Geometry { width, height })
    }

    fn navigation_timing(&self) -> Option<NavigationTiming> {
        self.timing
    }

    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}
