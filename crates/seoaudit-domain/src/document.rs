//! The read-only view of a page that rule modules inspect.

use serde::{Deserialize, Serialize};

/// Opaque handle to an element of a [`Document`].
///
/// Handles are only meaningful for the document that returned them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element(usize);

impl Element {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Rendered box size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
}

/// Navigation timing figures in milliseconds since the time origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationTiming {
    pub navigation_start: f64,
    pub load_event_end: f64,
}

impl NavigationTiming {
    pub fn load_time_ms(&self) -> f64 {
        self.load_event_end - self.navigation_start
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("document is not readable: {0}")]
    Unreadable(String),
}

/// Read-only capability over an already materialized page snapshot.
///
/// Every method is a bounded, synchronous, in-memory query. Only `select`
/// can fail; the remaining accessors answer `None` for absent data.
pub trait Document {
    /// All elements matching a CSS selector, in document order.
    fn select(&self, selector: &str) -> Result<Vec<Element>, AccessError>;

    /// Lowercase tag name, e.g. `h2`.
    fn tag_name(&self, element: Element) -> String;

    fn attribute(&self, element: Element, name: &str) -> Option<String>;

    /// Concatenated text of the element and its descendants.
    fn text_content(&self, element: Element) -> String;

    fn computed_style(&self, element: Element, property: &str) -> Option<String>;

    /// `None` when the snapshot carries no layout for the element.
    fn bounding_geometry(&self, element: Element) -> Option<Geometry>;

    fn navigation_timing(&self) -> Option<NavigationTiming>;

    fn hostname(&self) -> String;
}
