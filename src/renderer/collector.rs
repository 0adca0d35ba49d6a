//! Side-channel output gathered while a scene graph is encoded

use std::collections::BTreeSet;

use crate::stylesheet::Color;

/// An arrowhead definition referenced by lines and arcs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Marker {
    pub color: Option<Color>,
}

impl Marker {
    pub fn arrow(color: Option<Color>) -> Self {
        Self { color }
    }

    /// Identifier of the `<marker>` in the document's `<defs>`
    pub fn id(&self) -> String {
        match self.color {
            Some(color) => format!("arrow-{}", color.class_name()),
            None => "arrow".to_string(),
        }
    }

    /// Value for a `marker-start` or `marker-end` attribute
    pub fn reference(&self) -> String {
        format!("url(#{})", self.id())
    }

    /// The `<marker>` element for the document's `<defs>`
    pub fn definition(&self) -> String {
        let class = self
            .color
            .map(|color| format!(r#" class="{}""#, color.class_name()))
            .unwrap_or_default();
        format!(
            r#"<marker id="{}"{} viewBox="0 0 10 10" refX="9" refY="5" markerWidth="5" markerHeight="5" orient="auto-start-reverse"><path d="M0,0 L10,5 L0,10 Z"/></marker>"#,
            self.id(),
            class
        )
    }
}

/// Accumulator for everything an encode pass needs outside of the markup
///
/// Create one per top-level render, pass it by mutable reference to every
/// `encode` call of the tree and hand it to the document assembler
/// afterwards. Sets are ordered so that output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collector {
    pub classes: BTreeSet<String>,
    pub markers: BTreeSet<Marker>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    /// Register a marker and return its reference for the element attribute
    pub fn add_marker(&mut self, marker: Marker) -> String {
        let reference = marker.reference();
        self.markers.insert(marker);
        reference
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.markers.is_empty()
    }
}
