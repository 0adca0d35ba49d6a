//! The scene graph: node capabilities, shared attributes and the closed set
//! of element kinds
//!
//! Every node can encode itself as markup. Nodes that can carry children
//! (all of them except animations) additionally expose a bounding box and a
//! clipping box. Visual nodes are drawable shapes whose only children are
//! animations; the structural node is a [`Group`] of other nodes.

use std::fmt;

use crate::layout::{BoundingBox, Point};
use crate::stylesheet::Color;

use super::animation::Animation;
use super::arc::Arc;
use super::collector::Collector;
use super::group::Group;
use super::line::Line;
use super::rectangle::Rectangle;
use super::text::Text;

/// Indentation added for every nesting level of the output
pub const INDENTATION: &str = "    ";

/// Anything that can be serialized into SVG markup
pub trait Encode {
    /// Encode this node on its own line(s), indented by `prefix`
    ///
    /// Class names and marker definitions the node needs are registered in
    /// `collector`. Encoding the same node twice with fresh collectors yields
    /// identical markup.
    fn encode(&self, collector: &mut Collector, prefix: &str) -> String;

    /// Encode with a throwaway collector and no indentation
    ///
    /// Whatever the node registers in the collector is lost, so the result
    /// is only complete for nodes without classes or markers.
    fn to_markup(&self) -> String {
        self.encode(&mut Collector::new(), "")
    }
}

/// A node that owns [`Attributes`] and occupies space in the diagram
pub trait Node: Encode {
    fn attributes(&self) -> &Attributes;

    /// The extent of this node ignoring its `transform` attribute
    fn bounding_box(&self) -> BoundingBox;

    /// The region ancestors should clip to, ignoring any transformation
    fn clipping_box(&self) -> Option<BoundingBox> {
        if self.attributes().ignore_for_clipping {
            None
        } else {
            Some(self.bounding_box())
        }
    }
}

/// A drawable shape whose children can only be animations
pub trait Visual: Node {
    fn animations(&self) -> Option<&[Animation]>;

    fn center(&self) -> Point {
        self.bounding_box().center()
    }
}

/// Attributes shared by all nodes with children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    pub id: Option<String>,
    pub color: Option<Color>,
    pub style: Option<String>,
    pub classes: Vec<String>,
    /// The SVG `transform` attribute. It does not affect the bounding box.
    pub transform: Option<String>,
    /// Leave this node out when ancestors compute their clipping box
    pub ignore_for_clipping: bool,
}

impl Attributes {
    /// All classes of the node, the color class first
    pub fn class_list(&self) -> Vec<&str> {
        self.color
            .map(Color::class_name)
            .into_iter()
            .chain(self.classes.iter().map(String::as_str))
            .collect()
    }

    /// Render ` id`, ` style`, ` class` and ` transform` and register every
    /// class in the collector
    pub fn render(&self, collector: &mut Collector) -> String {
        let classes = self.class_list();
        for class in &classes {
            collector.add_class(*class);
        }

        let mut result = String::new();
        if let Some(id) = &self.id {
            result.push_str(&format!(r#" id="{}""#, escape_xml(id)));
        }
        if let Some(style) = &self.style {
            result.push_str(&format!(r#" style="{}""#, escape_xml(style)));
        }
        if !classes.is_empty() {
            result.push_str(&format!(r#" class="{}""#, escape_xml(&classes.join(" "))));
        }
        if let Some(transform) = &self.transform {
            result.push_str(&format!(r#" transform="{}""#, escape_xml(transform)));
        }
        result
    }
}

/// Builder methods for the shared attributes
pub trait Styled: Sized {
    fn attributes_mut(&mut self) -> &mut Attributes;

    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.attributes_mut().id = Some(id.into());
        self
    }

    fn with_color(mut self, color: Color) -> Self {
        self.attributes_mut().color = Some(color);
        self
    }

    fn with_style(mut self, style: impl Into<String>) -> Self {
        self.attributes_mut().style = Some(style.into());
        self
    }

    fn with_class(mut self, class: impl Into<String>) -> Self {
        self.attributes_mut().classes.push(class.into());
        self
    }

    fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_mut()
            .classes
            .extend(classes.into_iter().map(Into::into));
        self
    }

    fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.attributes_mut().transform = Some(transform.into());
        self
    }

    fn ignored_for_clipping(mut self) -> Self {
        self.attributes_mut().ignore_for_clipping = true;
        self
    }
}

/// Builder methods for the animation children of visual elements
pub trait Animated: Sized {
    fn animations_mut(&mut self) -> &mut Option<Vec<Animation>>;

    fn with_animation(mut self, animation: Animation) -> Self {
        self.animations_mut()
            .get_or_insert_with(Vec::new)
            .push(animation);
        self
    }

    /// Set the children list, even to an empty one
    fn with_animations(mut self, animations: Vec<Animation>) -> Self {
        *self.animations_mut() = Some(animations);
        self
    }
}

/// Encode a children list between the opening and the closing tag
///
/// Emits a newline, every child one level deeper and finally `prefix` so
/// that the closing tag lines up with the opening one. An empty list still
/// produces the newline and the prefix.
pub fn render_children<E: Encode>(children: &[E], collector: &mut Collector, prefix: &str) -> String {
    let inner = format!("{}{}", prefix, INDENTATION);
    let mut result = String::from("\n");
    for child in children {
        result.push_str(&child.encode(collector, &inner));
    }
    result.push_str(prefix);
    result
}

/// Assemble a tag, self-closing when there is no content
pub fn tag(prefix: &str, name: &str, attributes: &str, content: Option<String>) -> String {
    match content {
        Some(content) => format!("{}<{}{}>{}</{}>\n", prefix, name, attributes, content, name),
        None => format!("{}<{}{}/>\n", prefix, name, attributes),
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// A drawable shape
#[derive(Debug, Clone, PartialEq)]
pub enum VisualElement {
    Rectangle(Rectangle),
    Line(Line),
    Arc(Arc),
    Text(Text),
}

impl Encode for VisualElement {
    fn encode(&self, collector: &mut Collector, prefix: &str) -> String {
        match self {
            VisualElement::Rectangle(e) => e.encode(collector, prefix),
            VisualElement::Line(e) => e.encode(collector, prefix),
            VisualElement::Arc(e) => e.encode(collector, prefix),
            VisualElement::Text(e) => e.encode(collector, prefix),
        }
    }
}

impl Node for VisualElement {
    fn attributes(&self) -> &Attributes {
        match self {
            VisualElement::Rectangle(e) => e.attributes(),
            VisualElement::Line(e) => e.attributes(),
            VisualElement::Arc(e) => e.attributes(),
            VisualElement::Text(e) => e.attributes(),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            VisualElement::Rectangle(e) => e.bounding_box(),
            VisualElement::Line(e) => e.bounding_box(),
            VisualElement::Arc(e) => e.bounding_box(),
            VisualElement::Text(e) => e.bounding_box(),
        }
    }
}

impl Visual for VisualElement {
    fn animations(&self) -> Option<&[Animation]> {
        match self {
            VisualElement::Rectangle(e) => e.animations(),
            VisualElement::Line(e) => e.animations(),
            VisualElement::Arc(e) => e.animations(),
            VisualElement::Text(e) => e.animations(),
        }
    }
}

impl Styled for VisualElement {
    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            VisualElement::Rectangle(e) => e.attributes_mut(),
            VisualElement::Line(e) => e.attributes_mut(),
            VisualElement::Arc(e) => e.attributes_mut(),
            VisualElement::Text(e) => e.attributes_mut(),
        }
    }
}

impl fmt::Display for VisualElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

/// Any node of the scene graph except animations
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Visual(VisualElement),
    Structural(Group),
}

impl Element {
    /// The center of a visual element, `None` for groups
    pub fn center(&self) -> Option<Point> {
        match self {
            Element::Visual(e) => Some(e.center()),
            Element::Structural(_) => None,
        }
    }
}

impl Encode for Element {
    fn encode(&self, collector: &mut Collector, prefix: &str) -> String {
        match self {
            Element::Visual(e) => e.encode(collector, prefix),
            Element::Structural(e) => e.encode(collector, prefix),
        }
    }
}

impl Node for Element {
    fn attributes(&self) -> &Attributes {
        match self {
            Element::Visual(e) => e.attributes(),
            Element::Structural(e) => e.attributes(),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            Element::Visual(e) => e.bounding_box(),
            Element::Structural(e) => e.bounding_box(),
        }
    }

    fn clipping_box(&self) -> Option<BoundingBox> {
        match self {
            Element::Visual(e) => e.clipping_box(),
            Element::Structural(e) => e.clipping_box(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

impl From<VisualElement> for Element {
    fn from(element: VisualElement) -> Self {
        Element::Visual(element)
    }
}

impl From<Group> for Element {
    fn from(group: Group) -> Self {
        Element::Structural(group)
    }
}

macro_rules! impl_visual_from {
    ($($kind:ident),*) => {
        $(
            impl From<$kind> for VisualElement {
                fn from(element: $kind) -> Self {
                    VisualElement::$kind(element)
                }
            }

            impl From<$kind> for Element {
                fn from(element: $kind) -> Self {
                    Element::Visual(VisualElement::$kind(element))
                }
            }
        )*
    };
}

impl_visual_from!(Rectangle, Line, Arc, Text);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(21.76032), "21.76");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(0.1 + 0.2), "0.3");
        assert_eq!(fmt_num(-12.5), "-12.5");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_attributes_order_and_color_first() {
        let attributes = Attributes {
            id: Some("box".to_string()),
            color: Some(Color::Blue),
            style: Some("opacity: 0.5".to_string()),
            classes: vec!["thick".to_string()],
            transform: Some("rotate(45)".to_string()),
            ignore_for_clipping: false,
        };
        let mut collector = Collector::new();
        assert_eq!(
            attributes.render(&mut collector),
            r#" id="box" style="opacity: 0.5" class="blue thick" transform="rotate(45)""#
        );
        assert!(collector.classes.contains("blue"));
        assert!(collector.classes.contains("thick"));
    }

    #[test]
    fn test_empty_attributes_render_nothing() {
        let mut collector = Collector::new();
        assert_eq!(Attributes::default().render(&mut collector), "");
        assert!(collector.is_empty());
    }

    #[test]
    fn test_render_children_of_empty_list() {
        let mut collector = Collector::new();
        let children: Vec<Animation> = vec![];
        assert_eq!(render_children(&children, &mut collector, "  "), "\n  ");
    }

    #[test]
    fn test_tag() {
        assert_eq!(tag("", "rect", r#" x="1""#, None), "<rect x=\"1\"/>\n");
        assert_eq!(
            tag("  ", "g", "", Some("\n  ".to_string())),
            "  <g>\n  </g>\n"
        );
    }
}
