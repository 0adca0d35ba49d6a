//! Rectangles

use crate::layout::{BoundingBox, Point, Side, TextLine};

use super::animation::Animation;
use super::collector::Collector;
use super::element::{
    fmt_num, render_children, tag, Animated, Attributes, Encode, Node, Styled, Visual,
    VisualElement,
};
use super::text::Text;

/// An axis-aligned rectangle with optional rounded corners
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub position: Point,
    pub size: Point,
    pub corner_radius: Option<f64>,
    pub attributes: Attributes,
    pub animations: Option<Vec<Animation>>,
}

impl Rectangle {
    pub fn new(position: Point, size: Point) -> Self {
        Self {
            position,
            size,
            corner_radius: None,
            attributes: Attributes::default(),
            animations: None,
        }
    }

    pub fn from_box(bounds: BoundingBox) -> Self {
        Self::new(bounds.position(), bounds.size())
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// The midpoint of the given edge
    pub fn anchor(&self, side: Side) -> Point {
        self.bounding_box().anchor(side)
    }

    /// Text centered in this rectangle
    pub fn text<I, L>(&self, lines: I) -> Text
    where
        I: IntoIterator<Item = L>,
        L: Into<TextLine>,
    {
        Text::new(self.center(), lines)
    }

    /// This rectangle followed by text centered in it
    pub fn with_text<I, L>(self, lines: I) -> Vec<VisualElement>
    where
        I: IntoIterator<Item = L>,
        L: Into<TextLine>,
    {
        let text = self.text(lines);
        vec![self.into(), text.into()]
    }
}

impl Encode for Rectangle {
    fn encode(&self, collector: &mut Collector, prefix: &str) -> String {
        let bounds = self.bounding_box();
        let mut attributes = self.attributes.render(collector);
        attributes.push_str(&format!(
            r#" x="{}" y="{}" width="{}" height="{}""#,
            fmt_num(bounds.x),
            fmt_num(bounds.y),
            fmt_num(bounds.width),
            fmt_num(bounds.height)
        ));
        if let Some(radius) = self.corner_radius {
            attributes.push_str(&format!(r#" rx="{0}" ry="{0}""#, fmt_num(radius)));
        }
        let children = self
            .animations
            .as_deref()
            .map(|animations| render_children(animations, collector, prefix));
        tag(prefix, "rect", &attributes, children)
    }
}

impl Node for Rectangle {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_position_and_size(self.position, self.size)
    }
}

impl Visual for Rectangle {
    fn animations(&self) -> Option<&[Animation]> {
        self.animations.as_deref()
    }
}

impl Styled for Rectangle {
    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl Animated for Rectangle {
    fn animations_mut(&mut self) -> &mut Option<Vec<Animation>> {
        &mut self.animations
    }
}
