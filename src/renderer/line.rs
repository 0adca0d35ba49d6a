//! Straight lines and connectors between boxes

use crate::layout::{BoundingBox, Point, Side, TextLine, TEXT_MARGIN};

use super::animation::Animation;
use super::collector::{Collector, Marker};
use super::element::{
    fmt_num, render_children, tag, Animated, Attributes, Encode, Node, Styled, Visual,
    VisualElement,
};
use super::text::{HorizontalAlignment, Text, VerticalAlignment};

/// Which ends of a line or arc get an arrowhead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPlacement {
    Start,
    End,
    Both,
}

impl MarkerPlacement {
    /// Render the `marker-start` / `marker-end` attributes for a stroke of
    /// the given color, registering the arrowhead in the collector
    pub fn render(
        placement: Option<MarkerPlacement>,
        attributes: &Attributes,
        collector: &mut Collector,
    ) -> String {
        let Some(placement) = placement else {
            return String::new();
        };
        let reference = collector.add_marker(Marker::arrow(attributes.color));
        match placement {
            MarkerPlacement::Start => format!(r#" marker-start="{}""#, reference),
            MarkerPlacement::End => format!(r#" marker-end="{}""#, reference),
            MarkerPlacement::Both => format!(
                r#" marker-start="{0}" marker-end="{0}""#,
                reference
            ),
        }
    }
}

/// A straight line between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub marker: Option<MarkerPlacement>,
    pub attributes: Attributes,
    pub animations: Option<Vec<Animation>>,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            marker: None,
            attributes: Attributes::default(),
            animations: None,
        }
    }

    /// An arrow from the given side of one node to the given side of another
    ///
    /// Anchors are resolved on the untransformed bounding boxes.
    pub fn connect_boxes(
        from: &impl Node,
        from_side: Side,
        to: &impl Node,
        to_side: Side,
    ) -> Self {
        Self::new(
            from.bounding_box().anchor(from_side),
            to.bounding_box().anchor(to_side),
        )
        .with_marker(MarkerPlacement::End)
    }

    pub fn with_marker(mut self, marker: MarkerPlacement) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn without_marker(mut self) -> Self {
        self.marker = None;
        self
    }

    pub fn midpoint(&self) -> Point {
        (self.start + self.end) * 0.5
    }

    /// A label next to the midpoint on the given side, in the line's color
    pub fn label<I, L>(&self, lines: I, side: Side) -> Text
    where
        I: IntoIterator<Item = L>,
        L: Into<TextLine>,
    {
        let (horizontal, vertical) = match side {
            Side::Top => (HorizontalAlignment::Center, VerticalAlignment::Bottom),
            Side::Bottom => (HorizontalAlignment::Center, VerticalAlignment::Top),
            Side::Left => (HorizontalAlignment::Right, VerticalAlignment::Center),
            Side::Right => (HorizontalAlignment::Left, VerticalAlignment::Center),
        };
        let distance = if side.is_horizontal() {
            TEXT_MARGIN.x
        } else {
            TEXT_MARGIN.y
        };
        let mut text = Text::new(self.midpoint().shifted(side, distance), lines)
            .aligned(horizontal, vertical);
        text.attributes.color = self.attributes.color;
        text
    }

    /// This line followed by a label on the given side
    pub fn with_text<I, L>(self, lines: I, side: Side) -> Vec<VisualElement>
    where
        I: IntoIterator<Item = L>,
        L: Into<TextLine>,
    {
        let label = self.label(lines, side);
        vec![self.into(), label.into()]
    }
}

impl Encode for Line {
    fn encode(&self, collector: &mut Collector, prefix: &str) -> String {
        let mut attributes = self.attributes.render(collector);
        attributes.push_str(&format!(
            r#" x1="{}" y1="{}" x2="{}" y2="{}""#,
            fmt_num(self.start.x),
            fmt_num(self.start.y),
            fmt_num(self.end.x),
            fmt_num(self.end.y)
        ));
        attributes.push_str(&MarkerPlacement::render(
            self.marker,
            &self.attributes,
            collector,
        ));
        let children = self
            .animations
            .as_deref()
            .map(|animations| render_children(animations, collector, prefix));
        tag(prefix, "line", &attributes, children)
    }
}

impl Node for Line {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_corners(self.start, self.end)
    }
}

impl Visual for Line {
    fn animations(&self) -> Option<&[Animation]> {
        self.animations.as_deref()
    }
}

impl Styled for Line {
    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl Animated for Line {
    fn animations_mut(&mut self) -> &mut Option<Vec<Animation>> {
        &mut self.animations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::rectangle::Rectangle;
    use crate::stylesheet::Color;

    #[test]
    fn test_encode_plain_line() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
        assert_eq!(
            line.to_markup(),
            "<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"5\"/>\n"
        );
    }

    #[test]
    fn test_marker_registers_colored_arrow() {
        let line = Line::new(Point::ORIGIN, Point::new(10.0, 0.0))
            .with_marker(MarkerPlacement::Both)
            .with_color(Color::Green);
        let mut collector = Collector::new();
        let markup = line.encode(&mut collector, "");
        assert!(markup.contains(r#"marker-start="url(#arrow-green)""#));
        assert!(markup.contains(r#"marker-end="url(#arrow-green)""#));
        assert!(collector.markers.contains(&Marker::arrow(Some(Color::Green))));
        assert!(collector.classes.contains("green"));
    }

    #[test]
    fn test_connect_boxes_uses_side_anchors() {
        let a = Rectangle::new(Point::new(0.0, 0.0), Point::new(20.0, 10.0));
        let b = Rectangle::new(Point::new(50.0, 20.0), Point::new(20.0, 10.0));
        let line = Line::connect_boxes(&a, Side::Right, &b, Side::Left);
        assert_eq!(line.start, Point::new(20.0, 5.0));
        assert_eq!(line.end, Point::new(50.0, 25.0));
        assert_eq!(line.marker, Some(MarkerPlacement::End));
    }

    #[test]
    fn test_connect_boxes_ignores_transform() {
        let a = Rectangle::new(Point::new(0.0, 0.0), Point::new(20.0, 10.0))
            .with_transform("translate(100 100)");
        let b = Rectangle::new(Point::new(50.0, 0.0), Point::new(20.0, 10.0));
        let line = Line::connect_boxes(&a, Side::Right, &b, Side::Left);
        assert_eq!(line.start, Point::new(20.0, 5.0));
    }

    #[test]
    fn test_bounding_box_of_reversed_line() {
        let line = Line::new(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        assert_eq!(line.bounding_box(), BoundingBox::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_label_above_horizontal_line() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0)).with_color(Color::Blue);
        let elements = line.with_text(["Password"], Side::Top);
        let VisualElement::Text(label) = &elements[1] else {
            panic!("expected a text label");
        };
        assert_eq!(label.attributes.color, Some(Color::Blue));
        let bounds = label.bounding_box();
        assert_eq!(bounds.bottom(), -TEXT_MARGIN.y);
        assert!((bounds.center().x - 50.0).abs() < 1e-9);
    }
}
