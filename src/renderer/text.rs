//! Multi-line text

use crate::layout::text::{estimate_text_height, estimate_text_width};
use crate::layout::{BoundingBox, Point, TextLine, TextSegment, LINE_HEIGHT};

use super::animation::Animation;
use super::collector::Collector;
use super::element::{
    escape_xml, fmt_num, tag, Animated, Attributes, Encode, Node, Styled, Visual, INDENTATION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalAlignment {
    fn text_anchor(self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "start",
            HorizontalAlignment::Center => "middle",
            HorizontalAlignment::Right => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Lines of text anchored at a position
///
/// The position is interpreted according to the alignments: with the
/// defaults it is the center of the text block.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Point,
    pub lines: Vec<TextLine>,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub attributes: Attributes,
    pub animations: Option<Vec<Animation>>,
}

impl Text {
    pub fn new<I, L>(position: Point, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<TextLine>,
    {
        Self {
            position,
            lines: lines.into_iter().map(Into::into).collect(),
            horizontal: HorizontalAlignment::default(),
            vertical: VerticalAlignment::default(),
            attributes: Attributes::default(),
            animations: None,
        }
    }

    pub fn aligned(mut self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    fn top(&self) -> f64 {
        let height = estimate_text_height(self.lines.len());
        match self.vertical {
            VerticalAlignment::Top => self.position.y,
            VerticalAlignment::Center => self.position.y - height / 2.0,
            VerticalAlignment::Bottom => self.position.y - height,
        }
    }

    fn encode_segment(segment: &TextSegment, collector: &mut Collector) -> String {
        let classes = segment.classes();
        if classes.is_empty() {
            return escape_xml(&segment.text);
        }
        for class in &classes {
            collector.add_class(*class);
        }
        format!(
            r#"<tspan class="{}">{}</tspan>"#,
            classes.join(" "),
            escape_xml(&segment.text)
        )
    }
}

impl Encode for Text {
    fn encode(&self, collector: &mut Collector, prefix: &str) -> String {
        let mut attributes = self.attributes.render(collector);
        attributes.push_str(&format!(
            r#" text-anchor="{}" dominant-baseline="middle""#,
            self.horizontal.text_anchor()
        ));

        let inner = format!("{}{}", prefix, INDENTATION);
        let x = fmt_num(self.position.x);
        let top = self.top();
        let mut content = String::from("\n");
        for (index, line) in self.lines.iter().enumerate() {
            let y = top + (index as f64 + 0.5) * LINE_HEIGHT;
            let segments: String = line
                .segments
                .iter()
                .map(|segment| Self::encode_segment(segment, collector))
                .collect();
            content.push_str(&format!(
                "{}<tspan x=\"{}\" y=\"{}\">{}</tspan>\n",
                inner,
                x,
                fmt_num(y),
                segments
            ));
        }
        for animation in self.animations.iter().flatten() {
            content.push_str(&animation.encode(collector, &inner));
        }
        content.push_str(prefix);

        tag(prefix, "text", &attributes, Some(content))
    }
}

impl Node for Text {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn bounding_box(&self) -> BoundingBox {
        let width = estimate_text_width(&self.lines);
        let height = estimate_text_height(self.lines.len());
        let left = match self.horizontal {
            HorizontalAlignment::Left => self.position.x,
            HorizontalAlignment::Center => self.position.x - width / 2.0,
            HorizontalAlignment::Right => self.position.x - width,
        };
        BoundingBox::new(left, self.top(), width, height)
    }
}

impl Visual for Text {
    fn animations(&self) -> Option<&[Animation]> {
        self.animations.as_deref()
    }
}

impl Styled for Text {
    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl Animated for Text {
    fn animations_mut(&mut self) -> &mut Option<Vec<Animation>> {
        &mut self.animations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::text::{bold, colorize, estimate_string_width, line};
    use crate::stylesheet::Color;

    #[test]
    fn test_encode_two_lines() {
        let text = Text::new(Point::new(50.0, 22.0), ["Client", "of user"]);
        assert_eq!(
            text.to_markup(),
            "<text text-anchor=\"middle\" dominant-baseline=\"middle\">\n    <tspan x=\"50\" y=\"11\">Client</tspan>\n    <tspan x=\"50\" y=\"33\">of user</tspan>\n</text>\n"
        );
    }

    #[test]
    fn test_styled_segments_register_classes() {
        let text = Text::new(
            Point::ORIGIN,
            [line([bold("Server"), " of provider".into()]), colorize(Color::Pink, "hash").into()],
        );
        let mut collector = Collector::new();
        let markup = text.encode(&mut collector, "");
        assert!(markup.contains(r#"<tspan class="bold">Server</tspan> of provider"#));
        assert!(markup.contains(r#"<tspan class="pink">hash</tspan>"#));
        assert!(collector.classes.contains("bold"));
        assert!(collector.classes.contains("pink"));
    }

    #[test]
    fn test_text_is_escaped() {
        let text = Text::new(Point::ORIGIN, ["a < b & c"]);
        assert!(text.to_markup().contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_bounding_box_centered() {
        let text = Text::new(Point::new(100.0, 50.0), ["AA"]);
        let width = estimate_string_width("AA");
        let bounds = text.bounding_box();
        assert!((bounds.x - (100.0 - width / 2.0)).abs() < 1e-9);
        assert_eq!(bounds.y, 50.0 - LINE_HEIGHT / 2.0);
        assert_eq!(bounds.height, LINE_HEIGHT);
        assert_eq!(text.center(), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_bounding_box_aligned_left_top() {
        let text = Text::new(Point::new(10.0, 20.0), ["A", "B"])
            .aligned(HorizontalAlignment::Left, VerticalAlignment::Top);
        let bounds = text.bounding_box();
        assert_eq!(bounds.x, 10.0);
        assert_eq!(bounds.y, 20.0);
        assert_eq!(bounds.height, 2.0 * LINE_HEIGHT);
        assert!(text.to_markup().contains(r#"text-anchor="start""#));
    }

    #[test]
    fn test_bounding_box_aligned_right_bottom() {
        let text = Text::new(Point::new(10.0, 20.0), ["A"])
            .aligned(HorizontalAlignment::Right, VerticalAlignment::Bottom);
        let bounds = text.bounding_box();
        assert_eq!(bounds.right(), 10.0);
        assert_eq!(bounds.bottom(), 20.0);
    }
}
