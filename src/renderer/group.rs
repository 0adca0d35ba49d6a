//! Groups, the structural element of the scene graph

use crate::error::SceneError;
use crate::layout::BoundingBox;

use super::collector::Collector;
use super::element::{render_children, tag, Attributes, Element, Encode, Node, Styled};

/// A `<g>` wrapping one or more other elements
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    attributes: Attributes,
    children: Vec<Element>,
}

impl Group {
    /// Fails with [`SceneError::EmptyStructuralElement`] when `children` is
    /// empty
    pub fn new<I, E>(children: I) -> Result<Self, SceneError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let children: Vec<Element> = children.into_iter().map(Into::into).collect();
        if children.is_empty() {
            return Err(SceneError::EmptyStructuralElement);
        }
        Ok(Self {
            attributes: Attributes::default(),
            children,
        })
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

impl Encode for Group {
    fn encode(&self, collector: &mut Collector, prefix: &str) -> String {
        let attributes = self.attributes.render(collector);
        let children = render_children(&self.children, collector, prefix);
        tag(prefix, "g", &attributes, Some(children))
    }
}

impl Node for Group {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around_all(self.children.iter().map(Node::bounding_box))
            .expect("a group always has children")
    }

    /// The union of the children's clipping boxes
    ///
    /// Unlike the bounding box, children without a clipping box are left
    /// out, and a group none of whose children clip has no clipping box.
    fn clipping_box(&self) -> Option<BoundingBox> {
        if self.attributes.ignore_for_clipping {
            return None;
        }
        BoundingBox::around_all(self.children.iter().filter_map(Node::clipping_box)).ok()
    }
}

impl Styled for Group {
    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;
    use crate::renderer::rectangle::Rectangle;

    fn square(x: f64) -> Rectangle {
        Rectangle::new(Point::new(x, 0.0), Point::new(10.0, 10.0))
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let result = Group::new(Vec::<Element>::new());
        assert!(matches!(result, Err(SceneError::EmptyStructuralElement)));
    }

    #[test]
    fn test_bounding_box_is_union_of_children() {
        let group = Group::new([square(0.0), square(20.0)]).unwrap();
        assert_eq!(group.bounding_box(), BoundingBox::new(0.0, 0.0, 30.0, 10.0));
    }

    #[test]
    fn test_clipping_box_skips_ignored_children() {
        let group = Group::new([square(0.0), square(20.0).ignored_for_clipping()]).unwrap();
        assert_eq!(group.clipping_box(), Some(BoundingBox::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(group.bounding_box(), BoundingBox::new(0.0, 0.0, 30.0, 10.0));
    }

    #[test]
    fn test_clipping_box_none_when_no_child_clips() {
        let group = Group::new([
            square(0.0).ignored_for_clipping(),
            square(20.0).ignored_for_clipping(),
        ])
        .unwrap();
        assert_eq!(group.clipping_box(), None);
    }

    #[test]
    fn test_ignored_group_has_no_clipping_box() {
        let group = Group::new([square(0.0)]).unwrap().ignored_for_clipping();
        assert_eq!(group.clipping_box(), None);
    }

    #[test]
    fn test_nested_groups_encode_with_indentation() {
        let inner = Group::new([square(0.0)]).unwrap().with_id("inner");
        let outer = Group::new([Element::from(inner)]).unwrap();
        assert_eq!(
            outer.to_markup(),
            "<g>\n    <g id=\"inner\">\n        <rect x=\"0\" y=\"0\" width=\"10\" height=\"10\"/>\n    </g>\n</g>\n"
        );
    }
}
