//! Diagrams of the number theory article

use crate::error::SceneError;
use crate::layout::{Point, TEXT_MARGIN};
use crate::renderer::{
    Arc, Element, HorizontalAlignment, Line, MarkerPlacement, Styled, Text, VerticalAlignment,
    VisualElement,
};
use crate::stylesheet::Color;

/// Number of elements on the axis
pub const N: u32 = 12;
/// Index of the element whose discrete logarithm is searched
pub const K: u32 = 9;
/// Length of a giant step
pub const S: u32 = 4;

const GAP: f64 = 40.0;
const DASH_RADIUS: f64 = 6.0;
const RADIUS: f64 = 20.0;
/// Flattening of the baby-step arcs
const RATIO: f64 = 0.5;

fn x(index: u32) -> f64 {
    f64::from(index) * GAP
}

/// The axis with one numbered tick position per element
fn axis_elements() -> Vec<VisualElement> {
    let mut elements: Vec<VisualElement> = vec![Line::new(
        Point::new(GAP / 2.0, 0.0),
        Point::new(x(N) + GAP / 2.0, 0.0),
    )
    .with_color(Color::Gray)
    .into()];
    for index in 1..=N {
        elements.push(
            Text::new(
                Point::new(x(index), DASH_RADIUS + TEXT_MARGIN.y),
                [index.to_string()],
            )
            .aligned(HorizontalAlignment::Center, VerticalAlignment::Top)
            .into(),
        );
    }
    elements
}

/// Baby-step giant-step: giant steps to the right until the target is hit
pub fn dlp_giant_step_right() -> Result<Vec<Element>, SceneError> {
    let mut elements = axis_elements();
    let top = |index: u32| Point::new(x(index), -DASH_RADIUS);

    for i in 1..=N {
        if i >= K && i < K + S - 1 {
            elements.insert(
                0,
                Arc::new(top(i), top(i + 1), RADIUS)
                    .with_ratio(RATIO)
                    .with_marker(MarkerPlacement::End)
                    .with_color(Color::Green)
                    .into(),
            );
        }
        if i < K && i % S == 1 {
            elements.push(
                Arc::new(top(i), top(i + S), RADIUS * 2.6)
                    .with_marker(MarkerPlacement::End)
                    .with_color(Color::Blue)
                    .into(),
            );
        }
        let color = if i == 1 {
            Some(Color::Pink)
        } else if i >= K && i < K + S {
            Some(Color::Green)
        } else {
            None
        };
        let mut tick = Line::new(
            Point::new(x(i), -DASH_RADIUS),
            Point::new(x(i), DASH_RADIUS),
        );
        tick.attributes.color = color;
        elements.push(tick.into());
    }

    Ok(elements.into_iter().map(Element::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Node;

    fn arcs(elements: &[Element], color: Color) -> Vec<&Arc> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::Visual(VisualElement::Arc(arc)) if arc.attributes.color == Some(color) => {
                    Some(arc)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_giant_steps_start_at_one_and_stop_before_target() {
        let elements = dlp_giant_step_right().unwrap();
        let giant = arcs(&elements, Color::Blue);
        let starts: Vec<f64> = giant.iter().map(|arc| arc.start.x).collect();
        assert_eq!(starts, vec![x(1), x(5)]);
    }

    #[test]
    fn test_baby_steps_after_target() {
        let elements = dlp_giant_step_right().unwrap();
        assert_eq!(arcs(&elements, Color::Green).len(), (S - 1) as usize);
    }

    #[test]
    fn test_baby_steps_are_flattened() {
        let elements = dlp_giant_step_right().unwrap();
        for arc in arcs(&elements, Color::Green) {
            let bounds = arc.bounding_box();
            assert!((bounds.y - (-DASH_RADIUS - RADIUS * RATIO)).abs() < 1e-9);
            assert!(arc.path_data().contains("A20 10 "));
        }
    }

    #[test]
    fn test_arcs_bulge_above_axis() {
        let elements = dlp_giant_step_right().unwrap();
        for arc in arcs(&elements, Color::Blue) {
            assert!(arc.bounding_box().y < -DASH_RADIUS);
        }
    }
}
