//! Circular arcs
//!
//! An arc is drawn with the SVG `A` path command. The center is derived the
//! same way an SVG renderer does it, so that the bounding box matches what
//! ends up on screen. Elliptical arcs are solved as circular arcs in a space
//! whose y axis is divided by the ratio of the radii.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::layout::{BoundingBox, Point};

use super::animation::Animation;
use super::collector::Collector;
use super::element::{
    fmt_num, render_children, tag, Animated, Attributes, Encode, Node, Styled, Visual,
};
use super::line::MarkerPlacement;

/// Direction in which the arc is drawn from its start to its end
///
/// With y pointing down, clockwise is the positive-angle direction and maps
/// to an SVG sweep flag of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sweep {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Sweep {
    fn flag(self) -> bool {
        matches!(self, Sweep::Clockwise)
    }
}

/// The circle an arc lies on and the angles it covers
///
/// All coordinates are in the space where the arc is circular.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ArcGeometry {
    center: Point,
    radius: f64,
    start_angle: f64,
    /// Signed angle swept from the start, positive for clockwise
    delta: f64,
}

impl ArcGeometry {
    fn covers(&self, angle: f64) -> bool {
        let offset = if self.delta >= 0.0 {
            (angle - self.start_angle).rem_euclid(TAU)
        } else {
            (self.start_angle - angle).rem_euclid(TAU)
        };
        offset <= self.delta.abs()
    }

    fn point_at(&self, angle: f64) -> Point {
        self.center + Point::new(angle.cos(), angle.sin()) * self.radius
    }
}

/// A circular arc between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub start: Point,
    pub end: Point,
    /// Radii smaller than half the distance between the endpoints are
    /// scaled up to exactly that, as in SVG
    pub radius: f64,
    /// Vertical radius divided by the horizontal one
    pub ratio: f64,
    pub large_arc: bool,
    pub sweep: Sweep,
    pub marker: Option<MarkerPlacement>,
    pub attributes: Attributes,
    pub animations: Option<Vec<Animation>>,
}

impl Arc {
    pub fn new(start: Point, end: Point, radius: f64) -> Self {
        Self {
            start,
            end,
            radius,
            ratio: 1.0,
            large_arc: false,
            sweep: Sweep::default(),
            marker: None,
            attributes: Attributes::default(),
            animations: None,
        }
    }

    pub fn with_sweep(mut self, sweep: Sweep) -> Self {
        self.sweep = sweep;
        self
    }

    /// Draw an elliptical arc with a vertical radius of `radius * ratio`
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn large(mut self) -> Self {
        self.large_arc = true;
        self
    }

    pub fn with_marker(mut self, marker: MarkerPlacement) -> Self {
        self.marker = Some(marker);
        self
    }

    /// `None` when the arc degenerates into a point or a straight line
    fn geometry(&self) -> Option<ArcGeometry> {
        if self.ratio == 0.0 {
            return None;
        }
        let start = self.flatten(self.start);
        let end = self.flatten(self.end);
        let half = (start - end) * 0.5;
        let half_squared = half.x * half.x + half.y * half.y;
        if half_squared == 0.0 || self.radius == 0.0 {
            return None;
        }
        let radius = self.radius.abs().max(half_squared.sqrt());
        let coefficient = ((radius * radius - half_squared) / half_squared)
            .max(0.0)
            .sqrt();
        let sign = if self.large_arc != self.sweep.flag() {
            1.0
        } else {
            -1.0
        };
        let offset = Point::new(half.y, -half.x) * (sign * coefficient);
        let center = offset + (start + end) * 0.5;

        let start_angle = (half.y - offset.y).atan2(half.x - offset.x);
        let end_angle = (-half.y - offset.y).atan2(-half.x - offset.x);
        let mut delta = end_angle - start_angle;
        if self.sweep.flag() && delta < 0.0 {
            delta += TAU;
        } else if !self.sweep.flag() && delta > 0.0 {
            delta -= TAU;
        }

        Some(ArcGeometry {
            center,
            radius,
            start_angle,
            delta,
        })
    }

    /// Map into the space where the arc is circular
    fn flatten(&self, point: Point) -> Point {
        Point::new(point.x, point.y / self.ratio.abs())
    }

    fn unflatten(&self, point: Point) -> Point {
        Point::new(point.x, point.y * self.ratio.abs())
    }

    /// The horizontal radius actually used for drawing
    pub fn effective_radius(&self) -> f64 {
        self.geometry().map_or(self.radius, |g| g.radius)
    }

    /// SVG path data for this arc
    pub fn path_data(&self) -> String {
        let radius = self.effective_radius();
        format!(
            "M{} {} A{} {} 0 {} {} {} {}",
            fmt_num(self.start.x),
            fmt_num(self.start.y),
            fmt_num(radius),
            fmt_num(radius * self.ratio.abs()),
            u8::from(self.large_arc),
            u8::from(self.sweep.flag()),
            fmt_num(self.end.x),
            fmt_num(self.end.y)
        )
    }
}

impl Encode for Arc {
    fn encode(&self, collector: &mut Collector, prefix: &str) -> String {
        let mut attributes = self.attributes.render(collector);
        attributes.push_str(&format!(r#" d="{}""#, self.path_data()));
        attributes.push_str(&MarkerPlacement::render(
            self.marker,
            &self.attributes,
            collector,
        ));
        let children = self
            .animations
            .as_deref()
            .map(|animations| render_children(animations, collector, prefix));
        tag(prefix, "path", &attributes, children)
    }
}

impl Node for Arc {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The endpoints plus every axis extreme of the ellipse the arc passes
    fn bounding_box(&self) -> BoundingBox {
        let chord = BoundingBox::from_corners(self.start, self.end);
        let Some(geometry) = self.geometry() else {
            return chord;
        };
        (0..4)
            .map(|quadrant| quadrant as f64 * FRAC_PI_2)
            .filter(|angle| geometry.covers(*angle))
            .fold(chord, |bounds, angle| {
                bounds.expand_to_include(self.unflatten(geometry.point_at(angle)))
            })
    }
}

impl Visual for Arc {
    fn animations(&self) -> Option<&[Animation]> {
        self.animations.as_deref()
    }
}

impl Styled for Arc {
    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl Animated for Arc {
    fn animations_mut(&mut self) -> &mut Option<Vec<Animation>> {
        &mut self.animations
    }
}
