//! Geometry primitives shared by the scene graph and the diagram scripts

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::SceneError;

/// A 2D point in the coordinate system (y grows downwards, as in SVG)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `factor`
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Move this point by `distance` towards the given side
    pub fn shifted(self, side: Side, distance: f64) -> Self {
        match side {
            Side::Top => Self::new(self.x, self.y - distance),
            Side::Right => Self::new(self.x + distance, self.y),
            Side::Bottom => Self::new(self.x, self.y + distance),
            Side::Left => Self::new(self.x - distance, self.y),
        }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Length of this point interpreted as a vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        self.scale(factor)
    }
}

/// A named side of a box, used to resolve anchors and label placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Whether this side lies on the horizontal axis (left or right)
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// An axis-aligned rectangle given by its top-left corner and its size
///
/// Width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "bounding box size must not be negative"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a bounding box from a position and a size
    pub fn from_position_and_size(position: Point, size: Point) -> Self {
        Self::from_corners(position, position + size)
    }

    /// Create the bounding box spanned by two arbitrary corners
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Top-left corner
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height as a point
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Midpoint of the given edge
    pub fn anchor(&self, side: Side) -> Point {
        let center = self.center();
        match side {
            Side::Top => Point::new(center.x, self.y),
            Side::Right => Point::new(self.right(), center.y),
            Side::Bottom => Point::new(center.x, self.bottom()),
            Side::Left => Point::new(self.x, center.y),
        }
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Check if this bounding box fully contains another
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        self.contains(other.position()) && self.contains(other.position() + other.size())
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Move the box by an offset
    pub fn translate(&self, offset: Point) -> BoundingBox {
        BoundingBox::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Grow the box by `margin` on every side
    ///
    /// A negative margin shrinks the box, at most down to its center.
    pub fn expanded(&self, margin: f64) -> BoundingBox {
        let center = self.center();
        let width = (self.width + 2.0 * margin).max(0.0);
        let height = (self.height + 2.0 * margin).max(0.0);
        BoundingBox::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// The smallest box containing all given boxes
    ///
    /// Fails with [`SceneError::EmptyBoxSet`] when no box is given.
    pub fn around_all<I>(boxes: I) -> Result<BoundingBox, SceneError>
    where
        I: IntoIterator<Item = BoundingBox>,
    {
        boxes
            .into_iter()
            .reduce(|acc, next| acc.union(&next))
            .ok_or(SceneError::EmptyBoxSet)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(Point::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_point_shifted() {
        let p = Point::new(10.0, 10.0);
        assert_eq!(p.shifted(Side::Top, 5.0), Point::new(10.0, 5.0));
        assert_eq!(p.shifted(Side::Bottom, 5.0), Point::new(10.0, 15.0));
        assert_eq!(p.shifted(Side::Left, 5.0), Point::new(5.0, 10.0));
        assert_eq!(p.shifted(Side::Right, 5.0), Point::new(15.0, 10.0));
    }

    #[test]
    fn test_from_corners_normalizes() {
        let b = BoundingBox::from_corners(Point::new(10.0, 20.0), Point::new(0.0, 5.0));
        assert_eq!(b, BoundingBox::new(0.0, 5.0, 10.0, 15.0));
    }

    #[test]
    fn test_anchors() {
        let b = BoundingBox::new(0.0, 0.0, 20.0, 10.0);
        assert_eq!(b.anchor(Side::Top), Point::new(10.0, 0.0));
        assert_eq!(b.anchor(Side::Right), Point::new(20.0, 5.0));
        assert_eq!(b.anchor(Side::Bottom), Point::new(10.0, 10.0));
        assert_eq!(b.anchor(Side::Left), Point::new(0.0, 5.0));
        assert_eq!(b.center(), Point::new(10.0, 5.0));
    }

    #[test]
    fn test_union() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, -5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), BoundingBox::new(0.0, -5.0, 30.0, 15.0));
    }

    #[test]
    fn test_around_all_single_box_is_identity() {
        let a = BoundingBox::new(3.0, 4.0, 5.0, 6.0);
        assert_eq!(BoundingBox::around_all([a]).unwrap(), a);
    }

    #[test]
    fn test_around_all_contains_every_corner() {
        let boxes = [
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(-4.0, 8.0, 2.0, 2.0),
            BoundingBox::new(5.0, -3.0, 1.0, 30.0),
        ];
        let around = BoundingBox::around_all(boxes).unwrap();
        assert_eq!(around, BoundingBox::new(-4.0, -3.0, 14.0, 30.0));
        for b in &boxes {
            assert!(around.encloses(b));
        }
    }

    #[test]
    fn test_around_all_empty_is_error() {
        let result = BoundingBox::around_all(Vec::new());
        assert!(matches!(result, Err(SceneError::EmptyBoxSet)));
    }

    #[test]
    fn test_expanded_and_translate() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(b.expanded(2.0), BoundingBox::new(-2.0, -2.0, 14.0, 14.0));
        assert_eq!(
            b.translate(Point::new(1.0, 2.0)),
            BoundingBox::new(1.0, 2.0, 10.0, 10.0)
        );
    }

    #[test]
    fn test_negative_margin_shrinks_to_center() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(b.expanded(-2.0), BoundingBox::new(2.0, 2.0, 6.0, 16.0));
        assert_eq!(b.expanded(-8.0), BoundingBox::new(5.0, 8.0, 0.0, 4.0));
        assert_eq!(b.expanded(-100.0), BoundingBox::new(5.0, 10.0, 0.0, 0.0));
    }
}
