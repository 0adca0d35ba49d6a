//! Scene graph and SVG renderer
//!
//! Diagram scripts build a tree of elements with fully resolved geometry.
//! Rendering walks the tree depth-first, threading a [`Collector`] through
//! every `encode` call, and [`Document`] turns the markup plus the collected
//! classes and markers into a complete SVG file.

pub mod animation;
pub mod arc;
pub mod collector;
pub mod config;
pub mod element;
pub mod group;
pub mod line;
pub mod rectangle;
pub mod svg;
pub mod text;

pub use animation::{Animation, Repeat};
pub use arc::{Arc, Sweep};
pub use collector::{Collector, Marker};
pub use config::SvgConfig;
pub use element::{Animated, Attributes, Element, Encode, Node, Styled, Visual, VisualElement};
pub use group::Group;
pub use line::{Line, MarkerPlacement};
pub use rectangle::Rectangle;
pub use svg::{render_svg, Document};
pub use text::{HorizontalAlignment, Text, VerticalAlignment};
