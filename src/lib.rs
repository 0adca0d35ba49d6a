//! ef1p diagrams - An SVG scene graph for explanatory diagrams
//!
//! This library provides the geometry, element tree, and renderer used by the
//! diagram scripts. Scripts compute every coordinate up front; rendering
//! collects the classes and markers the elements use while encoding them.
//!
//! # Example
//!
//! ```rust
//! use ef1p_diagrams::layout::Point;
//! use ef1p_diagrams::renderer::Rectangle;
//! use ef1p_diagrams::render;
//!
//! let svg = render([Rectangle::new(Point::new(0.0, 0.0), Point::new(30.0, 10.0))]).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("<rect"));
//! ```

pub mod diagrams;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod stylesheet;

pub use diagrams::Diagram;
pub use error::SceneError;
pub use layout::{BoundingBox, Point, Side};
pub use renderer::{render_svg, Collector, Document, Element, SvgConfig, VisualElement};

// Re-export Stylesheet for public API
pub use stylesheet::{Color, Stylesheet};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for the collected classes
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render elements to SVG with default configuration
///
/// This is the main entry point for the library. The elements become the
/// top level of one document; an empty list is rejected.
pub fn render<I, E>(elements: I) -> Result<String, SceneError>
where
    I: IntoIterator<Item = E>,
    E: Into<Element>,
{
    render_with_config(elements, &RenderConfig::default())
}

/// Render elements to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use ef1p_diagrams::layout::Point;
/// use ef1p_diagrams::renderer::{Line, MarkerPlacement};
/// use ef1p_diagrams::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new().with_svg(SvgConfig::default().with_padding(10.0));
/// let arrow = Line::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0))
///     .with_marker(MarkerPlacement::End);
///
/// let svg = render_with_config([arrow], &config).unwrap();
/// assert!(svg.contains("<marker id=\"arrow\""));
/// ```
pub fn render_with_config<I, E>(elements: I, config: &RenderConfig) -> Result<String, SceneError>
where
    I: IntoIterator<Item = E>,
    E: Into<Element>,
{
    render_svg(elements, &config.svg, &config.stylesheet)
}
