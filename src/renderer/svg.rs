//! Assembly of complete SVG documents from element trees

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::SceneError;
use crate::layout::BoundingBox;
use crate::stylesheet::Stylesheet;

use super::collector::Collector;
use super::element::{fmt_num, Element, Encode, Node, INDENTATION};
use super::group::Group;
use super::SvgConfig;

/// The top-level elements of one diagram
///
/// A document is itself structural: it needs at least one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    content: Group,
}

impl Document {
    pub fn new<I, E>(elements: I) -> Result<Self, SceneError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Ok(Self {
            content: Group::new(elements)?,
        })
    }

    pub fn elements(&self) -> &[Element] {
        self.content.children()
    }

    /// The visible region: the clipping box of all elements, or their
    /// bounding box when none of them clips, grown by `padding`
    pub fn view_box(&self, padding: f64) -> BoundingBox {
        self.content
            .clipping_box()
            .unwrap_or_else(|| self.content.bounding_box())
            .expanded(padding)
    }

    /// Render the document with a fresh collector
    pub fn render(&self, config: &SvgConfig, stylesheet: &Stylesheet) -> String {
        let mut collector = Collector::new();
        let body: String = self
            .elements()
            .iter()
            .map(|element| element.encode(&mut collector, INDENTATION))
            .collect();
        log::debug!(
            "encoded {} elements using {} classes and {} markers",
            self.elements().len(),
            collector.classes.len(),
            collector.markers.len()
        );
        assemble(&body, &collector, self.view_box(config.padding), config, stylesheet)
    }

    /// The rendered document as a base64 data URI for inline embedding
    pub fn data_uri(&self, config: &SvgConfig, stylesheet: &Stylesheet) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(self.render(config, stylesheet))
        )
    }

    /// Render the document and write it to `path`
    pub fn write_to(
        &self,
        path: &Path,
        config: &SvgConfig,
        stylesheet: &Stylesheet,
    ) -> Result<(), SceneError> {
        fs::write(path, self.render(config, stylesheet))
            .map_err(|e| SceneError::io(path.display().to_string(), e))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

/// Combine encoded markup with the definitions gathered while encoding it
fn assemble(
    body: &str,
    collector: &Collector,
    view_box: BoundingBox,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut svg = String::new();

    if config.standalone {
        svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        svg.push('\n');
    }

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        fmt_num(view_box.x),
        fmt_num(view_box.y),
        fmt_num(view_box.width),
        fmt_num(view_box.height),
        fmt_num(view_box.width),
        fmt_num(view_box.height)
    ));
    svg.push('\n');

    if config.embed_style {
        svg.push_str(INDENTATION);
        svg.push_str("<style>\n");
        for rule in stylesheet.css(&collector.classes).lines() {
            svg.push_str(INDENTATION);
            svg.push_str(INDENTATION);
            svg.push_str(rule);
            svg.push('\n');
        }
        svg.push_str(INDENTATION);
        svg.push_str("</style>\n");
    }

    if !collector.markers.is_empty() {
        svg.push_str(INDENTATION);
        svg.push_str("<defs>\n");
        for marker in &collector.markers {
            svg.push_str(INDENTATION);
            svg.push_str(INDENTATION);
            svg.push_str(&marker.definition());
            svg.push('\n');
        }
        svg.push_str(INDENTATION);
        svg.push_str("</defs>\n");
    }

    svg.push_str(body);
    svg.push_str("</svg>\n");
    svg
}

/// Render elements to an SVG string
pub fn render_svg<I, E>(
    elements: I,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> Result<String, SceneError>
where
    I: IntoIterator<Item = E>,
    E: Into<Element>,
{
    Ok(Document::new(elements)?.render(config, stylesheet))
}
