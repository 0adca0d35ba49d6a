//! Geometry and text measurement used to lay out diagrams
//!
//! Diagram scripts do all layout arithmetic themselves; this module only
//! provides the value types and the text width estimate they rely on.

pub mod text;
pub mod types;

pub use text::{
    estimate_line_width, estimate_string_width, estimate_text_size_with_margin, estimate_text_width,
    estimate_text_width_with_margin, TextLine, TextSegment, TextStyle, LINE_HEIGHT, TEXT_MARGIN,
};
pub use types::*;
