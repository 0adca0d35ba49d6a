//! Text width estimation
//!
//! Diagrams are laid out without a font engine, so the width of a string is
//! estimated from a table of per-character advance widths that were measured
//! once in a browser. The table is an opaque empirical constant.

use crate::stylesheet::Color;

use super::types::Point;

/// Width used for every character that is not in the table
pub const DEFAULT_CHARACTER_WIDTH: f64 = 10.0;

/// Advance width of a character in the monospace font
pub const MONOSPACE_WIDTH: f64 = 8.42875;

/// Distance between the baselines of two lines of text
pub const LINE_HEIGHT: f64 = 22.0;

/// Space between text and the border of the shape that contains it
pub const TEXT_MARGIN: Point = Point { x: 10.0, y: 8.0 };

/// Widths of the printable ASCII characters from `' '` to `'~'`
const CHARACTER_WIDTHS: [f64; 95] = [
    3.08813,  // ' '
    5.48813,  // '!'
    6.35203,  // '"'
    9.28016,  // '#'
    9.28016,  // '$'
    12.57609, // '%'
    11.24813, // '&'
    3.68,     // '\''
    4.8,      // '('
    4.8,      // ')'
    6.4,      // '*'
    9.28016,  // '+'
    3.39203,  // ','
    5.55203,  // '-'
    3.39203,  // '.'
    4.89297,  // '/'
    9.28016,  // '0'
    9.28016,  // '1'
    9.28016,  // '2'
    9.28016,  // '3'
    9.28016,  // '4'
    9.28016,  // '5'
    9.28016,  // '6'
    9.28016,  // '7'
    9.28016,  // '8'
    9.28016,  // '9'
    4.03203,  // ':'
    4.03203,  // ';'
    9.28016,  // '<'
    9.28016,  // '='
    9.28016,  // '>'
    6.36813,  // '?'
    13.15203, // '@'
    10.88016, // 'A'
    10.35203, // 'B'
    10.96,    // 'C'
    12.04813, // 'D'
    9.29609,  // 'E'
    9.05609,  // 'F'
    11.74406, // 'G'
    12.09609, // 'H'
    4.91203,  // 'I'
    7.10406,  // 'J'
    10.89609, // 'K'
    8.22406,  // 'L'
    14.72,    // 'M'
    12.09609, // 'N'
    12.76813, // 'O'
    9.77609,  // 'P'
    12.76813, // 'Q'
    10.30406, // 'R'
    8.48,     // 'S'
    9.44,     // 'T'
    11.68,    // 'U'
    10.88016, // 'V'
    16.30406, // 'W'
    10.28813, // 'X'
    10.06406, // 'Y'
    9.98406,  // 'Z'
    4.8,      // '['
    4.92469,  // '\\'
    4.8,      // ']'
    9.28016,  // '^'
    6.30406,  // '_'
    4.91203,  // '`'
    8.11203,  // 'a'
    8.94406,  // 'b'
    7.47203,  // 'c'
    8.94406,  // 'd'
    8.38406,  // 'e'
    5.39203,  // 'f'
    8.17609,  // 'g'
    8.89609,  // 'h'
    4.09609,  // 'i'
    4.06859,  // 'j'
    8.38406,  // 'k'
    4.09609,  // 'l'
    13.13609, // 'm'
    8.89609,  // 'n'
    8.89609,  // 'o'
    8.83203,  // 'p'
    8.94406,  // 'q'
    6.44813,  // 'r'
    6.94406,  // 's'
    5.96813,  // 't'
    8.89609,  // 'u'
    8.19203,  // 'v'
    12.25609, // 'w'
    8.06406,  // 'x'
    8.19203,  // 'y'
    7.39203,  // 'z'
    4.8,      // '{'
    4.8,      // '|'
    4.8,      // '}'
    9.28016,  // '~'
];

/// The measured width of a character, if it is in the table
pub fn character_width(c: char) -> Option<f64> {
    match c {
        ' '..='~' => Some(CHARACTER_WIDTHS[c as usize - ' ' as usize]),
        _ => None,
    }
}

/// Estimate the width of a string in the normal text style
pub fn estimate_string_width(text: &str) -> f64 {
    text.chars()
        .rev()
        .map(|c| character_width(c).unwrap_or(DEFAULT_CHARACTER_WIDTH))
        .sum()
}

/// Estimate the width of a string in the monospace font
pub fn estimate_monospace_width(text: &str) -> f64 {
    text.chars().count() as f64 * MONOSPACE_WIDTH
}

/// Text styles that affect the width of a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    Small,
    Large,
    Script,
}

impl TextStyle {
    /// Factor applied to the width of a whole segment in this style
    pub fn width_multiplier(self) -> f64 {
        match self {
            TextStyle::Normal => 1.0,
            TextStyle::Bold => 1.01825,
            TextStyle::Italic => 0.92355,
            TextStyle::Small => 0.8,
            TextStyle::Large => 1.6,
            TextStyle::Script => 0.75,
        }
    }

    /// CSS class that selects this style, `None` for normal text
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            TextStyle::Normal => None,
            TextStyle::Bold => Some("bold"),
            TextStyle::Italic => Some("italic"),
            TextStyle::Small => Some("small"),
            TextStyle::Large => Some("large"),
            TextStyle::Script => Some("script"),
        }
    }
}

/// A run of text rendered with a single style and color
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextSegment {
    pub text: String,
    pub style: TextStyle,
    pub color: Option<Color>,
    /// Rendered in the monospace font
    pub code: bool,
}

impl TextSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Estimated width of this segment
    pub fn estimate_width(&self) -> f64 {
        let raw = if self.code {
            estimate_monospace_width(&self.text)
        } else {
            estimate_string_width(&self.text)
        };
        raw * self.style.width_multiplier()
    }

    /// Classes to put on the `<tspan>` of this segment
    pub fn classes(&self) -> Vec<&'static str> {
        self.color
            .map(Color::class_name)
            .into_iter()
            .chain(self.style.class_name())
            .chain(self.code.then_some("code"))
            .collect()
    }
}

impl From<&str> for TextSegment {
    fn from(text: &str) -> Self {
        TextSegment::new(text)
    }
}

impl From<String> for TextSegment {
    fn from(text: String) -> Self {
        TextSegment::new(text)
    }
}

/// A single line of text made of one or more segments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLine {
    pub segments: Vec<TextSegment>,
}

impl TextLine {
    pub fn new(segments: Vec<TextSegment>) -> Self {
        Self { segments }
    }

    /// Estimated width of the whole line
    pub fn estimate_width(&self) -> f64 {
        self.segments.iter().map(TextSegment::estimate_width).sum()
    }
}

impl From<TextSegment> for TextLine {
    fn from(segment: TextSegment) -> Self {
        TextLine::new(vec![segment])
    }
}

impl From<&str> for TextLine {
    fn from(text: &str) -> Self {
        TextSegment::from(text).into()
    }
}

impl From<String> for TextLine {
    fn from(text: String) -> Self {
        TextSegment::from(text).into()
    }
}

impl From<Vec<TextSegment>> for TextLine {
    fn from(segments: Vec<TextSegment>) -> Self {
        TextLine::new(segments)
    }
}

/// Concatenate segments into one line
pub fn line<I, S>(segments: I) -> TextLine
where
    I: IntoIterator<Item = S>,
    S: Into<TextSegment>,
{
    TextLine::new(segments.into_iter().map(Into::into).collect())
}

pub fn bold(text: impl Into<String>) -> TextSegment {
    TextSegment::new(text).with_style(TextStyle::Bold)
}

pub fn italic(text: impl Into<String>) -> TextSegment {
    TextSegment::new(text).with_style(TextStyle::Italic)
}

pub fn small(text: impl Into<String>) -> TextSegment {
    TextSegment::new(text).with_style(TextStyle::Small)
}

pub fn large(text: impl Into<String>) -> TextSegment {
    TextSegment::new(text).with_style(TextStyle::Large)
}

pub fn script(text: impl Into<String>) -> TextSegment {
    TextSegment::new(text).with_style(TextStyle::Script)
}

pub fn code(text: impl Into<String>) -> TextSegment {
    TextSegment {
        code: true,
        ..TextSegment::new(text)
    }
}

pub fn colorize(color: Color, segment: impl Into<TextSegment>) -> TextSegment {
    segment.into().with_color(color)
}

pub fn estimate_line_width(line: &TextLine) -> f64 {
    line.estimate_width()
}

/// Width of the widest line
pub fn estimate_text_width(lines: &[TextLine]) -> f64 {
    lines.iter().map(estimate_line_width).fold(0.0, f64::max)
}

/// Height taken by the given number of lines
pub fn estimate_text_height(line_count: usize) -> f64 {
    line_count as f64 * LINE_HEIGHT
}

/// Width of the text plus `margins` horizontal margins
pub fn estimate_text_width_with_margin(lines: &[TextLine], margins: f64) -> f64 {
    estimate_text_width(lines) + margins * TEXT_MARGIN.x
}

/// Size of a box that fits the text with a margin on every side
pub fn estimate_text_size_with_margin(lines: &[TextLine]) -> Point {
    Point::new(
        estimate_text_width(lines) + 2.0 * TEXT_MARGIN.x,
        estimate_text_height(lines.len()) + 2.0 * TEXT_MARGIN.y,
    )
}
