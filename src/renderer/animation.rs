//! Animation children of visual elements

use super::collector::Collector;
use super::element::{escape_xml, fmt_num, Encode};

/// How often an `<animate>` repeats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repeat {
    Indefinite,
    Count(u32),
}

impl Repeat {
    fn as_attribute(self) -> String {
        match self {
            Repeat::Indefinite => "indefinite".to_string(),
            Repeat::Count(count) => count.to_string(),
        }
    }
}

/// An SVG animation element
#[derive(Debug, Clone, PartialEq)]
pub enum Animation {
    /// Interpolate an attribute through a list of values
    Animate {
        attribute: String,
        values: Vec<String>,
        /// Duration of one cycle in seconds
        duration: f64,
        repeat: Repeat,
    },
    /// Set an attribute to a value at a point in time
    Set {
        attribute: String,
        to: String,
        begin: String,
    },
}

impl Animation {
    /// An animation that loops forever through `values`
    pub fn animate<I, S>(attribute: impl Into<String>, values: I, duration: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Animation::Animate {
            attribute: attribute.into(),
            values: values.into_iter().map(Into::into).collect(),
            duration,
            repeat: Repeat::Indefinite,
        }
    }

    pub fn set(attribute: impl Into<String>, to: impl Into<String>, begin: impl Into<String>) -> Self {
        Animation::Set {
            attribute: attribute.into(),
            to: to.into(),
            begin: begin.into(),
        }
    }

    /// Replace the repeat count of an `Animate`, no effect on `Set`
    pub fn repeated(mut self, count: Repeat) -> Self {
        if let Animation::Animate { repeat, .. } = &mut self {
            *repeat = count;
        }
        self
    }
}

impl Encode for Animation {
    fn encode(&self, _collector: &mut Collector, prefix: &str) -> String {
        match self {
            Animation::Animate {
                attribute,
                values,
                duration,
                repeat,
            } => format!(
                r#"{}<animate attributeName="{}" values="{}" dur="{}s" repeatCount="{}"/>"#,
                prefix,
                escape_xml(attribute),
                escape_xml(&values.join(";")),
                fmt_num(*duration),
                repeat.as_attribute()
            ) + "\n",
            Animation::Set {
                attribute,
                to,
                begin,
            } => format!(
                r#"{}<set attributeName="{}" to="{}" begin="{}"/>"#,
                prefix,
                escape_xml(attribute),
                escape_xml(to),
                escape_xml(begin)
            ) + "\n",
        }
    }
}
