//! Diagram scripts
//!
//! Each diagram builds its elements with fully resolved geometry. The
//! registry lets the generator find them by name.

pub mod email;
pub mod number_theory;

use crate::error::SceneError;
use crate::renderer::{Document, Element};

/// A named diagram script producing one SVG file
#[derive(Debug, Clone, Copy)]
pub struct Diagram {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Result<Vec<Element>, SceneError>,
}

impl Diagram {
    /// Run the script and wrap its elements in a document
    pub fn document(&self) -> Result<Document, SceneError> {
        Document::new((self.build)()?)
    }

    /// Name of the generated file
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }
}

static DIAGRAMS: &[Diagram] = &[
    Diagram {
        name: "email-filtering",
        description: "Delivery from the sender's client to offline and online recipient clients",
        build: email::email_filtering,
    },
    Diagram {
        name: "applications-password-protection",
        description: "Salted password hashes between client, server and database",
        build: email::applications_password_protection,
    },
    Diagram {
        name: "dlp-giant-step-right",
        description: "Giant steps to the right in the baby-step giant-step algorithm",
        build: number_theory::dlp_giant_step_right,
    },
];

/// All registered diagrams in a stable order
pub fn all() -> &'static [Diagram] {
    DIAGRAMS
}

/// Look up a diagram by name
pub fn find(name: &str) -> Option<&'static Diagram> {
    DIAGRAMS.iter().find(|diagram| diagram.name == name)
}
