//! Error types for scene construction and document output

use thiserror::Error;

/// Errors raised while building or writing a scene graph.
///
/// The first two variants are contract violations in a diagram script.
/// They are returned rather than caught so that `?` carries them up to the
/// generator, which aborts the build.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A group (or document) was constructed without children
    #[error("a structural element has to have children")]
    EmptyStructuralElement,

    /// `BoundingBox::around_all` was called with no boxes
    #[error("cannot compute the bounding box around zero boxes")]
    EmptyBoxSet,

    /// Writing the rendered document failed
    #[error("failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SceneError {
    /// Create an I/O error for the given output path
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_structural_element_display() {
        let err = SceneError::EmptyStructuralElement;
        assert_eq!(err.to_string(), "a structural element has to have children");
    }

    #[test]
    fn test_io_error_display() {
        let err = SceneError::io(
            "out/a.svg",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("out/a.svg"));
        assert!(err.to_string().contains("denied"));
    }
}
