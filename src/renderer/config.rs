//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Padding around the viewBox
    pub padding: f64,

    /// Whether to start the document with an XML declaration
    pub standalone: bool,

    /// Whether to embed a `<style>` block for the collected classes
    ///
    /// Diagrams inlined into a page that ships the same CSS can leave it out.
    pub embed_style: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            padding: 5.0,
            standalone: false,
            embed_style: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether the style block is embedded
    pub fn with_embedded_style(mut self, embed: bool) -> Self {
        self.embed_style = embed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.padding, 5.0);
        assert!(!config.standalone);
        assert!(config.embed_style);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_padding(10.0)
            .with_standalone(true)
            .with_embedded_style(false);

        assert_eq!(config.padding, 10.0);
        assert!(config.standalone);
        assert!(!config.embed_style);
    }
}
