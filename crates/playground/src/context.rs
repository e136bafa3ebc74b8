//! Script run configuration

/// Configuration for a demonstration run.
///
/// The default reproduces the plain transcript with no extra lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptConfig {
    /// Print a section heading before each group of observations
    pub annotate: bool,
}

impl ScriptConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable section headings.
    pub fn with_annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }
}
