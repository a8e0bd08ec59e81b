//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgConfig {
    /// Merge touching cells into combined outlines instead of one path per cell
    pub merge_shapes: bool,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to put each path on its own indented line
    pub pretty_print: bool,

    /// Fill color for all paths; SVG's default black when unset
    pub fill: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            merge_shapes: true,
            standalone: true,
            pretty_print: true,
            fill: None,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether touching cells are merged
    pub fn with_merge_shapes(mut self, merge: bool) -> Self {
        self.merge_shapes = merge;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the fill color
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }
}
