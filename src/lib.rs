//! gridsvg - Merged vector paths for styled cell grids
//!
//! This library turns a grid of styled cells (typically a QR code bitmap)
//! into an SVG document. Touching cells are merged into combined outlines,
//! with every shared edge removed and straight runs joined.
//!
//! # Example
//!
//! ```rust
//! use gridsvg::render;
//!
//! let svg = render("##\n#.").unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(r#"<path d="M0 0 L2 0 L2 1 L1 1 L1 2 L0 2 Z""#));
//! ```

pub mod error;
pub mod geometry;
pub mod profile;
pub mod renderer;
pub mod shape;
pub mod source;

pub use error::GridError;
pub use geometry::{Corners, DecimalPoint, DirectionSet, Directions, Edges, Fixed, IntPoint, IntRect, IntSize};
pub use profile::{ConfigError, Style, StyleProfile, StyledBitmap, MAX_BORDER};
pub use renderer::{render_svg, GridSvg, SvgConfig};
pub use shape::{BoundaryError, Element, ElementCluster, Path, PixelShape, PixelStyle};
pub use source::{Bitmap, FnSource, PixelSource};

use thiserror::Error;

use profile::TomlRenderConfig;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Invalid grid input
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    /// The outlines of a cluster could not be merged
    #[error("cannot merge cluster at {position}: {source}")]
    Boundary {
        position: IntPoint,
        #[source]
        source: BoundaryError,
    },

    /// Invalid configuration
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

impl RenderError {
    pub fn boundary(position: IntPoint, source: BoundaryError) -> Self {
        RenderError::Boundary { position, source }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// How bitmap cells are styled
    pub profile: StyleProfile,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style profile
    pub fn with_profile(mut self, profile: StyleProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Load configuration from a TOML file
    ///
    /// The file has an optional `[style]` table for the profile and an
    /// optional `[svg]` table for output settings; missing keys keep their
    /// defaults.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        Self::from_parts(TomlRenderConfig::from_file(path)?)
    }

    /// Load configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridsvg::{RenderConfig, Style};
    ///
    /// let config = RenderConfig::from_str("[style]\npreset = \"dots\"\ncorner_radius = 50").unwrap();
    /// assert_eq!(config.profile.style, Style::Dots);
    /// assert!(config.svg.merge_shapes);
    /// ```
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_parts(TomlRenderConfig::from_str(content)?)
    }

    fn from_parts(parsed: TomlRenderConfig) -> Result<Self, ConfigError> {
        let (profile, svg) = parsed.into_parts()?;
        Ok(Self { profile, svg })
    }
}

/// Render a text-art bitmap to SVG with default configuration
///
/// This is the main entry point for the library. Dark cells are `#`, `X`,
/// `x`, `1` or `█`; light cells are `.`, `0`, `_` or spaces.
pub fn render(text: &str) -> Result<String, RenderError> {
    render_with_config(text, &RenderConfig::default())
}

/// Render a text-art bitmap to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use gridsvg::{render_with_config, RenderConfig, Style, StyleProfile, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_profile(StyleProfile::new(Style::Dots).with_border(1))
///     .with_svg(SvgConfig::default().with_fill("#222"));
///
/// let svg = render_with_config("#.#", &config).unwrap();
/// assert!(svg.contains(r#"viewBox="0 0 5 3""#));
/// assert!(svg.contains("A0.5 0.5"));
/// ```
pub fn render_with_config(text: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let bitmap = Bitmap::parse(text)?;
    render_bitmap(&bitmap, config)
}

/// Render a bitmap to SVG, styling its cells with the configured profile
pub fn render_bitmap(bitmap: &Bitmap, config: &RenderConfig) -> Result<String, RenderError> {
    config.profile.validate()?;
    let source = config.profile.apply(bitmap);
    tracing::debug!(
        style = ?config.profile.style,
        size = %source.size(),
        merge = config.svg.merge_shapes,
        "rendering bitmap"
    );
    render_svg(&source, &config.svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_bitmap() {
        let svg = render("#").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains(r#"d="M0 0 L1 0 L1 1 L0 1 Z""#));
    }

    #[test]
    fn test_render_invalid_character_error() {
        let err = render("#?").unwrap_err();
        assert!(matches!(
            err,
            RenderError::Grid(GridError::InvalidCharacter { found: '?', .. })
        ));
    }

    #[test]
    fn test_render_empty_input_error() {
        assert!(matches!(render("").unwrap_err(), RenderError::Grid(GridError::Empty)));
    }

    #[test]
    fn test_render_ragged_input_error() {
        let err = render("##\n#").unwrap_err();
        assert!(matches!(err, RenderError::Grid(GridError::RaggedRow { row: 1, .. })));
    }

    #[test]
    fn test_out_of_range_profile_is_rejected() {
        let config = RenderConfig::new().with_profile(StyleProfile::default().with_corner_radius(120));
        let err = render_with_config("#", &config).unwrap_err();
        assert!(matches!(err, RenderError::Config(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn test_huge_border_is_rejected() {
        let config = RenderConfig::new().with_profile(StyleProfile::default().with_border(u32::MAX / 2 + 1));
        let err = render_with_config("#", &config).unwrap_err();
        assert!(matches!(err, RenderError::Config(ConfigError::BorderTooLarge { .. })));
        assert_eq!(
            err.to_string(),
            "invalid config: border must be at most 1024 cells, got 2147483648"
        );
    }

    #[test]
    fn test_boundary_error_names_cluster() {
        let err = RenderError::boundary(
            IntPoint::new(3, 4),
            BoundaryError::odd_degree(DecimalPoint::from_int(1, 1), 3),
        );
        assert_eq!(
            err.to_string(),
            "cannot merge cluster at (3, 4): point 1 1 has odd degree 3 after edge cancellation"
        );
    }

    #[test]
    fn test_config_from_str_defaults() {
        let config = RenderConfig::from_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
    }
}
