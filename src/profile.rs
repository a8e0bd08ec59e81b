//! Style profiles for two-color bitmaps
//!
//! A [`StyleProfile`] decides how each cell of a [`Bitmap`] is drawn: plain
//! squares, dots, holes cut into a solid area, or "liquid" shapes whose
//! corners round off wherever the bitmap changes color. Profiles can be
//! loaded from TOML together with the SVG output settings.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Corners, DirectionSet, IntPoint, IntRect, IntSize};
use crate::renderer::SvgConfig;
use crate::shape::{PixelShape, PixelStyle};
use crate::source::{Bitmap, PixelSource};

/// Errors that can occur when loading or validating a profile
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be between 0 and 100 percent, got {value}")]
    OutOfRange { field: &'static str, value: u32 },

    #[error("border must be at most {max} cells, got {border}")]
    BorderTooLarge { border: u32, max: u32 },
}

impl ConfigError {
    pub fn out_of_range(field: &'static str, value: u32) -> Self {
        ConfigError::OutOfRange { field, value }
    }

    pub fn border_too_large(border: u32) -> Self {
        ConfigError::BorderTooLarge {
            border,
            max: MAX_BORDER,
        }
    }
}

/// Widest quiet zone a profile accepts, in cells
pub const MAX_BORDER: u32 = 1024;

/// Styling preset for dark and light cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Dark cells as squares
    #[default]
    Standard,
    /// Dark cells as dots (rounded by the corner radius)
    Dots,
    /// Dark cells as squares with rounded holes where light cells are
    Holes,
    /// Dark cells rounded where they border light cells
    LiquidDots,
    /// Light cells rounded where they border dark cells, bridging diagonals
    LiquidHoles,
}

/// How a bitmap is turned into styled cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProfile {
    pub style: Style,
    /// Empty space around each cell, in percent of the cell size
    pub pixel_margin: u32,
    /// Corner radius in percent of half the cell size
    pub corner_radius: u32,
    /// Style safe areas as well
    pub style_all: bool,
    /// Cells (in bitmap coordinates) exempt from styling
    pub safe_areas: Vec<IntRect>,
    /// Blank cells added on every side of the bitmap
    pub border: u32,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            style: Style::Standard,
            pixel_margin: 0,
            corner_radius: 100,
            style_all: false,
            safe_areas: vec![],
            border: 0,
        }
    }
}

impl StyleProfile {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_pixel_margin(mut self, percent: u32) -> Self {
        self.pixel_margin = percent;
        self
    }

    pub fn with_corner_radius(mut self, percent: u32) -> Self {
        self.corner_radius = percent;
        self
    }

    pub fn with_style_all(mut self, style_all: bool) -> Self {
        self.style_all = style_all;
        self
    }

    pub fn with_safe_area(mut self, area: IntRect) -> Self {
        self.safe_areas.push(area);
        self
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Check that percentages and the border are within range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixel_margin > 100 {
            return Err(ConfigError::out_of_range("pixel_margin", self.pixel_margin));
        }
        if self.corner_radius > 100 {
            return Err(ConfigError::out_of_range("corner_radius", self.corner_radius));
        }
        if self.border > MAX_BORDER {
            return Err(ConfigError::border_too_large(self.border));
        }
        Ok(())
    }

    /// View `bitmap` as styled cells
    pub fn apply<'a>(&'a self, bitmap: &'a Bitmap) -> StyledBitmap<'a> {
        StyledBitmap {
            bitmap,
            profile: self,
        }
    }

    fn in_safe_area(&self, point: IntPoint) -> bool {
        self.safe_areas.iter().any(|area| area.contains(point))
    }

    fn style_for(&self, shape: PixelShape) -> PixelStyle {
        PixelStyle::from_percentages(shape, self.pixel_margin, self.corner_radius)
    }

    /// The shape of a bitmap cell before safe areas are considered
    fn shape_at(&self, bitmap: &Bitmap, point: IntPoint) -> Option<PixelShape> {
        let dark = bitmap.get(point);
        match self.style {
            Style::Standard => dark.then_some(PixelShape::Square),
            Style::Dots => dark.then_some(match self.corner_radius {
                0 => PixelShape::Square,
                100 => PixelShape::Circle,
                _ => PixelShape::rounded(Corners::ALL),
            }),
            Style::Holes if dark => Some(PixelShape::rounded(Corners::empty())),
            Style::Holes if self.corner_radius != 0 => Some(PixelShape::inverted(Corners::ALL)),
            Style::Holes => None,
            Style::LiquidDots => Some(liquid_shape(bitmap, point, false)),
            Style::LiquidHoles => Some(liquid_shape(bitmap, point, true)),
        }
    }
}

/// Corners of `point` rounded where the bitmap changes color around them
///
/// With `bridge_diagonally`, light cells also round towards a diagonal
/// light neighbor, so dark diagonals stay connected.
fn liquid_shape(bitmap: &Bitmap, point: IntPoint, bridge_diagonally: bool) -> PixelShape {
    let dark = bitmap.get(point);
    let differs = |dx: i32, dy: i32| bitmap.get(point.offset_by(dx, dy)) != dark;

    let corners = Corners::ALL
        .iter()
        .filter(|corner| {
            let (dx, dy) = corner.offset();
            differs(dx, 0) && differs(0, dy) && (differs(dx, dy) || dark != bridge_diagonally)
        })
        .fold(Corners::empty(), |acc, corner| acc | corner);

    if dark {
        PixelShape::rounded(corners)
    } else {
        PixelShape::inverted(corners)
    }
}

/// A bitmap seen through a [`StyleProfile`], padded by the profile's border
pub struct StyledBitmap<'a> {
    bitmap: &'a Bitmap,
    profile: &'a StyleProfile,
}

impl PixelSource for StyledBitmap<'_> {
    fn size(&self) -> IntSize {
        self.bitmap.size().padded(self.profile.border)
    }

    fn sample_style(&self, point: IntPoint) -> Option<PixelStyle> {
        let border = i32::try_from(self.profile.border).ok()?;
        let cell = point.offset_by(-border, -border);
        if !IntRect::new(IntPoint::ZERO, self.bitmap.size()).contains(cell) {
            return None;
        }

        let shape = self.profile.shape_at(self.bitmap, cell)?;
        if self.profile.style_all || !self.profile.in_safe_area(cell) {
            return Some(self.profile.style_for(shape));
        }

        // Safe areas keep their cells unstyled and drop light ones
        if !self.bitmap.get(cell) {
            return None;
        }
        Some(match shape {
            PixelShape::Square => PixelStyle::standard(),
            _ => PixelStyle::from_percentages(
                PixelShape::rounded(Corners::empty()),
                0,
                self.profile.corner_radius,
            ),
        })
    }
}

/// TOML structure for deserializing render configs
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct TomlRenderConfig {
    style: TomlProfile,
    svg: TomlSvg,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlProfile {
    preset: Option<Style>,
    pixel_margin: Option<u32>,
    corner_radius: Option<u32>,
    style_all: Option<bool>,
    border: Option<u32>,
    safe_areas: Vec<TomlRect>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRect {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlSvg {
    merge_shapes: Option<bool>,
    standalone: Option<bool>,
    pretty_print: Option<bool>,
    fill: Option<String>,
}

impl TomlRenderConfig {
    pub(crate) fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub(crate) fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the profile and SVG settings, validating ranges
    pub(crate) fn into_parts(self) -> Result<(StyleProfile, SvgConfig), ConfigError> {
        let defaults = StyleProfile::default();
        let style = self.style;
        let profile = StyleProfile {
            style: style.preset.unwrap_or(defaults.style),
            pixel_margin: style.pixel_margin.unwrap_or(defaults.pixel_margin),
            corner_radius: style.corner_radius.unwrap_or(defaults.corner_radius),
            style_all: style.style_all.unwrap_or(defaults.style_all),
            safe_areas: style
                .safe_areas
                .into_iter()
                .map(|r| IntRect::from_xywh(r.x, r.y, r.width, r.height))
                .collect(),
            border: style.border.unwrap_or(defaults.border),
        };
        profile.validate()?;

        let mut svg = SvgConfig::default();
        if let Some(merge) = self.svg.merge_shapes {
            svg = svg.with_merge_shapes(merge);
        }
        if let Some(standalone) = self.svg.standalone {
            svg = svg.with_standalone(standalone);
        }
        if let Some(pretty) = self.svg.pretty_print {
            svg = svg.with_pretty_print(pretty);
        }
        if let Some(fill) = self.svg.fill {
            svg = svg.with_fill(fill);
        }
        Ok((profile, svg))
    }
}
