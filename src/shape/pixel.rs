//! Per-cell outline generation
//!
//! Each styled grid cell becomes one or more [`Element`]s: an outline plus the
//! corners at which it can share straight edges with neighboring cells.

use crate::geometry::{Corners, DecimalPoint, DirectionSet, Fixed, IntPoint};

use super::path::{Path, PathBuilder};

/// The outline drawn for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelShape {
    /// Full square
    Square,
    /// Circle inscribed in the cell
    Circle,
    /// Square with the given corners rounded
    ///
    /// When `inverted`, only the area between each rounded corner and the
    /// cell's corner point is drawn (a notch filling the outside of the
    /// rounding).
    RoundedCorners { corners: Corners, inverted: bool },
}

impl PixelShape {
    pub fn rounded(corners: Corners) -> Self {
        PixelShape::RoundedCorners {
            corners,
            inverted: false,
        }
    }

    pub fn inverted(corners: Corners) -> Self {
        PixelShape::RoundedCorners {
            corners,
            inverted: true,
        }
    }
}

/// Shape, margin and corner radius of a cell
///
/// `margin` is the fraction of the cell left empty (split evenly on both
/// sides); `corner_radius` is a fraction of half the remaining cell size.
/// Both are clamped to `[0, 1]` and rounded to hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelStyle {
    shape: PixelShape,
    margin: Fixed,
    corner_radius: Fixed,
}

impl PixelStyle {
    pub fn new(shape: PixelShape, margin: Fixed, corner_radius: Fixed) -> Self {
        Self {
            shape,
            margin: margin.clamp_unit().round_to_hundredths(),
            corner_radius: corner_radius.clamp_unit().round_to_hundredths(),
        }
    }

    /// A style without margin and with fully rounded corners
    pub fn with_shape(shape: PixelShape) -> Self {
        Self::new(shape, Fixed::ZERO, Fixed::ONE)
    }

    /// A plain unmargined square
    pub fn standard() -> Self {
        Self::with_shape(PixelShape::Square)
    }

    /// Style from whole percentages, as given on the command line
    pub fn from_percentages(shape: PixelShape, margin: u32, corner_radius: u32) -> Self {
        Self::new(
            shape,
            Fixed::from_percent(margin),
            Fixed::from_percent(corner_radius),
        )
    }

    pub fn with_margin(self, margin: Fixed) -> Self {
        Self::new(self.shape, margin, self.corner_radius)
    }

    pub fn with_corner_radius(self, corner_radius: Fixed) -> Self {
        Self::new(self.shape, self.margin, corner_radius)
    }

    pub fn shape(&self) -> PixelShape {
        self.shape
    }

    pub fn margin(&self) -> Fixed {
        self.margin
    }

    pub fn corner_radius(&self) -> Fixed {
        self.corner_radius
    }
}

impl Default for PixelStyle {
    fn default() -> Self {
        Self::standard()
    }
}

/// A placed outline at a grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The closed outline in drawing space
    pub path: Path,
    /// The grid cell the outline belongs to
    pub position: IntPoint,
    /// Quadrants of the cell whose straight edges may coincide with a
    /// neighbor's; always empty for margined cells
    pub connecting_quadrants: Corners,
}

impl Element {
    pub fn new(path: Path, position: IntPoint, connecting_quadrants: Corners) -> Self {
        Self {
            path,
            position,
            connecting_quadrants,
        }
    }
}

/// Generate the elements for one styled cell
///
/// Most shapes yield a single element. Inverted rounded corners yield one
/// element per corner, and nothing at all when no corner is drawn.
pub fn place_pixel(position: IntPoint, style: &PixelStyle) -> Vec<Element> {
    let margin = style.margin();
    let size = Fixed::ONE - margin;
    let origin = DecimalPoint::from_int(position.x, position.y).offset_by(margin.half(), margin.half());
    let flush = margin.is_zero();

    let element = |path: Path, quadrants: Corners| {
        let quadrants = if flush { quadrants } else { Corners::empty() };
        Element::new(path, position, quadrants)
    };

    let placements = match style.shape() {
        PixelShape::Square => vec![element(square(origin, size), Corners::ALL)],
        PixelShape::Circle => {
            let path = rounded_square(origin, size, Corners::ALL, Fixed::ONE);
            vec![element(path, Corners::empty())]
        }
        PixelShape::RoundedCorners {
            corners,
            inverted: false,
        } => {
            let radius = style.corner_radius();
            let path = rounded_square(origin, size, corners, radius);
            // Fully rounded corners leave no straight edge to share
            let quadrants = if radius == Fixed::ONE {
                Corners::ALL - corners
            } else {
                Corners::ALL
            };
            vec![element(path, quadrants)]
        }
        PixelShape::RoundedCorners {
            corners,
            inverted: true,
        } => inverted_rounded_square(origin, size, corners, style.corner_radius())
            .into_iter()
            .map(|(path, corner)| element(path, corner))
            .collect(),
    };

    placements
        .into_iter()
        .filter(|element| {
            if element.path.is_empty() {
                tracing::trace!(%position, "dropping degenerate placement");
                false
            } else {
                true
            }
        })
        .collect()
}

/// Axis-aligned square, clockwise from the top-left point
pub fn square(origin: DecimalPoint, size: Fixed) -> Path {
    let mut builder = PathBuilder::new(origin);
    builder
        .line_to(origin.offset_by(size, Fixed::ZERO))
        .line_to(origin.offset_by(size, size))
        .line_to(origin.offset_by(Fixed::ZERO, size));
    builder.finish(true)
}

/// Square with rounded corners, clockwise from the top-left corner
///
/// `corner_radius` is relative to half of `size`. Every side is split at
/// the corner radius, rounded or not, so two neighbors with the same radius
/// subdivide their shared side identically.
pub fn rounded_square(
    origin: DecimalPoint,
    size: Fixed,
    rounded: Corners,
    corner_radius: Fixed,
) -> Path {
    let needs_edge_line = corner_radius != Fixed::ONE;
    let mut corners = corner_geometry(origin, size, corner_radius).into_iter();
    let Some(first) = corners.next() else {
        return Path::default();
    };

    let mut builder = PathBuilder::new(first.start);
    for (index, corner) in std::iter::once(first).chain(corners).enumerate() {
        if index > 0 && needs_edge_line {
            builder.line_to(corner.start);
        }
        if rounded.contains(corner.corner) {
            builder.arc_to(corner.end, corner.radius, true);
        } else {
            builder.line_to(corner.point).line_to(corner.end);
        }
    }
    builder.finish(needs_edge_line)
}

/// The notches outside the rounding of each given corner
///
/// Each notch runs along the rounding arc, then back to the cell's corner
/// point and on to the arc's start.
pub fn inverted_rounded_square(
    origin: DecimalPoint,
    size: Fixed,
    rounded: Corners,
    corner_radius: Fixed,
) -> Vec<(Path, Corners)> {
    corner_geometry(origin, size, corner_radius)
        .into_iter()
        .filter(|corner| rounded.contains(corner.corner))
        .map(|corner| {
            let mut builder = PathBuilder::new(corner.start);
            builder
                .arc_to(corner.end, corner.radius, true)
                .line_to(corner.point);
            (builder.finish(true), corner.corner)
        })
        .collect()
}

/// Points describing how one corner of a cell is drawn
#[derive(Debug, Clone, Copy)]
struct CornerGeometry {
    corner: Corners,
    radius: Fixed,
    /// The sharp corner point
    point: DecimalPoint,
    /// Where the outline enters the corner
    start: DecimalPoint,
    /// Where the outline leaves the corner
    end: DecimalPoint,
}

/// Corner geometry in clockwise order, starting top-left
fn corner_geometry(origin: DecimalPoint, size: Fixed, corner_radius: Fixed) -> [CornerGeometry; 4] {
    let radius = (corner_radius * size).half();
    let corner = |corner: Corners, at: (i32, i32), from: (i32, i32), to: (i32, i32)| {
        let point = origin.offset_by(size * at.0, size * at.1);
        CornerGeometry {
            corner,
            radius,
            point,
            start: point.offset_by(radius * from.0, radius * from.1),
            end: point.offset_by(radius * to.0, radius * to.1),
        }
    };
    [
        corner(Corners::TOP_LEFT, (0, 0), (0, 1), (1, 0)),
        corner(Corners::TOP_RIGHT, (1, 0), (-1, 0), (0, 1)),
        corner(Corners::BOTTOM_RIGHT, (1, 1), (0, -1), (-1, 0)),
        corner(Corners::BOTTOM_LEFT, (0, 1), (1, 0), (0, -1)),
    ]
}
