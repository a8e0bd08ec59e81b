//! Geometry primitives shared by the shape pipeline
//!
//! Integer types address grid cells; [`DecimalPoint`] addresses drawing
//! space with exact fixed-point coordinates; direction sets describe cell
//! edges and corners.

pub mod decimal;
pub mod direction;
pub mod types;

pub use decimal::{DecimalPoint, Fixed};
pub use direction::{Corners, DirectionSet, Directions, Edges};
pub use types::{IntPoint, IntRect, IntSize};
