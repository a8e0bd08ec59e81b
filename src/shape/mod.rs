//! Cell outlines and their merging into larger shapes
//!
//! The pipeline for a styled cell grid:
//! - [`place_pixel`] turns each cell into one or more [`Element`]s
//! - [`ElementCluster::find_clusters`] groups elements sharing straight edges
//! - [`ElementCluster::combined_paths`] reduces a cluster to its silhouette

mod boundary;
mod cluster;
mod curve;
mod error;
mod path;
mod pixel;

pub use boundary::{extract_boundary, stitch_loops};
pub use cluster::ElementCluster;
pub use curve::{Curve, CurveKey, CurveKind};
pub use error::BoundaryError;
pub use path::{Path, PathBuilder};
pub use pixel::{
    inverted_rounded_square, place_pixel, rounded_square, square, Element, PixelShape, PixelStyle,
};
