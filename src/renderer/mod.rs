//! SVG renderer for styled cell grids
//!
//! This module places cell outlines on a canvas and serializes them,
//! optionally merging touching cells into combined paths.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, GridSvg, SvgBuilder};
