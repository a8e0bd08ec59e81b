//! SVG generation from styled cell grids

use crate::geometry::{IntPoint, IntRect, IntSize};
use crate::shape::{place_pixel, Element, ElementCluster, PixelStyle};
use crate::source::PixelSource;
use crate::RenderError;

use super::SvgConfig;

/// Build SVG documents incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    paths: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            paths: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a path element
    ///
    /// With `even_odd`, areas enclosed by an even number of loops (holes)
    /// stay empty whatever direction the loops run in.
    pub fn add_path(&mut self, d: &str, even_odd: bool) {
        let fill_rule = if even_odd { r#" fill-rule="evenodd""# } else { "" };
        let fill = self
            .config
            .fill
            .as_deref()
            .map(|fill| format!(r#" fill="{}""#, escape_xml(fill)))
            .unwrap_or_default();
        self.paths.push(format!(
            r#"{}<path d="{}"{}{}/>"#,
            self.indent_str(),
            d,
            fill_rule,
            fill
        ));
    }

    /// Build the final SVG string for a canvas of `size` cells
    pub fn build(self, size: IntSize) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#);
            svg.push_str(nl);
        }

        // One user unit per cell
        svg.push_str(&format!(
            r#"<svg width="100%" height="100%" viewBox="0 0 {} {}" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
            size.width, size.height
        ));
        svg.push_str(nl);

        for path in &self.paths {
            svg.push_str(path);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// A canvas of placed cell outlines
#[derive(Debug, Clone)]
pub struct GridSvg {
    size: IntSize,
    rect: IntRect,
    elements: Vec<Element>,
}

impl GridSvg {
    pub fn new(size: IntSize) -> Self {
        Self {
            size,
            rect: IntRect::new(IntPoint::ZERO, size),
            elements: vec![],
        }
    }

    /// A canvas sized to `source` with all of its cells placed
    pub fn from_source<S: PixelSource + ?Sized>(source: &S) -> Self {
        let mut svg = Self::new(source.size());
        svg.add_pixels(source);
        svg
    }

    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Elements in placement order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Place one styled cell
    ///
    /// # Panics
    ///
    /// Panics if `point` lies outside the canvas.
    pub fn add_pixel(&mut self, point: IntPoint, style: &PixelStyle) {
        assert!(
            self.rect.contains(point),
            "point {} lies outside of the {} canvas",
            point,
            self.size
        );
        self.elements.extend(place_pixel(point, style));
    }

    /// Place every styled cell `source` reports inside the canvas, row by row
    pub fn add_pixels<S: PixelSource + ?Sized>(&mut self, source: &S) {
        for point in self.rect {
            if let Some(style) = source.sample_style(point) {
                self.add_pixel(point, &style);
            }
        }
    }

    /// Serialize the canvas
    ///
    /// With [`SvgConfig::merge_shapes`], each cluster of touching cells
    /// becomes one path holding its outlines; otherwise every element is its
    /// own path.
    pub fn content(&self, config: &SvgConfig) -> Result<String, RenderError> {
        let mut builder = SvgBuilder::new(config.clone());

        if config.merge_shapes {
            let clusters = ElementCluster::find_clusters(self.elements.clone());
            tracing::debug!(
                elements = self.elements.len(),
                clusters = clusters.len(),
                "merging clusters"
            );
            for cluster in &clusters {
                let position = cluster.seed_position().unwrap_or_default();
                let paths = cluster
                    .combined_paths()
                    .map_err(|source| RenderError::boundary(position, source))?;
                tracing::trace!(%position, elements = cluster.len(), loops = paths.len(), "cluster");

                let mut d = String::new();
                for path in &paths {
                    path.write_svg_d(&mut d);
                }
                if !d.is_empty() {
                    builder.add_path(&d, true);
                }
            }
        } else {
            for element in &self.elements {
                builder.add_path(&element.path.to_svg_d(), false);
            }
        }

        Ok(builder.build(self.size))
    }
}

/// Render every cell of `source` to an SVG string
pub fn render_svg<S: PixelSource + ?Sized>(
    source: &S,
    config: &SvgConfig,
) -> Result<String, RenderError> {
    GridSvg::from_source(source).content(config)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
