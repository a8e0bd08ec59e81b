//! Closed outlines built from curves
//!
//! Converts curve loops into SVG path `d` attribute strings.

use crate::geometry::{DecimalPoint, Fixed};

use super::curve::Curve;

/// A loop of curves where each curve starts where the previous one ends
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    curves: Vec<Curve>,
}

impl Path {
    pub fn new(curves: Vec<Curve>) -> Self {
        Self { curves }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn into_curves(self) -> Vec<Curve> {
        self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn start(&self) -> Option<DecimalPoint> {
        self.curves.first().map(Curve::start)
    }

    /// Check that consecutive curves connect, wrapping around at the end
    pub fn is_closed(&self) -> bool {
        let n = self.curves.len();
        n > 0 && (0..n).all(|i| self.curves[i].end() == self.curves[(i + 1) % n].start())
    }

    /// Merge runs of consecutive collinear lines into single lines
    ///
    /// The run crossing the end of the loop is merged as well; the merged
    /// loop may therefore start at a different point. Arcs are kept as is.
    pub fn merge_collinear(self) -> Path {
        let mut merged: Vec<Curve> = Vec::with_capacity(self.curves.len());
        for curve in self.curves {
            if let Some(last) = merged.last_mut() {
                if let Some(joined) = last.join_collinear(&curve) {
                    *last = joined;
                    continue;
                }
            }
            merged.push(curve);
        }

        while merged.len() > 2 {
            let last = merged[merged.len() - 1];
            match last.join_collinear(&merged[0]) {
                Some(joined) => {
                    merged[0] = joined;
                    merged.pop();
                }
                None => break,
            }
        }

        Path::new(merged)
    }

    /// Append the SVG path data for this loop
    ///
    /// A final line returning to the start point is left to the `Z` command.
    pub fn write_svg_d(&self, out: &mut String) {
        let Some(start) = self.start() else {
            return;
        };
        let mut curves = self.curves.as_slice();
        if let Some((last, rest)) = curves.split_last() {
            if last.is_line() && last.end() == start && !rest.is_empty() {
                curves = rest;
            }
        }

        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("M{} {}", start.x, start.y));
        for curve in curves {
            curve.write_command(out);
        }
        out.push_str(" Z");
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        self.write_svg_d(&mut d);
        d
    }
}

/// Accumulates curves from a moving cursor
///
/// Zero-length lines and zero-radius arcs are dropped, so degenerate corner
/// geometry never produces curves that could not be matched against a
/// neighbor's.
#[derive(Debug)]
pub struct PathBuilder {
    start: DecimalPoint,
    curves: Vec<Curve>,
}

impl PathBuilder {
    pub fn new(start: DecimalPoint) -> Self {
        Self {
            start,
            curves: vec![],
        }
    }

    /// The end of the last curve, or the start point
    pub fn cursor(&self) -> DecimalPoint {
        self.curves.last().map(Curve::end).unwrap_or(self.start)
    }

    pub fn line_to(&mut self, end: DecimalPoint) -> &mut Self {
        let cursor = self.cursor();
        if end != cursor {
            self.curves.push(Curve::line(cursor, end));
        }
        self
    }

    pub fn arc_to(&mut self, end: DecimalPoint, radius: Fixed, sweep: bool) -> &mut Self {
        if radius.is_zero() {
            return self.line_to(end);
        }
        let cursor = self.cursor();
        if end != cursor {
            self.curves.push(Curve::arc(cursor, end, radius, sweep));
        }
        self
    }

    /// Finish the path, optionally drawing a line back to the start point
    pub fn finish(&mut self, close: bool) -> Path {
        if close {
            let start = self.start;
            self.line_to(start);
        }
        Path::new(std::mem::take(&mut self.curves))
    }
}
