//! Curve segments of a closed outline

use std::fmt::Write;

use crate::geometry::{DecimalPoint, Fixed};

/// A single segment of a path, drawn from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Straight line
    Line { start: DecimalPoint, end: DecimalPoint },
    /// Circular arc below 180°
    Arc {
        start: DecimalPoint,
        end: DecimalPoint,
        radius: Fixed,
        /// SVG sweep flag: true = clockwise in y-down coordinates
        sweep: bool,
    },
}

impl Curve {
    pub fn line(start: DecimalPoint, end: DecimalPoint) -> Self {
        Curve::Line { start, end }
    }

    /// An arc bulging outwards of a clockwise outline when `sweep` is set
    pub fn arc(start: DecimalPoint, end: DecimalPoint, radius: Fixed, sweep: bool) -> Self {
        Curve::Arc {
            start,
            end,
            radius,
            sweep,
        }
    }

    pub fn start(&self) -> DecimalPoint {
        match self {
            Curve::Line { start, .. } | Curve::Arc { start, .. } => *start,
        }
    }

    pub fn end(&self) -> DecimalPoint {
        match self {
            Curve::Line { end, .. } | Curve::Arc { end, .. } => *end,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Curve::Line { .. })
    }

    /// The same curve traversed in the opposite direction
    pub fn reverse(&self) -> Curve {
        match *self {
            Curve::Line { start, end } => Curve::line(end, start),
            Curve::Arc {
                start,
                end,
                radius,
                sweep,
            } => Curve::arc(end, start, radius, !sweep),
        }
    }

    /// Direction-independent identity of the drawn geometry
    pub fn key(&self) -> CurveKey {
        let forward = self.start() <= self.end();
        let canonical = if forward { *self } else { self.reverse() };
        let kind = match canonical {
            Curve::Line { .. } => CurveKind::Line,
            Curve::Arc { radius, sweep, .. } => CurveKind::Arc { radius, sweep },
        };
        CurveKey {
            from: canonical.start(),
            to: canonical.end(),
            kind,
        }
    }

    /// Join `self` with the directly following `next` line if both run along
    /// the same horizontal or vertical line in the same direction
    pub fn join_collinear(&self, next: &Curve) -> Option<Curve> {
        let (Curve::Line { start: a, end: b }, Curve::Line { start: b2, end: c }) = (*self, *next)
        else {
            return None;
        };
        if b != b2 {
            return None;
        }
        let vertical = a.x == b.x && b.x == c.x && (b.y - a.y).signum() == (c.y - b.y).signum();
        let horizontal = a.y == b.y && b.y == c.y && (b.x - a.x).signum() == (c.x - b.x).signum();
        if vertical || horizontal {
            Some(Curve::line(a, c))
        } else {
            None
        }
    }

    /// Append the SVG path command drawing this curve from its start
    pub fn write_command(&self, out: &mut String) {
        // Writing into a String cannot fail
        let _ = match self {
            Curve::Line { end, .. } => write!(out, " L{} {}", end.x, end.y),
            Curve::Arc {
                end, radius, sweep, ..
            } => write!(
                out,
                " A{} {} 0 0 {} {} {}",
                radius,
                radius,
                u8::from(*sweep),
                end.x,
                end.y
            ),
        };
    }

    /// The SVG path command for this curve
    pub fn command(&self) -> String {
        let mut out = String::new();
        self.write_command(&mut out);
        out
    }
}

/// Geometry of a curve irrespective of its direction
///
/// A curve and its reverse produce equal keys; a line and an arc between the
/// same two points do not. Keys are totally ordered, starting with the
/// row-major order of the smaller endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurveKey {
    pub from: DecimalPoint,
    pub to: DecimalPoint,
    pub kind: CurveKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveKind {
    Line,
    Arc { radius: Fixed, sweep: bool },
}
