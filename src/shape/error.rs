//! Error types for boundary extraction

use thiserror::Error;

use crate::geometry::DecimalPoint;

/// Inconsistencies between the outlines of a cluster's elements
///
/// These never happen for outlines produced by [`place_pixel`](super::place_pixel);
/// they signal that cells were clustered whose shared edges do not match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// The same curve is drawn by more than two elements
    #[error("curve from {from} to {to} is drawn {count} times")]
    OverlappingCurve {
        from: DecimalPoint,
        to: DecimalPoint,
        count: usize,
    },

    /// A point is the endpoint of an odd number of remaining curves
    #[error("point {point} has odd degree {degree} after edge cancellation")]
    OddDegree { point: DecimalPoint, degree: usize },

    /// The outline walk got stuck before returning to its start
    #[error("outline starting at {start} stops at {stuck_at}")]
    OpenLoop {
        start: DecimalPoint,
        stuck_at: DecimalPoint,
    },
}

impl BoundaryError {
    pub fn overlapping(from: DecimalPoint, to: DecimalPoint, count: usize) -> Self {
        Self::OverlappingCurve { from, to, count }
    }

    pub fn odd_degree(point: DecimalPoint, degree: usize) -> Self {
        Self::OddDegree { point, degree }
    }

    pub fn open_loop(start: DecimalPoint, stuck_at: DecimalPoint) -> Self {
        Self::OpenLoop { start, stuck_at }
    }
}
