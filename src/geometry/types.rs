//! Integer grid types: cell positions, canvas sizes and cell rectangles

use std::cmp::Ordering;
use std::fmt;

/// A grid cell position, +x to the right and +y downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub const ZERO: IntPoint = IntPoint { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position shifted by the given cell offsets
    pub fn offset_by(&self, dx: i32, dy: i32) -> IntPoint {
        IntPoint::new(self.x + dx, self.y + dy)
    }
}

/// Row-major order: top row first, left to right within a row
impl Ord for IntPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for IntPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IntPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A size in whole cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntSize {
    pub width: u32,
    pub height: u32,
}

impl IntSize {
    pub const ZERO: IntSize = IntSize {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A square size
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// True if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The size grown by `cells` on every side, saturating at `u32::MAX`
    pub fn padded(&self, cells: u32) -> IntSize {
        let pad = cells.saturating_mul(2);
        IntSize::new(self.width.saturating_add(pad), self.height.saturating_add(pad))
    }
}

impl fmt::Display for IntSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangle of grid cells, half-open on both axes
///
/// A rect at origin (1, 2) with size 3x1 contains the cells (1, 2), (2, 2)
/// and (3, 2); `max_x` is 4 and is not contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntRect {
    pub origin: IntPoint,
    pub size: IntSize,
}

impl IntRect {
    pub const ZERO: IntRect = IntRect {
        origin: IntPoint::ZERO,
        size: IntSize::ZERO,
    };

    pub fn new(origin: IntPoint, size: IntSize) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(IntPoint::new(x, y), IntSize::new(width, height))
    }

    /// The rect spanned between two corner points (the larger one exclusive)
    pub fn from_corners(a: IntPoint, b: IntPoint) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        let max_x = a.x.max(b.x);
        let max_y = a.y.max(b.y);
        Self::from_xywh(min_x, min_y, (max_x - min_x) as u32, (max_y - min_y) as u32)
    }

    pub fn min_x(&self) -> i32 {
        self.origin.x
    }

    pub fn min_y(&self) -> i32 {
        self.origin.y
    }

    pub fn max_x(&self) -> i32 {
        self.origin.x + self.size.width as i32
    }

    pub fn max_y(&self) -> i32 {
        self.origin.y + self.size.height as i32
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Number of cells in the rect
    pub fn len(&self) -> usize {
        self.size.area()
    }

    pub fn offset_by(&self, dx: i32, dy: i32) -> IntRect {
        IntRect::new(self.origin.offset_by(dx, dy), self.size)
    }

    /// Shrink by `dx`/`dy` on each side (grow for negative values)
    ///
    /// Dimensions saturate at zero.
    pub fn inset_by(&self, dx: i32, dy: i32) -> IntRect {
        let width = (self.size.width as i64 - 2 * dx as i64).max(0) as u32;
        let height = (self.size.height as i64 - 2 * dy as i64).max(0) as u32;
        IntRect::from_xywh(self.origin.x + dx, self.origin.y + dy, width, height)
    }

    /// Smallest rect containing both rects
    pub fn union(&self, other: &IntRect) -> IntRect {
        let min = IntPoint::new(self.min_x().min(other.min_x()), self.min_y().min(other.min_y()));
        let max = IntPoint::new(self.max_x().max(other.max_x()), self.max_y().max(other.max_y()));
        IntRect::from_corners(min, max)
    }

    /// Overlap of both rects, or [`IntRect::ZERO`] if they are disjoint
    pub fn intersection(&self, other: &IntRect) -> IntRect {
        let min_x = self.min_x().max(other.min_x());
        let min_y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        if max_x < min_x || max_y < min_y {
            return IntRect::ZERO;
        }
        IntRect::from_xywh(min_x, min_y, (max_x - min_x) as u32, (max_y - min_y) as u32)
    }

    /// Half-open containment check for a cell
    pub fn contains(&self, point: IntPoint) -> bool {
        self.min_x() <= point.x
            && self.min_y() <= point.y
            && point.x < self.max_x()
            && point.y < self.max_y()
    }

    /// Check whether `other` lies completely inside this rect
    pub fn contains_rect(&self, other: &IntRect) -> bool {
        self.union(other) == *self
    }

    /// Check whether both rects share at least one cell
    pub fn intersects(&self, other: &IntRect) -> bool {
        !self.intersection(other).is_empty()
    }

    /// The cell at a row-major index
    pub fn get(&self, index: usize) -> Option<IntPoint> {
        if index >= self.len() {
            return None;
        }
        let width = self.size.width as usize;
        let (row, column) = (index / width, index % width);
        Some(self.origin.offset_by(column as i32, row as i32))
    }

    /// Iterate all cells in row-major order
    pub fn iter(&self) -> RectIter {
        RectIter {
            rect: *self,
            index: 0,
        }
    }
}

impl IntoIterator for IntRect {
    type Item = IntPoint;
    type IntoIter = RectIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &IntRect {
    type Item = IntPoint;
    type IntoIter = RectIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row-major iterator over the cells of an [`IntRect`]
#[derive(Debug, Clone)]
pub struct RectIter {
    rect: IntRect,
    index: usize,
}

impl Iterator for RectIter {
    type Item = IntPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.rect.get(self.index)?;
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rect.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RectIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_order_is_row_major() {
        let mut points = vec![
            IntPoint::new(1, 1),
            IntPoint::new(0, 1),
            IntPoint::new(5, 0),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![IntPoint::new(5, 0), IntPoint::new(0, 1), IntPoint::new(1, 1)]
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = IntRect::from_xywh(1, 2, 3, 1);
        assert!(rect.contains(IntPoint::new(1, 2)));
        assert!(rect.contains(IntPoint::new(3, 2)));
        assert!(!rect.contains(IntPoint::new(4, 2)));
        assert!(!rect.contains(IntPoint::new(1, 3)));
        assert!(!rect.contains(IntPoint::new(0, 2)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = IntRect::from_xywh(0, 0, 0, 5);
        assert!(rect.is_empty());
        assert!(!rect.contains(IntPoint::ZERO));
        assert_eq!(rect.iter().count(), 0);
    }

    #[test]
    fn test_iteration_is_row_major() {
        let rect = IntRect::from_xywh(2, 3, 2, 2);
        let cells: Vec<_> = rect.iter().collect();
        assert_eq!(
            cells,
            vec![
                IntPoint::new(2, 3),
                IntPoint::new(3, 3),
                IntPoint::new(2, 4),
                IntPoint::new(3, 4),
            ]
        );
        assert_eq!(rect.iter().len(), 4);
        assert_eq!(rect.get(4), None);
    }

    #[test]
    fn test_union_and_intersection() {
        let a = IntRect::from_xywh(0, 0, 4, 4);
        let b = IntRect::from_xywh(2, 1, 4, 2);
        assert_eq!(a.union(&b), IntRect::from_xywh(0, 0, 6, 4));
        assert_eq!(a.intersection(&b), IntRect::from_xywh(2, 1, 2, 2));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_disjoint_intersection_is_zero() {
        let a = IntRect::from_xywh(0, 0, 2, 2);
        let b = IntRect::from_xywh(5, 5, 2, 2);
        assert_eq!(a.intersection(&b), IntRect::ZERO);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = IntRect::from_xywh(0, 0, 2, 2);
        let b = IntRect::from_xywh(2, 0, 2, 2);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_rect() {
        let outer = IntRect::from_xywh(0, 0, 10, 10);
        assert!(outer.contains_rect(&IntRect::from_xywh(2, 2, 3, 3)));
        assert!(!outer.contains_rect(&IntRect::from_xywh(8, 8, 3, 3)));
    }

    #[test]
    fn test_offset_and_inset() {
        let rect = IntRect::from_xywh(0, 0, 5, 5);
        assert_eq!(rect.offset_by(1, -1), IntRect::from_xywh(1, -1, 5, 5));
        assert_eq!(rect.inset_by(1, 2), IntRect::from_xywh(1, 2, 3, 1));
        assert_eq!(rect.inset_by(-1, -1), IntRect::from_xywh(-1, -1, 7, 7));
        assert!(rect.inset_by(3, 0).is_empty());
    }

    #[test]
    fn test_from_corners_normalizes() {
        let rect = IntRect::from_corners(IntPoint::new(4, 1), IntPoint::new(1, 3));
        assert_eq!(rect, IntRect::from_xywh(1, 1, 3, 2));
    }
}
