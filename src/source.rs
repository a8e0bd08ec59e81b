//! Grid inputs: anything that can answer "how is this cell drawn?"

use crate::error::GridError;
use crate::geometry::{IntPoint, IntRect, IntSize};
use crate::shape::PixelStyle;

/// A rectangular grid of optionally styled cells
pub trait PixelSource {
    /// Size of the canvas in cells
    fn size(&self) -> IntSize;

    /// The style of the cell at `point`, or `None` if it is not drawn
    fn sample_style(&self, point: IntPoint) -> Option<PixelStyle>;

    /// All cells of the canvas in row-major order
    fn bounds(&self) -> IntRect {
        IntRect::new(IntPoint::ZERO, self.size())
    }
}

/// A closure sampled over a fixed canvas
pub struct FnSource<F> {
    size: IntSize,
    sample: F,
}

impl<F> FnSource<F>
where
    F: Fn(IntPoint) -> Option<PixelStyle>,
{
    pub fn new(size: IntSize, sample: F) -> Self {
        Self { size, sample }
    }
}

impl<F> PixelSource for FnSource<F>
where
    F: Fn(IntPoint) -> Option<PixelStyle>,
{
    fn size(&self) -> IntSize {
        self.size
    }

    fn sample_style(&self, point: IntPoint) -> Option<PixelStyle> {
        (self.sample)(point)
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn size(&self) -> IntSize {
        (**self).size()
    }

    fn sample_style(&self, point: IntPoint) -> Option<PixelStyle> {
        (**self).sample_style(point)
    }
}

/// Characters accepted as dark cells in text art
const DARK: [char; 5] = ['#', 'X', 'x', '1', '█'];
/// Characters accepted as light cells in text art
const LIGHT: [char; 4] = ['.', '0', '_', ' '];

/// A two-color cell matrix, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    size: IntSize,
    cells: Vec<bool>,
}

impl Bitmap {
    /// Create a bitmap from row-major cells
    pub fn new(size: IntSize, cells: Vec<bool>) -> Result<Self, GridError> {
        if cells.len() != size.area() {
            return Err(GridError::size_mismatch(size, cells.len()));
        }
        Ok(Self { size, cells })
    }

    /// Create a bitmap from rows of equal length
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: AsRef<[bool]>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(GridError::ragged_row(index, expected, row.len()));
            }
            cells.extend_from_slice(row);
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        Self::new(size_of(width, height)?, cells)
    }

    /// Parse text art, one line per row
    ///
    /// Empty lines are skipped and trailing carriage returns ignored. Lines of
    /// only spaces are rows of light cells, except before the first and after
    /// the last row holding anything else.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
        let is_blank = |line: &&str| line.trim().is_empty();
        let first = lines.iter().position(|line| !is_blank(line)).unwrap_or(lines.len());
        let end = lines.iter().rposition(|line| !is_blank(line)).map_or(first, |last| last + 1);

        let mut rows = Vec::new();
        for (index, line) in lines.iter().enumerate().take(end).skip(first) {
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(column, found)| {
                    if DARK.contains(&found) {
                        Ok(true)
                    } else if LIGHT.contains(&found) {
                        Ok(false)
                    } else {
                        Err(GridError::invalid_character(found, index + 1, column + 1))
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        let bitmap = Self::from_rows(rows)?;
        tracing::debug!(size = %bitmap.size, dark = bitmap.dark_count(), "parsed bitmap");
        Ok(bitmap)
    }

    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Whether the cell at `point` is dark; false outside the bitmap
    pub fn get(&self, point: IntPoint) -> bool {
        self.index_of(point)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Number of dark cells
    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|&&dark| dark).count()
    }

    fn index_of(&self, point: IntPoint) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        if x >= self.size.width as usize || y >= self.size.height as usize {
            return None;
        }
        Some(y * self.size.width as usize + x)
    }
}

fn size_of(width: usize, height: usize) -> Result<IntSize, GridError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok(IntSize::new(width, height)),
        _ => Err(GridError::size_mismatch(IntSize::ZERO, width.saturating_mul(height))),
    }
}

/// Every dark cell as a plain square
impl PixelSource for Bitmap {
    fn size(&self) -> IntSize {
        self.size
    }

    fn sample_style(&self, point: IntPoint) -> Option<PixelStyle> {
        self.get(point).then(PixelStyle::standard)
    }
}
