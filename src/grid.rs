use thiserror::Error;

use crate::CellValue;
use crate::Coord;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GridError {
    #[error("({x}, {y}) is out of grid bounds")]
    OutOfBounds { x: Coord, y: Coord },
}

/// A finite 2D field of cells addressed by `(x, y)`.
///
/// The trait knows nothing about life rules; it only promises bounds-checked
/// access and a whole-grid replace. Alternate backings (sparse, windowed) can
/// implement it without the rule functions noticing.
pub trait Grid {
    /// The current value at `(x, y)`, or [`GridError::OutOfBounds`] if the
    /// coordinate lies outside the grid.
    fn read(&self, x: Coord, y: Coord) -> Result<CellValue, GridError>;

    /// Set the value at `(x, y)`. The value is stored as given; clamping, if
    /// any, is the rule function's business.
    fn write(&mut self, x: Coord, y: Coord, v: CellValue) -> Result<(), GridError>;

    /// Replace every cell with `f(self, x, y)`, all at once.
    ///
    /// Results accumulate in a fresh buffer which is swapped in at the end,
    /// so `f` only ever sees the grid as it was when the call began. `f`
    /// borrows the grid immutably, which makes writing to the live grid
    /// mid-pass unrepresentable.
    fn transform<F>(&mut self, f: F)
    where
        F: FnMut(&Self, Coord, Coord) -> CellValue,
        Self: Sized;

    /// Inclusive `(min_x, min_y, max_x, max_y)` extents of addressable space.
    fn bounds(&self) -> (Coord, Coord, Coord, Coord);
}

/// Dense row-major grid backing. Dimensions are fixed at construction and the
/// buffer is never resized.
pub struct FlatGrid {
    cells: Vec<CellValue>,
    width: usize,
    height: usize,
}

impl FlatGrid {
    /// Create a grid of the given dimensions with every cell dead.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");

        Self {
            cells: vec![0; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn flat(&self, x: Coord, y: Coord) -> usize {
        x as usize + y as usize * self.width
    }

    /// Bounds-check each axis separately. A linear-index check alone would
    /// accept coordinates like `(width, 0)`, which alias the next row.
    fn check(&self, x: Coord, y: Coord) -> Result<usize, GridError> {
        if x < 0 || x as usize >= self.width || y < 0 || y as usize >= self.height {
            return Err(GridError::OutOfBounds { x, y });
        }

        Ok(self.flat(x, y))
    }
}

impl Grid for FlatGrid {
    fn read(&self, x: Coord, y: Coord) -> Result<CellValue, GridError> {
        let k = self.check(x, y)?;

        Ok(self.cells[k])
    }

    fn write(&mut self, x: Coord, y: Coord, v: CellValue) -> Result<(), GridError> {
        let k = self.check(x, y)?;
        self.cells[k] = v;

        Ok(())
    }

    fn transform<F>(&mut self, mut f: F)
    where
        F: FnMut(&Self, Coord, Coord) -> CellValue,
    {
        let mut next = Vec::with_capacity(self.cells.len());

        for y in 0..self.height as Coord {
            for x in 0..self.width as Coord {
                next.push(f(self, x, y));
            }
        }

        self.cells = next;
    }

    fn bounds(&self) -> (Coord, Coord, Coord, Coord) {
        (0, 0, self.width as Coord - 1, self.height as Coord - 1)
    }
}
