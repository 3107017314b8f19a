//! Grid and heatmap storage.
//!
//! Both are flat row-major buffers with `u32` dimensions. Cell access is
//! O(1); kernels borrow the backing slices directly via
//! [`Grid::codes`]/[`Grid::codes_mut`] and [`Heatmap::temps_mut`].

use crate::cell::{self, Cell, CellCode};
use crate::error::GridError;

/// A cell coordinate: `row` in `0..rows`, `col` in `0..cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Row index.
    pub row: u32,
    /// Column index.
    pub col: u32,
}

impl Pos {
    /// Shorthand constructor.
    pub fn new(row: u32, col: u32) -> Pos {
        Pos { row, col }
    }
}

/// The simulation arena: one packed [`CellCode`] per cell.
///
/// The shape is fixed at construction. Every mutation path keeps the
/// invariant that each cell holds a legal code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<CellCode>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-empty grid.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Grid, GridError> {
        Self::check_dims(rows, cols)?;
        Ok(Grid {
            rows,
            cols,
            cells: vec![cell::EMPTY; rows as usize * cols as usize],
        })
    }

    /// Create a grid from a row-major code buffer.
    ///
    /// # Errors
    ///
    /// Dimension errors as for [`Grid::new`], plus
    /// `Err(GridError::CellCountMismatch)` if `cells.len() != rows * cols`
    /// and `Err(GridError::IllegalCellCode)` if any code is outside the
    /// legal table.
    pub fn from_codes(rows: u32, cols: u32, cells: Vec<CellCode>) -> Result<Grid, GridError> {
        Self::check_dims(rows, cols)?;
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                got: cells.len(),
            });
        }
        for &code in &cells {
            Cell::from_code(code)?;
        }
        Ok(Grid { rows, cols, cells })
    }

    fn check_dims(rows: u32, cols: u32) -> Result<(), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(())
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major index of `(row, col)`.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row as usize * self.cols as usize + col as usize
    }

    /// The packed code at `(row, col)`.
    #[inline]
    pub fn code(&self, row: u32, col: u32) -> CellCode {
        self.cells[self.index(row, col)]
    }

    /// The typed cell at `(row, col)`.
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        Cell::from_code(self.code(row, col)).expect("grid holds only legal cell codes")
    }

    /// Replace the cell at `(row, col)`.
    pub fn set(&mut self, row: u32, col: u32, value: Cell) {
        let i = self.index(row, col);
        self.cells[i] = value.code();
    }

    /// The backing code slice, row-major.
    pub fn codes(&self) -> &[CellCode] {
        &self.cells
    }

    /// Mutable backing code slice. Callers must keep every code legal.
    pub fn codes_mut(&mut self) -> &mut [CellCode] {
        &mut self.cells
    }

    /// Number of bee cells (active or waiting).
    pub fn bee_count(&self) -> usize {
        self.cells.iter().filter(|&&c| cell::is_bee_code(c)).count()
    }
}

/// Per-cell steady-state temperature, same shape as the grid it was
/// computed from. Wall cells hold `f64::NAN`.
#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
    rows: u32,
    cols: u32,
    temps: Vec<f64>,
}

impl Heatmap {
    /// Create a zeroed heatmap.
    ///
    /// # Errors
    ///
    /// Same dimension checks as [`Grid::new`].
    pub fn new(rows: u32, cols: u32) -> Result<Heatmap, GridError> {
        Grid::check_dims(rows, cols)?;
        Ok(Heatmap {
            rows,
            cols,
            temps: vec![0.0; rows as usize * cols as usize],
        })
    }

    /// Create a zeroed heatmap matching a grid's shape.
    pub fn for_grid(grid: &Grid) -> Heatmap {
        Heatmap {
            rows: grid.rows(),
            cols: grid.cols(),
            temps: vec![0.0; grid.cell_count()],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.temps.len()
    }

    /// Temperature at `(row, col)`. NaN on wall cells.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> f64 {
        debug_assert!(row < self.rows && col < self.cols);
        self.temps[row as usize * self.cols as usize + col as usize]
    }

    /// The backing temperature slice, row-major.
    pub fn temps(&self) -> &[f64] {
        &self.temps
    }

    /// Mutable backing temperature slice.
    pub fn temps_mut(&mut self) -> &mut [f64] {
        &mut self.temps
    }
}
