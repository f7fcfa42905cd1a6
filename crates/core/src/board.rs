//! Board module - manages the game grid
//!
//! The board is a `rows x columns` grid where each cell is empty or holds the
//! color of a locked piece. Dimensions are fixed at creation.
//! Uses a flat row-major vector so line clears are plain slice moves.
//! Coordinates: `(row, col)`; row 0 is the top, col 0 is the left edge.

use crate::error::BoardError;
use crate::pieces::Shape;
use crate::types::{Cell, ColorId, BOARD_COLUMNS, BOARD_ROWS};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    columns: u16,
    /// Flat vector of cells, row-major order (row * columns + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the default 20x10 dimensions
    pub fn new() -> Self {
        Self::with_size(BOARD_ROWS, BOARD_COLUMNS)
    }

    /// Create an empty board of the given size
    pub fn with_size(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows as usize * columns as usize],
        }
    }

    /// Build a board from rows of cells
    ///
    /// All rows must have the same length, and neither dimension may exceed
    /// `u16::MAX`.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let (Ok(height16), Ok(width16)) = (u16::try_from(rows.len()), u16::try_from(width)) else {
            return Err(BoardError::TooLarge {
                rows: rows.len(),
                columns: width,
                max: u16::MAX as usize,
            });
        };
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(BoardError::RaggedRows {
                row,
                len: r.len(),
                expected: width,
            });
        }
        Ok(Self {
            rows: height16,
            columns: width16,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Calculate flat index from `(row, col)`
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.columns as i32 {
            return None;
        }
        Some(row as usize * self.columns as usize + col as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Cell at `(row, col)`
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell, BoardError> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
    }

    /// Whether an in-range cell is filled
    ///
    /// Out-of-range coordinates answer `false`; collision rules for the area
    /// around the board live in [`Board::can_place`].
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.cell_at(row, col), Ok(Some(_)))
    }

    /// Set cell at `(row, col)`
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), BoardError> {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                Ok(())
            }
            None => Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            }),
        }
    }

    /// Check whether `shape` fits with its top-left corner at `(row, col)`
    ///
    /// A filled cell blocks the placement when it lands left of column 0, right
    /// of the last column, below the last row, or on an occupied cell. Cells
    /// above the top edge never block.
    pub fn can_place(&self, shape: &Shape, row: i32, col: i32) -> bool {
        shape.cells().iter().all(|&(dr, dc)| {
            let r = row + dr;
            let c = col + dc;
            if c < 0 || c >= self.columns as i32 || r >= self.rows as i32 {
                return false;
            }
            r < 0 || !self.is_occupied(r, c)
        })
    }

    /// Write `color` into every filled cell of `shape` placed at `(row, col)`
    ///
    /// Cells above the top edge are dropped.
    pub fn merge(&mut self, shape: &Shape, row: i32, col: i32, color: ColorId) {
        for (dr, dc) in shape.cells() {
            let r = row + dr;
            let c = col + dc;
            if r < 0 {
                continue;
            }
            let placed = self.set(r, c, Some(color));
            debug_assert!(placed.is_ok(), "merge outside the board: {placed:?}");
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(Option::is_some))
            .unwrap_or(false)
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows as usize {
            return None;
        }
        let width = self.columns as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Remove every full row and return how many were removed
    ///
    /// Remaining rows keep their relative order and settle at the bottom; the
    /// same number of empty rows appear at the top.
    pub fn clear_full_lines(&mut self) -> u32 {
        let width = self.columns as usize;
        let mut write_row = self.rows as usize;
        let mut cleared = 0;

        // Scan from bottom to top, compacting kept rows downward.
        for read_row in (0..self.rows as usize).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells
                    .copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Convert to a 2D vector for tests and debugging
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.columns.max(1) as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> Shape {
        Shape::from_rows(&[&[1]]).unwrap()
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(0, -1), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
        assert_eq!(board.index(-1, 0), None);
    }

    #[test]
    fn test_board_flat_storage() {
        let mut board = Board::new();
        board.set(0, 0, Some(ColorId(1))).unwrap();
        board.set(10, 5, Some(ColorId(2))).unwrap();

        assert_eq!(board.cells[0], Some(ColorId(1)));
        assert_eq!(board.cells[10 * 10 + 5], Some(ColorId(2)));
    }

    #[test]
    fn test_board_from_rows_roundtrip() {
        let mut rows = vec![vec![None; 4]; 3];
        rows[1][2] = Some(ColorId(5));
        rows[2][0] = Some(ColorId(6));

        let board = Board::from_rows(rows.clone()).unwrap();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.columns(), 4);
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    fn test_board_from_ragged_rows() {
        let rows = vec![vec![None; 3], vec![None; 2]];
        assert_eq!(
            Board::from_rows(rows),
            Err(BoardError::RaggedRows {
                row: 1,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn test_board_from_rows_rejects_oversize() {
        let max = u16::MAX as usize;
        assert_eq!(
            Board::from_rows(vec![Vec::new(); max + 1]),
            Err(BoardError::TooLarge {
                rows: max + 1,
                columns: 0,
                max
            })
        );
        assert_eq!(
            Board::from_rows(vec![vec![None; max + 1]]),
            Err(BoardError::TooLarge {
                rows: 1,
                columns: max + 1,
                max
            })
        );
        assert!(Board::from_rows(vec![vec![None; max]]).is_ok());
    }

    #[test]
    fn test_merge_drops_cells_above_top() {
        let mut board = Board::with_size(4, 4);
        let bar = Shape::from_rows(&[&[1], &[1], &[1]]).unwrap();
        board.merge(&bar, -2, 1, ColorId(3));

        assert_eq!(board.filled_count(), 1);
        assert_eq!(board.cell_at(0, 1), Ok(Some(ColorId(3))));
    }

    #[test]
    fn test_can_place_single_cell_edges() {
        let board = Board::with_size(2, 2);
        assert!(board.can_place(&dot(), 0, 0));
        assert!(board.can_place(&dot(), 1, 1));
        assert!(board.can_place(&dot(), -5, 1));
        assert!(!board.can_place(&dot(), 2, 0));
        assert!(!board.can_place(&dot(), 0, 2));
        assert!(!board.can_place(&dot(), -1, -1));
    }

    #[test]
    fn test_clear_full_lines_on_one_column_board() {
        let mut board = Board::with_size(3, 1);
        board.set(1, 0, Some(ColorId(0))).unwrap();
        board.set(2, 0, Some(ColorId(1))).unwrap();

        assert_eq!(board.clear_full_lines(), 2);
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.rows(), 3);
    }
}
