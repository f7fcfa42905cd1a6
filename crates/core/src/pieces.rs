//! Pieces module - polyomino shapes and the active falling piece
//!
//! A [`Shape`] is an immutable boolean mask of at most 5x5 cells. Rotation is a
//! pure transform that produces a new mask; there are no kick tables, so a
//! rotation either fits at the same origin or is rejected by the caller.
//!
//! Coordinates are `(row, col)` with rows growing downward.

use std::fmt;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::error::ShapeError;
use crate::types::{ColorId, MAX_SHAPE_DIM};

/// Upper bound on filled cells in one shape
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// Offset of a single filled cell relative to the shape's top-left corner: `(row, col)`
pub type CellOffset = (i32, i32);

/// Filled cells of a shape, in row-major order
pub type ShapeCells = ArrayVec<CellOffset, MAX_SHAPE_CELLS>;

/// Immutable cell mask of a piece
///
/// Cells outside the `height x width` bounding box are always unset, so two
/// shapes compare equal exactly when their masks and bounding boxes match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct Shape {
    rows: u8,
    cols: u8,
    mask: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values (any non-zero counts as filled)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_polytris_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!(t.width(), 3);
    /// assert_eq!(t.height(), 2);
    /// assert_eq!(t.cell_count(), 4);
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return Err(ShapeError::TooLarge {
                rows: height,
                cols: width,
                max: MAX_SHAPE_DIM,
            });
        }

        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ShapeError::Ragged {
                    row: r,
                    len: row.len(),
                    expected: width,
                });
            }
            for (c, &v) in row.iter().enumerate() {
                mask[r][c] = v != 0;
            }
        }

        let shape = Self {
            rows: height as u8,
            cols: width as u8,
            mask,
        };
        if shape.cell_count() == 0 {
            return Err(ShapeError::NoCells);
        }
        Ok(shape)
    }

    /// Number of columns in the bounding box
    pub fn width(&self) -> u16 {
        self.cols as u16
    }

    /// Number of rows in the bounding box
    pub fn height(&self) -> u16 {
        self.rows as u16
    }

    /// Whether `(row, col)` of the bounding box is filled; false outside it
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.mask[row][col]
    }

    pub fn cell_count(&self) -> usize {
        self.mask.iter().flatten().filter(|&&filled| filled).count()
    }

    /// Filled cell offsets in row-major order
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.mask[r][c] {
                    out.push((r as i32, c as i32));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise
    ///
    /// Row `i` of the result is column `i` of `self` read bottom to top, so the
    /// bounding box swaps width and height.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_polytris_core::Shape;
    ///
    /// let l = Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]).unwrap();
    /// let expected = Shape::from_rows(&[&[1, 1], &[0, 1], &[0, 1]]).unwrap();
    /// assert_eq!(l.rotated_clockwise(), expected);
    /// ```
    pub fn rotated_clockwise(&self) -> Shape {
        let old_rows = self.rows as usize;
        let old_cols = self.cols as usize;
        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in mask.iter_mut().enumerate().take(old_cols) {
            for (c, cell) in row.iter_mut().enumerate().take(old_rows) {
                *cell = self.mask[old_rows - 1 - c][r];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            mask,
        }
    }

    /// Mask as rows of 0/1, the inverse of [`Shape::from_rows`]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|r| {
                (0..self.cols as usize)
                    .map(|c| u8::from(self.mask[r][c]))
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Shape {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let rows: Vec<&[u8]> = rows.iter().map(Vec::as_slice).collect();
        Shape::from_rows(&rows)
    }
}

impl From<Shape> for Vec<Vec<u8>> {
    fn from(shape: Shape) -> Self {
        shape.to_rows()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows as usize {
            if r > 0 {
                f.write_str("\n")?;
            }
            for c in 0..self.cols as usize {
                f.write_str(if self.mask[r][c] { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Active falling piece
///
/// `row`/`col` locate the top-left of the shape's bounding box in board
/// coordinates. `row` may be negative while a tall piece enters from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub color: ColorId,
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    /// Place a new piece on the top row, horizontally centered
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_polytris_core::{ActivePiece, Shape};
    /// use tui_polytris_core::types::ColorId;
    ///
    /// let i = Shape::from_rows(&[&[1, 1, 1, 1]]).unwrap();
    /// let piece = ActivePiece::spawn(i, ColorId(0), 10);
    /// assert_eq!((piece.row, piece.col), (0, 3));
    /// ```
    pub fn spawn(shape: Shape, color: ColorId, columns: u16) -> Self {
        Self {
            shape,
            color,
            row: 0,
            col: columns as i32 / 2 - shape.width() as i32 / 2,
        }
    }

    /// Clockwise rotation of the current shape; `self` is left untouched
    pub fn rotated_clockwise(&self) -> Shape {
        self.shape.rotated_clockwise()
    }

    /// Copy moved by `(drow, dcol)`
    pub fn shifted(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..*self
        }
    }

    /// Copy with a different shape at the same origin
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }

    /// Absolute board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// Check whether the piece fits the board at its current position
    pub fn is_valid(&self, board: &Board) -> bool {
        board.can_place(&self.shape, self.row, self.col)
    }
}
