//! Shape catalog - the fixed set of pieces and palette size
//!
//! Shape and color are drawn independently and uniformly for every spawn.
//! There is no bag: the same shape or color may repeat any number of times.

use rand::Rng;

use crate::error::{ConfigError, ShapeError};
use crate::pieces::Shape;
use crate::types::{ColorId, PALETTE_SIZE, SHAPE_COUNT};

/// Masks of the standard catalog: the 7 classic tetrominoes, then the extras
pub const STANDARD_MASKS: [&[&[u8]]; SHAPE_COUNT] = [
    // I
    &[&[1, 1, 1, 1]],
    // O
    &[&[1, 1], &[1, 1]],
    // T
    &[&[1, 1, 1], &[0, 1, 0]],
    // L
    &[&[1, 1, 1], &[1, 0, 0]],
    // J
    &[&[1, 1, 1], &[0, 0, 1]],
    // S
    &[&[0, 1, 1], &[1, 1, 0]],
    // Z
    &[&[1, 1, 0], &[0, 1, 1]],
    // single cell
    &[&[1]],
    // long bar
    &[&[1, 1, 1, 1, 1]],
    // corner
    &[&[1, 1, 1], &[0, 1, 1]],
    // L with a long leg
    &[&[1, 1, 1], &[1, 0, 0], &[1, 0, 0]],
    // J with a long leg
    &[&[1, 1, 1], &[0, 0, 1], &[0, 0, 1]],
    // T with a long leg
    &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0]],
    // irregular
    &[&[1, 1, 1], &[1, 1, 0], &[0, 0, 1]],
    // irregular
    &[&[1, 1, 1], &[0, 1, 1], &[0, 1, 0]],
];

/// Fixed list of shapes plus the number of palette colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
    colors: u8,
}

impl ShapeCatalog {
    /// The 15 standard shapes and the 15-color palette
    pub fn standard() -> Self {
        let shapes = STANDARD_MASKS
            .iter()
            .filter_map(|rows| Shape::from_rows(rows).ok())
            .collect::<Vec<_>>();
        debug_assert_eq!(shapes.len(), SHAPE_COUNT);
        Self {
            shapes,
            colors: PALETTE_SIZE,
        }
    }

    /// Build a custom catalog
    ///
    /// Fails if there are no shapes or no colors.
    pub fn new(shapes: Vec<Shape>, colors: u8) -> Result<Self, ConfigError> {
        if shapes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if colors == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { shapes, colors })
    }

    /// Build a custom catalog from raw masks
    pub fn from_masks(masks: &[&[&[u8]]], colors: u8) -> Result<Self, ConfigError> {
        let shapes = masks
            .iter()
            .map(|rows| Shape::from_rows(rows))
            .collect::<Result<Vec<_>, ShapeError>>()?;
        Self::new(shapes, colors)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn colors(&self) -> u8 {
        self.colors
    }

    /// Widest bounding box in the catalog
    pub fn max_width(&self) -> u16 {
        self.shapes.iter().map(Shape::width).max().unwrap_or(0)
    }

    /// Uniform draw over the shapes
    pub fn random_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        self.shapes[rng.gen_range(0..self.shapes.len())]
    }

    /// Uniform draw over the palette
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorId {
        ColorId(rng.gen_range(0..self.colors))
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
