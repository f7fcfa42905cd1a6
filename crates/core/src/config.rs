//! Engine configuration
//!
//! Every value here is fixed when the engine is constructed; nothing can be
//! changed while a game runs.

use crate::catalog::ShapeCatalog;
use crate::error::ConfigError;
use crate::types::{
    BASE_TICK_MS, BOARD_COLUMNS, BOARD_ROWS, MIN_TICK_MS, POINTS_PER_LEVEL, POINTS_PER_LINE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: u16,
    pub columns: u16,
    /// Gravity interval at level 1
    pub base_tick_ms: u32,
    /// Gravity interval floor
    pub min_tick_ms: u32,
    pub points_per_line: u32,
    pub points_per_level: u32,
}

impl EngineConfig {
    /// Default rules on a board of the given size
    pub fn with_size(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Default rules on a board sized to fill a pixel canvas
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_polytris_core::EngineConfig;
    ///
    /// let config = EngineConfig::from_canvas(300, 600, 30);
    /// assert_eq!((config.rows, config.columns), (20, 10));
    /// ```
    pub fn from_canvas(width_px: u32, height_px: u32, cell_px: u32) -> Self {
        let cell_px = cell_px.max(1);
        let clamp = |px: u32| (px / cell_px).min(u16::MAX as u32) as u16;
        Self::with_size(clamp(height_px), clamp(width_px))
    }

    /// Check the rules on their own and against the catalog that will be used
    pub fn validate(&self, catalog: &ShapeCatalog) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.min_tick_ms == 0 {
            return Err(ConfigError::ZeroMinTick);
        }
        if self.base_tick_ms < self.min_tick_ms {
            return Err(ConfigError::BaseBelowFloor {
                base_ms: self.base_tick_ms,
                min_ms: self.min_tick_ms,
            });
        }
        if self.points_per_level == 0 {
            return Err(ConfigError::ZeroLevelThreshold);
        }
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if catalog.colors() == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some((index, shape)) = catalog
            .shapes()
            .iter()
            .enumerate()
            .find(|(_, s)| s.width() > self.columns)
        {
            return Err(ConfigError::ShapeTooWide {
                index,
                width: shape.width(),
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            columns: BOARD_COLUMNS,
            base_tick_ms: BASE_TICK_MS,
            min_tick_ms: MIN_TICK_MS,
            points_per_line: POINTS_PER_LINE,
            points_per_level: POINTS_PER_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, CELL_PX};

    #[test]
    fn test_default_matches_canvas() {
        let canvas = EngineConfig::from_canvas(CANVAS_WIDTH_PX, CANVAS_HEIGHT_PX, CELL_PX);
        assert_eq!(EngineConfig::default(), canvas);
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(EngineConfig::default().validate(&ShapeCatalog::standard()), Ok(()));
    }

    #[test]
    fn test_rejects_empty_board() {
        let config = EngineConfig::with_size(0, 10);
        assert_eq!(
            config.validate(&ShapeCatalog::standard()),
            Err(ConfigError::EmptyBoard { rows: 0, columns: 10 })
        );
    }

    #[test]
    fn test_rejects_bad_intervals() {
        let catalog = ShapeCatalog::standard();
        let config = EngineConfig {
            min_tick_ms: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(&catalog), Err(ConfigError::ZeroMinTick));

        let config = EngineConfig {
            base_tick_ms: 50,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(&catalog),
            Err(ConfigError::BaseBelowFloor {
                base_ms: 50,
                min_ms: 100
            })
        );

        let config = EngineConfig {
            points_per_level: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(&catalog), Err(ConfigError::ZeroLevelThreshold));
    }

    #[test]
    fn test_rejects_board_narrower_than_catalog() {
        let config = EngineConfig::with_size(20, 4);
        assert_eq!(
            config.validate(&ShapeCatalog::standard()),
            Err(ConfigError::ShapeTooWide {
                index: 8,
                width: 5,
                columns: 4
            })
        );
    }
}
