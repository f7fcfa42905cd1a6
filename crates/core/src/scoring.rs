//! Scoring module - linear line-clear scoring and level progression
//!
//! - Each cleared line is worth `points_per_line * level`.
//! - Level is `score / points_per_level + 1`, so it only ever grows with score.
//! - Gravity interval is `base_ms / level`, floored at `min_ms`.

/// Points for clearing `lines` rows at `level`
pub fn line_clear_points(lines: u32, level: u32, points_per_line: u32) -> u32 {
    lines
        .saturating_mul(points_per_line)
        .saturating_mul(level)
}

/// Level reached with `score` points (1-based)
pub fn level_for_score(score: u32, points_per_level: u32) -> u32 {
    score / points_per_level.max(1) + 1
}

/// Gravity interval at `level`, clamped to the floor
pub fn tick_interval_ms(level: u32, base_ms: u32, min_ms: u32) -> u32 {
    (base_ms / level.max(1)).max(min_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BASE_TICK_MS, MIN_TICK_MS, POINTS_PER_LEVEL, POINTS_PER_LINE};

    fn default_line_clear_points(lines: u32, level: u32) -> u32 {
        line_clear_points(lines, level, POINTS_PER_LINE)
    }

    fn default_level_for_score(score: u32) -> u32 {
        level_for_score(score, POINTS_PER_LEVEL)
    }

    fn default_tick_interval_ms(level: u32) -> u32 {
        tick_interval_ms(level, BASE_TICK_MS, MIN_TICK_MS)
    }

    #[test]
    fn test_line_clear_points() {
        assert_eq!(default_line_clear_points(0, 1), 0);
        assert_eq!(default_line_clear_points(1, 1), 100);
        assert_eq!(default_line_clear_points(4, 1), 400);
        assert_eq!(default_line_clear_points(2, 3), 600);
        // Not capped at 4 lines.
        assert_eq!(default_line_clear_points(5, 2), 1000);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(default_level_for_score(0), 1);
        assert_eq!(default_level_for_score(999), 1);
        assert_eq!(default_level_for_score(1000), 2);
        assert_eq!(default_level_for_score(2500), 3);
        assert_eq!(default_level_for_score(9999), 10);
    }

    #[test]
    fn test_tick_intervals() {
        assert_eq!(default_tick_interval_ms(1), 1000);
        assert_eq!(default_tick_interval_ms(2), 500);
        assert_eq!(default_tick_interval_ms(3), 333);
        assert_eq!(default_tick_interval_ms(10), 100);
        assert_eq!(default_tick_interval_ms(11), 100);
        assert_eq!(default_tick_interval_ms(500), 100);
    }

    #[test]
    fn test_interval_never_increases_with_level() {
        let mut prev = default_tick_interval_ms(1);
        for level in 2..200 {
            let next = default_tick_interval_ms(level);
            assert!(next <= prev);
            assert!(next >= MIN_TICK_MS);
            prev = next;
        }
    }

    #[test]
    fn test_zero_level_threshold_does_not_divide_by_zero() {
        assert_eq!(level_for_score(5, 0), 6);
        assert_eq!(tick_interval_ms(0, 1000, 100), 1000);
    }
}
