//! Block colors.

use crate::fb::Rgb;
use crate::types::{ColorId, PALETTE_SIZE};

pub const PALETTE: [Rgb; PALETTE_SIZE as usize] = [
    Rgb::from_hex(0xFF6B6B),
    Rgb::from_hex(0x4ECDC4),
    Rgb::from_hex(0x45B7D1),
    Rgb::from_hex(0x96CEB4),
    Rgb::from_hex(0xD9534F),
    Rgb::from_hex(0x5CB85C),
    Rgb::from_hex(0xFAD390),
    Rgb::from_hex(0xFFC312),
    Rgb::from_hex(0x7F8FA6),
    Rgb::from_hex(0xA3CB38),
    Rgb::from_hex(0x1289A7),
    Rgb::from_hex(0xD980FA),
    Rgb::from_hex(0xF79F83),
    Rgb::from_hex(0xF5F0E1),
    Rgb::from_hex(0x341C99),
];

/// Color for a palette index; indices past the end wrap around.
pub fn color_of(id: ColorId) -> Rgb {
    PALETTE[id.index() as usize % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_out_of_range_ids() {
        assert_eq!(color_of(ColorId(0)), Rgb::new(0xFF, 0x6B, 0x6B));
        assert_eq!(color_of(ColorId(14)), Rgb::new(0x34, 0x1C, 0x99));
        assert_eq!(color_of(ColorId(15)), color_of(ColorId(0)));
    }
}
