//! Braille encoding of 2×4 pixel blocks.
//!
//! The Unicode Braille Patterns block (U+2800–U+28FF) assigns one bit per
//! dot, numbered down the left column first (dots 1, 2, 3), then down the
//! right column (4, 5, 6), then the bottom row (7, 8) which was added later.
//! Every one of the 256 patterns is an assigned character, so encoding is
//! total.

/// U+2800, the empty pattern.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Bit value of each dot, indexed `[row][col]`.
pub const DOT_MAP: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Pixels under one output cell, indexed `[row][col]`.
pub type Block = [[bool; 2]; 4];

/// Dot bits of `block`.
#[must_use]
pub const fn bits(block: Block) -> u8 {
    let mut bits = 0;
    let mut row = 0;
    while row < 4 {
        let mut col = 0;
        while col < 2 {
            if block[row][col] {
                bits |= DOT_MAP[row][col];
            }
            col += 1;
        }
        row += 1;
    }
    bits
}

/// Braille glyph showing `block`.
#[must_use]
pub fn encode(block: Block) -> char {
    char::from_u32(BRAILLE_BASE + u32::from(bits(block))).unwrap_or('\u{2800}')
}
