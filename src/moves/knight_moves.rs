//! Knight jump table, indexed by board square.

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

pub const KNIGHT_ATTACKS: [u64; 64] = build_jump_table(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

/// Table of single-jump destinations for each square.
pub(crate) const fn build_jump_table(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i8;
        let row = (sq / 8) as i8;
        let mut reach = 0u64;
        let mut i = 0usize;
        while i < offsets.len() {
            let c = col + offsets[i].0;
            let r = row + offsets[i].1;
            if c >= 0 && c < 8 && r >= 0 && r < 8 {
                reach |= 1u64 << (r as u32 * 8 + c as u32);
            }
            i += 1;
        }
        table[sq] = reach;
        sq += 1;
    }

    table
}
