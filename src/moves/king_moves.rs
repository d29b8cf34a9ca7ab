use crate::moves::knight_moves::build_jump_table;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One-step neighbourhood of every square.
pub const KING_ATTACKS: [u64; 64] = build_jump_table(&KING_OFFSETS);

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}
