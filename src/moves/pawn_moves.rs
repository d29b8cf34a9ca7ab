//! Pawn capture tables.
//!
//! Pawn direction depends on the board orientation, not on color, so the
//! tables are keyed by the direction a pawn travels on the displayed board.

use crate::game_state::chess_types::{Color, Orientation};

/// Travel direction on the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnDirection {
    /// Toward row 0 (the bottom side's pawns).
    Up,
    /// Toward row 7.
    Down,
}

impl PawnDirection {
    #[inline]
    pub const fn for_color(orientation: Orientation, color: Color) -> Self {
        if orientation.pawn_step(color) < 0 {
            PawnDirection::Up
        } else {
            PawnDirection::Down
        }
    }
}

pub const UP_PAWN_ATTACKS: [u64; 64] = build_pawn_table(-1);
pub const DOWN_PAWN_ATTACKS: [u64; 64] = build_pawn_table(1);

#[inline]
pub const fn pawn_attacks(direction: PawnDirection, square: u8) -> u64 {
    match direction {
        PawnDirection::Up => UP_PAWN_ATTACKS[square as usize],
        PawnDirection::Down => DOWN_PAWN_ATTACKS[square as usize],
    }
}

const fn build_pawn_table(row_step: i8) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i8;
        let row = (sq / 8) as i8 + row_step;
        let mut reach = 0u64;
        if row >= 0 && row < 8 {
            if col > 0 {
                reach |= 1u64 << (row as u32 * 8 + (col - 1) as u32);
            }
            if col < 7 {
                reach |= 1u64 << (row as u32 * 8 + (col + 1) as u32);
            }
        }
        table[sq] = reach;
        sq += 1;
    }

    table
}
