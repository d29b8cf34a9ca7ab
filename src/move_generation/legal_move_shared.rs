use crate::game_state::chess_types::*;

/// What a per-piece target set is being computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Squares the piece may move to (own pieces excluded, special moves included).
    Moves,
    /// Squares the piece attacks, friendly-occupied ones included.
    Threats,
}

impl TargetMode {
    /// Drop friendly squares from `reach` unless computing a threat map.
    #[inline]
    pub fn filter(self, reach: u64, own_occupancy: u64) -> u64 {
        match self {
            TargetMode::Moves => reach & !own_occupancy,
            TargetMode::Threats => reach,
        }
    }
}

#[inline]
pub fn own_occupancy(board: &Board, color: Color) -> u64 {
    board.occupancy_by_color[color.index()]
}

#[inline]
pub fn enemy_occupancy(board: &Board, color: Color) -> u64 {
    board.occupancy_by_color[color.opposite().index()]
}

/// Iterate set bits of a bitboard as squares, lowest first.
#[inline]
pub fn squares_of(mut bitboard: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if bitboard == 0 {
            return None;
        }
        let square = bitboard.trailing_zeros() as Square;
        bitboard &= bitboard - 1;
        Some(square)
    })
}
