use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{own_occupancy, TargetMode};
use crate::moves::bishop_moves::bishop_attacks;

pub fn bishop_targets(board: &Board, from: Square, color: Color, mode: TargetMode) -> u64 {
    mode.filter(
        bishop_attacks(from, board.occupancy_all),
        own_occupancy(board, color),
    )
}
