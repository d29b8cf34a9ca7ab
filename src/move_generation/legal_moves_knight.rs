use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{own_occupancy, TargetMode};
use crate::moves::knight_moves::knight_attacks;

pub fn knight_targets(board: &Board, from: Square, color: Color, mode: TargetMode) -> u64 {
    mode.filter(knight_attacks(from), own_occupancy(board, color))
}
