use crate::game_state::chess_types::{Board, Color};
use crate::moves::chess_move::MoveList;

/// Source of legal moves for one side of a board.
pub trait MoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveList;
}
