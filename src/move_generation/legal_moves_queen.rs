use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{own_occupancy, TargetMode};
use crate::moves::queen_moves::queen_attacks;

pub fn queen_targets(board: &Board, from: Square, color: Color, mode: TargetMode) -> u64 {
    mode.filter(
        queen_attacks(from, board.occupancy_all),
        own_occupancy(board, color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_queen_in_centre() {
        let mut board = Board::empty(Orientation::WhiteBottom);
        board.put_piece(27, Piece::new(Color::Black, PieceKind::Queen));
        board.refresh();
        assert_eq!(
            queen_targets(&board, 27, Color::Black, TargetMode::Moves).count_ones(),
            27
        );
    }
}
