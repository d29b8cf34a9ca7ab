use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{own_occupancy, TargetMode};
use crate::moves::rook_moves::rook_attacks;

pub fn rook_targets(board: &Board, from: Square, color: Color, mode: TargetMode) -> u64 {
    mode.filter(
        rook_attacks(from, board.occupancy_all),
        own_occupancy(board, color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_captures_first_enemy_on_file() {
        let mut board = Board::empty(Orientation::WhiteBottom);
        board.put_piece(56, Piece::new(Color::White, PieceKind::Rook));
        board.put_piece(24, Piece::new(Color::Black, PieceKind::Knight));
        board.put_piece(8, Piece::new(Color::Black, PieceKind::Pawn));
        board.refresh();

        let moves = rook_targets(&board, 56, Color::White, TargetMode::Moves);
        assert_ne!(moves & (1u64 << 24), 0);
        assert_eq!(moves & (1u64 << 8), 0);
        // Three squares up the file plus the capture, seven along the row.
        assert_eq!(moves.count_ones(), 4 + 7);
    }
}
