//! Threat maps and check classification.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{squares_of, TargetMode};
use crate::move_generation::legal_moves_bishop::bishop_targets;
use crate::move_generation::legal_moves_king::king_targets;
use crate::move_generation::legal_moves_knight::knight_targets;
use crate::move_generation::legal_moves_pawn::pawn_targets;
use crate::move_generation::legal_moves_queen::queen_targets;
use crate::move_generation::legal_moves_rook::rook_targets;

/// Target set for whatever `piece` stands on `from`.
pub fn piece_targets(board: &Board, from: Square, piece: Piece, mode: TargetMode) -> u64 {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_targets(board, from, color, mode),
        PieceKind::Knight => knight_targets(board, from, color, mode),
        PieceKind::Bishop => bishop_targets(board, from, color, mode),
        PieceKind::Rook => rook_targets(board, from, color, mode),
        PieceKind::Queen => queen_targets(board, from, color, mode),
        PieceKind::King => king_targets(board, from, color, mode),
    }
}

/// Every square `color` attacks. Needs current occupancy.
pub fn compute_threat_map(board: &Board, color: Color) -> u64 {
    let mut threats = 0u64;
    for kind in PieceKind::ALL {
        let piece = Piece::new(color, kind);
        for from in squares_of(board.pieces_of(color, kind)) {
            threats |= piece_targets(board, from, piece, TargetMode::Threats);
        }
    }
    threats
}

#[inline]
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    board.threat_maps[attacker.index()] & (1u64 << square) != 0
}

/// Check classification from the threat maps alone; mate and stalemate
/// need the legal move count and are decided by the caller.
pub fn classify_check(board: &Board) -> CheckStatus {
    match (board.is_in_check(Color::White), board.is_in_check(Color::Black)) {
        (true, true) => CheckStatus::BothInCheck,
        (true, false) => CheckStatus::WhiteInCheck,
        (false, true) => CheckStatus::BlackInCheck,
        (false, false) => CheckStatus::NoCheck,
    }
}

/// Final classification once the side to move's legal move count is known.
pub fn classify_position(board: &Board, side_to_move: Color, legal_move_count: usize) -> CheckStatus {
    let status = classify_check(board);
    if legal_move_count > 0 {
        return status;
    }
    if status.is_in_check(side_to_move) {
        match side_to_move {
            Color::White => CheckStatus::WhiteCheckmated,
            Color::Black => CheckStatus::BlackCheckmated,
        }
    } else {
        CheckStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threat_map_includes_defended_pieces() {
        let board = Board::starting(Orientation::WhiteBottom);
        let white = board.threat_maps[Color::White.index()];
        // Knights and rooks defend the back rank; nothing attacks the far half.
        assert_ne!(white & (1u64 << 52), 0);
        assert_eq!(white & 0xFFFF_FFFF, 0);
        assert!(!is_square_attacked(&board, 36, Color::White));
        assert!(is_square_attacked(&board, 44, Color::White));
    }

    #[test]
    fn lone_rook_gives_check() {
        let mut board = Board::empty(Orientation::WhiteBottom);
        board.put_piece(60, Piece::new(Color::White, PieceKind::King));
        board.put_piece(4, Piece::new(Color::Black, PieceKind::King));
        board.put_piece(0, Piece::new(Color::White, PieceKind::Rook));
        board.refresh();
        assert_eq!(classify_check(&board), CheckStatus::BlackInCheck);
        assert_eq!(
            classify_position(&board, Color::Black, 0),
            CheckStatus::BlackCheckmated
        );
        assert_eq!(
            classify_position(&board, Color::Black, 3),
            CheckStatus::BlackInCheck
        );
    }

    #[test]
    fn no_moves_without_check_is_stalemate() {
        let board = Board::empty(Orientation::WhiteBottom);
        assert_eq!(
            classify_position(&board, Color::White, 0),
            CheckStatus::Stalemate
        );
    }

    #[test]
    fn both_kings_attacked_is_reported() {
        let mut board = Board::empty(Orientation::WhiteBottom);
        board.put_piece(60, Piece::new(Color::White, PieceKind::King));
        board.put_piece(4, Piece::new(Color::Black, PieceKind::King));
        board.put_piece(0, Piece::new(Color::White, PieceKind::Rook));
        board.put_piece(56, Piece::new(Color::Black, PieceKind::Rook));
        board.refresh();
        assert_eq!(classify_check(&board), CheckStatus::BothInCheck);
    }
}
