//! Full legal move generation.
//!
//! Every pseudo-legal candidate is played on a cloned board; it survives
//! only if the mover's king is not attacked afterwards. Pawn moves onto the
//! last row expand into one move per promotion piece, each checked on its
//! own.

use crate::game_state::chess_rules::PROMOTION_PIECES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_promotion, en_passant_victim, execute_move};
use crate::move_generation::legal_move_checks::piece_targets;
use crate::move_generation::legal_move_shared::{squares_of, TargetMode};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::{Move, MoveList};

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveList {
        let mut legal = MoveList::with_capacity(48);

        for from in squares_of(board.occupancy_by_color[side.index()]) {
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            let targets = piece_targets(board, from, piece, TargetMode::Moves);

            for to in squares_of(targets) {
                let captured = board
                    .piece_at(to)
                    .map(|taken| taken.kind)
                    .or_else(|| en_passant_victim(board, from, to, piece).map(|_| PieceKind::Pawn));
                let candidate = Move::new(from, to).with_capture(captured);

                let mut next = board.clone();
                execute_move(&mut next, from, to, piece);

                if next.promotion_square.is_none() {
                    if !next.is_in_check(side) {
                        legal.push(candidate);
                    }
                    continue;
                }

                for kind in PROMOTION_PIECES {
                    let mut promoted = next.clone();
                    if apply_promotion(&mut promoted, kind).is_ok() && !promoted.is_in_check(side) {
                        legal.push(candidate.with_promotion(kind));
                    }
                }
            }
        }

        legal
    }
}

/// Legal moves for `side` using the default generator.
#[inline]
pub fn legal_moves(board: &Board, side: Color) -> MoveList {
    LegalMoveGenerator.generate_legal_moves(board, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::undo_move;
    use crate::utils::fen_parser::parse_fen;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    #[test]
    fn twenty_moves_from_the_start_in_both_orientations() {
        for orientation in [Orientation::WhiteBottom, Orientation::BlackBottom] {
            let board = Board::starting(orientation);
            assert_eq!(legal_moves(&board, Color::White).len(), 20);
            assert_eq!(legal_moves(&board, Color::Black).len(), 20);
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let game = parse_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1", Orientation::WhiteBottom)
            .expect("valid FEN");
        let moves = legal_moves(&game.board, Color::White);
        // e2 is square 52; the knight is pinned by the rook on e7.
        assert!(moves.iter().all(|mv| mv.origin != 52));
        assert!(!moves.is_empty());
    }

    #[test]
    fn promotion_expands_into_four_moves() {
        let game = parse_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1", Orientation::WhiteBottom)
            .expect("valid FEN");
        let promotions: Vec<Move> = legal_moves(&game.board, Color::White)
            .into_iter()
            .filter(|mv| mv.origin == 8)
            .collect();
        assert_eq!(promotions.len(), 4);
        let kinds: Vec<PieceKind> = promotions.iter().filter_map(|mv| mv.promotion).collect();
        assert_eq!(kinds, PROMOTION_PIECES.to_vec());
    }

    #[test]
    fn en_passant_is_flagged_as_pawn_capture() {
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", Orientation::WhiteBottom)
            .expect("valid FEN");
        let ep = legal_moves(&game.board, Color::White)
            .into_iter()
            .find(|mv| mv.origin == 28 && mv.target == 19)
            .expect("en passant available");
        assert_eq!(ep.captured, Some(PieceKind::Pawn));
    }

    #[test]
    fn random_playouts_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for orientation in [Orientation::WhiteBottom, Orientation::BlackBottom] {
            for _ in 0..4 {
                let mut board = Board::starting(orientation);
                let mut side = Color::White;
                for _ in 0..60 {
                    let moves = legal_moves(&board, side);
                    let Some(mv) = moves.choose(&mut rng).copied() else {
                        break;
                    };
                    let before = board.clone();
                    let piece = board.piece_at(mv.origin).expect("mover exists");
                    let undo = execute_move(&mut board, mv.origin, mv.target, piece);
                    if let Some(kind) = mv.promotion {
                        apply_promotion(&mut board, kind).expect("promotion pending");
                    } else {
                        let mut replay = board.clone();
                        undo_move(&mut replay, &undo);
                        assert_eq!(replay, before);
                    }
                    assert!(board.is_consistent());
                    assert!(!board.is_in_check(side), "move {mv} left the mover in check");
                    assert_eq!(board.pieces_of(Color::White, PieceKind::King).count_ones(), 1);
                    assert_eq!(board.pieces_of(Color::Black, PieceKind::King).count_ones(), 1);
                    side = side.opposite();
                }
            }
        }
    }
}
