//! Perft node counting for validating the move generator.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_promotion, execute_move, is_castling_move};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, side: Color, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(generator, board, side, depth, &mut counts);
    counts
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Color,
    depth: u8,
    counts: &mut PerftCounts,
) {
    for mv in generator.generate_legal_moves(board, side) {
        let Some(piece) = board.piece_at(mv.origin) else {
            continue;
        };
        let mut next = board.clone();
        execute_move(&mut next, mv.origin, mv.target, piece);
        if let Some(kind) = mv.promotion {
            if apply_promotion(&mut next, kind).is_err() {
                continue;
            }
        }

        if depth > 1 {
            perft_recurse(generator, &next, side.opposite(), depth - 1, counts);
            continue;
        }

        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
            if board.piece_at(mv.target).is_none() {
                counts.en_passant += 1;
            }
        }
        if is_castling_move(piece, mv.origin, mv.target) {
            counts.castles += 1;
        }
        if mv.promotion.is_some() {
            counts.promotions += 1;
        }
        if next.is_in_check(side.opposite()) {
            counts.checks += 1;
        }
    }
}
