//! Static evaluation used at search leaves.
//!
//! Scores are from white's point of view: positive favours white. Terminal
//! positions score as sentinels before any material is counted.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::squares_of;

/// Score of a checkmate; black mated is `+MATE_SCORE`.
pub const MATE_SCORE: i32 = 999_999;

pub trait BoardScorer {
    /// White-positive score of `game`.
    fn score(&self, game: &GameState) -> i32;
}

/// Sentinel for terminal classifications, `None` for positions still in play.
#[inline]
pub fn terminal_score(status: CheckStatus) -> Option<i32> {
    match status {
        CheckStatus::WhiteCheckmated => Some(-MATE_SCORE),
        CheckStatus::BlackCheckmated => Some(MATE_SCORE),
        CheckStatus::Stalemate => Some(0),
        _ => None,
    }
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// Plain material count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game: &GameState) -> i32 {
        if let Some(score) = terminal_score(game.check_status) {
            return score;
        }
        PieceKind::ALL.iter().fold(0, |acc, &kind| {
            let white = game.board.pieces_of(Color::White, kind).count_ones() as i32;
            let black = game.board.pieces_of(Color::Black, kind).count_ones() as i32;
            acc + (white - black) * piece_value(kind)
        })
    }
}

/// Material plus a per-square bonus.
///
/// Tables are written for the side at the bottom of the board (index 0 is
/// that side's far-left corner); the top side reads them at `63 - square`.
/// Keying on the bottom side rather than on white keeps the bonuses on the
/// right squares when the board is rotated with black at the bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    #[inline]
    pub fn piece_score(piece: Piece, square: Square, orientation: Orientation) -> i32 {
        let index = if piece.color == orientation.bottom_color() {
            square as usize
        } else {
            63 - square as usize
        };
        piece_value(piece.kind) + SQUARE_TABLES[piece.kind.index()][index]
    }

    fn side_total(board: &Board, color: Color) -> i32 {
        let mut total = 0;
        for kind in PieceKind::ALL {
            let piece = Piece::new(color, kind);
            for square in squares_of(board.pieces_of(color, kind)) {
                total += Self::piece_score(piece, square, board.orientation);
            }
        }
        total
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game: &GameState) -> i32 {
        if let Some(score) = terminal_score(game.check_status) {
            return score;
        }
        Self::side_total(&game.board, Color::White) - Self::side_total(&game.board, Color::Black)
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

const SQUARE_TABLES: [[i32; 64]; 6] = [
    PAWN_TABLE,
    KNIGHT_TABLE,
    BISHOP_TABLE,
    ROOK_TABLE,
    QUEEN_TABLE,
    KING_TABLE,
];
