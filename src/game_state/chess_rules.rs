//! Canonical chess-rule constants and geometry.
//!
//! Starting layouts and castling lanes are derived from the board
//! orientation so that every other module can stay orientation-agnostic.

use crate::game_state::chess_types::*;

/// Standard starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Promotion choices in generation order.
pub const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Rook home corners; index into the board's rook-moved flags.
pub const ROOK_CORNERS: [Square; 4] = [0, 7, 56, 63];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn corner_index(square: Square) -> Option<usize> {
    match square {
        0 => Some(0),
        7 => Some(1),
        56 => Some(2),
        63 => Some(3),
        _ => None,
    }
}

/// Rank (0-based, `0 == 1`) on which `color`'s pieces start.
#[inline]
pub const fn home_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Every piece of the standard starting position, placed for `orientation`.
pub fn starting_layout(orientation: Orientation) -> Vec<(Square, Piece)> {
    let mut layout = Vec::with_capacity(32);
    for color in Color::BOTH {
        let back = home_rank(color);
        let pawns = if color == Color::White { 1 } else { 6 };
        for file in 0..8u8 {
            layout.push((
                orientation.square_at(file, back),
                Piece::new(color, BACK_RANK[file as usize]),
            ));
            layout.push((
                orientation.square_at(file, pawns),
                Piece::new(color, PieceKind::Pawn),
            ));
        }
    }
    layout
}

/// Squares and masks describing one castling option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: u64,
}

/// The two castling lanes (king side first) for `color` in `orientation`.
pub fn castling_lanes(orientation: Orientation, color: Color) -> [CastlingLane; 2] {
    let rank = home_rank(color);
    let king_from = orientation.square_at(4, rank);
    [
        lane(king_from, orientation.square_at(7, rank)),
        lane(king_from, orientation.square_at(0, rank)),
    ]
}

/// Lane whose king origin and destination match, if the move is a castle.
pub fn castling_lane_for_move(
    orientation: Orientation,
    color: Color,
    king_from: Square,
    king_to: Square,
) -> Option<CastlingLane> {
    castling_lanes(orientation, color)
        .into_iter()
        .find(|lane| lane.king_from == king_from && lane.king_to == king_to)
}

fn lane(king_from: Square, rook_from: Square) -> CastlingLane {
    let step: i8 = if rook_from > king_from { 1 } else { -1 };
    let king_to = (king_from as i8 + 2 * step) as Square;
    let rook_to = (king_from as i8 + step) as Square;

    let (lo, hi) = if rook_from > king_from {
        (king_from, rook_from)
    } else {
        (rook_from, king_from)
    };
    let mut between = 0u64;
    for sq in (lo + 1)..hi {
        between |= 1u64 << sq;
    }

    CastlingLane {
        king_from,
        king_to,
        rook_from,
        rook_to,
        between,
    }
}
