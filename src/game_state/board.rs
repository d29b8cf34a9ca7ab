//! Bitboard piece placement plus the state that rides along with it.
//!
//! Twelve piece sets (`[color][kind]`) are authoritative. Occupancy and
//! threat maps are caches rebuilt by [`Board::refresh`], occupancy first
//! because slider and pawn reach depend on it.

use crate::game_state::chess_rules::{corner_index, starting_layout, ROOK_CORNERS};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::compute_threat_map;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,
    /// Squares each color attacks, defended friendly squares included.
    pub threat_maps: [u64; 2],

    /// Square of a pawn that double pushed on the previous ply.
    pub en_passant: Option<Square>,
    /// Square of a pawn waiting for its promotion piece.
    pub promotion_square: Option<Square>,
    /// Indexed like [`ROOK_CORNERS`]; once set, never cleared.
    pub rook_moved: [bool; 4],
    pub king_moved: [bool; 2],

    pub orientation: Orientation,
}

impl Board {
    /// A board with no pieces and every castling flag intact.
    pub fn empty(orientation: Orientation) -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            threat_maps: [0; 2],
            en_passant: None,
            promotion_square: None,
            rook_moved: [false; 4],
            king_moved: [false; 2],
            orientation,
        }
    }

    pub fn starting(orientation: Orientation) -> Self {
        let mut board = Self::empty(orientation);
        for (square, piece) in starting_layout(orientation) {
            board.set_bit(square, piece);
        }
        board.refresh();
        board
    }

    /// Piece on `square`, or `None` when it is empty or off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square_mask(square)?;
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for color in Color::BOTH {
            if self.occupancy_by_color[color.index()] & mask == 0 {
                continue;
            }
            for kind in PieceKind::ALL {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    /// Place `piece`, replacing whatever stood there. Occupancy is kept in
    /// step; threat maps wait for [`Board::refresh`]. Off-board squares are
    /// ignored.
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        self.remove_piece(square);
        self.set_bit(square, piece);
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square)?;
        let clear = !square_mask(square)?;
        self.pieces[piece.color.index()][piece.kind.index()] &= clear;
        self.occupancy_by_color[piece.color.index()] &= clear;
        self.occupancy_all &= clear;
        Some(piece)
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces_of(color, PieceKind::King);
        (kings != 0).then(|| kings.trailing_zeros() as Square)
    }

    /// Whether `color`'s king stands on a square the other side attacks.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.pieces_of(color, PieceKind::King) & self.threat_maps[color.opposite().index()] != 0
    }

    /// Rebuild occupancy, then both threat maps.
    pub fn refresh(&mut self) {
        self.refresh_occupancy();
        self.threat_maps = [
            compute_threat_map(self, Color::White),
            compute_threat_map(self, Color::Black),
        ];
    }

    pub fn refresh_occupancy(&mut self) {
        for color in Color::BOTH {
            self.occupancy_by_color[color.index()] =
                self.pieces[color.index()].iter().fold(0, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[0] | self.occupancy_by_color[1];
    }

    /// Forfeit the castling flag of a rook corner, if `square` is one.
    #[inline]
    pub fn forfeit_corner(&mut self, square: Square) {
        if let Some(index) = corner_index(square) {
            self.rook_moved[index] = true;
        }
    }

    /// Whether the rook on `corner` still counts as unmoved.
    pub fn corner_intact(&self, corner: Square) -> bool {
        ROOK_CORNERS
            .iter()
            .position(|&sq| sq == corner)
            .is_some_and(|index| !self.rook_moved[index])
    }

    /// Piece sets pairwise disjoint and occupancy caches consistent with them.
    pub fn is_consistent(&self) -> bool {
        let mut seen = 0u64;
        for color in Color::BOTH {
            let mut union = 0u64;
            for bb in self.pieces[color.index()] {
                if seen & bb != 0 {
                    return false;
                }
                seen |= bb;
                union |= bb;
            }
            if union != self.occupancy_by_color[color.index()] {
                return false;
            }
        }
        seen == self.occupancy_all
    }

    pub fn piece_count(&self) -> u32 {
        self.occupancy_all.count_ones()
    }

    fn set_bit(&mut self, square: Square, piece: Piece) {
        let Some(mask) = square_mask(square) else {
            return;
        };
        self.pieces[piece.color.index()][piece.kind.index()] |= mask;
        self.occupancy_by_color[piece.color.index()] |= mask;
        self.occupancy_all |= mask;
    }
}

#[inline]
fn square_mask(square: Square) -> Option<u64> {
    (square < 64).then(|| 1u64 << square)
}
