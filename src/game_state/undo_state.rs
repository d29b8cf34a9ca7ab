use crate::game_state::chess_types::*;

/// Everything needed to put a [`Board`] back the way it was before one
/// applied move (promotion included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub origin: Square,
    pub target: Square,
    pub moved_piece: Piece,
    /// Captured piece and the square it stood on (differs from `target`
    /// for en passant).
    pub captured: Option<(Square, Piece)>,
    /// Rook relocation `(from, to)` when the move castled.
    pub castled_rook: Option<(Square, Square)>,

    pub prev_en_passant: Option<Square>,
    pub prev_promotion_square: Option<Square>,
    pub prev_rook_moved: [bool; 4],
    pub prev_king_moved: [bool; 2],
}
