use crate::game_state::chess_rules::castling_lanes;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{own_occupancy, TargetMode};
use crate::moves::king_moves::king_attacks;

/// One-step king moves plus castling destinations.
///
/// Squares touching the enemy king are never targets. Castling relies on
/// the board's threat maps being current.
pub fn king_targets(board: &Board, from: Square, color: Color, mode: TargetMode) -> u64 {
    let reach = king_attacks(from);
    if mode == TargetMode::Threats {
        return reach;
    }

    let enemy_king_zone = board
        .king_square(color.opposite())
        .map_or(0, king_attacks);

    (reach & !own_occupancy(board, color) & !enemy_king_zone) | castling_targets(board, from, color)
}

pub fn castling_targets(board: &Board, from: Square, color: Color) -> u64 {
    if board.king_moved[color.index()] || board.is_in_check(color) {
        return 0;
    }

    let own_rook = Piece::new(color, PieceKind::Rook);
    let enemy_threats = board.threat_maps[color.opposite().index()];
    let mut targets = 0u64;

    for lane in castling_lanes(board.orientation, color) {
        if lane.king_from != from
            || board.piece_at(lane.rook_from) != Some(own_rook)
            || !board.corner_intact(lane.rook_from)
            || board.occupancy_all & lane.between != 0
            || enemy_threats & (1u64 << lane.rook_to) != 0
        {
            continue;
        }
        targets |= 1u64 << lane.king_to;
    }

    targets
}
