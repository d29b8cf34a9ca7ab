use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{enemy_occupancy, TargetMode};
use crate::moves::pawn_moves::{pawn_attacks, PawnDirection};

/// Pawn pushes, captures and en passant from `from`.
///
/// In threat mode both diagonals count whether or not anything stands there.
pub fn pawn_targets(board: &Board, from: Square, color: Color, mode: TargetMode) -> u64 {
    let orientation = board.orientation;
    let diagonals = pawn_attacks(PawnDirection::for_color(orientation, color), from);
    if mode == TargetMode::Threats {
        return diagonals;
    }

    let step = orientation.pawn_step(color);
    let empty = !board.occupancy_all;
    let mut targets = diagonals & enemy_occupancy(board, color);

    if let Some(one) = offset(from, step) {
        if empty & (1u64 << one) != 0 {
            targets |= 1u64 << one;
            if from / 8 == orientation.pawn_start_row(color) {
                if let Some(two) = offset(one, step) {
                    if empty & (1u64 << two) != 0 {
                        targets |= 1u64 << two;
                    }
                }
            }
        }
    }

    if let Some(target) = en_passant_target(board, from, color) {
        targets |= 1u64 << target;
    }

    targets
}

/// Square a pawn on `from` would land on by capturing en passant, if the
/// pawn that just double pushed sits beside it.
pub fn en_passant_target(board: &Board, from: Square, color: Color) -> Option<Square> {
    let victim = board.en_passant?;
    if victim / 8 != from / 8 || (victim % 8).abs_diff(from % 8) != 1 {
        return None;
    }
    let victim_piece = board.piece_at(victim)?;
    if victim_piece != Piece::new(color.opposite(), PieceKind::Pawn) {
        return None;
    }
    offset(victim, board.orientation.pawn_step(color))
}

#[inline]
fn offset(square: Square, step: i8) -> Option<Square> {
    let next = square as i16 + step as i16;
    (0..64).contains(&next).then_some(next as Square)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_pawn_single_and_double_push() {
        let board = Board::starting(Orientation::WhiteBottom);
        let targets = pawn_targets(&board, 52, Color::White, TargetMode::Moves);
        assert_eq!(targets, (1u64 << 44) | (1u64 << 36));

        let rotated = Board::starting(Orientation::BlackBottom);
        // White pawns sit on row 1 and travel down when black is at the bottom.
        let targets = pawn_targets(&rotated, 11, Color::White, TargetMode::Moves);
        assert_eq!(targets, (1u64 << 19) | (1u64 << 27));
    }

    #[test]
    fn blocked_pawn_cannot_push() {
        let mut board = Board::starting(Orientation::WhiteBottom);
        board.put_piece(44, Piece::new(Color::Black, PieceKind::Knight));
        board.refresh();
        let targets = pawn_targets(&board, 52, Color::White, TargetMode::Moves);
        assert_eq!(targets, 0);
        // The neighbours now capture the knight.
        let left = pawn_targets(&board, 51, Color::White, TargetMode::Moves);
        assert_ne!(left & (1u64 << 44), 0);
    }

    #[test]
    fn threat_mode_counts_empty_diagonals() {
        let board = Board::starting(Orientation::WhiteBottom);
        assert_eq!(
            pawn_targets(&board, 52, Color::White, TargetMode::Threats),
            (1u64 << 43) | (1u64 << 45)
        );
    }

    #[test]
    fn en_passant_lands_behind_the_pushed_pawn() {
        let mut board = Board::empty(Orientation::WhiteBottom);
        board.put_piece(28, Piece::new(Color::White, PieceKind::Pawn));
        board.put_piece(27, Piece::new(Color::Black, PieceKind::Pawn));
        board.en_passant = Some(27);
        board.refresh();
        assert_eq!(en_passant_target(&board, 28, Color::White), Some(19));
        let targets = pawn_targets(&board, 28, Color::White, TargetMode::Moves);
        assert_eq!(targets, (1u64 << 20) | (1u64 << 19));
    }
}
