//! Move application on a bare [`Board`] and its inverse.
//!
//! Validation happens up front so a rejected move never touches the board.
//! Promotion is split in two: the move leaves `promotion_square` set and
//! [`apply_promotion`] swaps the pawn for the chosen piece.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{castling_lane_for_move, PROMOTION_PIECES};
use crate::game_state::chess_types::*;

/// Validate coordinates and origin, then execute the move.
pub fn apply_move(board: &mut Board, origin: Square, target: Square) -> ChessResult<UndoState> {
    check_square(origin)?;
    check_square(target)?;
    if let Some(square) = board.promotion_square {
        return Err(ChessErrors::PromotionPending(square));
    }
    let piece = board
        .piece_at(origin)
        .ok_or(ChessErrors::NoPieceAtOrigin(origin))?;
    Ok(execute_move(board, origin, target, piece))
}

#[inline]
pub fn check_square(square: Square) -> ChessResult<()> {
    if square < 64 {
        Ok(())
    } else {
        log::warn!("rejected off-board square index {square}");
        Err(ChessErrors::InvalidCoordinate(square.to_string()))
    }
}

/// Execute an already validated move of `piece` from `origin` to `target`.
pub(crate) fn execute_move(
    board: &mut Board,
    origin: Square,
    target: Square,
    piece: Piece,
) -> UndoState {
    let mut undo = UndoState {
        origin,
        target,
        moved_piece: piece,
        captured: None,
        castled_rook: None,
        prev_en_passant: board.en_passant,
        prev_promotion_square: board.promotion_square,
        prev_rook_moved: board.rook_moved,
        prev_king_moved: board.king_moved,
    };

    let en_passant_victim = en_passant_victim(board, origin, target, piece);
    undo.captured = match board.remove_piece(target) {
        Some(taken) => Some((target, taken)),
        None => en_passant_victim.and_then(|sq| board.remove_piece(sq).map(|taken| (sq, taken))),
    };

    board.remove_piece(origin);
    board.put_piece(target, piece);

    if is_castling_move(piece, origin, target) {
        if let Some(lane) = castling_lane_for_move(board.orientation, piece.color, origin, target) {
            if let Some(rook) = board.remove_piece(lane.rook_from) {
                board.put_piece(lane.rook_to, rook);
                board.forfeit_corner(lane.rook_from);
                undo.castled_rook = Some((lane.rook_from, lane.rook_to));
            }
        }
    }

    let is_pawn = piece.kind == PieceKind::Pawn;
    board.en_passant = (is_pawn && origin.abs_diff(target) == 16).then_some(target);
    board.promotion_square = (is_pawn
        && target / 8 == board.orientation.promotion_row(piece.color))
    .then_some(target);

    board.forfeit_corner(origin);
    board.forfeit_corner(target);
    if piece.kind == PieceKind::King {
        board.king_moved[piece.color.index()] = true;
    }

    board.refresh();
    undo
}

/// Replace the pawn waiting on the promotion square with `kind`.
pub fn apply_promotion(board: &mut Board, kind: PieceKind) -> ChessResult<Square> {
    let square = board
        .promotion_square
        .ok_or(ChessErrors::NoPromotionPending)?;
    if !PROMOTION_PIECES.contains(&kind) {
        return Err(ChessErrors::InvalidPromotionPiece(kind));
    }
    let pawn = board
        .piece_at(square)
        .filter(|piece| piece.kind == PieceKind::Pawn)
        .ok_or(ChessErrors::NoPromotionPending)?;

    board.put_piece(square, Piece::new(pawn.color, kind));
    board.promotion_square = None;
    board.refresh();
    Ok(square)
}

/// Revert the move (and any promotion that completed it) recorded in `undo`.
pub fn undo_move(board: &mut Board, undo: &UndoState) {
    board.remove_piece(undo.target);
    board.put_piece(undo.origin, undo.moved_piece);

    if let Some((rook_from, rook_to)) = undo.castled_rook {
        if let Some(rook) = board.remove_piece(rook_to) {
            board.put_piece(rook_from, rook);
        }
    }
    if let Some((square, piece)) = undo.captured {
        board.put_piece(square, piece);
    }

    board.en_passant = undo.prev_en_passant;
    board.promotion_square = undo.prev_promotion_square;
    board.rook_moved = undo.prev_rook_moved;
    board.king_moved = undo.prev_king_moved;
    board.refresh();
}

/// Square of the pawn removed by an en passant capture, if this is one.
pub fn en_passant_victim(board: &Board, origin: Square, target: Square, piece: Piece) -> Option<Square> {
    if piece.kind != PieceKind::Pawn || origin % 8 == target % 8 {
        return None;
    }
    if board.occupancy_all & (1u64 << target) != 0 {
        return None;
    }
    let victim = board.en_passant?;
    let landing = victim as i16 + board.orientation.pawn_step(piece.color) as i16;
    (landing == target as i16).then_some(victim)
}

#[inline]
pub fn is_castling_move(piece: Piece, origin: Square, target: Square) -> bool {
    piece.kind == PieceKind::King && origin / 8 == target / 8 && origin.abs_diff(target) == 2
}
