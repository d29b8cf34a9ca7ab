//! Long algebraic move text (`e2e4`, `a7a8q`).

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::{Move, MoveList};
use crate::utils::algebraic::{notation_to_square, square_to_notation};

pub fn move_to_long_algebraic(mv: &Move, orientation: Orientation) -> ChessResult<String> {
    let mut out = square_to_notation(mv.origin, orientation)?;
    out.push_str(&square_to_notation(mv.target, orientation)?);
    if let Some(kind) = mv.promotion {
        out.push(kind.to_char());
    }
    Ok(out)
}

/// Space separated line, as used when logging a principal variation.
pub fn line_to_long_algebraic(line: &MoveList, orientation: Orientation) -> ChessResult<String> {
    let moves = line
        .iter()
        .map(|mv| move_to_long_algebraic(mv, orientation))
        .collect::<ChessResult<Vec<_>>>()?;
    Ok(moves.join(" "))
}

/// Find the side to move's legal move named by `text`.
pub fn long_algebraic_to_move(text: &str, game: &GameState) -> ChessResult<Move> {
    if !(text.len() == 4 || text.len() == 5) || !text.is_ascii() {
        return Err(ChessErrors::InvalidCoordinate(text.to_owned()));
    }
    let orientation = game.orientation();
    let origin = notation_to_square(&text[0..2], orientation)?;
    let target = notation_to_square(&text[2..4], orientation)?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(
            PieceKind::from_char(ch).ok_or_else(|| ChessErrors::InvalidCoordinate(text.to_owned()))?,
        ),
        None => None,
    };

    game.legal_moves
        .iter()
        .find(|mv| mv.origin == origin && mv.target == target && mv.promotion == promotion)
        .copied()
        .ok_or(ChessErrors::IllegalMove { origin, target })
}
