//! Error type shared by every fallible operation in the crate.
//!
//! Input problems (bad squares, bad FEN, illegal moves) come back as
//! `ChessErrors` so a front end can report them and keep the game going.
//! Nothing here is fatal; the game state is left untouched on every error.

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square index outside `0..=63` or an unparseable coordinate.
    #[error("invalid board coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("no piece on origin square {0}")]
    NoPieceAtOrigin(Square),

    /// Origin/target pair is not in the current legal move list.
    #[error("illegal move {origin} -> {target}")]
    IllegalMove { origin: Square, target: Square },

    #[error("no promotion is pending")]
    NoPromotionPending,

    #[error("pawns cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    /// A pawn reached the last rank and still needs its promotion piece.
    #[error("promotion pending on square {0}")]
    PromotionPending(Square),

    #[error("game is already over")]
    GameOver,

    #[error("side to move has no legal move")]
    NoMoveAvailable,

    #[error("nothing to take back")]
    NothingToTakeBack,

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
