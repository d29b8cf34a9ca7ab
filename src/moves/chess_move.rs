//! Move value type and move lists.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

/// A single ply: origin, target, and what it takes or promotes to.
///
/// `captured` is filled in by the generator so the search and the notation
/// helpers never need to look at the board again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub origin: Square,
    pub target: Square,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(origin: Square, target: Square) -> Self {
        Self {
            origin,
            target,
            captured: None,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_capture(mut self, captured: Option<PieceKind>) -> Self {
        self.captured = captured;
        self
    }

    #[inline]
    pub const fn with_promotion(mut self, promotion: PieceKind) -> Self {
        self.promotion = Some(promotion);
        self
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.target)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// Ordered sequence of moves; history, legal-move lists and search lines.
pub type MoveList = Vec<Move>;
