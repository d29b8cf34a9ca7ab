//! Core value types shared by the board, move generation and search.
//!
//! Squares are plain `u8` indices (`0..=63`) laid out row-major from the top
//! of the displayed board. Which file/rank a square names depends on the
//! board [`Orientation`], which in turn follows the human player's color.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Board square index (`0..=63`), row 0 at the top.
pub type Square = u8;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_char(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(color, kind))
    }
}

/// Which side is drawn at the bottom of the board (the human's side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Square 0 is a8, square 63 is h1.
    #[default]
    WhiteBottom,
    /// Rotated 180 degrees: square 0 is h1, square 63 is a8.
    BlackBottom,
}

impl Orientation {
    /// The orientation that puts `human_color` at the bottom.
    #[inline]
    pub const fn for_human(human_color: Color) -> Self {
        match human_color {
            Color::White => Orientation::WhiteBottom,
            Color::Black => Orientation::BlackBottom,
        }
    }

    #[inline]
    pub const fn bottom_color(self) -> Color {
        match self {
            Orientation::WhiteBottom => Color::White,
            Orientation::BlackBottom => Color::Black,
        }
    }

    /// Row delta of a single pawn step for `color`.
    #[inline]
    pub const fn pawn_step(self, color: Color) -> i8 {
        if color.index() == self.bottom_color().index() {
            -8
        } else {
            8
        }
    }

    /// Row on which `color`'s pawns start (and may double push from).
    #[inline]
    pub const fn pawn_start_row(self, color: Color) -> u8 {
        if color.index() == self.bottom_color().index() {
            6
        } else {
            1
        }
    }

    /// Row on which `color`'s pawns promote.
    #[inline]
    pub const fn promotion_row(self, color: Color) -> u8 {
        if color.index() == self.bottom_color().index() {
            0
        } else {
            7
        }
    }

    /// Zero-based file (`0 == a`) and rank (`0 == 1`) of a square.
    #[inline]
    pub const fn file_rank(self, square: Square) -> (u8, u8) {
        let row = square / 8;
        let col = square % 8;
        match self {
            Orientation::WhiteBottom => (col, 7 - row),
            Orientation::BlackBottom => (7 - col, row),
        }
    }

    /// Inverse of [`Orientation::file_rank`].
    #[inline]
    pub const fn square_at(self, file: u8, rank: u8) -> Square {
        match self {
            Orientation::WhiteBottom => (7 - rank) * 8 + file,
            Orientation::BlackBottom => rank * 8 + (7 - file),
        }
    }
}

/// Check / terminal classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckStatus {
    #[default]
    NoCheck,
    Stalemate,
    WhiteInCheck,
    BlackInCheck,
    WhiteCheckmated,
    BlackCheckmated,
    /// Both kings attacked at once. Unreachable through legal play; seeing it
    /// means a legality-filter defect or a hand-built position.
    BothInCheck,
}

impl CheckStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            CheckStatus::Stalemate | CheckStatus::WhiteCheckmated | CheckStatus::BlackCheckmated
        )
    }

    /// Whether `color`'s king is attacked under this classification.
    pub const fn is_in_check(self, color: Color) -> bool {
        match color {
            Color::White => matches!(
                self,
                CheckStatus::WhiteInCheck | CheckStatus::WhiteCheckmated | CheckStatus::BothInCheck
            ),
            Color::Black => matches!(
                self,
                CheckStatus::BlackInCheck | CheckStatus::BlackCheckmated | CheckStatus::BothInCheck
            ),
        }
    }
}
