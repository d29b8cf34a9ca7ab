//! Text board renderer for logs and the demo binary.
//!
//! Rows are printed top to bottom exactly as indexed, so the human's side
//! appears at the bottom in either orientation.

use crate::game_state::chess_types::*;

/// Render with file letters and rank digits around the board.
pub fn render_game_state(game: &GameState) -> String {
    let orientation = game.orientation();
    let files: String = (0..8u8)
        .map(|col| {
            let (file, _) = orientation.file_rank(col);
            format!(" {}", char::from(b'a' + file))
        })
        .collect();

    let mut out = String::new();
    out.push(' ');
    out.push_str(&files);
    out.push('\n');

    for row in 0..8u8 {
        let (_, rank) = orientation.file_rank(row * 8);
        let rank_char = char::from(b'1' + rank);
        out.push(rank_char);
        for col in 0..8u8 {
            out.push(' ');
            out.push(game.board.piece_at(row * 8 + col).map_or('.', piece_to_unicode));
        }
        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push(' ');
    out.push_str(&files);
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}
