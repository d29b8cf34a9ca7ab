//! Square names (`e4`) for board indices.
//!
//! Which file/rank a square index names depends on the board orientation;
//! [`position_to_notation`] assumes white at the bottom.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Orientation, Square};

/// Two-character name of `square` with white at the bottom (`0 == a8`).
#[inline]
pub fn position_to_notation(square: Square) -> ChessResult<String> {
    square_to_notation(square, Orientation::WhiteBottom)
}

/// Two-character name of `square` under `orientation`.
pub fn square_to_notation(square: Square, orientation: Orientation) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessErrors::InvalidCoordinate(square.to_string()));
    }
    let (file, rank) = orientation.file_rank(square);
    Ok(format!("{}{}", char::from(b'a' + file), char::from(b'1' + rank)))
}

/// Board index of a square name such as `"e4"` under `orientation`.
pub fn notation_to_square(name: &str, orientation: Orientation) -> ChessResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidCoordinate(name.to_owned()));
    }
    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidCoordinate(name.to_owned()));
    }
    Ok(orientation.square_at(file - b'a', rank - b'1'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_bottom_names() {
        assert_eq!(position_to_notation(0).expect("on board"), "a8");
        assert_eq!(position_to_notation(63).expect("on board"), "h1");
        assert_eq!(position_to_notation(52).expect("on board"), "e2");
        assert!(matches!(
            position_to_notation(64),
            Err(ChessErrors::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn black_bottom_names_are_rotated() {
        let orientation = Orientation::BlackBottom;
        assert_eq!(square_to_notation(0, orientation).expect("on board"), "h1");
        assert_eq!(square_to_notation(3, orientation).expect("on board"), "e1");
        assert_eq!(notation_to_square("a8", orientation).expect("valid"), 63);
    }

    #[test]
    fn parse_matches_render() {
        for orientation in [Orientation::WhiteBottom, Orientation::BlackBottom] {
            for square in [0u8, 9, 27, 36, 63] {
                let name = square_to_notation(square, orientation).expect("on board");
                assert_eq!(notation_to_square(&name, orientation).expect("valid"), square);
            }
        }
        assert!(notation_to_square("i1", Orientation::WhiteBottom).is_err());
        assert!(notation_to_square("e9", Orientation::WhiteBottom).is_err());
        assert!(notation_to_square("e", Orientation::WhiteBottom).is_err());
    }
}
