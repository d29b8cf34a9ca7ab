//! FEN-to-GameState parser.
//!
//! Places pieces for the requested orientation, derives the castling flags
//! and the en passant pawn, then classifies the resulting position. The two
//! clock fields are optional and only validated.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{castling_lanes, corner_index};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::notation_to_square;

pub fn parse_fen(fen: &str, orientation: Orientation) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 4 && fields.len() != 6 {
        return Err(invalid(format!("expected 4 or 6 fields, found {}", fields.len())));
    }

    let mut board = Board::empty(orientation);
    parse_placement(fields[0], &mut board)?;
    let side_to_move = parse_side_to_move(fields[1])?;
    parse_castling(fields[2], &mut board)?;
    board.en_passant = parse_en_passant(fields[3], &board, side_to_move)?;

    for clock in fields.iter().skip(4) {
        clock
            .parse::<u32>()
            .map_err(|_| invalid(format!("bad move counter '{clock}'")))?;
    }

    for color in Color::BOTH {
        if board.pieces_of(color, PieceKind::King).count_ones() != 1 {
            return Err(invalid(format!("{color:?} must have exactly one king")));
        }
    }

    Ok(GameState::from_board(
        board,
        side_to_move,
        orientation.bottom_color(),
    ))
}

fn invalid(reason: String) -> ChessErrors {
    ChessErrors::InvalidFen(reason)
}

fn parse_placement(placement: &str, board: &mut Board) -> ChessResult<()> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks".to_owned()));
    }

    for (index, row) in rows.iter().enumerate() {
        let rank = 7 - index as u8;
        let mut file = 0u8;
        for ch in row.chars() {
            if let Some(skip) = ch.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(invalid(format!("bad empty-square count '{ch}'")));
                }
                if file + skip as u8 > 8 {
                    return Err(invalid(format!("rank {} has too many files", rank + 1)));
                }
                file += skip as u8;
                continue;
            }
            let piece = Piece::from_char(ch)
                .ok_or_else(|| invalid(format!("bad piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid(format!("rank {} has too many files", rank + 1)));
            }
            board.put_piece(board.orientation.square_at(file, rank), piece);
            file += 1;
        }
        if file != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", rank + 1)));
        }
    }

    Ok(())
}

fn parse_side_to_move(field: &str) -> ChessResult<Color> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("bad side to move '{field}'"))),
    }
}

/// Every flag starts forfeited; each letter restores one king and one corner.
fn parse_castling(field: &str, board: &mut Board) -> ChessResult<()> {
    board.rook_moved = [true; 4];
    board.king_moved = [true; 2];
    if field == "-" {
        return Ok(());
    }

    for ch in field.chars() {
        let (color, lane_index) = match ch {
            'K' => (Color::White, 0),
            'Q' => (Color::White, 1),
            'k' => (Color::Black, 0),
            'q' => (Color::Black, 1),
            _ => return Err(invalid(format!("bad castling character '{ch}'"))),
        };
        let lane = castling_lanes(board.orientation, color)[lane_index];
        board.king_moved[color.index()] = false;
        if let Some(corner) = corner_index(lane.rook_from) {
            board.rook_moved[corner] = false;
        }
    }

    Ok(())
}

/// The FEN names the skipped square; the board stores the pawn behind it.
fn parse_en_passant(field: &str, board: &Board, side_to_move: Color) -> ChessResult<Option<Square>> {
    if field == "-" {
        return Ok(None);
    }
    let skipped = notation_to_square(field, board.orientation)
        .map_err(|_| invalid(format!("bad en passant square '{field}'")))?;
    let pusher = side_to_move.opposite();
    let pawn_square = skipped as i16 + board.orientation.pawn_step(pusher) as i16;
    let expected = Piece::new(pusher, PieceKind::Pawn);

    if !(0..64).contains(&pawn_square) || board.piece_at(pawn_square as Square) != Some(expected) {
        return Err(invalid(format!("no pawn can be taken en passant on '{field}'")));
    }
    Ok(Some(pawn_square as Square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn starting_fen_matches_starting_board() {
        for human in Color::BOTH {
            let orientation = Orientation::for_human(human);
            let game = parse_fen(STARTING_POSITION_FEN, orientation).expect("start FEN");
            assert_eq!(game.board, Board::starting(orientation));
            assert_eq!(game.side_to_move(), Color::White);
            assert_eq!(game.human_color, human);
            assert_eq!(game.legal_moves.len(), 20);
        }
    }

    #[test]
    fn castling_field_sets_individual_flags() {
        let game = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 3 20", Orientation::WhiteBottom)
            .expect("valid FEN");
        assert_eq!(game.board.king_moved, [false, false]);
        // Corners 0 (a8), 7 (h8), 56 (a1), 63 (h1).
        assert_eq!(game.board.rook_moved, [false, true, true, false]);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn en_passant_field_points_at_the_pushed_pawn() {
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", Orientation::WhiteBottom)
            .expect("valid FEN");
        assert_eq!(game.board.en_passant, Some(27));

        let err = parse_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1", Orientation::WhiteBottom);
        assert!(matches!(err, Err(ChessErrors::InvalidFen(_))));
    }

    #[test]
    fn four_field_fen_is_accepted() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K2R w K -", Orientation::WhiteBottom)
            .expect("valid FEN");
        assert_eq!(game.board.piece_count(), 3);
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let long_row = format!("{}/8/8/8/8/8/8/4K2k w - - 0 1", "8".repeat(40));
        for fen in [
            long_row.as_str(),
            "",
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K4 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w Z - 0 1",
            "4k3/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - zero 1",
        ] {
            assert!(
                matches!(parse_fen(fen, Orientation::WhiteBottom), Err(ChessErrors::InvalidFen(_))),
                "accepted {fen:?}"
            );
        }
    }
}
