//! The game: one board, the move history, the current legal moves, and the
//! check classification derived from them.
//!
//! Every mutation finishes by reclassifying, so `legal_moves`,
//! `king_squares` and `check_status` always describe the current board.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{
    apply_move, apply_promotion, check_square, execute_move, undo_move,
};
use crate::move_generation::legal_move_checks::classify_position;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::{Move, MoveList};

/// Result of [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlyOutcome {
    /// A pawn reached the last row; call [`GameState::promote`] to finish the ply.
    PromotionPending,
    /// The ply is complete and the turn has passed.
    Completed(CheckStatus),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub move_history: MoveList,
    /// Legal moves of `side_to_move`, refreshed on every classification.
    pub legal_moves: MoveList,
    pub side_to_move: Color,
    pub human_color: Color,
    pub king_squares: [Option<Square>; 2],
    pub check_status: CheckStatus,
    /// Parallel to `move_history`.
    pub undo_stack: Vec<UndoState>,
}

impl GameState {
    /// Standard starting position with `human_color` at the bottom.
    pub fn new_game(human_color: Color) -> Self {
        let board = Board::starting(Orientation::for_human(human_color));
        Self::from_board(board, Color::White, human_color)
    }

    /// Wrap an arbitrary board; the board is refreshed and classified.
    pub fn from_board(mut board: Board, side_to_move: Color, human_color: Color) -> Self {
        board.refresh();
        let mut game = Self {
            board,
            move_history: MoveList::new(),
            legal_moves: MoveList::new(),
            side_to_move,
            human_color,
            king_squares: [None; 2],
            check_status: CheckStatus::NoCheck,
            undo_stack: Vec::new(),
        };
        game.classify();
        game
    }

    /// Reset to the starting position for a new match.
    pub fn initialize(&mut self, human_color: Color) -> CheckStatus {
        *self = Self::new_game(human_color);
        log::debug!("new game, human plays {human_color:?}");
        self.check_status
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.board.orientation
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.check_status.is_terminal()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    /// Legal moves for either color at the current position.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        if color == self.side_to_move {
            self.legal_moves.clone()
        } else {
            legal_moves(&self.board, color)
        }
    }

    /// Recompute king squares, the side to move's legal moves and the
    /// check classification.
    pub fn classify(&mut self) -> CheckStatus {
        self.king_squares = Color::BOTH.map(|color| self.board.king_square(color));
        self.legal_moves = legal_moves(&self.board, self.side_to_move);
        self.check_status =
            classify_position(&self.board, self.side_to_move, self.legal_moves.len());
        if self.check_status == CheckStatus::BothInCheck {
            log::warn!("both kings attacked; position is not reachable through legal play");
        }
        self.check_status
    }

    /// Play `origin -> target` for the side to move.
    ///
    /// A pawn landing on the last row leaves the ply open until
    /// [`GameState::promote`] is called.
    pub fn apply_move(&mut self, origin: Square, target: Square) -> ChessResult<PlyOutcome> {
        check_square(origin)?;
        check_square(target)?;
        if let Some(square) = self.board.promotion_square {
            return Err(ChessErrors::PromotionPending(square));
        }
        if self.is_game_over() {
            return Err(ChessErrors::GameOver);
        }
        if self.board.piece_at(origin).is_none() {
            return Err(ChessErrors::NoPieceAtOrigin(origin));
        }
        let mv = self
            .legal_moves
            .iter()
            .find(|mv| mv.origin == origin && mv.target == target)
            .map(|mv| Move {
                promotion: None,
                ..*mv
            })
            .ok_or(ChessErrors::IllegalMove { origin, target })?;

        let undo = apply_move(&mut self.board, origin, target)?;
        self.move_history.push(mv);
        self.undo_stack.push(undo);

        if self.board.promotion_square.is_some() {
            return Ok(PlyOutcome::PromotionPending);
        }
        Ok(PlyOutcome::Completed(self.complete_ply()))
    }

    /// Finish a pending promotion with `kind` and pass the turn.
    pub fn promote(&mut self, kind: PieceKind) -> ChessResult<CheckStatus> {
        apply_promotion(&mut self.board, kind)?;
        if let Some(last) = self.move_history.last_mut() {
            last.promotion = Some(kind);
        }
        Ok(self.complete_ply())
    }

    /// Both halves of a ply in one call; `promotion` is required exactly
    /// when the pawn reaches the last row and rejected on any other move.
    pub fn apply_move_with_promotion(
        &mut self,
        origin: Square,
        target: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<CheckStatus> {
        if let Some(kind) = promotion {
            let plain_move = self
                .legal_moves
                .iter()
                .any(|mv| mv.origin == origin && mv.target == target && mv.promotion.is_none());
            if plain_move || !crate::game_state::chess_rules::PROMOTION_PIECES.contains(&kind) {
                return Err(ChessErrors::InvalidPromotionPiece(kind));
            }
        }
        match (self.apply_move(origin, target)?, promotion) {
            (PlyOutcome::Completed(status), _) => Ok(status),
            (PlyOutcome::PromotionPending, Some(kind)) => self.promote(kind),
            (PlyOutcome::PromotionPending, None) => Err(ChessErrors::PromotionPending(target)),
        }
    }

    /// Revert the most recent move, completed or still awaiting promotion.
    pub fn take_back(&mut self) -> ChessResult<CheckStatus> {
        let undo = self.undo_stack.pop().ok_or(ChessErrors::NothingToTakeBack)?;
        let ply_was_open = self.board.promotion_square.is_some();
        self.move_history.pop();
        undo_move(&mut self.board, &undo);
        if !ply_was_open {
            self.side_to_move = self.side_to_move.opposite();
        }
        Ok(self.classify())
    }

    /// Copy of the position without history, for search branches.
    pub fn snapshot(&self) -> Self {
        Self {
            board: self.board.clone(),
            move_history: MoveList::new(),
            legal_moves: self.legal_moves.clone(),
            side_to_move: self.side_to_move,
            human_color: self.human_color,
            king_squares: self.king_squares,
            check_status: self.check_status,
            undo_stack: Vec::new(),
        }
    }

    /// The position after a move from `legal_moves`, fully classified.
    /// History is not recorded.
    pub(crate) fn child(&self, mv: &Move) -> Self {
        let mut next = self.snapshot();
        if let Some(piece) = next.board.piece_at(mv.origin) {
            execute_move(&mut next.board, mv.origin, mv.target, piece);
            if let Some(kind) = mv.promotion {
                if let Err(err) = apply_promotion(&mut next.board, kind) {
                    log::warn!("search move {mv} could not promote: {err}");
                }
            }
        }
        next.complete_ply();
        next
    }

    fn complete_ply(&mut self) -> CheckStatus {
        self.side_to_move = self.side_to_move.opposite();
        self.classify()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::notation_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(game: &GameState, name: &str) -> Square {
        notation_to_square(name, game.orientation()).expect("valid square name")
    }

    fn play(game: &mut GameState, from: &str, to: &str) -> PlyOutcome {
        let (origin, target) = (sq(game, from), sq(game, to));
        game.apply_move(origin, target).expect("legal move")
    }

    #[test]
    fn new_game_is_classified() {
        for human in Color::BOTH {
            let game = GameState::new_game(human);
            assert_eq!(game.check_status, CheckStatus::NoCheck);
            assert_eq!(game.side_to_move(), Color::White);
            assert_eq!(game.legal_moves(Color::White).len(), 20);
            assert_eq!(game.legal_moves(Color::Black).len(), 20);
            assert!(game.king_square(Color::White).is_some());
        }
    }

    #[test]
    fn fools_mate_checkmates_white() {
        for human in Color::BOTH {
            let mut game = GameState::new_game(human);
            play(&mut game, "f2", "f3");
            play(&mut game, "e7", "e5");
            play(&mut game, "g2", "g4");
            let outcome = play(&mut game, "d8", "h4");
            assert_eq!(outcome, PlyOutcome::Completed(CheckStatus::WhiteCheckmated));
            assert_eq!(game.classify(), CheckStatus::WhiteCheckmated);
            assert!(game.is_game_over());
            assert!(game.legal_moves.is_empty());
            assert_eq!(game.move_history.len(), 4);

            let (a2, a3) = (sq(&game, "a2"), sq(&game, "a3"));
            assert_eq!(game.apply_move(a2, a3), Err(ChessErrors::GameOver));
        }
    }

    #[test]
    fn promotion_is_not_resolved_automatically() {
        let mut game = parse_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1", Orientation::WhiteBottom)
            .expect("valid FEN");
        let outcome = play(&mut game, "a7", "a8");
        assert_eq!(outcome, PlyOutcome::PromotionPending);
        let a8 = sq(&game, "a8");
        assert_eq!(
            game.board.piece_at(a8),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.apply_move(a8, 1), Err(ChessErrors::PromotionPending(a8)));

        let status = game.promote(PieceKind::Queen).expect("promotion");
        assert_eq!(
            game.board.piece_at(a8),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(status, CheckStatus::BlackInCheck);
        assert_eq!(game.last_move().and_then(|mv| mv.promotion), Some(PieceKind::Queen));
        assert_eq!(game.promote(PieceKind::Queen), Err(ChessErrors::NoPromotionPending));
    }

    #[test]
    fn castling_both_ways_and_rook_follows() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        let mut game = parse_fen(fen, Orientation::WhiteBottom).expect("valid FEN");
        let e1 = sq(&game, "e1");
        let king_targets: Vec<Square> = game
            .legal_moves
            .iter()
            .filter(|mv| mv.origin == e1)
            .map(|mv| mv.target)
            .collect();
        assert!(king_targets.contains(&sq(&game, "g1")));
        assert!(king_targets.contains(&sq(&game, "c1")));

        play(&mut game, "e1", "c1");
        let d1 = sq(&game, "d1");
        assert_eq!(
            game.board.piece_at(d1),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(game.board.piece_at(sq(&game, "a1")), None);

        play(&mut game, "e8", "g8");
        assert_eq!(
            game.board.piece_at(sq(&game, "f8")),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn en_passant_removes_the_pushed_pawn() {
        for human in Color::BOTH {
            let mut game = GameState::new_game(human);
            play(&mut game, "e2", "e4");
            play(&mut game, "a7", "a6");
            play(&mut game, "e4", "e5");
            play(&mut game, "d7", "d5");
            let outcome = play(&mut game, "e5", "d6");
            assert!(matches!(outcome, PlyOutcome::Completed(_)));
            assert_eq!(game.board.piece_at(sq(&game, "d5")), None);
            assert_eq!(
                game.board.piece_at(sq(&game, "d6")),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
            assert_eq!(game.last_move().and_then(|mv| mv.captured), Some(PieceKind::Pawn));
            assert_eq!(game.board.pieces_of(Color::Black, PieceKind::Pawn).count_ones(), 7);
        }
    }

    #[test]
    fn illegal_and_off_board_moves_leave_game_untouched() {
        let mut game = GameState::new_game(Color::White);
        let before = game.board.clone();
        let (e2, e5) = (sq(&game, "e2"), sq(&game, "e5"));
        assert_eq!(
            game.apply_move(e2, e5),
            Err(ChessErrors::IllegalMove {
                origin: e2,
                target: e5
            })
        );
        assert!(matches!(
            game.apply_move(70, e5),
            Err(ChessErrors::InvalidCoordinate(_))
        ));
        assert_eq!(game.apply_move(36, 28), Err(ChessErrors::NoPieceAtOrigin(36)));
        // Black piece while white is to move.
        let (e7, e6) = (sq(&game, "e7"), sq(&game, "e6"));
        assert!(game.apply_move(e7, e6).is_err());
        assert_eq!(game.board, before);
        assert!(game.move_history.is_empty());
    }

    #[test]
    fn take_back_restores_previous_position() {
        let mut game = GameState::new_game(Color::Black);
        let start = game.board.clone();
        play(&mut game, "g1", "f3");
        play(&mut game, "d7", "d5");
        game.take_back().expect("undo black");
        game.take_back().expect("undo white");
        assert_eq!(game.board, start);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.legal_moves.len(), 20);
        assert_eq!(game.take_back(), Err(ChessErrors::NothingToTakeBack));
    }

    #[test]
    fn take_back_reopens_a_pending_promotion() {
        let mut game = parse_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1", Orientation::WhiteBottom)
            .expect("valid FEN");
        let start = game.board.clone();
        play(&mut game, "a7", "a8");
        game.take_back().expect("undo open ply");
        assert_eq!(game.board, start);
        assert_eq!(game.side_to_move(), Color::White);

        let (a7, a8) = (sq(&game, "a7"), sq(&game, "a8"));
        game.apply_move_with_promotion(a7, a8, Some(PieceKind::Rook))
            .expect("rook promotion");
        game.take_back().expect("undo completed ply");
        assert_eq!(game.board, start);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn promotion_piece_on_a_plain_move_is_rejected() {
        let mut game = parse_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1", Orientation::WhiteBottom)
            .expect("valid FEN");
        let start = game.board.clone();
        let (a1, b1) = (sq(&game, "a1"), sq(&game, "b1"));
        assert_eq!(
            game.apply_move_with_promotion(a1, b1, Some(PieceKind::Queen)),
            Err(ChessErrors::InvalidPromotionPiece(PieceKind::Queen))
        );
        assert_eq!(game.board, start);
        assert!(game.move_history.is_empty());
        assert_eq!(game.side_to_move(), Color::White);

        game.apply_move_with_promotion(a1, b1, None).expect("plain king move");
        assert_eq!(game.side_to_move(), Color::Black);
    }
}
