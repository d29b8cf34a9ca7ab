//! Root search: pick a move for the side to move and play it.

use std::time::{Duration, Instant};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::PlyOutcome;
use crate::moves::chess_move::{Move, MoveList};
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::minimax::{minimax, SearchConfig, SearchStats, INFINITY};
use crate::utils::long_algebraic::{line_to_long_algebraic, move_to_long_algebraic};

/// What the engine chose and how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineReport {
    pub chosen_move: Move,
    /// White-positive score of the chosen line.
    pub score: i32,
    /// Chosen move first.
    pub principal_variation: MoveList,
    pub pv_truncated: bool,
    pub nodes_visited: u64,
    pub elapsed: Duration,
    /// Status after the committed move.
    pub status_after: CheckStatus,
}

/// Search every root move with a full window and commit the best one.
pub fn engine_move<S: BoardScorer>(
    game: &mut GameState,
    scorer: &S,
    config: &SearchConfig,
) -> ChessResult<EngineReport> {
    if let Some(square) = game.board.promotion_square {
        return Err(ChessErrors::PromotionPending(square));
    }
    if game.legal_moves.is_empty() {
        return Err(ChessErrors::NoMoveAvailable);
    }

    let started = Instant::now();
    let orientation = game.orientation();
    let maximizing = game.side_to_move == Color::White;
    let mut stats = SearchStats::default();
    let mut best: Option<(Move, i32, MoveList, bool)> = None;

    for mv in &game.legal_moves {
        let child = game.child(mv);
        let result = minimax(
            &child,
            config.depth,
            -INFINITY,
            INFINITY,
            scorer,
            config,
            &mut stats,
        );
        log::debug!(
            "candidate {} scores {} ({:?})",
            move_to_long_algebraic(mv, orientation)?,
            result.score,
            child.check_status
        );

        let improves = match &best {
            None => true,
            Some((_, score, _, _)) if maximizing => result.score > *score,
            Some((_, score, _, _)) => result.score < *score,
        };
        if improves {
            best = Some((*mv, result.score, result.line, result.truncated));
        }
    }

    let (chosen, score, reply_line, mut pv_truncated) =
        best.ok_or(ChessErrors::NoMoveAvailable)?;

    let mut principal_variation = MoveList::with_capacity(reply_line.len() + 1);
    principal_variation.push(chosen);
    principal_variation.extend(reply_line);
    if principal_variation.len() > config.max_line_len {
        principal_variation.truncate(config.max_line_len);
        pv_truncated = true;
    }
    if pv_truncated {
        log::warn!(
            "principal variation cut to {} plies",
            config.max_line_len
        );
    }

    let chosen_text = move_to_long_algebraic(&chosen, orientation)?;
    let line_text = line_to_long_algebraic(&principal_variation, orientation)?;
    let mover = game.side_to_move;

    let status_after = match game.apply_move(chosen.origin, chosen.target)? {
        PlyOutcome::Completed(status) => status,
        PlyOutcome::PromotionPending => {
            game.promote(chosen.promotion.unwrap_or(PieceKind::Queen))?
        }
    };

    let report = EngineReport {
        chosen_move: chosen,
        score,
        principal_variation,
        pv_truncated,
        nodes_visited: stats.nodes,
        elapsed: started.elapsed(),
        status_after,
    };
    log::info!(
        "{:?} plays {} score {} nodes {} in {:?}; line {}",
        mover,
        chosen_text,
        report.score,
        report.nodes_visited,
        report.elapsed,
        line_text
    );
    Ok(report)
}

impl GameState {
    /// Let the engine move for the side to move with the default evaluator.
    pub fn engine_move(&mut self, config: &SearchConfig) -> ChessResult<EngineReport> {
        engine_move(self, &PieceSquareScorer, config)
    }
}
