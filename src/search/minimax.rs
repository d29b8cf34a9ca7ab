//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are white-positive: white maximises, black minimises. Every
//! branch works on its own copy of the game, produced by
//! `GameState::child`. Ties keep the first move found, so generation order
//! is the tie-break.

use crate::game_state::chess_types::*;
use crate::moves::chess_move::MoveList;
use crate::search::board_scoring::BoardScorer;

/// Initial search window bound; wider than any reachable score.
pub const INFINITY: i32 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below each root move.
    pub depth: u8,
    /// Longest principal variation kept; longer lines are cut and flagged.
    pub max_line_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            max_line_len: 4096,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// Best continuation from the searched node, first move first.
    pub line: MoveList,
    /// Set when some line had to be cut to `max_line_len`.
    pub truncated: bool,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Alpha-beta search of `game` to `depth` plies.
pub fn minimax<S: BoardScorer>(
    game: &GameState,
    depth: u8,
    alpha: i32,
    beta: i32,
    scorer: &S,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> SearchResult {
    search_node(game, depth, Some((alpha, beta)), scorer, config, stats)
}

/// Plain minimax visiting every node; the reference for [`minimax`].
pub fn minimax_without_pruning<S: BoardScorer>(
    game: &GameState,
    depth: u8,
    scorer: &S,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> SearchResult {
    search_node(game, depth, None, scorer, config, stats)
}

fn search_node<S: BoardScorer>(
    game: &GameState,
    depth: u8,
    window: Option<(i32, i32)>,
    scorer: &S,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if depth == 0 || game.legal_moves.is_empty() || game.check_status.is_terminal() {
        return SearchResult {
            score: scorer.score(game),
            ..SearchResult::default()
        };
    }

    let maximizing = game.side_to_move == Color::White;
    let (mut alpha, mut beta) = window.unwrap_or((-INFINITY, INFINITY));
    let mut best: Option<(SearchResult, usize)> = None;

    for (index, mv) in game.legal_moves.iter().enumerate() {
        let child = game.child(mv);
        let reply = search_node(&child, depth - 1, window.map(|_| (alpha, beta)), scorer, config, stats);

        let improves = match &best {
            None => true,
            Some((current, _)) if maximizing => reply.score > current.score,
            Some((current, _)) => reply.score < current.score,
        };
        if improves {
            best = Some((reply, index));
        }

        if window.is_some() {
            let best_score = best.as_ref().map_or(0, |(result, _)| result.score);
            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if alpha >= beta {
                break;
            }
        }
    }

    let Some((reply, index)) = best else {
        return SearchResult {
            score: scorer.score(game),
            ..SearchResult::default()
        };
    };

    let mut line = MoveList::with_capacity(reply.line.len() + 1);
    line.push(game.legal_moves[index]);
    line.extend(reply.line);
    let mut truncated = reply.truncated;
    if line.len() > config.max_line_len {
        line.truncate(config.max_line_len);
        truncated = true;
    }

    SearchResult {
        score: reply.score,
        line,
        truncated,
    }
}
