use crate::evaluate::ScoreFn;
use crate::game::{GameState, Move, Player, Score};
use std::time::Duration;
use thiserror::Error;

/// Signal that the time budget ran out and the search stopped early.
///
/// This is expected control flow, not a fault: it is raised at whichever node
/// first observes the budget under the safety margin, propagated unchanged
/// through every intermediate frame, and observed only by the move selector.
#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
#[error("search interrupted: time budget exhausted")]
pub struct Interrupted;

/// The time budget a search runs under: the caller's time-remaining query
/// plus the safety margin below which the search must stop.
pub struct TimeBudget<'a> {
    time_left: Option<&'a dyn Fn() -> Duration>,
    safety_margin: Duration,
}

impl<'a> TimeBudget<'a> {
    pub fn new(time_left: &'a dyn Fn() -> Duration, safety_margin: Duration) -> Self {
        Self {
            time_left: Some(time_left),
            safety_margin,
        }
    }

    /// A budget that never interrupts. For direct engine use and tests.
    pub fn unbounded() -> TimeBudget<'static> {
        TimeBudget {
            time_left: None,
            safety_margin: Duration::ZERO,
        }
    }

    /// The cooperative checkpoint, consulted at the top of every node.
    pub fn checkpoint(&self) -> Result<(), Interrupted> {
        match self.time_left {
            Some(time_left) if time_left() < self.safety_margin => Err(Interrupted),
            _ => Ok(()),
        }
    }
}

/// The (score, move) pair a search node reports upward.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct SearchResult {
    pub score: Score,
    pub best_move: Move,
}

/// Depth-limited game-tree search on behalf of one player.
///
/// Holds the searching player's identity (scores are always from this
/// player's point of view, whichever side is to move), the evaluator
/// consulted at the frontier, and the time budget checked at every node.
pub struct Searcher<'a, S: GameState> {
    agent: Player,
    score_fn: ScoreFn<S>,
    budget: &'a TimeBudget<'a>,
}

impl<'a, S: GameState> Searcher<'a, S> {
    pub fn new(agent: Player, score_fn: ScoreFn<S>, budget: &'a TimeBudget<'a>) -> Self {
        Self {
            agent,
            score_fn,
            budget,
        }
    }

    /// Minimax search to the given depth.
    ///
    /// `maximizing` tells whether this layer picks the highest or the lowest
    /// child score; the root is always maximizing. Ties keep the
    /// earliest-enumerated move.
    pub fn minimax(
        &self,
        state: &S,
        depth: u32,
        maximizing: bool,
    ) -> Result<SearchResult, Interrupted> {
        self.budget.checkpoint()?;

        if depth == 0 || state.utility(self.agent) != 0.0 {
            return Ok(self.frontier(state));
        }

        let moves = state.active_legal_moves();
        let mut best = SearchResult {
            score: if maximizing {
                Score::NEG_INFINITY
            } else {
                Score::INFINITY
            },
            best_move: moves[0],
        };

        for m in moves {
            let child = self.minimax(&state.forecast(m), depth - 1, !maximizing)?;
            let improves = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if improves {
                best = SearchResult {
                    score: child.score,
                    best_move: m,
                };
            }
        }

        Ok(best)
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `alpha` is the score the maximizer can already guarantee, `beta` the
    /// minimizer's; pass `(NEG_INFINITY, INFINITY)` at the root. Pruning only
    /// skips nodes: for any state, depth, and evaluator the returned pair is
    /// identical to [`Self::minimax`].
    pub fn alphabeta(
        &self,
        state: &S,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<SearchResult, Interrupted> {
        self.budget.checkpoint()?;

        if depth == 0 || state.utility(self.agent) != 0.0 {
            return Ok(self.frontier(state));
        }

        let moves = state.active_legal_moves();
        if maximizing {
            let mut best = SearchResult {
                score: Score::NEG_INFINITY,
                best_move: moves[0],
            };
            for m in moves {
                let child = self.alphabeta(&state.forecast(m), depth - 1, alpha, beta, false)?;
                if child.score > best.score {
                    best = SearchResult {
                        score: child.score,
                        best_move: m,
                    };
                }
                if best.score >= beta {
                    return Ok(best);
                }
                alpha = alpha.max(best.score);
            }
            Ok(best)
        } else {
            let mut best = SearchResult {
                score: Score::INFINITY,
                best_move: moves[0],
            };
            for m in moves {
                let child = self.alphabeta(&state.forecast(m), depth - 1, alpha, beta, true)?;
                if child.score < best.score {
                    best = SearchResult {
                        score: child.score,
                        best_move: m,
                    };
                }
                if best.score <= alpha {
                    return Ok(best);
                }
                beta = beta.min(best.score);
            }
            Ok(best)
        }
    }

    /// The frontier contract: a node at depth zero or at a terminal state
    /// reports the evaluator's score together with the move that produced
    /// this state, i.e. the last move of the side that just moved.
    fn frontier(&self, state: &S) -> SearchResult {
        let just_moved = state.active_player().opponent();
        SearchResult {
            score: (self.score_fn)(state, self.agent),
            best_move: state.last_move(just_moved),
        }
    }
}
