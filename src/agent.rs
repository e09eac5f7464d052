use crate::evaluate::{ScoreFn, center_weighted_mobility};
use crate::game::{GameState, Move, Score};
use crate::random::{RandomSource, ThreadRandom};
use crate::search::{Interrupted, SearchResult, Searcher, TimeBudget};
use log::{debug, trace};
use std::time::Duration;

const DEFAULT_SEARCH_DEPTH: u32 = 3;
const DEFAULT_SAFETY_MARGIN: Duration = Duration::from_millis(10);

/// Which search algorithm the agent runs.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SearchMethod {
    Minimax,
    AlphaBeta,
}

/// The move selector: owns the search configuration, drives iterative
/// deepening, enforces the time budget, and always has a legal move ready
/// when the budget runs out.
pub struct MinimaxAgent<S: GameState, R: RandomSource = ThreadRandom> {
    search_depth: u32,
    score_fn: ScoreFn<S>,
    iterative: bool,
    method: SearchMethod,
    safety_margin: Duration,
    random: R,
}

impl<S: GameState, R: RandomSource> Default for MinimaxAgent<S, R> {
    fn default() -> Self {
        MinimaxAgentBuilder::new().build()
    }
}

/// A builder for creating instances of `MinimaxAgent`.
pub struct MinimaxAgentBuilder<S: GameState, R: RandomSource> {
    search_depth: u32,
    score_fn: ScoreFn<S>,
    iterative: bool,
    method: SearchMethod,
    safety_margin: Duration,
    random: R,
}

impl<S: GameState, R: RandomSource> MinimaxAgentBuilder<S, R> {
    /// Creates a builder with the default configuration: iterative-deepening
    /// minimax over the center-weighted evaluator, depth 3 for fixed-depth
    /// mode, a 10 ms safety margin, and the default randomness source.
    pub fn new() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            score_fn: center_weighted_mobility,
            iterative: true,
            method: SearchMethod::Minimax,
            safety_margin: DEFAULT_SAFETY_MARGIN,
            random: R::default(),
        }
    }

    /// Sets the depth for fixed-depth search. Must be positive.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Sets the heuristic evaluation function.
    pub fn with_score_fn(mut self, score_fn: ScoreFn<S>) -> Self {
        self.score_fn = score_fn;
        self
    }

    /// Enables or disables iterative deepening.
    pub fn with_iterative(mut self, iterative: bool) -> Self {
        self.iterative = iterative;
        self
    }

    /// Sets the search method.
    pub fn with_method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the remaining time below which a running search must abort.
    pub fn with_safety_margin(mut self, margin: Duration) -> Self {
        self.safety_margin = margin;
        self
    }

    /// Sets the randomness source used for the fallback-move pick.
    pub fn with_random_source(mut self, random: R) -> Self {
        self.random = random;
        self
    }

    /// Builds the `MinimaxAgent` instance with the configured parameters.
    pub fn build(self) -> MinimaxAgent<S, R> {
        debug_assert!(self.search_depth > 0, "search depth must be positive");
        MinimaxAgent {
            search_depth: self.search_depth,
            score_fn: self.score_fn,
            iterative: self.iterative,
            method: self.method,
            safety_margin: self.safety_margin,
            random: self.random,
        }
    }
}

impl<S: GameState, R: RandomSource> Default for MinimaxAgentBuilder<S, R> {
    fn default() -> Self {
        MinimaxAgentBuilder::new()
    }
}

impl<S: GameState, R: RandomSource> MinimaxAgent<S, R> {
    /// Returns a new builder for `MinimaxAgent`.
    pub fn builder() -> MinimaxAgentBuilder<S, R> {
        MinimaxAgentBuilder::new()
    }

    /// Searches the available legal moves and returns the best one found
    /// before the time budget expires.
    ///
    /// Returns [`Move::NONE`] only when `legal_moves` is empty. Otherwise a
    /// random fallback is picked up front, so a legal move exists even if the
    /// very first search is interrupted; each completed deepening level then
    /// supersedes it. Every invocation starts a fresh search; nothing is
    /// carried over from previous turns.
    ///
    /// `time_left` reports the remaining turn time. In iterative mode the
    /// deepening loop runs until the budget interrupts it, so an unbounded
    /// `time_left` will not return; use fixed-depth mode for untimed play.
    pub fn select_move(
        &mut self,
        state: &S,
        legal_moves: &[Move],
        time_left: impl Fn() -> Duration,
    ) -> Move {
        if legal_moves.is_empty() {
            debug!("no legal moves available, returning the sentinel");
            return Move::NONE;
        }

        let mut best_move = *self.random.pick(legal_moves);

        // scores are computed for whoever is to move at the root
        let agent = state.active_player();
        let budget = TimeBudget::new(&time_left, self.safety_margin);
        let searcher = Searcher::new(agent, self.score_fn, &budget);

        if self.iterative {
            let mut depth = 0;
            loop {
                match self.search(&searcher, state, depth) {
                    Ok(result) => {
                        trace!(
                            "depth {depth} complete: {} scores {}",
                            result.best_move,
                            result.score
                        );
                        // a depth-0 root reports the incoming move, which is
                        // never legal for the mover; the fallback stands
                        // until depth 1 completes
                        if depth > 0 {
                            best_move = result.best_move;
                        }
                        depth += 1;
                    }
                    Err(Interrupted) => {
                        debug!("budget exhausted at depth {depth}, keeping the last completed result");
                        break;
                    }
                }
            }
        } else {
            match self.search(&searcher, state, self.search_depth) {
                Ok(result) => best_move = result.best_move,
                Err(Interrupted) => {
                    debug!("fixed-depth search interrupted, falling back to the random pick")
                }
            }
        }

        debug!("selected move {best_move}");
        best_move
    }

    fn search(
        &self,
        searcher: &Searcher<'_, S>,
        state: &S,
        depth: u32,
    ) -> Result<SearchResult, Interrupted> {
        match self.method {
            SearchMethod::Minimax => searcher.minimax(state, depth, true),
            SearchMethod::AlphaBeta => {
                searcher.alphabeta(state, depth, Score::NEG_INFINITY, Score::INFINITY, true)
            }
        }
    }
}
