//! A small and simple library for time-budgeted minimax game-tree search.
//!
//! This library selects moves for two-player, perfect-information, zero-sum
//! games on a grid. It combines depth-limited minimax, alpha-beta pruning,
//! and iterative deepening into an anytime agent: given a time-remaining
//! query, it always returns the best legal move found at the deepest fully
//! completed search depth before the budget runs out. The game itself sits
//! behind the `GameState` trait, so the engine adapts to any board that can
//! enumerate moves, forecast them, and detect the end of the game.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use isolation_minimax::agent::{MinimaxAgent, SearchMethod};
//! use isolation_minimax::evaluate::center_weighted_mobility;
//! use isolation_minimax::game::GameState;
//! use isolation_minimax::games::knight_isolation::KnightIsolation;
//! use isolation_minimax::random::SeededRandom;
//!
//! // Create a fresh knight-isolation board
//! let state = KnightIsolation::default();
//!
//! // Create and configure an agent using the builder
//! let mut agent = MinimaxAgent::builder()
//!     .with_method(SearchMethod::AlphaBeta)
//!     .with_score_fn(center_weighted_mobility)
//!     .with_iterative(false)
//!     .with_search_depth(3)
//!     .with_random_source(SeededRandom::default())
//!     .build();
//!
//! // Ask for the best move within a 150 ms turn budget
//! let legal = state.active_legal_moves();
//! let best_move = agent.select_move(&state, &legal, || Duration::from_millis(150));
//!
//! println!("The best move is: {best_move}");
//! ```

/// Contains the `MinimaxAgent` move selector and its builder.
pub mod agent;
/// Contains the heuristic evaluation functions consulted at the search frontier.
pub mod evaluate;
/// Contains the `GameState` trait and the shared move/player/score types.
pub mod game;
/// Contains pre-made implementations of the `GameState` trait.
pub mod games;
/// Contains traits and implementations for random number generation.
pub mod random;
/// The core module of the library, containing the minimax and alpha-beta engines.
pub mod search;
