extern crate isolation_minimax;

use isolation_minimax::agent::{MinimaxAgent, SearchMethod};
use isolation_minimax::evaluate::{center_weighted_mobility, opponent_mobility};
use isolation_minimax::game::{GameState, Player};
use isolation_minimax::games::knight_isolation::KnightIsolation;
use isolation_minimax::random::SeededRandom;
use std::time::{Duration, Instant};

const TURN_BUDGET: Duration = Duration::from_millis(150);

fn main() {
    env_logger::init();

    // Two differently-configured agents play each other
    let mut one = MinimaxAgent::builder()
        .with_method(SearchMethod::Minimax)
        .with_score_fn(center_weighted_mobility)
        .with_random_source(SeededRandom::new(2024))
        .build();
    let mut two = MinimaxAgent::builder()
        .with_method(SearchMethod::AlphaBeta)
        .with_score_fn(opponent_mobility)
        .with_random_source(SeededRandom::new(4202))
        .build();

    let mut state = KnightIsolation::default();
    println!("{state}");

    loop {
        let mover = state.active_player();
        let legal = state.active_legal_moves();

        let turn_started = Instant::now();
        let time_left = move || TURN_BUDGET.saturating_sub(turn_started.elapsed());

        let chosen = match mover {
            Player::One => one.select_move(&state, &legal, time_left),
            Player::Two => two.select_move(&state, &legal, time_left),
        };

        if chosen.is_none() {
            println!("{mover:?} has no moves left and loses");
            break;
        }

        println!("{mover:?} moves to {chosen}");
        state = state.forecast(chosen);
        println!("{state}");
    }
}
