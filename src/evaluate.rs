use crate::game::{GameState, Player, Score};

/// Heuristic evaluation function consulted at the search frontier.
///
/// Every evaluator must be pure, callable for either player regardless of
/// whose turn is active, and terminal-aware: `Score::NEG_INFINITY` when
/// `player` has lost, `Score::INFINITY` when `player` has won.
pub type ScoreFn<S> = fn(&S, Player) -> Score;

/// Scores a state by how few moves it leaves the opponent: the negative
/// count of the opponent's legal moves. Pure defense.
pub fn opponent_mobility<S: GameState>(state: &S, player: Player) -> Score {
    if state.is_loser(player) {
        return Score::NEG_INFINITY;
    }
    if state.is_winner(player) {
        return Score::INFINITY;
    }

    -(state.legal_moves(player.opponent()).len() as Score)
}

/// Scores a state by forecasting one ply past it: for each of the player's
/// legal moves, adds the player's mobility after that move and subtracts the
/// opponent's. Weighs not just how many moves are open but how good they are.
pub fn lookahead_mobility<S: GameState>(state: &S, player: Player) -> Score {
    if state.is_loser(player) {
        return Score::NEG_INFINITY;
    }
    if state.is_winner(player) {
        return Score::INFINITY;
    }

    let mut score = 0.0;
    for m in state.legal_moves(player) {
        let next = state.forecast(m);
        score += next.legal_moves(player).len() as Score;
        score -= next.legal_moves(player.opponent()).len() as Score;
    }
    score
}

/// The mobility difference (own legal moves minus the opponent's), reduced by
/// 0.1 per axis of distance from the board's geometric center. Biases toward
/// central, high-mobility cells.
pub fn center_weighted_mobility<S: GameState>(state: &S, player: Player) -> Score {
    if state.is_loser(player) {
        return Score::NEG_INFINITY;
    }
    if state.is_winner(player) {
        return Score::INFINITY;
    }

    let own = state.legal_moves(player).len() as Score;
    let opp = state.legal_moves(player.opponent()).len() as Score;
    let (row, col) = state.location(player);

    let mut score = own - opp;
    score -= (row as Score - state.height() as Score / 2.0).abs() * 0.1;
    score -= (col as Score - state.width() as Score / 2.0).abs() * 0.1;
    score
}

#[cfg(test)]
mod tests {
    use crate::evaluate::{
        ScoreFn, center_weighted_mobility, lookahead_mobility, opponent_mobility,
    };
    use crate::game::{GameState, Player, Score};
    use crate::games::knight_isolation::KnightIsolation;

    /// Player one, to move, fully enclosed; player two still mobile.
    fn enclosed_corner() -> KnightIsolation {
        let mut board = KnightIsolation::new(3, 3, (0, 0), (2, 2));
        board.block(1, 2);
        board.block(2, 1);
        board
    }

    #[test]
    fn every_evaluator_is_terminal_aware() {
        let board = enclosed_corner();
        let evaluators: [ScoreFn<KnightIsolation>; 3] = [
            opponent_mobility,
            lookahead_mobility,
            center_weighted_mobility,
        ];
        for score in evaluators {
            assert_eq!(score(&board, Player::One), Score::NEG_INFINITY);
            assert_eq!(score(&board, Player::Two), Score::INFINITY);
        }
    }

    #[test]
    fn opponent_mobility_counts_opponent_moves() {
        // on the open 3×3 corners each knight has exactly two moves
        let board = KnightIsolation::new(3, 3, (0, 0), (2, 2));
        assert_eq!(opponent_mobility(&board, Player::One), -2.0);
        assert_eq!(opponent_mobility(&board, Player::Two), -2.0);
    }

    #[test]
    fn lookahead_mobility_forecasts_one_ply() {
        // from (0, 0) player one can reach (1, 2) or (2, 1); either landing
        // leaves one onward move against two replies, so each contributes -1
        let board = KnightIsolation::new(3, 3, (0, 0), (2, 2));
        assert_eq!(lookahead_mobility(&board, Player::One), -2.0);
    }

    #[test]
    fn center_weight_penalizes_distance_per_axis() {
        // corner knights tie on mobility (2 each); (0, 0) sits 3.5 cells
        // off-center on both axes, so the penalty is 2 * 3.5 * 0.1
        let board = KnightIsolation::default();
        let score = center_weighted_mobility(&board, Player::One);
        assert!((score + 0.7).abs() < 1e-9);
    }

    #[test]
    fn evaluators_are_callable_for_the_inactive_player() {
        let board = KnightIsolation::new(5, 5, (1, 0), (3, 4));
        assert_eq!(board.active_player(), Player::One);
        assert_eq!(opponent_mobility(&board, Player::Two), -3.0);
    }
}
