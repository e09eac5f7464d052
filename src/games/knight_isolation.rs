use crate::game::{GameState, Move, Player, Score};
use std::fmt;

/// Knight-move order; fixed so legal-move enumeration is deterministic.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// An implementation of the `GameState` trait for knight isolation.
///
/// Two pieces move like chess knights on a W×H grid. Every cell a piece has
/// ever occupied stays blocked for the rest of the game, and the player whose
/// turn it is loses as soon as they have no legal move. Ships with the crate
/// so the engine can be exercised by tests and the demo.
#[derive(Clone)]
pub struct KnightIsolation {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    locations: [(i32, i32); 2],
    last_moves: [Move; 2],
    active: Player,
}

impl KnightIsolation {
    /// Creates a board with both players pre-placed on their starting cells.
    /// Player one moves first; both starting cells are blocked.
    pub fn new(width: i32, height: i32, one: (i32, i32), two: (i32, i32)) -> Self {
        let mut board = Self {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
            locations: [one, two],
            last_moves: [Move::new(one.0, one.1), Move::new(two.0, two.1)],
            active: Player::One,
        };
        board.set_blocked(one.0, one.1);
        board.set_blocked(two.0, two.1);
        board
    }

    /// Marks a cell as permanently blocked. Test scaffolding for sculpting
    /// exact positions; never called by the engine.
    pub fn block(&mut self, row: i32, col: i32) {
        self.set_blocked(row, col);
    }

    fn set_blocked(&mut self, row: i32, col: i32) {
        let index = (row * self.width + col) as usize;
        self.blocked[index] = true;
    }

    fn is_open(&self, row: i32, col: i32) -> bool {
        row >= 0
            && row < self.height
            && col >= 0
            && col < self.width
            && !self.blocked[(row * self.width + col) as usize]
    }

    fn index_of(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl Default for KnightIsolation {
    /// A 7×7 board with the players in opposite corners.
    fn default() -> Self {
        KnightIsolation::new(7, 7, (0, 0), (6, 6))
    }
}

impl GameState for KnightIsolation {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self, player: Player) -> Vec<Move> {
        let (row, col) = self.locations[Self::index_of(player)];
        KNIGHT_OFFSETS
            .iter()
            .map(|(dr, dc)| (row + dr, col + dc))
            .filter(|&(r, c)| self.is_open(r, c))
            .map(|(r, c)| Move::new(r, c))
            .collect()
    }

    /// Applies the move for the active player. Legality is the caller's
    /// contract and is not validated here.
    fn forecast(&self, m: Move) -> Self {
        let mut next = self.clone();
        let mover = Self::index_of(self.active);
        next.set_blocked(m.row, m.col);
        next.locations[mover] = (m.row, m.col);
        next.last_moves[mover] = m;
        next.active = self.active.opponent();
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        self.is_loser(player.opponent())
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves(player).is_empty()
    }

    fn utility(&self, player: Player) -> Score {
        if self.is_winner(player) {
            Score::INFINITY
        } else if self.is_loser(player) {
            Score::NEG_INFINITY
        } else {
            0.0
        }
    }

    fn location(&self, player: Player) -> (i32, i32) {
        self.locations[Self::index_of(player)]
    }

    fn last_move(&self, player: Player) -> Move {
        self.last_moves[Self::index_of(player)]
    }
}

impl fmt::Display for KnightIsolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = if self.locations[0] == (row, col) {
                    '1'
                } else if self.locations[1] == (row, col) {
                    '2'
                } else if self.blocked[(row * self.width + col) as usize] {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{GameState, Move, Player};
    use crate::games::knight_isolation::KnightIsolation;

    /// A 3×3 board where player one, to move, is fully enclosed while the
    /// opponent still has moves.
    fn enclosed_corner() -> KnightIsolation {
        let mut board = KnightIsolation::new(3, 3, (0, 0), (2, 2));
        board.block(1, 2);
        board.block(2, 1);
        board
    }

    #[test]
    fn enumerates_moves_in_knight_offset_order() {
        let board = KnightIsolation::new(5, 5, (1, 0), (3, 4));
        assert_eq!(
            board.legal_moves(Player::One),
            vec![Move::new(0, 2), Move::new(2, 2), Move::new(3, 1)]
        );
        assert_eq!(
            board.legal_moves(Player::Two),
            vec![Move::new(1, 3), Move::new(2, 2), Move::new(4, 2)]
        );
    }

    #[test]
    fn forecast_is_pure_and_flips_the_turn() {
        let board = KnightIsolation::new(5, 5, (1, 0), (3, 4));
        let before = board.legal_moves(Player::One);
        let next = board.forecast(Move::new(2, 2));

        assert_eq!(board.legal_moves(Player::One), before);
        assert_eq!(board.active_player(), Player::One);
        assert_eq!(board.location(Player::One), (1, 0));

        assert_eq!(next.active_player(), Player::Two);
        assert_eq!(next.location(Player::One), (2, 2));
        assert_eq!(next.last_move(Player::One), Move::new(2, 2));
    }

    #[test]
    fn visited_cells_stay_blocked() {
        let board = KnightIsolation::new(5, 5, (1, 0), (3, 4));
        let next = board.forecast(Move::new(2, 2));
        // (2, 2) was a target for both knights; now neither may enter it,
        // and player one's origin (1, 0) stays blocked too
        assert!(!next.legal_moves(Player::Two).contains(&Move::new(2, 2)));
        let back = next.forecast(Move::new(1, 3));
        assert!(!back.legal_moves(Player::One).contains(&Move::new(1, 0)));
    }

    #[test]
    fn enclosed_active_player_loses() {
        let board = enclosed_corner();
        assert!(board.legal_moves(Player::One).is_empty());
        assert!(!board.legal_moves(Player::Two).is_empty());
        assert!(board.is_loser(Player::One));
        assert!(board.is_winner(Player::Two));
        assert_eq!(board.utility(Player::One), f64::NEG_INFINITY);
        assert_eq!(board.utility(Player::Two), f64::INFINITY);
    }

    #[test]
    fn ongoing_game_has_zero_utility() {
        let board = KnightIsolation::default();
        assert_eq!(board.utility(Player::One), 0.0);
        assert_eq!(board.utility(Player::Two), 0.0);
        assert!(!board.is_loser(Player::One));
        assert!(!board.is_winner(Player::One));
    }

    #[test]
    fn initial_last_move_is_the_placement() {
        let board = KnightIsolation::new(3, 3, (0, 0), (2, 2));
        assert_eq!(board.last_move(Player::One), Move::new(0, 0));
        assert_eq!(board.last_move(Player::Two), Move::new(2, 2));
    }
}
