use std::fmt;

/// Heuristic score of a game state. Extended real: `f64::INFINITY` and
/// `f64::NEG_INFINITY` encode a forced win and a forced loss.
pub type Score = f64;

/// A move on the grid, addressed as (row, col).
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Sentinel meaning "no legal move available".
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns `true` if this is the "no move" sentinel.
    pub const fn is_none(&self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "(none)")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// One of the two competitors. Used only as a lookup key; the engine never
/// mutates player identity.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other competitor.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// The central trait of the library, defining the state-query interface the
/// search engine consumes.
///
/// To run the engine against a custom game, implement this trait for its
/// state type. The engine treats implementations as immutable snapshots:
/// `forecast` must return a fresh state and leave the receiver untouched, and
/// `legal_moves` must enumerate in a deterministic order for a fixed state
/// (tie-breaking in the search depends on it).
pub trait GameState: Clone {
    /// Board width in columns.
    fn width(&self) -> i32;

    /// Board height in rows.
    fn height(&self) -> i32;

    /// Returns the player whose turn it is to move.
    fn active_player(&self) -> Player;

    /// Returns all legal moves for the given player, in a deterministic order.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// Returns all legal moves for the active player.
    fn active_legal_moves(&self) -> Vec<Move> {
        self.legal_moves(self.active_player())
    }

    /// Applies one legal move for the active player and returns the resulting
    /// state. Must not mutate `self`; the returned state is independent.
    fn forecast(&self, m: Move) -> Self;

    /// Returns `true` if the given player has won in this state.
    fn is_winner(&self, player: Player) -> bool;

    /// Returns `true` if the given player has lost in this state.
    fn is_loser(&self, player: Player) -> bool;

    /// Returns the utility of this state for the given player: zero while the
    /// game is ongoing, non-zero exactly at terminal states. The engine uses
    /// this as its terminal/ongoing discriminator.
    fn utility(&self, player: Player) -> Score;

    /// Returns the (row, col) cell the given player currently occupies.
    fn location(&self, player: Player) -> (i32, i32);

    /// Returns the move that brought the given player to its current cell.
    fn last_move(&self, player: Player) -> Move;
}

#[cfg(test)]
mod tests {
    use crate::game::{Move, Player};

    #[test]
    fn sentinel_is_distinguished() {
        assert!(Move::NONE.is_none());
        assert!(!Move::new(0, 0).is_none());
        assert!(!Move::new(-1, 3).is_none());
    }

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn move_display() {
        assert_eq!(Move::new(2, 5).to_string(), "(2, 5)");
        assert_eq!(Move::NONE.to_string(), "(none)");
    }
}
