use rand::Rng;

const MULTIPLIER_A: u64 = 6364136223846793005;
const INCREMENT_C: u64 = 1442695040888963407;
const DEFAULT_SEED: u64 = 24680913;

/// Source of randomness for the move selector's fallback pick.
///
/// The `Default` bound lets the agent builder construct one implicitly;
/// tests and demos inject a [`SeededRandom`] to make every run reproducible.
pub trait RandomSource: Default {
    /// Returns an index in `0..len`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Picks one element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.pick_index(items.len())]
    }
}

/// The default source, backed by the thread-local `rand` generator.
#[derive(Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// A deterministic linear congruential source for tests and demos.
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        SeededRandom::new(DEFAULT_SEED)
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER_A)
            .wrapping_add(INCREMENT_C);
        // low LCG bits have short periods, so draw from the high half
        ((self.state >> 33) % len as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{RandomSource, SeededRandom, ThreadRandom};

    #[test]
    fn outputs_same_indexes() {
        let mut sr = SeededRandom::new(42);
        assert_eq!(sr.pick_index(10), 4);
        assert_eq!(sr.pick_index(10), 6);
        assert_eq!(sr.pick_index(10), 8);
        assert_eq!(sr.pick_index(10), 3);
        assert_eq!(sr.pick_index(10), 4);
    }

    #[test]
    fn pick_from_slice_should_be_same() {
        let items = vec![432, 6542, 534, 6, 13, 645, 88, 2352, 345, 2667, 8287];
        let mut sr = SeededRandom::default();
        assert_eq!(*sr.pick(&items), 6542);
        assert_eq!(*sr.pick(&items), 8287);
        assert_eq!(*sr.pick(&items), 6542);
        assert_eq!(*sr.pick(&items), 645);
        assert_eq!(*sr.pick(&items), 88);
    }

    #[test]
    fn thread_random_stays_in_bounds() {
        let mut tr = ThreadRandom;
        for _ in 0..100 {
            assert!(tr.pick_index(3) < 3);
        }
    }
}
