/// Knight isolation, the bundled demo game used by tests and examples.
pub mod knight_isolation;
