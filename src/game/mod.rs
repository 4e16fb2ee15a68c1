//! Game state: turns, undo/redo history, scores and termination

pub mod state;

pub use state::{GameState, GameStatus, Move, Outcome, Scores};
