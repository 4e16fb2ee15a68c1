//! Caro (Gomoku) game engine
//!
//! A K-in-a-row game on an N×N board with an alpha-beta AI opponent:
//! - Square board up to 32×32, any win condition K ≤ N
//! - Exactly K stones in a row wins (the first K of a longer run are reported)
//! - Full board without a line is a draw
//! - Undo/redo with per-session scores
//! - Three AI difficulties: random, shallow search, deeper search
//!
//! # Architecture
//!
//! - [`board`]: Cell grid, players and positions
//! - [`rules`]: Line detection
//! - [`game`]: Turn order, history, undo/redo and scoring
//! - [`eval`]: Static position evaluation
//! - [`search`]: Minimax with alpha-beta, Zobrist hashing and a transposition table
//! - [`engine`]: Difficulty policy on top of the searcher
//! - [`worker`]: Running the AI on a background thread
//!
//! # Quick Start
//!
//! ```
//! use caro::{AIEngine, Difficulty, GameConfig, GameState, Player, Pos};
//!
//! let config = GameConfig::new(7, 4).unwrap();
//! let mut game = GameState::with_config(config);
//! let mut ai = AIEngine::new(Player::Second);
//!
//! // Human opens in the center
//! assert!(game.make_move(Pos::new(3, 3)));
//!
//! // AI answers
//! if let Some(pos) = ai.get_move(game.board(), game.win_condition(), Difficulty::Medium) {
//!     assert!(game.make_move(pos));
//!     println!("AI plays {pos}");
//! }
//! assert_eq!(game.current_player(), Player::First);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod worker;

pub use board::{Board, Cell, Player, Pos, DIRECTIONS};
pub use config::{GameConfig, MAX_BOARD_SIZE};
pub use engine::{AIEngine, Difficulty, MoveResult, MoveSource};
pub use error::{ConfigError, WorkerError};
pub use game::{GameState, GameStatus, Move, Outcome, Scores};
pub use worker::ThinkingTask;
