//! Main AI Engine: difficulty policy on top of the alpha-beta searcher
//!
//! The engine picks a move in one of three ways:
//!
//! 1. **Random**: `Easy` plays a uniformly random legal move, no search.
//! 2. **Search**: `Medium` and `Hard` run alpha-beta minimax under a depth and
//!    time budget.
//! 3. **Fallback**: if the search produced no move (decided or full board,
//!    budget gone before any child was scored) a random legal move is played.
//!
//! # Example
//!
//! ```
//! use caro::{AIEngine, Board, Difficulty, Player, Pos};
//!
//! let mut engine = AIEngine::with_seed(Player::Second, 7);
//! let mut board = Board::new(7, 4).unwrap();
//! board.apply_move(Pos::new(3, 3), Player::First);
//!
//! let result = engine.get_move_with_stats(&board, 4, Difficulty::Medium);
//! let pos = result.best_move.unwrap();
//! assert!(board.is_valid_move(pos));
//! println!("AI plays {pos} after {} nodes", result.nodes);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Player, Pos};
use crate::error::ConfigError;
use crate::search::{SearchLimits, SearchResult, Searcher};

/// Default transposition table size in megabytes
const DEFAULT_TT_SIZE_MB: usize = 8;

/// AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random legal moves
    Easy,
    /// Depth 2, 1 second
    #[default]
    Medium,
    /// Depth 4, 3 seconds
    Hard,
}

impl Difficulty {
    /// Search budget for this difficulty, `None` for `Easy` (no search).
    #[must_use]
    pub fn limits(self) -> Option<SearchLimits> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(SearchLimits::new(2, Duration::from_secs(1))),
            Difficulty::Hard => Some(SearchLimits::new(4, Duration::from_secs(3))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the returned move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Random choice by policy (easy difficulty)
    Random,
    /// Alpha-beta search result
    Search,
    /// Random choice because the search produced no move
    Fallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` only if the board has no empty cell
    pub best_move: Option<Pos>,
    /// Search score from the AI's point of view (0 when no search ran)
    pub score: i32,
    /// How the move was chosen
    pub source: MoveSource,
    /// Depth budget of the search (0 when no search ran)
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// True if the time budget ran out
    pub timed_out: bool,
}

impl MoveResult {
    /// Create a result for a policy-random move
    #[inline]
    fn random(pos: Option<Pos>, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            source: MoveSource::Random,
            depth: 0,
            nodes: 0,
            time_ms,
            timed_out: false,
        }
    }

    /// Create a result from alpha-beta search, falling back to `fallback`
    /// when the search found nothing
    #[inline]
    fn from_search(result: SearchResult, fallback: Option<Pos>, time_ms: u64) -> Self {
        let (best_move, source) = match result.best_move {
            Some(pos) => (Some(pos), MoveSource::Search),
            None => (fallback, MoveSource::Fallback),
        };
        Self {
            best_move,
            score: result.score,
            source,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
            timed_out: result.timed_out,
        }
    }
}

/// Main AI Engine for Caro.
///
/// Plays one side, fixed at construction; nothing assumes which side the
/// human has.
pub struct AIEngine {
    /// Side the engine plays
    player: Player,
    /// Alpha-beta searcher with transposition table
    searcher: Searcher,
    rng: SmallRng,
}

impl AIEngine {
    /// Create an engine playing `player`, seeded from OS entropy.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self {
            player,
            searcher: Searcher::new(DEFAULT_TT_SIZE_MB),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed random seed (reproducible games and tests).
    #[must_use]
    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            player,
            searcher: Searcher::new(DEFAULT_TT_SIZE_MB),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Replace the searcher with one using a `tt_size_mb` megabyte table.
    #[must_use]
    pub fn with_tt_size(mut self, tt_size_mb: usize) -> Self {
        self.searcher = Searcher::new(tt_size_mb);
        self
    }

    /// Side this engine plays
    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Get the move for the given position.
    ///
    /// Returns `None` only when the board has no empty cell.
    #[must_use]
    pub fn get_move(
        &mut self,
        board: &Board,
        win_condition: usize,
        difficulty: Difficulty,
    ) -> Option<Pos> {
        self.get_move_with_stats(board, win_condition, difficulty)
            .best_move
    }

    /// Get the move with detailed search statistics.
    ///
    /// `Easy` picks uniformly among the legal moves; the other tiers search
    /// with [`Difficulty::limits`].
    #[must_use]
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        win_condition: usize,
        difficulty: Difficulty,
    ) -> MoveResult {
        let start = Instant::now();

        let result = match difficulty.limits() {
            None => MoveResult::random(self.random_move(board), elapsed_ms(start)),
            Some(limits) => self.get_move_with_limits(board, win_condition, limits),
        };

        info!(
            "AI {} ({difficulty}) plays {} via {:?}: score={} nodes={} time={}ms",
            self.player,
            result
                .best_move
                .map_or_else(|| "nothing".to_string(), |p| p.to_string()),
            result.source,
            result.score,
            result.nodes,
            result.time_ms,
        );
        result
    }

    /// Search with explicit limits.
    ///
    /// The caller's board is copied once; the search mutates and restores
    /// that copy in place.
    #[must_use]
    pub fn get_move_with_limits(
        &mut self,
        board: &Board,
        win_condition: usize,
        limits: SearchLimits,
    ) -> MoveResult {
        let start = Instant::now();
        let mut work_board = board.clone();

        let result = self
            .searcher
            .search(&mut work_board, win_condition, self.player, limits);
        let fallback = match result.best_move {
            Some(_) => None,
            None => self.random_move(board),
        };

        MoveResult::from_search(result, fallback, elapsed_ms(start))
    }

    /// Uniformly random legal move
    fn random_move(&mut self, board: &Board) -> Option<Pos> {
        board.legal_moves().choose(&mut self.rng).copied()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
