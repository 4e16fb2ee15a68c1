//! Alpha-Beta minimax search with transposition table
//!
//! This module implements the core search algorithm for the Caro AI:
//! depth-limited minimax with alpha-beta pruning, maximizing for the AI
//! side and minimizing for its opponent.
//!
//! # Features
//!
//! - Candidate moves restricted to the neighbourhood of existing stones
//! - Transposition table keyed by an incrementally updated Zobrist hash
//! - Wall-clock budget checked at every interior node; once it runs out
//!   the remaining nodes are scored statically
//! - One working board mutated and restored in place, never cloned per node
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use caro::{Board, Player, Pos};
//! use caro::search::{SearchLimits, Searcher};
//!
//! let mut searcher = Searcher::new(1);
//! let mut board = Board::new(5, 4).unwrap();
//! for col in 0..3 {
//!     board.apply_move(Pos::new(2, col), Player::Second);
//! }
//! board.apply_move(Pos::new(0, 0), Player::First);
//!
//! let limits = SearchLimits::new(2, Duration::from_secs(1));
//! let result = searcher.search(&mut board, 4, Player::Second, limits);
//! assert_eq!(result.best_move, Some(Pos::new(2, 3)));
//! ```

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate, PatternScore};
use crate::rules::has_line;

use super::movegen::candidate_moves;
use super::{EntryType, TTStats, TranspositionTable, ZobristTable};

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Score of a position where one side already has a completed line
const WIN_SCORE: i32 = PatternScore::WIN;

/// Depth and wall-clock budget for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum plies searched below the root
    pub depth: u8,
    /// Budget after which remaining nodes are evaluated as leaves
    pub time_limit: Duration,
}

impl SearchLimits {
    #[must_use]
    pub fn new(depth: u8, time_limit: Duration) -> Self {
        Self { depth, time_limit }
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that answered the node
    pub tt_hits: u64,
}

impl SearchStats {
    /// TT hit rate in percent
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the root from the AI's point of view
    pub score: i32,
    /// Depth the search was asked for
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// True if the time budget ran out before the search completed
    pub timed_out: bool,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds the transposition table and Zobrist keys between searches; the
/// table is cleared at the start of every [`Searcher::search`] call.
pub struct Searcher {
    tt: TranspositionTable,
    zobrist: ZobristTable,
    /// Side the search maximizes for
    ai: Player,
    win_condition: usize,
    nodes: u64,
    start_time: Instant,
    time_limit: Duration,
    timed_out: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with a transposition table of `tt_size_mb` megabytes.
    #[must_use]
    pub fn new(tt_size_mb: usize) -> Self {
        Self {
            tt: TranspositionTable::new(tt_size_mb),
            zobrist: ZobristTable::new(0),
            ai: Player::Second,
            win_condition: 0,
            nodes: 0,
            start_time: Instant::now(),
            time_limit: Duration::ZERO,
            timed_out: false,
            stats: SearchStats::default(),
        }
    }

    /// Search `board` for the best move of `ai`.
    ///
    /// The board is explored in place and is identical (including its last
    /// move) when this returns. `best_move` is `None` if the root is
    /// already decided, the board is full, or the budget ran out before the
    /// first child was scored.
    pub fn search(
        &mut self,
        board: &mut Board,
        win_condition: usize,
        ai: Player,
        limits: SearchLimits,
    ) -> SearchResult {
        if self.zobrist.size() != board.size() {
            self.zobrist = ZobristTable::new(board.size());
        }
        self.tt.clear();
        self.ai = ai;
        self.win_condition = win_condition;
        self.nodes = 0;
        self.start_time = Instant::now();
        self.time_limit = limits.time_limit;
        self.timed_out = false;
        self.stats = SearchStats::default();

        let hash = self.zobrist.hash(board, ai);
        let (score, best_move) = self.search_root(board, limits.depth, hash);

        let tt_stats: TTStats = self.tt.stats();
        debug!(
            "search depth={} nodes={} score={} timed_out={} tt_hits={:.1}% tt_used={}%",
            limits.depth,
            self.nodes,
            score,
            self.timed_out,
            self.stats.tt_hit_rate(),
            tt_stats.usage_percent,
        );

        SearchResult {
            best_move,
            score,
            depth: limits.depth,
            nodes: self.nodes,
            timed_out: self.timed_out,
            stats: self.stats.clone(),
        }
    }

    /// Check the wall clock. Once the budget is gone it stays gone for the
    /// rest of the search.
    #[inline]
    fn out_of_time(&mut self) -> bool {
        if !self.timed_out && self.start_time.elapsed() >= self.time_limit {
            self.timed_out = true;
        }
        self.timed_out
    }

    /// Static checks shared by the root and interior nodes: a completed
    /// line for either side, the depth/board/time horizon.
    fn leaf_score(&mut self, board: &Board, depth: u8) -> Option<i32> {
        if has_line(board, self.ai) {
            return Some(WIN_SCORE);
        }
        if has_line(board, self.ai.opponent()) {
            return Some(-WIN_SCORE);
        }
        if depth == 0 || board.is_full() || self.out_of_time() {
            return Some(evaluate(board, self.win_condition, self.ai));
        }
        None
    }

    /// Root-level search: the AI is to move.
    fn search_root(&mut self, board: &mut Board, depth: u8, hash: u64) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if let Some(score) = self.leaf_score(board, depth) {
            return (score, None);
        }

        let mut alpha = -INF;
        let beta = INF;
        let mut best_score = -INF;
        let mut best_move = None;
        let saved_last = board.last_move();

        for mov in candidate_moves(board) {
            board.apply_move(mov, self.ai);
            let child_hash = self.zobrist.update_place(hash, mov, self.ai);
            let (score, _) = self.minimax(board, depth - 1, alpha, beta, false, child_hash);
            board.revert_move(mov);
            board.restore_last_move(saved_last);

            trace!("root move {mov}: {score}");

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        (best_score, best_move)
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `maximizing` is true when the AI is to move. Returns the score and
    /// the move that achieved it at this node.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        hash: u64,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        // TT probe
        self.stats.tt_probes += 1;
        if let Some(hit) = self.tt.probe(hash, depth, alpha, beta) {
            self.stats.tt_hits += 1;
            return hit;
        }

        if let Some(score) = self.leaf_score(board, depth) {
            return (score, None);
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mover = if maximizing { self.ai } else { self.ai.opponent() };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;
        let saved_last = board.last_move();

        for mov in candidate_moves(board) {
            board.apply_move(mov, mover);
            let child_hash = self.zobrist.update_place(hash, mov, mover);
            let (score, _) = self.minimax(board, depth - 1, alpha, beta, !maximizing, child_hash);
            board.revert_move(mov);
            board.restore_last_move(saved_last);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // Scores below a timed-out node are static guesses; don't cache them.
        if !self.timed_out {
            let entry_type = if best_score <= alpha_orig {
                EntryType::UpperBound
            } else if best_score >= beta_orig {
                EntryType::LowerBound
            } else {
                EntryType::Exact
            };
            self.tt.store(hash, depth, best_score, entry_type, best_move);
        }

        (best_score, best_move)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(16)
    }
}
