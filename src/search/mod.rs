//! Search module for the Caro AI
//!
//! Contains:
//! - Candidate move generation (locality pruning)
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Alpha-Beta minimax search under a depth and time budget

pub mod alphabeta;
pub mod movegen;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchLimits, SearchResult, SearchStats, Searcher};
pub use movegen::candidate_moves;
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
