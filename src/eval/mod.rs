//! Evaluation module for Caro positions
//!
//! This module provides line-pattern scoring for board positions.
//! The evaluation considers:
//! - Completed lines
//! - Live (both ends open) runs one to four stones short of a win

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{line_score, PatternScore};
