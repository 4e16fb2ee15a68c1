//! Game rules for Caro
//!
//! Only one rule decides a game: a contiguous line of `win_condition`
//! stones in any of the four directions.

pub mod win;

// Re-exports for convenient access
pub use win::{find_line, has_line};
