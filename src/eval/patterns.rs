//! Pattern scores for Caro evaluation
//!
//! Runs are classified relative to the win condition K, so the same table
//! works for any board size and line length.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Completed line (run of K or more) - immediate win
    pub const WIN: i32 = 100_000;
    /// Live run of K-1: wins next move on either end
    pub const OPEN_K1: i32 = 10_000;
    /// Live run of K-2
    pub const OPEN_K2: i32 = 1_000;
    /// Live run of K-3
    pub const OPEN_K3: i32 = 100;
    /// Live run of K-4
    pub const OPEN_K4: i32 = 10;
}

/// Score one run of `run` stones with `open_ends` empty neighbours.
///
/// Only the first matching tier counts. Short runs only score when both
/// ends are open; a blocked run is worth nothing unless it already wins.
#[inline]
#[must_use]
pub fn line_score(run: usize, open_ends: u8, win_condition: usize) -> i32 {
    let run = run as i32;
    let k = win_condition as i32;

    if run >= k {
        return PatternScore::WIN;
    }
    if open_ends < 2 {
        return 0;
    }
    match k - run {
        1 => PatternScore::OPEN_K1,
        2 => PatternScore::OPEN_K2,
        3 => PatternScore::OPEN_K3,
        4 => PatternScore::OPEN_K4,
        _ => 0,
    }
}
