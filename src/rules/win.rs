//! Win condition checking
//!
//! A player wins with `win_condition` stones in a row horizontally,
//! vertically or on either diagonal.

use crate::board::{Board, Cell, Player, Pos, DIRECTIONS};

/// Find the first line of exactly `win_condition` stones for `player`.
///
/// Owned cells are scanned in row-major order and, for each cell, the four
/// directions in [`DIRECTIONS`] order. From each start cell the run is only
/// followed forward and is cut off at `win_condition` cells, so a longer
/// run is reported by its first `win_condition` stones. The first match in
/// this order is returned; the result is deterministic.
pub fn find_line(board: &Board, player: Player) -> Option<Vec<Pos>> {
    let k = board.win_condition();

    for pos in board.stones_of(player) {
        for &(dr, dc) in &DIRECTIONS {
            let mut line = Vec::with_capacity(k);
            line.push(pos);

            for i in 1..k as i32 {
                let r = i32::from(pos.row) + dr * i;
                let c = i32::from(pos.col) + dc * i;
                if board.cell_at(r, c) == Some(Cell::Stone(player)) {
                    line.push(Pos::new(r as u8, c as u8));
                } else {
                    break;
                }
            }

            if line.len() == k {
                return Some(line);
            }
        }
    }
    None
}

/// Check if `player` has a completed line anywhere on the board
#[inline]
pub fn has_line(board: &Board, player: Player) -> bool {
    find_line(board, player).is_some()
}
