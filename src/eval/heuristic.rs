//! Heuristic evaluation function for Caro board positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! Every stone is scored in each of the four directions by the run passing
//! through it and the number of open ends of that run.
//!
//! The same physical line is scored once per stone it contains (and by the
//! stones near it), so long runs weigh more than the tier value alone. The
//! search is tuned against exactly this counting.

use crate::board::{Board, Cell, Player, Pos, DIRECTIONS};

use super::patterns::line_score;

/// Evaluate the board from the perspective of the given player.
///
/// Returns `count_sequences(player) - count_sequences(opponent)`:
/// positive values favour `player`.
///
/// # Arguments
/// * `board` - The current board state
/// * `win_condition` - Run length needed to win
/// * `player` - The side to evaluate for
#[must_use]
pub fn evaluate(board: &Board, win_condition: usize, player: Player) -> i32 {
    count_sequences(board, win_condition, player)
        - count_sequences(board, win_condition, player.opponent())
}

/// Sum of line scores over every stone of `player` and every direction.
fn count_sequences(board: &Board, win_condition: usize, player: Player) -> i32 {
    let mut score = 0;
    for pos in board.stones_of(player) {
        for &(dr, dc) in &DIRECTIONS {
            let (run, open_ends) = measure_run(board, pos, dr, dc, player);
            score += line_score(run, open_ends, win_condition);
        }
    }
    score
}

/// Length of the contiguous run through `pos` along (dr, dc), extended both
/// ways, and how many of its two ends are empty in-range cells.
fn measure_run(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> (usize, u8) {
    let mut run = 1;
    let mut open_ends = 0;

    for sign in [1, -1] {
        let mut r = i32::from(pos.row) + dr * sign;
        let mut c = i32::from(pos.col) + dc * sign;
        loop {
            match board.cell_at(r, c) {
                Some(Cell::Stone(p)) if p == player => run += 1,
                Some(Cell::Empty) => {
                    open_ends += 1;
                    break;
                }
                _ => break, // opponent stone or edge
            }
            r += dr * sign;
            c += dc * sign;
        }
    }

    (run, open_ends)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    fn board_with(size: usize, k: usize, stones: &[(u8, u8, Player)]) -> Board {
        let mut board = Board::new(size, k).unwrap();
        for &(r, c, p) in stones {
            assert!(board.apply_move(Pos::new(r, c), p));
        }
        board
    }

    #[test]
    fn test_empty_board_is_zero() {
        let board = Board::new(10, 5).unwrap();
        assert_eq!(evaluate(&board, 5, Player::First), 0);
    }

    #[test]
    fn test_lone_center_stone() {
        // K = 3: a free single stone is a live K-2 in all four directions
        let board = board_with(5, 3, &[(2, 2, Player::First)]);
        assert_eq!(evaluate(&board, 3, Player::First), 4 * PatternScore::OPEN_K2);
        assert_eq!(evaluate(&board, 3, Player::Second), -4 * PatternScore::OPEN_K2);
    }

    #[test]
    fn test_corner_stone_has_no_open_lines() {
        let board = board_with(3, 3, &[(0, 0, Player::First)]);
        assert_eq!(evaluate(&board, 3, Player::First), 0);
    }

    #[test]
    fn test_pair_counted_from_both_stones() {
        // Horizontal pair: each stone sees a live run of 2 (K-3) plus three
        // live singles (K-4) in the other directions.
        let board = board_with(10, 5, &[(4, 3, Player::First), (4, 4, Player::First)]);
        let per_stone = PatternScore::OPEN_K3 + 3 * PatternScore::OPEN_K4;
        assert_eq!(evaluate(&board, 5, Player::First), 2 * per_stone);
    }

    #[test]
    fn test_blocked_run_scores_less() {
        let open = board_with(
            9,
            4,
            &[(4, 3, Player::First), (4, 4, Player::First), (4, 5, Player::First)],
        );
        let blocked = board_with(
            9,
            4,
            &[
                (4, 3, Player::First),
                (4, 4, Player::First),
                (4, 5, Player::First),
                (4, 6, Player::Second),
            ],
        );
        assert!(evaluate(&open, 4, Player::First) > evaluate(&blocked, 4, Player::First));
    }

    #[test]
    fn test_completed_line_dominates() {
        let board = board_with(
            5,
            3,
            &[
                (0, 0, Player::Second),
                (0, 1, Player::Second),
                (0, 2, Player::Second),
                (2, 2, Player::First),
                (3, 3, Player::First),
            ],
        );
        assert!(evaluate(&board, 3, Player::Second) > 2 * PatternScore::WIN);
        assert!(evaluate(&board, 3, Player::First) < 0);
    }

    #[test]
    fn test_symmetric_between_players() {
        let board = board_with(
            7,
            4,
            &[
                (3, 3, Player::First),
                (3, 4, Player::Second),
                (2, 2, Player::First),
                (4, 4, Player::Second),
            ],
        );
        assert_eq!(
            evaluate(&board, 4, Player::First),
            -evaluate(&board, 4, Player::Second)
        );
    }
}
