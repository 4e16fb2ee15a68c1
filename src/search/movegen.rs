//! Candidate move generation
//!
//! Restricts the search to empty cells near existing stones so the branching
//! factor stays far below the N^2 legal moves.

use crate::board::{Board, Pos};

/// Chebyshev distance from an occupied cell within which empty cells are
/// considered.
pub const NEIGHBOR_RADIUS: i32 = 2;

/// Empty cells within [`NEIGHBOR_RADIUS`] of any stone, in row-major order.
///
/// Falls back to every legal move when the board is empty or nothing is
/// in range.
///
/// # Example
///
/// ```
/// use caro::{Board, Player, Pos};
/// use caro::search::candidate_moves;
///
/// let mut board = Board::new(9, 5).unwrap();
/// assert_eq!(candidate_moves(&board).len(), 81);
///
/// board.apply_move(Pos::new(4, 4), Player::First);
/// assert_eq!(candidate_moves(&board).len(), 24);
/// ```
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_empty() {
        return board.legal_moves();
    }

    let size = board.size();
    let mut near = vec![false; size * size];

    for (pos, _) in board.occupied() {
        for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;
                if r < 0 || c < 0 || r >= size as i32 || c >= size as i32 {
                    continue;
                }
                near[r as usize * size + c as usize] = true;
            }
        }
    }

    let moves: Vec<Pos> = near
        .iter()
        .enumerate()
        .filter(|&(_, &hit)| hit)
        .map(|(idx, _)| Pos::from_index(idx, size))
        .filter(|&pos| board.is_valid_move(pos))
        .collect();

    if moves.is_empty() {
        return board.legal_moves();
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_empty_board_falls_back_to_all_cells() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(candidate_moves(&board), board.legal_moves());
    }

    #[test]
    fn test_corner_stone_neighbourhood() {
        let mut board = Board::new(5, 3).unwrap();
        assert!(board.apply_move(Pos::new(0, 0), Player::First));

        let expected: Vec<Pos> = (0..3u8)
            .flat_map(|r| (0..3u8).map(move |c| Pos::new(r, c)))
            .filter(|&p| p != Pos::new(0, 0))
            .collect();
        assert_eq!(candidate_moves(&board), expected);
    }

    #[test]
    fn test_overlapping_neighbourhoods_are_deduplicated() {
        let mut board = Board::new(9, 5).unwrap();
        assert!(board.apply_move(Pos::new(4, 4), Player::First));
        assert!(board.apply_move(Pos::new(4, 5), Player::Second));

        let moves = candidate_moves(&board);
        // 5x6 block minus the two stones
        assert_eq!(moves.len(), 28);
        let mut sorted = moves.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, moves);
        assert!(!moves.contains(&Pos::new(4, 4)));
        assert!(!moves.contains(&Pos::new(1, 4)));
    }

    #[test]
    fn test_every_candidate_is_legal_and_near() {
        let mut board = Board::new(10, 5).unwrap();
        assert!(board.apply_move(Pos::new(1, 8), Player::First));
        assert!(board.apply_move(Pos::new(7, 2), Player::Second));

        for pos in candidate_moves(&board) {
            assert!(board.is_valid_move(pos));
            let near = board.occupied().any(|(stone, _)| {
                (i32::from(stone.row) - i32::from(pos.row)).abs() <= NEIGHBOR_RADIUS
                    && (i32::from(stone.col) - i32::from(pos.col)).abs() <= NEIGHBOR_RADIUS
            });
            assert!(near, "{pos} is not near any stone");
        }
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new(2, 2).unwrap();
        let mut player = Player::First;
        for pos in board.legal_moves() {
            assert!(board.apply_move(pos, player));
            player = player.opponent();
        }
        assert!(candidate_moves(&board).is_empty());
    }
}
