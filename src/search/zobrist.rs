//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(1) incremental hash updates when placing/removing stones.
//! The search keeps one running hash and updates it on every apply/revert instead
//! of re-reading the grid at each node.
//!
//! # Example
//!
//! ```
//! use caro::{Board, Player, Pos};
//! use caro::search::ZobristTable;
//!
//! let mut board = Board::new(10, 5).unwrap();
//! let zt = ZobristTable::new(board.size());
//!
//! let hash1 = zt.hash(&board, Player::First);
//!
//! let pos = Pos::new(4, 4);
//! board.apply_move(pos, Player::First);
//! let hash2 = zt.hash(&board, Player::Second);
//!
//! // Incremental update is equivalent to full recomputation
//! assert_eq!(zt.update_place(hash1, pos, Player::First), hash2);
//! ```

use crate::board::{Board, Player, Pos};

/// Zobrist hash table for position hashing.
///
/// Uses XOR-based hashing with precomputed random values for each
/// (cell, player) combination plus one value for the side to move.
pub struct ZobristTable {
    size: usize,
    /// Random values per cell: `[cell * 2 + player.index()]`
    stones: Vec<u64>,
    /// Random value XORed when First is to move
    first_to_move: u64,
}

impl ZobristTable {
    /// Create a table for a `size` x `size` board with deterministic values.
    ///
    /// Uses a linear congruential generator with a fixed seed so hashes are
    /// reproducible across runs.
    #[must_use]
    pub fn new(size: usize) -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            seed
        };

        let stones = (0..size * size * 2).map(|_| next_rand()).collect();

        Self {
            size,
            stones,
            first_to_move: next_rand(),
        }
    }

    /// Board side this table was built for
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn key(&self, pos: Pos, player: Player) -> u64 {
        self.stones[pos.to_index(self.size) * 2 + player.index()]
    }

    /// Compute the full hash for a board position.
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Player) -> u64 {
        debug_assert_eq!(board.size(), self.size);
        let mut h = board
            .occupied()
            .fold(0u64, |h, (pos, player)| h ^ self.key(pos, player));

        if side_to_move == Player::First {
            h ^= self.first_to_move;
        }
        h
    }

    /// Incrementally update hash after placing a stone.
    ///
    /// Also toggles the side-to-move component.
    #[inline]
    #[must_use]
    pub fn update_place(&self, hash: u64, pos: Pos, player: Player) -> u64 {
        hash ^ self.key(pos, player) ^ self.first_to_move
    }

    /// Incrementally update hash after removing a stone.
    ///
    /// XOR is its own inverse, so this is identical to `update_place`.
    #[inline]
    #[must_use]
    pub fn update_remove(&self, hash: u64, pos: Pos, player: Player) -> u64 {
        self.update_place(hash, pos, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zobrist_empty_board() {
        let zt = ZobristTable::new(10);
        let board = Board::new(10, 5).unwrap();

        let hash1 = zt.hash(&board, Player::First);
        let hash2 = zt.hash(&board, Player::Second);

        // Different side to move = different hash
        assert_ne!(hash1, hash2);
        assert_eq!(hash2, 0);
        assert_eq!(hash1, zt.first_to_move);
    }

    #[test]
    fn test_zobrist_deterministic() {
        let zt1 = ZobristTable::new(7);
        let zt2 = ZobristTable::new(7);
        let mut board = Board::new(7, 4).unwrap();
        assert!(board.apply_move(Pos::new(3, 3), Player::Second));

        assert_eq!(zt1.hash(&board, Player::First), zt2.hash(&board, Player::First));
    }

    #[test]
    fn test_zobrist_same_position_different_path() {
        let zt = ZobristTable::new(10);
        let mut board1 = Board::new(10, 5).unwrap();
        let mut board2 = Board::new(10, 5).unwrap();

        assert!(board1.apply_move(Pos::new(4, 4), Player::First));
        assert!(board1.apply_move(Pos::new(5, 5), Player::Second));

        assert!(board2.apply_move(Pos::new(5, 5), Player::Second));
        assert!(board2.apply_move(Pos::new(4, 4), Player::First));

        assert_eq!(zt.hash(&board1, Player::First), zt.hash(&board2, Player::First));
    }

    #[test]
    fn test_zobrist_distinguishes_owner_and_cell() {
        let zt = ZobristTable::new(10);
        let mut board1 = Board::new(10, 5).unwrap();
        let mut board2 = Board::new(10, 5).unwrap();
        let mut board3 = Board::new(10, 5).unwrap();

        assert!(board1.apply_move(Pos::new(4, 4), Player::First));
        assert!(board2.apply_move(Pos::new(4, 4), Player::Second));
        assert!(board3.apply_move(Pos::new(4, 5), Player::First));

        let h1 = zt.hash(&board1, Player::Second);
        let h2 = zt.hash(&board2, Player::Second);
        let h3 = zt.hash(&board3, Player::Second);
        assert_ne!(h1, h2);
        assert_ne!(h1, h3);
        assert_ne!(h2, h3);
    }

    #[test]
    fn test_zobrist_undo() {
        let zt = ZobristTable::new(10);
        let mut board = Board::new(10, 5).unwrap();
        let pos = Pos::new(4, 4);

        let hash_empty = zt.hash(&board, Player::First);

        assert!(board.apply_move(pos, Player::First));
        let hash_with_stone = zt.hash(&board, Player::Second);
        assert_eq!(zt.update_place(hash_empty, pos, Player::First), hash_with_stone);

        board.revert_move(pos);
        let hash_after_remove = zt.hash(&board, Player::First);
        assert_eq!(
            zt.update_remove(hash_with_stone, pos, Player::First),
            hash_after_remove
        );
        assert_eq!(hash_after_remove, hash_empty);
    }
}
