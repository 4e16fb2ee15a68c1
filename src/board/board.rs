//! Board structure with last-move and winning-line tracking

use super::{Cell, Player, Pos};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::rules::find_line;

/// Game board: an N x N grid of cells, row-major.
///
/// The board is the single mutable object the search works on. Moves are
/// applied with [`Board::apply_move`] and undone with [`Board::revert_move`]
/// as a matched pair; the grid is never cloned per search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    grid: Vec<Cell>,
    /// Number of occupied cells
    stones: usize,
    last_move: Option<Pos>,
    /// Last detected winning line, or empty
    winning_sequence: Vec<Pos>,
}

impl Board {
    /// Create an empty board, validating the dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use caro::{Board, Player, Pos};
    ///
    /// let mut board = Board::new(3, 3).unwrap();
    /// assert!(board.apply_move(Pos::new(1, 1), Player::First));
    /// assert!(!board.apply_move(Pos::new(1, 1), Player::Second));
    /// assert_eq!(board.legal_moves().len(), 8);
    /// ```
    pub fn new(size: usize, win_condition: usize) -> Result<Self, ConfigError> {
        GameConfig::new(size, win_condition).map(Self::with_config)
    }

    /// Create an empty board from an already validated configuration.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            grid: vec![Cell::Empty; config.cells()],
            stones: 0,
            last_move: None,
            winning_sequence: Vec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.config.size()
    }

    #[inline]
    pub fn win_condition(&self) -> usize {
        self.config.win_condition()
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Clear every cell, the last move and the cached winning line.
    pub fn reset(&mut self) {
        self.grid.fill(Cell::Empty);
        self.stones = 0;
        self.last_move = None;
        self.winning_sequence.clear();
    }

    #[inline]
    fn in_range(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size() && (pos.col as usize) < self.size()
    }

    /// Get the cell at a position (`None` if out of range)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        if self.in_range(pos) {
            Some(self.grid[pos.to_index(self.size())])
        } else {
            None
        }
    }

    /// Signed-coordinate lookup used by line scans.
    /// Out-of-range coordinates yield `None`.
    #[inline]
    pub(crate) fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        let n = self.size() as i32;
        if row < 0 || row >= n || col < 0 || col >= n {
            return None;
        }
        Some(self.grid[(row * n + col) as usize])
    }

    /// True iff the position is in range and empty
    #[inline]
    pub fn is_valid_move(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(Cell::is_empty)
    }

    /// Place a stone. Returns false and leaves the board untouched if the
    /// target is out of range or occupied.
    pub fn apply_move(&mut self, pos: Pos, player: Player) -> bool {
        if !self.is_valid_move(pos) {
            return false;
        }
        let idx = pos.to_index(self.size());
        self.grid[idx] = Cell::Stone(player);
        self.stones += 1;
        self.last_move = Some(pos);
        true
    }

    /// Exact inverse of a successful [`Board::apply_move`] on `pos`.
    ///
    /// Clears `last_move` without restoring its previous value; callers that
    /// need it back must remember it themselves.
    pub fn revert_move(&mut self, pos: Pos) {
        if self.in_range(pos) {
            let idx = pos.to_index(self.size());
            if !self.grid[idx].is_empty() {
                self.grid[idx] = Cell::Empty;
                self.stones -= 1;
            }
        }
        self.last_move = None;
    }

    /// Put back a `last_move` value saved before a revert.
    /// Ignored unless the position is occupied.
    pub(crate) fn restore_last_move(&mut self, pos: Option<Pos>) {
        self.last_move = pos.filter(|&p| self.get(p).is_some_and(|c| !c.is_empty()));
    }

    /// Drop the cached winning line (used when the line is undone).
    pub(crate) fn clear_winning_sequence(&mut self) {
        self.winning_sequence.clear();
    }

    /// All empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Pos> {
        let size = self.size();
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Pos::from_index(idx, size))
            .collect()
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.grid.len()
    }

    /// True iff no stone has been placed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Last detected winning line, or an empty slice
    #[inline]
    pub fn winning_sequence(&self) -> &[Pos] {
        &self.winning_sequence
    }

    /// Find a line of exactly `win_condition` stones for `player`.
    ///
    /// On a match the line is cached as the winning sequence and returned.
    /// See [`crate::rules::find_line`] for the scan order.
    pub fn detect_line(&mut self, player: Player) -> Option<Vec<Pos>> {
        let line = find_line(self, player)?;
        self.winning_sequence.clone_from(&line);
        Some(line)
    }

    /// Occupied cells of one player in row-major order.
    pub fn stones_of(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size();
        self.grid
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == Cell::Stone(player))
            .map(move |(idx, _)| Pos::from_index(idx, size))
    }

    /// Occupied cells of both players in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        let size = self.size();
        self.grid
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.player().map(|p| (Pos::from_index(idx, size), p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}
