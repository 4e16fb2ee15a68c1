//! Turn, history and score management on top of a [`Board`]

use log::debug;

use crate::board::{Board, Player, Pos};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// The side that opens every game
const STARTING_PLAYER: Player = Player::First;

/// One applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub player: Player,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// Coarse game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished(Outcome),
}

/// Win counts per player. Survive [`GameState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    wins: [u32; 2],
}

impl Scores {
    #[inline]
    pub fn get(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    #[inline]
    fn record_win(&mut self, player: Player) {
        self.wins[player.index()] += 1;
    }
}

/// Game state: owns the board and is its only mutator during play.
///
/// # Example
///
/// ```
/// use caro::{GameState, Player, Pos};
///
/// let mut game = GameState::new(3, 3).unwrap();
/// assert!(game.make_move(Pos::new(1, 1)));
/// assert_eq!(game.current_player(), Player::Second);
/// assert!(game.undo());
/// assert!(game.redo());
/// assert_eq!(game.move_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    move_history: Vec<Move>,
    /// Most recently undone move on top
    redo_stack: Vec<Move>,
    current_player: Player,
    scores: Scores,
    finished: bool,
    winner: Option<Player>,
}

impl GameState {
    pub fn new(size: usize, win_condition: usize) -> Result<Self, ConfigError> {
        GameConfig::new(size, win_condition).map(Self::with_config)
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            board: Board::with_config(config),
            move_history: Vec::with_capacity(config.cells()),
            redo_stack: Vec::new(),
            current_player: STARTING_PLAYER,
            scores: Scores::default(),
            finished: false,
            winner: None,
        }
    }

    /// Start a new game on the same board. Scores are kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.move_history.clear();
        self.redo_stack.clear();
        self.current_player = STARTING_PLAYER;
        self.finished = false;
        self.winner = None;
        debug!("game reset");
    }

    /// Play `pos` for the current player.
    ///
    /// Returns false (and changes nothing) if the cell is out of range or
    /// occupied. Playing after the game is finished is the caller's call to
    /// prevent; the board itself only checks legality.
    pub fn make_move(&mut self, pos: Pos) -> bool {
        let player = self.current_player;
        if !self.board.apply_move(pos, player) {
            return false;
        }
        self.move_history.push(Move { pos, player });
        self.redo_stack.clear();
        debug!("{player} plays {pos} (move {})", self.move_history.len());

        if !self.settle(player) {
            self.current_player = player.opponent();
        }
        true
    }

    /// Take back the last move. The undone move's owner is to play again and
    /// the game is always back in progress.
    pub fn undo(&mut self) -> bool {
        let Some(mv) = self.move_history.pop() else {
            return false;
        };
        self.board.revert_move(mv.pos);
        self.board
            .restore_last_move(self.move_history.last().map(|m| m.pos));
        self.board.clear_winning_sequence();
        self.redo_stack.push(mv);
        self.current_player = mv.player;
        self.finished = false;
        self.winner = None;
        debug!("undo {} at {}", mv.player, mv.pos);
        true
    }

    /// Re-apply the most recently undone move.
    ///
    /// Fails if there is nothing to redo or the target cell is no longer
    /// empty; in the latter case the entry is left on the stack.
    pub fn redo(&mut self) -> bool {
        let Some(&mv) = self.redo_stack.last() else {
            return false;
        };
        if !self.board.apply_move(mv.pos, mv.player) {
            return false;
        }
        self.redo_stack.pop();
        self.move_history.push(mv);
        debug!("redo {} at {}", mv.player, mv.pos);

        if !self.settle(mv.player) {
            self.current_player = mv.player.opponent();
        }
        true
    }

    /// Check whether `mover`'s last stone ended the game. A win takes
    /// priority over a full board. Returns true if the game is now finished.
    fn settle(&mut self, mover: Player) -> bool {
        if self.board.detect_line(mover).is_some() {
            self.finished = true;
            self.winner = Some(mover);
            self.scores.record_win(mover);
            debug!("{mover} wins after {} moves", self.move_history.len());
            return true;
        }
        if self.board.is_full() {
            self.finished = true;
            self.winner = None;
            debug!("draw after {} moves", self.move_history.len());
            return true;
        }
        false
    }

    pub fn get_valid_moves(&self) -> Vec<Pos> {
        self.board.legal_moves()
    }

    pub fn get_winning_sequence(&self) -> &[Pos] {
        self.board.winning_sequence()
    }

    pub fn status(&self) -> GameStatus {
        match (self.finished, self.winner) {
            (true, Some(p)) => GameStatus::Finished(Outcome::Win(p)),
            (true, None) => GameStatus::Finished(Outcome::Draw),
            (false, _) if self.move_history.is_empty() => GameStatus::NotStarted,
            (false, _) => GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn win_condition(&self) -> usize {
        self.board.win_condition()
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Applied moves, oldest first
    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    #[inline]
    pub fn redo_stack_len(&self) -> usize {
        self.redo_stack.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.board.last_move()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn play(game: &mut GameState, moves: &[(u8, u8)]) {
        for &(r, c) in moves {
            assert!(game.make_move(Pos::new(r, c)), "move ({r}, {c}) rejected");
        }
    }

    /// X (0,0), O (1,1), X (0,1), O (2,2), X (0,2)
    fn top_row_win() -> GameState {
        let mut game = GameState::new(3, 3).unwrap();
        play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        game
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new(10, 5).unwrap();
        assert_eq!(game.current_player(), Player::First);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.get_valid_moves().len(), 100);
        assert!(GameState::new(4, 5).is_err());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameState::new(5, 4).unwrap();
        play(&mut game, &[(0, 0)]);
        assert_eq!(game.current_player(), Player::Second);
        play(&mut game, &[(4, 4)]);
        assert_eq!(game.current_player(), Player::First);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(
            game.move_history(),
            &[
                Move { pos: Pos::new(0, 0), player: Player::First },
                Move { pos: Pos::new(4, 4), player: Player::Second },
            ]
        );
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut game = GameState::new(3, 3).unwrap();
        play(&mut game, &[(1, 1)]);
        let board = game.board().clone();

        assert!(!game.make_move(Pos::new(1, 1)));
        assert!(!game.make_move(Pos::new(3, 1)));
        assert_eq!(game.board(), &board);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.current_player(), Player::Second);
    }

    #[test]
    fn test_top_row_win() {
        let mut game = top_row_win();
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::First));
        assert_eq!(game.scores().get(Player::First), 1);
        assert_eq!(game.scores().get(Player::Second), 0);
        assert_eq!(game.status(), GameStatus::Finished(Outcome::Win(Player::First)));
        assert_eq!(
            game.get_winning_sequence(),
            &[Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]
        );
        assert_eq!(
            game.board.detect_line(Player::First),
            Some(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
        // The winner keeps the turn marker
        assert_eq!(game.current_player(), Player::First);
    }

    #[test]
    fn test_full_board_draw() {
        // X O X
        // X O O
        // O X X
        let mut game = GameState::new(3, 3).unwrap();
        play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1), (1, 2), (1, 0), (2, 0)],
        );
        assert!(!game.is_finished());
        play(&mut game, &[(2, 2)]);

        assert!(game.is_finished());
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::Finished(Outcome::Draw));
        assert!(game.get_valid_moves().is_empty());
        assert_eq!(game.scores(), Scores::default());
    }

    #[test]
    fn test_diagonal_win() {
        let mut game = GameState::new(5, 3).unwrap();
        play(&mut game, &[(0, 0), (0, 4), (1, 1), (4, 0), (2, 2)]);
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::First));
        assert_eq!(
            game.get_winning_sequence(),
            &[Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]
        );
    }

    #[test]
    fn test_undo_after_win() {
        let mut game = top_row_win();
        assert!(game.undo());

        assert!(!game.is_finished());
        assert_eq!(game.winner(), None);
        assert_eq!(game.current_player(), Player::First);
        assert_eq!(game.board().get(Pos::new(0, 2)), Some(Cell::Empty));
        assert_eq!(game.move_count(), 4);
        assert_eq!(game.redo_stack_len(), 1);
        assert!(game.get_winning_sequence().is_empty());
        assert_eq!(game.last_move(), Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_undo_redo_restores_finished_state() {
        let mut game = top_row_win();
        let board = game.board().clone();

        assert!(game.undo());
        assert!(game.redo());

        assert_eq!(game.board(), &board);
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::First));
        assert_eq!(game.current_player(), Player::First);
        assert_eq!(game.move_count(), 5);
        assert_eq!(game.redo_stack_len(), 0);
        // Redo re-scores the win
        assert_eq!(game.scores().get(Player::First), 2);
    }

    #[test]
    fn test_undo_redo_mid_game_is_identity() {
        let mut game = GameState::new(5, 4).unwrap();
        play(&mut game, &[(2, 2), (1, 1), (2, 3)]);
        let board = game.board().clone();
        let player = game.current_player();

        assert!(game.undo());
        assert_eq!(game.current_player(), Player::First);
        assert!(game.redo());

        assert_eq!(game.board(), &board);
        assert_eq!(game.current_player(), player);
        assert!(!game.is_finished());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_multiple_undo_then_redo() {
        let mut game = GameState::new(4, 3).unwrap();
        play(&mut game, &[(0, 0), (3, 3), (1, 1)]);

        assert!(game.undo());
        assert!(game.undo());
        assert_eq!(game.current_player(), Player::Second);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.redo_stack_len(), 2);

        assert!(game.redo());
        assert_eq!(game.move_history().last().map(|m| m.pos), Some(Pos::new(3, 3)));
        assert!(game.redo());
        assert_eq!(game.move_history().last().map(|m| m.pos), Some(Pos::new(1, 1)));
        assert!(!game.redo());
        assert_eq!(game.current_player(), Player::Second);
    }

    #[test]
    fn test_empty_history() {
        let mut game = GameState::new(3, 3).unwrap();
        assert!(!game.undo());
        assert!(!game.redo());
        assert_eq!(game.status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_new_move_clears_redo() {
        let mut game = GameState::new(4, 3).unwrap();
        play(&mut game, &[(0, 0), (1, 1)]);
        assert!(game.undo());
        assert_eq!(game.redo_stack_len(), 1);

        play(&mut game, &[(2, 2)]);
        assert_eq!(game.redo_stack_len(), 0);
        assert!(!game.redo());
    }

    #[test]
    fn test_undo_to_empty_returns_to_not_started() {
        let mut game = GameState::new(4, 3).unwrap();
        play(&mut game, &[(0, 0)]);
        assert!(game.undo());
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut game = top_row_win();
        game.reset();

        assert_eq!(game.move_count(), 0);
        assert_eq!(game.redo_stack_len(), 0);
        assert_eq!(game.current_player(), Player::First);
        assert!(!game.is_finished());
        assert_eq!(game.winner(), None);
        assert!(game.get_winning_sequence().is_empty());
        assert_eq!(game.scores().get(Player::First), 1);
        assert_eq!(game.get_valid_moves().len(), 9);
    }

    #[test]
    fn test_history_matches_board() {
        let mut game = GameState::new(6, 4).unwrap();
        let moves = [(0, 0), (5, 5), (2, 3), (3, 2), (1, 4), (4, 1)];
        for &(r, c) in &moves {
            assert!(game.make_move(Pos::new(r, c)));
            assert_eq!(game.move_count(), game.move_history().len());
            for mv in game.move_history() {
                assert_eq!(game.board().get(mv.pos), Some(Cell::Stone(mv.player)));
            }
        }
        assert_eq!(game.board().stone_count(), moves.len());
    }
}
