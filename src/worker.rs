//! Background AI thinking
//!
//! A search can run for seconds, so front ends run it on its own thread.
//! The thread gets its own copy of the board and sends back only the
//! [`MoveResult`]; the game's board is never shared. Cancellation is
//! cooperative: dropping the task (or giving up in [`ThinkingTask::wait`])
//! simply discards the late result.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::warn;

use crate::board::{Board, Player};
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::error::WorkerError;

/// An AI search running on a background thread.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use caro::{Difficulty, GameState, Player, Pos, ThinkingTask};
///
/// let mut game = GameState::new(5, 4).unwrap();
/// game.make_move(Pos::new(2, 2));
///
/// let task = ThinkingTask::spawn(
///     game.board().clone(),
///     Player::Second,
///     game.win_condition(),
///     Difficulty::Medium,
/// );
/// let result = task.wait(Duration::from_secs(10)).unwrap();
/// assert!(game.make_move(result.best_move.unwrap()));
/// ```
pub struct ThinkingTask {
    receiver: Receiver<MoveResult>,
    start_time: Instant,
}

impl ThinkingTask {
    /// Start thinking on a snapshot of the board.
    pub fn spawn(board: Board, ai: Player, win_condition: usize, difficulty: Difficulty) -> Self {
        Self::spawn_with(AIEngine::new(ai), board, win_condition, difficulty)
    }

    /// Start thinking with a preconfigured engine (e.g. a seeded one).
    pub fn spawn_with(
        mut engine: AIEngine,
        board: Board,
        win_condition: usize,
        difficulty: Difficulty,
    ) -> Self {
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, win_condition, difficulty);
            // The receiver may be gone if the caller gave up
            let _ = tx.send(result);
        });

        Self {
            receiver: rx,
            start_time: Instant::now(),
        }
    }

    /// Non-blocking check: `Ok(None)` while still thinking.
    pub fn poll(&self) -> Result<Option<MoveResult>, WorkerError> {
        match self.receiver.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    /// Block until the result arrives or `timeout` passes.
    pub fn wait(self, timeout: Duration) -> Result<MoveResult, WorkerError> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => Ok(result),
            Err(RecvTimeoutError::Timeout) => {
                warn!("AI did not answer within {timeout:?}; dropping the search");
                Err(WorkerError::TimedOut(timeout))
            }
            Err(RecvTimeoutError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    /// Time spent thinking so far
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
