//! Game configuration and construction-time validation

use crate::error::ConfigError;

/// Largest supported board side. Coordinates are stored as `u8`.
pub const MAX_BOARD_SIZE: usize = 32;

/// Default board side (10x10)
pub const DEFAULT_SIZE: usize = 10;

/// Default run length needed to win
pub const DEFAULT_WIN_CONDITION: usize = 5;

/// Board dimensions and win length, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    size: usize,
    win_condition: usize,
}

impl GameConfig {
    /// Validate and build a configuration.
    ///
    /// Fails when the board is empty or too large, or when no line of
    /// `win_condition` stones can fit on it.
    ///
    /// # Example
    ///
    /// ```
    /// use caro::GameConfig;
    ///
    /// assert!(GameConfig::new(15, 5).is_ok());
    /// assert!(GameConfig::new(3, 4).is_err());
    /// ```
    pub fn new(size: usize, win_condition: usize) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        if win_condition == 0 || win_condition > size {
            return Err(ConfigError::InvalidWinCondition {
                win_condition,
                size,
            });
        }
        Ok(Self {
            size,
            win_condition,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_condition(&self) -> usize {
        self.win_condition
    }

    /// Total number of cells (N * N)
    #[inline]
    pub fn cells(&self) -> usize {
        self.size * self.size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            win_condition: DEFAULT_WIN_CONDITION,
        }
    }
}
