//! Play status of a game in a collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a game stands for the user who added it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "game_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Wishlist,
    #[default]
    Backlog,
    Playing,
    OnHold,
    Completed,
    FullyCompleted,
    Dropped,
    NotForMe,
    Replay,
    Reviewing,
}

impl GameStatus {
    /// Every status, in display order.
    pub const ALL: [GameStatus; 10] = [
        Self::Wishlist,
        Self::Backlog,
        Self::Playing,
        Self::OnHold,
        Self::Completed,
        Self::FullyCompleted,
        Self::Dropped,
        Self::NotForMe,
        Self::Replay,
        Self::Reviewing,
    ];

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wishlist => "wishlist",
            Self::Backlog => "backlog",
            Self::Playing => "playing",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::FullyCompleted => "fully_completed",
            Self::Dropped => "dropped",
            Self::NotForMe => "not_for_me",
            Self::Replay => "replay",
            Self::Reviewing => "reviewing",
        }
    }

    /// Whether the user has finished the game in some form.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::FullyCompleted)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = playlog_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                playlog_core::AppError::validation(format!(
                    "Invalid game status: '{s}'. Expected one of: {}",
                    expected.join(", ")
                ))
            })
    }
}
