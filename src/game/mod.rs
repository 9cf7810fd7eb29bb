//! Room logic shared by both games: configuration, countdown, password gates,
//! the Atbash puzzle cipher and the victory stats.

pub mod cipher;
pub mod config;
pub mod gate;
pub mod stats;
pub mod timer;

pub use cipher::atbash;
pub use config::{BIBLE, EXODUS, GameConfig};
pub use gate::{Attempt, GateError, HintLevel, PasswordGate, check_answer, sha256_hex};
pub use stats::{Stats, share_message};
pub use timer::{Countdown, TimerTick, countdown_display, format_duration};

/// Look up a game preset by name.
pub fn game(name: &str) -> Result<&'static GameConfig, GateError> {
    GameConfig::by_name(name).ok_or_else(|| GateError::UnknownGame(name.to_string()))
}
