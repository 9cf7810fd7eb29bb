//! Password gate for a single room.
//!
//! Passwords are never stored; each room only knows the SHA-256 digest of its
//! answer. Wrong answers count attempts and unlock hints: a weak hint after
//! [`WEAK_HINT_AFTER`] misses, a strong one after [`STRONG_HINT_AFTER`].

use sha2::{Digest, Sha256};
use thiserror::Error;

use super::config::GameConfig;

pub const WEAK_HINT_AFTER: u32 = 3;
pub const STRONG_HINT_AFTER: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("unknown game `{0}`")]
    UnknownGame(String),
    #[error("game `{game}` has no room `{room}`")]
    UnknownRoom { game: &'static str, room: String },
    #[error("game `{game}` has no page `{page}`")]
    UnknownPage { game: &'static str, page: String },
}

/// Lowercase hex SHA-256 of the UTF-8 bytes of `text`.
pub fn sha256_hex(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        use std::fmt::Write;
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Stateless check of one answer against `room_id`'s digest. Blank or
/// whitespace-only input is not an answer and yields `None`.
pub fn check_answer(
    config: &GameConfig,
    room_id: &str,
    input: &str,
) -> Result<Option<bool>, GateError> {
    let digest = config
        .room_digest(room_id)
        .ok_or_else(|| GateError::UnknownRoom {
            game: config.name,
            room: room_id.to_string(),
        })?;
    let answer = input.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    Ok(Some(sha256_hex(answer) == digest))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum HintLevel {
    #[default]
    None,
    Weak,
    Strong,
}

impl HintLevel {
    pub fn from_attempts(attempts: u32) -> Self {
        if attempts >= STRONG_HINT_AFTER {
            HintLevel::Strong
        } else if attempts >= WEAK_HINT_AFTER {
            HintLevel::Weak
        } else {
            HintLevel::None
        }
    }
}

/// Result of submitting one answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// Blank input, or the gate is already open. Not counted.
    Ignored,
    /// Correct; `next_room` is the progress index to store.
    Solved { next_room: usize },
    Wrong { attempts: u32, hint: HintLevel },
}

#[derive(Debug)]
pub struct PasswordGate {
    digest: &'static str,
    next_room: usize,
    attempts: u32,
    solved: bool,
}

impl PasswordGate {
    /// Gate for `room_id` whose success leads to `next_page`.
    pub fn new(config: &GameConfig, room_id: &str, next_page: &str) -> Result<Self, GateError> {
        let digest = config
            .room_digest(room_id)
            .ok_or_else(|| GateError::UnknownRoom {
                game: config.name,
                room: room_id.to_string(),
            })?;
        let next_room = config
            .room_index(next_page)
            .ok_or_else(|| GateError::UnknownPage {
                game: config.name,
                page: next_page.to_string(),
            })?;
        Ok(Self {
            digest,
            next_room,
            attempts: 0,
            solved: false,
        })
    }

    pub fn submit(&mut self, input: &str) -> Attempt {
        let answer = input.trim();
        if answer.is_empty() || self.solved {
            return Attempt::Ignored;
        }
        if sha256_hex(answer) == self.digest {
            self.solved = true;
            return Attempt::Solved {
                next_room: self.next_room,
            };
        }
        self.attempts += 1;
        Attempt::Wrong {
            attempts: self.attempts,
            hint: self.hint(),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hint(&self) -> HintLevel {
        HintLevel::from_attempts(self.attempts)
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }
}
