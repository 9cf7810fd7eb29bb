//! Victory screen numbers and the share message.

use super::config::GameConfig;
use super::timer::format_duration;

pub const BASE_SCORE: u32 = 1000;
pub const ERROR_PENALTY: u32 = 50;
/// One point is lost per this many seconds played.
pub const SECS_PER_POINT: u32 = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stats {
    pub total_time: u32,
    pub formatted_time: String,
    pub errors: u32,
    pub score: u32,
}

/// `1000 - 50 * errors - total_secs / 6`, floored at zero.
pub fn score(total_secs: u32, errors: u32) -> u32 {
    BASE_SCORE
        .saturating_sub(errors.saturating_mul(ERROR_PENALTY))
        .saturating_sub(total_secs / SECS_PER_POINT)
}

impl Stats {
    pub fn compute(total_secs: u32, errors: u32) -> Self {
        Self {
            total_time: total_secs,
            formatted_time: format_duration(total_secs),
            errors,
            score: score(total_secs, errors),
        }
    }

    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Share text for the finished game, one line per stat. URL encoding is left
/// to the page.
pub fn share_message(config: &GameConfig, stats: &Stats) -> String {
    format!(
        "{}\n⏱️ זמן: {}\n🏆 ניקוד: {}\n❌ שגיאות: {}\n\n{}",
        config.share_headline, stats.formatted_time, stats.score, stats.errors, config.share_call
    )
}
