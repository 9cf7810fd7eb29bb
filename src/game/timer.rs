//! Countdown arithmetic. Timestamps are JS `Date.now()` milliseconds supplied
//! by the page, which also owns where the start time is stored.

use super::config::GameConfig;

/// Below this many seconds the display switches to its warning style.
pub const WARNING_SECS: u32 = 5 * 60;

/// Whole seconds between `start_ms` and `now_ms`, never negative.
pub fn elapsed_secs(start_ms: f64, now_ms: f64) -> u32 {
    let secs = ((now_ms - start_ms) / 1000.0).floor();
    if secs.is_finite() && secs > 0.0 {
        secs.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

pub fn remaining_secs(config: &GameConfig, start_ms: f64, now_ms: f64) -> u32 {
    config.total_secs.saturating_sub(elapsed_secs(start_ms, now_ms))
}

/// `MM:SS`, both fields zero padded.
pub fn countdown_display(remaining: u32) -> String {
    format!("{:02}:{:02}", remaining / 60, remaining % 60)
}

/// `M:SS` as shown on the victory screen.
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn is_warning(remaining: u32) -> bool {
    remaining < WARNING_SECS
}

/// Snapshot of the countdown for one display refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimerTick {
    pub remaining: u32,
    pub display: String,
    pub warning: bool,
    pub time_up: bool,
}

/// A running countdown for one game session.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    config: &'static GameConfig,
    start_ms: f64,
}

impl Countdown {
    pub fn new(config: &'static GameConfig, start_ms: f64) -> Self {
        Self { config, start_ms }
    }

    pub fn tick(&self, now_ms: f64) -> TimerTick {
        let remaining = remaining_secs(self.config, self.start_ms, now_ms);
        if remaining == 0 {
            return TimerTick {
                remaining,
                display: countdown_display(0),
                warning: true,
                time_up: true,
            };
        }
        TimerTick {
            remaining,
            display: countdown_display(remaining),
            warning: is_warning(remaining),
            time_up: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::BIBLE;

    #[test]
    fn test_elapsed_floors_and_clamps() {
        assert_eq!(elapsed_secs(1_000.0, 1_999.0), 0);
        assert_eq!(elapsed_secs(1_000.0, 62_500.0), 61);
        assert_eq!(elapsed_secs(5_000.0, 1_000.0), 0);
        assert_eq!(elapsed_secs(0.0, f64::NAN), 0);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(countdown_display(1800), "30:00");
        assert_eq!(countdown_display(65), "01:05");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(3725), "62:05");
    }

    #[test]
    fn test_countdown_phases() {
        let countdown = Countdown::new(&BIBLE, 0.0);
        let fresh = countdown.tick(0.0);
        assert_eq!(fresh.display, "30:00");
        assert!(!fresh.warning && !fresh.time_up);

        let late = countdown.tick(1_501_000.0);
        assert_eq!(late.remaining, 299);
        assert!(late.warning);
        assert!(!late.time_up);

        let over = countdown.tick(2_000_000.0);
        assert_eq!(over.remaining, 0);
        assert_eq!(over.display, "00:00");
        assert!(over.time_up);
    }
}
