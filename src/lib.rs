//! Escape Room core crate.
//!
//! Two escape room games (the Bible rooms and the Exodus rooms) share this
//! crate: countdown timer, hashed password gates with hints, the Atbash
//! cipher used in the puzzles, victory stats, and the canvas particle effects
//! behind every room. Storage, navigation and DOM updates stay in the pages;
//! everything here takes and returns plain values.

use wasm_bindgen::prelude::*;

pub mod game;
mod logging;
pub mod particles;

pub use particles::{Lightning, Particle, ParticleEngine, ParticleField, Variant};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// -----------------------------------------------------------------------------
// Password gate
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn sha256_hex(text: &str) -> String {
    game::sha256_hex(text)
}

/// Stateless check of one answer against a room's digest: `true`/`false`,
/// or `undefined` for blank input, which the pages ignore.
#[wasm_bindgen]
pub fn check_password(
    game_name: &str,
    room: &str,
    input: &str,
) -> Result<Option<bool>, JsValue> {
    let config = game::game(game_name).map_err(js_err)?;
    game::check_answer(config, room, input).map_err(js_err)
}

/// 0 = no hint, 1 = weak hint, 2 = strong hint.
#[wasm_bindgen]
pub fn hint_level(attempts: u32) -> u8 {
    game::HintLevel::from_attempts(attempts) as u8
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Ignored = 0,
    Solved = 1,
    Wrong = 2,
}

/// One room's gate, kept alive by the page for the lifetime of the room.
#[wasm_bindgen]
pub struct RoomGate {
    inner: game::PasswordGate,
    next_room: Option<usize>,
}

#[wasm_bindgen]
impl RoomGate {
    #[wasm_bindgen(constructor)]
    pub fn new(game_name: &str, room: &str, next_page: &str) -> Result<RoomGate, JsValue> {
        let config = game::game(game_name).map_err(js_err)?;
        let inner = game::PasswordGate::new(config, room, next_page).map_err(js_err)?;
        Ok(RoomGate {
            inner,
            next_room: None,
        })
    }

    pub fn submit(&mut self, input: &str) -> GateOutcome {
        match self.inner.submit(input) {
            game::Attempt::Ignored => GateOutcome::Ignored,
            game::Attempt::Solved { next_room } => {
                log::info!("room solved, progress -> {next_room}");
                self.next_room = Some(next_room);
                GateOutcome::Solved
            }
            game::Attempt::Wrong { attempts, .. } => {
                log::debug!("wrong answer #{attempts}");
                GateOutcome::Wrong
            }
        }
    }

    pub fn attempts(&self) -> u32 {
        self.inner.attempts()
    }

    pub fn hint_level(&self) -> u8 {
        self.inner.hint() as u8
    }

    /// Progress index to store after a solve.
    pub fn next_room(&self) -> Option<u32> {
        self.next_room.map(|r| r as u32)
    }
}

// -----------------------------------------------------------------------------
// Timer & stats
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn remaining_seconds(game_name: &str, start_ms: f64, now_ms: f64) -> Result<u32, JsValue> {
    let config = game::game(game_name).map_err(js_err)?;
    Ok(game::timer::remaining_secs(config, start_ms, now_ms))
}

#[wasm_bindgen]
pub fn countdown_display(remaining: u32) -> String {
    game::countdown_display(remaining)
}

#[wasm_bindgen]
pub fn is_warning(remaining: u32) -> bool {
    game::timer::is_warning(remaining)
}

#[wasm_bindgen]
pub fn format_duration(secs: u32) -> String {
    game::format_duration(secs)
}

#[wasm_bindgen]
pub fn score(total_secs: u32, errors: u32) -> u32 {
    game::stats::score(total_secs, errors)
}

#[wasm_bindgen]
pub fn share_message(game_name: &str, total_secs: u32, errors: u32) -> Result<String, JsValue> {
    let config = game::game(game_name).map_err(js_err)?;
    Ok(game::share_message(
        config,
        &game::Stats::compute(total_secs, errors),
    ))
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn stats_json(total_secs: u32, errors: u32) -> Result<String, JsValue> {
    game::Stats::compute(total_secs, errors)
        .to_json()
        .map_err(js_err)
}

#[wasm_bindgen]
pub fn atbash(text: &str) -> String {
    game::atbash(text)
}
