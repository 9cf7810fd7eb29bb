//! Lightning flashes over the room.
//!
//! The page provides an overlay element (`.flash-overlay` by default) whose
//! `active` class plays the flash animation. The first flash comes after a
//! random delay in `[0, max)`, each later one after a random delay in
//! `[min, max)`. Like the particle engine, a page without the overlay gets an
//! inert handle.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Window, window};

use super::uniform;

pub const DEFAULT_MIN_MS: f64 = 5_000.0;
pub const DEFAULT_MAX_MS: f64 = 15_000.0;
const DEFAULT_OVERLAY: &str = ".flash-overlay";
const ACTIVE_CLASS: &str = "active";

/// Delay before the first flash, uniform in `[0, max_ms)`.
pub fn first_flash_delay<R: Rng + ?Sized>(rng: &mut R, max_ms: f64) -> f64 {
    uniform(rng, 0.0, max_ms.max(0.0))
}

/// Delay between flashes, uniform in `[min_ms, max_ms)`. A `max_ms` below
/// `min_ms` pins the delay to `min_ms`.
pub fn next_flash_delay<R: Rng + ?Sized>(rng: &mut R, min_ms: f64, max_ms: f64) -> f64 {
    let min_ms = min_ms.max(0.0);
    uniform(rng, min_ms, (max_ms - min_ms).max(0.0))
}

struct LightningState {
    overlay: HtmlElement,
    rng: StdRng,
    min_ms: f64,
    max_ms: f64,
    /// Handle of the pending timeout, if one is scheduled.
    timer_id: Option<i32>,
    active: bool,
}

type TimeoutCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Running {
    state: Rc<RefCell<LightningState>>,
    callback: TimeoutCallback,
}

#[wasm_bindgen]
pub struct Lightning {
    running: Option<Running>,
}

#[wasm_bindgen]
impl Lightning {
    /// Start flashing `selector` (defaults to `.flash-overlay`) every
    /// `min_ms..max_ms` milliseconds (defaults 5000..15000). Never throws.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: Option<String>, min_ms: Option<f64>, max_ms: Option<f64>) -> Lightning {
        let selector = selector.as_deref().unwrap_or(DEFAULT_OVERLAY);
        let min_ms = min_ms.unwrap_or(DEFAULT_MIN_MS);
        let max_ms = max_ms.unwrap_or(DEFAULT_MAX_MS);
        let running = start(selector, min_ms, max_ms);
        if running.is_none() {
            warn!("lightning disabled: no element matches `{selector}`");
        }
        Lightning { running }
    }

    /// Cancel the pending flash. Safe to call twice.
    pub fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        {
            let mut state = running.state.borrow_mut();
            state.active = false;
            if let (Some(id), Some(win)) = (state.timer_id.take(), window()) {
                win.clear_timeout_with_handle(id);
            }
        }
        running.callback.borrow_mut().take();
        debug!("lightning stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .map(|r| r.state.borrow().active)
            .unwrap_or(false)
    }
}

impl Drop for Lightning {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Restart the overlay's CSS animation.
fn flash(overlay: &HtmlElement) {
    let classes = overlay.class_list();
    classes.remove_1(ACTIVE_CLASS).ok();
    // Reading layout forces a reflow so re-adding the class replays the animation.
    let _ = overlay.offset_width();
    classes.add_1(ACTIVE_CLASS).ok();
}

fn schedule(win: &Window, cb: &Closure<dyn FnMut()>, delay_ms: f64) -> Option<i32> {
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms.round() as i32,
    )
    .ok()
}

fn start(selector: &str, min_ms: f64, max_ms: f64) -> Option<Running> {
    let win = window()?;
    let overlay: HtmlElement = win
        .document()?
        .query_selector(selector)
        .ok()??
        .dyn_into()
        .ok()?;

    let state = Rc::new(RefCell::new(LightningState {
        overlay,
        rng: StdRng::from_entropy(),
        min_ms,
        max_ms,
        timer_id: None,
        active: true,
    }));

    let f: TimeoutCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let cb_state = state.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut st = cb_state.borrow_mut();
        st.timer_id = None;
        if !st.active {
            return;
        }
        flash(&st.overlay);
        let (min_ms, max_ms) = (st.min_ms, st.max_ms);
        let delay = next_flash_delay(&mut st.rng, min_ms, max_ms);
        if let (Some(win), Some(cb)) = (window(), f.borrow().as_ref()) {
            st.timer_id = schedule(&win, cb, delay);
        }
    }) as Box<dyn FnMut()>));

    {
        let mut st = state.borrow_mut();
        let delay = first_flash_delay(&mut st.rng, max_ms);
        if let Some(cb) = g.borrow().as_ref() {
            st.timer_id = schedule(&win, cb, delay);
        }
    }
    Some(Running { state, callback: g })
}
