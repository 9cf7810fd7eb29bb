//! Browser binding for the particle effects.
//!
//! `new ParticleEngine("particles-canvas", "gold")` finds the canvas, sizes it
//! to the viewport, follows window resizes and drives an [`Animator`] from
//! `requestAnimationFrame` until `stop()` is called. A page without the canvas
//! gets an inert engine instead of an exception: the effects are decoration
//! and must never break the room.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window, window};

use super::{Animator, ParticleField, Variant};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no global window")]
    NoWindow,
    #[error("no element with id `{0}`")]
    MissingCanvas(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        EngineError::Js(format!("{value:?}"))
    }
}

struct EngineState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    animator: Animator<StdRng>,
    /// Handle of the pending animation frame, if one is scheduled.
    frame_id: Option<i32>,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ResizeCallback = Closure<dyn FnMut(web_sys::Event)>;

struct Running {
    state: Rc<RefCell<EngineState>>,
    frame: FrameCallback,
    resize: ResizeCallback,
}

#[wasm_bindgen]
pub struct ParticleEngine {
    variant: Variant,
    running: Option<Running>,
}

#[wasm_bindgen]
impl ParticleEngine {
    /// Bind to the canvas `canvas_id` and start animating `variant`
    /// (defaults to gold). Never throws.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, variant: Option<String>) -> ParticleEngine {
        let variant = variant
            .as_deref()
            .map(Variant::from_tag)
            .unwrap_or_default();
        match start(canvas_id, variant) {
            Ok(running) => {
                debug!("particle engine `{}` started on #{canvas_id}", variant.tag());
                ParticleEngine {
                    variant,
                    running: Some(running),
                }
            }
            Err(err) => {
                warn!("particle engine disabled: {err}");
                ParticleEngine {
                    variant,
                    running: None,
                }
            }
        }
    }

    /// Cancel the pending frame and detach from the window. Safe to call twice.
    pub fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        let win = window();
        {
            let mut state = running.state.borrow_mut();
            state.animator.stop();
            if let (Some(id), Some(win)) = (state.frame_id.take(), win.as_ref()) {
                win.cancel_animation_frame(id).ok();
            }
        }
        if let Some(win) = win.as_ref() {
            win.remove_event_listener_with_callback(
                "resize",
                running.resize.as_ref().unchecked_ref(),
            )
            .ok();
        }
        // Drop the self-referencing frame closure so the state can be freed.
        running.frame.borrow_mut().take();
        debug!("particle engine `{}` stopped", self.variant.tag());
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> String {
        self.variant.tag().to_string()
    }

    pub fn particle_count(&self) -> usize {
        self.running
            .as_ref()
            .map(|r| r.state.borrow().animator.field().len())
            .unwrap_or(0)
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .map(|r| r.state.borrow().animator.is_active())
            .unwrap_or(false)
    }
}

impl Drop for ParticleEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

fn viewport(win: &Window) -> (f64, f64) {
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width.max(0.0), height.max(0.0))
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn start(canvas_id: &str, variant: Variant) -> Result<Running, EngineError> {
    let win = window().ok_or(EngineError::NoWindow)?;
    let doc = win.document().ok_or(EngineError::NoWindow)?;
    let canvas: HtmlCanvasElement = doc
        .get_element_by_id(canvas_id)
        .ok_or_else(|| EngineError::MissingCanvas(canvas_id.to_string()))?
        .dyn_into()
        .map_err(|_| EngineError::NotACanvas(canvas_id.to_string()))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(EngineError::NoContext)?
        .dyn_into()
        .map_err(|_| EngineError::NoContext)?;

    let (width, height) = viewport(&win);
    fit_canvas(&canvas, width, height);

    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(variant, width, height, &mut rng);
    let state = Rc::new(RefCell::new(EngineState {
        canvas,
        ctx,
        animator: Animator::new(field, rng),
        frame_id: None,
    }));

    let resize = {
        let state = state.clone();
        Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            let Some(win) = window() else {
                return;
            };
            let (width, height) = viewport(&win);
            let mut st = state.borrow_mut();
            fit_canvas(&st.canvas, width, height);
            st.animator.resize(width, height);
        }) as Box<dyn FnMut(_)>)
    };
    win.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

    let frame = start_loop(&win, state.clone());
    Ok(Running {
        state,
        frame,
        resize,
    })
}

fn request_frame(win: &Window, cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    win.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Keep animating while the animator is active; a stopped animator ends the
/// chain by not requesting another frame.
fn start_loop(win: &Window, state: Rc<RefCell<EngineState>>) -> FrameCallback {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let loop_state = state.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let mut st = loop_state.borrow_mut();
        st.frame_id = None;
        let EngineState { ctx, animator, .. } = &mut *st;
        if !animator.frame(ctx) {
            return;
        }
        if let (Some(win), Some(cb)) = (window(), f.borrow().as_ref()) {
            st.frame_id = request_frame(&win, cb);
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        state.borrow_mut().frame_id = request_frame(win, cb);
    }
    g
}
