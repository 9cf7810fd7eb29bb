// Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use escape_room::{Lightning, ParticleEngine};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_id(id);
    doc.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_gives_inert_engine() {
    let engine = ParticleEngine::new("no-such-canvas", Some("confetti".into()));
    assert_eq!(engine.particle_count(), 0);
    assert!(!engine.is_running());
}

#[wasm_bindgen_test]
fn engine_sizes_canvas_to_viewport() {
    let canvas = add_canvas("pe-size");
    let mut engine = ParticleEngine::new("pe-size", Some("matrix".into()));
    let win = web_sys::window().unwrap();
    let width = win.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert_eq!(engine.particle_count(), 60);
    assert_eq!(engine.variant(), "matrix");
    engine.stop();
    assert!(!engine.is_running());
    engine.stop();
}

#[wasm_bindgen_test]
fn default_variant_is_gold() {
    add_canvas("pe-default");
    let engine = ParticleEngine::new("pe-default", None);
    assert_eq!(engine.variant(), "gold");
    assert_eq!(engine.particle_count(), 80);
}

#[wasm_bindgen_test]
fn lightning_without_overlay_is_inert() {
    let mut lightning = Lightning::new(Some(".no-such-overlay".into()), None, None);
    assert!(!lightning.is_running());
    lightning.stop();
}

#[wasm_bindgen_test]
fn lightning_runs_until_stopped() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let overlay = doc.create_element("div").unwrap();
    overlay.set_class_name("flash-overlay");
    doc.body().unwrap().append_child(&overlay).unwrap();

    let mut lightning = Lightning::new(None, Some(5_000.0), Some(15_000.0));
    assert!(lightning.is_running());
    lightning.stop();
    assert!(!lightning.is_running());
    lightning.stop();
}
