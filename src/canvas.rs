use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

pub fn get_canvas_context(id: &str) -> Option<web_sys::CanvasRenderingContext2d> {
    let document = web_sys::window()?.document()?;
    let canvas = document.get_element_by_id(id)?;
    let canvas: HtmlCanvasElement = canvas.unchecked_into();
    canvas
        .get_context("2d")
        .ok()?
        .map(|c| c.unchecked_into())
}

/// Sizes the canvas raster to the window; the renderer scales world
/// coordinates to whatever the raster size is each frame.
pub fn resize() {
    let window = web_sys::window().unwrap();
    let w = window.inner_width().unwrap().as_f64().unwrap();
    let h = window.inner_height().unwrap().as_f64().unwrap();

    let document = window.document().unwrap();
    if let Some(canvas) = document.get_element_by_id("gameCanvas") {
        let canvas: HtmlCanvasElement = canvas.unchecked_into();
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
}

pub fn setup_resize_handler() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        resize();
    }) as Box<dyn FnMut(web_sys::Event)>);

    let window = web_sys::window().unwrap();
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
