use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, ImageData};

use crate::color::ColorShift;
use crate::constants::{BACKGROUND_SRC, OBSTACLE_MASK_SRC};
use crate::sprites::PlayerSpriteSet;

/// An image plus a readiness flag flipped by its decode callback.
///
/// The render path polls `is_loaded` instead of awaiting; a not-yet-ready
/// image just means "skip this element for this frame".
pub struct TrackedImage {
    el: HtmlImageElement,
    loaded: Rc<Cell<bool>>,
}

impl TrackedImage {
    pub fn load(src: &str) -> Self {
        let el = HtmlImageElement::new().unwrap();
        let loaded = Rc::new(Cell::new(false));

        let flag = loaded.clone();
        let onload = Closure::wrap(Box::new(move || flag.set(true)) as Box<dyn FnMut()>);
        el.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        el.set_src(src);
        Self { el, loaded }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    pub fn element(&self) -> &HtmlImageElement {
        &self.el
    }
}

/// Recolors a loaded reference-hue image into a new, asynchronously decoding
/// image. Full pixel scan; callers memoize the result per target color.
pub fn shift_color(img: &HtmlImageElement, shift: &ColorShift) -> TrackedImage {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().unchecked_into();
    let w = img.natural_width();
    let h = img.natural_height();
    canvas.set_width(w);
    canvas.set_height(h);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d").unwrap().unwrap().unchecked_into();
    let _ = ctx.draw_image_with_html_image_element(img, 0.0, 0.0);

    let image_data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .unwrap();
    let mut data = image_data.data();
    crate::color::remap_pixels(data.as_mut_slice(), shift);

    let remapped =
        ImageData::new_with_u8_clamped_array_and_sh(Clamped(data.as_slice()), w, h).unwrap();
    let _ = ctx.put_image_data(&remapped, 0.0, 0.0);

    TrackedImage::load(&canvas.to_data_url().unwrap())
}

/// Static art plus the per-color sprite cache, loaded once per session.
pub struct Assets {
    pub background: TrackedImage,
    pub obstacle_mask: TrackedImage,
    pub sprites: PlayerSpriteSet,
}

impl Assets {
    pub fn load() -> Self {
        Assets {
            background: TrackedImage::load(BACKGROUND_SRC),
            obstacle_mask: TrackedImage::load(OBSTACLE_MASK_SRC),
            sprites: PlayerSpriteSet::load(),
        }
    }
}
