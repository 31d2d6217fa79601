use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

use crate::constants::FIRE_SOUND_SRC;

/// Best-effort one-shot. Autoplay policies can reject playback; the
/// rejection is swallowed so a muted tab never breaks rendering.
pub fn play_fire_sound() {
    let Ok(audio) = HtmlAudioElement::new_with_src(FIRE_SOUND_SRC) else {
        return;
    };
    if let Ok(promise) = audio.play() {
        let swallow = Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>);
        let _ = promise.catch(&swallow);
        swallow.forget();
    }
}
