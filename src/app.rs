use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::assets::Assets;
use crate::state::{self, SharedState};
use crate::{canvas, game, game_loop};

thread_local! {
    // Ingestion seam for the external transport; set once on mount.
    static APP_STATE: RefCell<Option<SharedState>> = RefCell::new(None);
}

/// Feeds one authoritative snapshot (JSON, one per tick) into the renderer.
/// Called by the host page's transport layer. Malformed snapshots are
/// logged and dropped; rendering continues from the last good pair.
#[wasm_bindgen]
pub fn push_snapshot(text: &str) {
    APP_STATE.with(|cell| {
        let Some(state) = cell.borrow().clone() else {
            return;
        };
        if let Err(err) = game::ingest_json(&state, text) {
            web_sys::console::error_1(&format!("dropped malformed snapshot: {}", err).into());
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let game_state = state::new_shared_state();
    game_state.borrow_mut().assets = Some(Assets::load());

    APP_STATE.with(|cell| *cell.borrow_mut() = Some(game_state.clone()));

    // Setup canvas once mounted
    let state_for_mount = send_wrapper::SendWrapper::new(game_state.clone());
    Effect::new(move |_| {
        let state = (*state_for_mount).clone();
        canvas::resize();
        canvas::setup_resize_handler();
        game_loop::start_game_loop(state);
    });

    view! {
        <canvas id="gameCanvas"></canvas>
    }
}
