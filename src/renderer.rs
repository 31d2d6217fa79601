use web_sys::CanvasRenderingContext2d;

use crate::color::rgb_to_hex;
use crate::constants::{DEFAULT_PLAYER_COLOR, MAP_HEIGHT, MAP_WIDTH};
use crate::game::Game;
use crate::state::{RenderState, SharedState};
use crate::{bullets, canvas, deaths, obstacles, players};

/// Draws one frame from the current game pair. First frame after connect
/// (no previous snapshot yet) is a no-op; nothing here ever blocks on
/// loading — not-ready art skips its element until the next frame.
pub fn render(state: &SharedState) {
    let Some(ctx) = canvas::get_canvas_context("gameCanvas") else {
        return;
    };

    // Take the game out so entity passes can borrow the tables mutably.
    // Rendering is invoked serially; nothing observes the gap.
    let game = state.borrow_mut().game.take();
    if let Some(game) = &game {
        if game.prev.is_some() {
            draw_frame(&ctx, game, state, js_sys::Date::now());
        }
    }
    state.borrow_mut().game = game;
}

fn draw_frame(ctx: &CanvasRenderingContext2d, game: &Game, state: &SharedState, now: f64) {
    let Some(canvas) = ctx.canvas() else { return };
    let screen_w = canvas.width() as f64;
    let screen_h = canvas.height() as f64;

    let mut s = state.borrow_mut();
    let s: &mut RenderState = &mut s;
    let Some(assets) = s.assets.as_mut() else {
        return;
    };

    let partial_tick = game.partial_tick(now);

    ctx.clear_rect(0.0, 0.0, screen_w, screen_h);
    ctx.save();
    let _ = ctx.scale(screen_w / MAP_WIDTH, screen_h / MAP_HEIGHT);

    if assets.background.is_loaded() {
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            assets.background.element(),
            0.0,
            0.0,
            MAP_WIDTH,
            MAP_HEIGHT,
        );
    }

    // Back to front: corpses under live players, bullets above both, the
    // obstacle mask over everything.
    deaths::render_deaths(ctx, &mut s.dead_players, &mut assets.sprites, now);
    players::render_players(
        ctx,
        game,
        partial_tick,
        now,
        &mut s.animation_offsets,
        &mut assets.sprites,
    );
    bullets::render_bullets(ctx, game, partial_tick, &mut s.known_bullets);
    obstacles::render_obstacles(ctx, &assets.obstacle_mask);

    ctx.restore();

    // Keep the variant cache bounded to colors still on screen.
    let dead_players = &s.dead_players;
    assets.sprites.retain_colors(|color| {
        game.players.values().any(|p| player_color(p) == color)
            || dead_players.values().any(|d| dead_color(d) == color)
    });
}

fn player_color(player: &crate::protocol::PlayerState) -> String {
    player
        .color
        .map(|c| rgb_to_hex(c.value[0], c.value[1], c.value[2]))
        .unwrap_or_else(|| DEFAULT_PLAYER_COLOR.to_string())
}

fn dead_color(dead: &crate::state::DeadPlayer) -> String {
    dead.color
        .map(|[r, g, b]| rgb_to_hex(r, g, b))
        .unwrap_or_else(|| DEFAULT_PLAYER_COLOR.to_string())
}
