use web_sys::CanvasRenderingContext2d;

use crate::constants::{
    AMMO_BAR_FILL_LEN, AMMO_BAR_HEIGHT, AMMO_BAR_LEN, HUD_COLOR, PLAYER_SIZE,
};

/// Name text just above the sprite. Coordinates are the player's world
/// position; the context is already scaled to world units.
pub fn draw_player_name(ctx: &CanvasRenderingContext2d, name: &str, x: f64, y: f64) {
    ctx.set_font("1.5px Georgia");
    ctx.set_fill_style_str(HUD_COLOR);
    ctx.set_text_align("center");
    let _ = ctx.fill_text(name, x, y - PLAYER_SIZE - 1.3);
}

/// One short pip per remaining round, centered under the name using the
/// weapon's full capacity so the row doesn't shift as ammo drains.
pub fn draw_ammo_bar(ctx: &CanvasRenderingContext2d, x: f64, y: f64, ammo: u32, full_ammo: u32) {
    let offset = AMMO_BAR_LEN * full_ammo as f64 / 2.0;
    let bar_y = y - PLAYER_SIZE - 1.2 + 3.0 * AMMO_BAR_HEIGHT;

    ctx.set_stroke_style_str(HUD_COLOR);
    ctx.set_line_width(AMMO_BAR_HEIGHT);
    ctx.begin_path();
    for i in 0..ammo {
        let start = x + i as f64 * AMMO_BAR_LEN;
        ctx.move_to(start - offset, bar_y);
        ctx.line_to(start + AMMO_BAR_FILL_LEN - offset, bar_y);
    }
    ctx.stroke();
}
