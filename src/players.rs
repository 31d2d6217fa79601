use std::collections::HashMap;

use web_sys::CanvasRenderingContext2d;

use crate::color::rgb_to_hex;
use crate::constants::{
    DEFAULT_PLAYER_COLOR, NAME_DELIMITER, PLAYER_BOUNDING_BOX_SIZE, PLAYER_IMAGE_SIZE,
    SHOW_DEBUG_INFO, WALK_FRAME_COUNT, WALK_FRAME_MS,
};
use crate::game::Game;
use crate::hud;
use crate::sprites::PlayerSpriteSet;

pub fn lerp(old: [f64; 2], new: [f64; 2], t: f64) -> [f64; 2] {
    [old[0] + (new[0] - old[0]) * t, old[1] + (new[1] - old[1]) * t]
}

/// Walk-cycle frame for a player whose animation anchor is `anchor` ms.
pub fn walk_frame(now: f64, anchor: f64) -> usize {
    let raw = ((now - anchor) / WALK_FRAME_MS).round().max(0.0) as u64;
    (raw % WALK_FRAME_COUNT as u64) as usize
}

/// Substring of the id before the delimiter, shown as the player's name.
pub fn display_name(id: &str) -> &str {
    id.split(NAME_DELIMITER).next().unwrap_or(id)
}

pub fn render_players(
    ctx: &CanvasRenderingContext2d,
    game: &Game,
    partial_tick: f64,
    now: f64,
    animation_offsets: &mut HashMap<String, f64>,
    sprites: &mut PlayerSpriteSet,
) {
    let prev_players = game.prev.as_deref().map(|g| &g.players);
    let half = PLAYER_IMAGE_SIZE / 2.0;

    for id in &game.sorted_players {
        let player = &game.players[id];
        let color = player
            .color
            .map(|c| rgb_to_hex(c.value[0], c.value[1], c.value[2]))
            .unwrap_or_else(|| DEFAULT_PLAYER_COLOR.to_string());

        let mut position = player.position.value;
        if let Some(old) = prev_players.and_then(|p| p.get(id)) {
            let old_position = old.position.value;
            if position == old_position {
                // Idle: restart the walk cycle so the player holds a
                // consistent pose instead of marching in place.
                animation_offsets.insert(id.clone(), now);
            }
            position = lerp(old_position, position, partial_tick);
        }

        if SHOW_DEBUG_INFO {
            ctx.begin_path();
            let _ = ctx.arc(
                position[0],
                position[1],
                PLAYER_BOUNDING_BOX_SIZE,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.set_fill_style_str("#777");
            ctx.fill();
        }

        hud::draw_player_name(ctx, display_name(id), position[0], position[1]);

        let anchor = animation_offsets.get(id).copied().unwrap_or(0.0);
        let frame = walk_frame(now, anchor);
        if let Some(img) = sprites.walking(&color, player.direction as usize, frame) {
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                position[0] - half,
                position[1] - half,
                PLAYER_IMAGE_SIZE,
                PLAYER_IMAGE_SIZE,
            );
        }

        hud::draw_ammo_bar(
            ctx,
            position[0],
            position[1],
            player.gun.ammo_count,
            player.gun.full_ammo_count,
        );
    }

    animation_offsets.retain(|id, _| game.players.contains_key(id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_endpoints() {
        let old = [10.0, 20.0];
        let new = [14.0, 12.0];
        assert_eq!(lerp(old, new, 0.0), old);
        assert_eq!(lerp(old, new, 1.0), new);
        assert_eq!(lerp(old, new, 0.5), [12.0, 16.0]);
    }

    #[test]
    fn walk_frame_wraps_over_eight_frames() {
        assert_eq!(walk_frame(0.0, 0.0), 0);
        assert_eq!(walk_frame(50.0, 0.0), 1);
        assert_eq!(walk_frame(349.0, 0.0), 7);
        assert_eq!(walk_frame(400.0, 0.0), 0);
        // 24ms rounds down to frame 0, 26ms up to frame 1.
        assert_eq!(walk_frame(24.0, 0.0), 0);
        assert_eq!(walk_frame(26.0, 0.0), 1);
    }

    #[test]
    fn walk_frame_survives_large_clock_values() {
        // Wall-clock ms since the epoch must not overflow the frame index.
        let now = 1.7e12;
        let frame = walk_frame(now, 0.0);
        assert!(frame < WALK_FRAME_COUNT);
    }

    #[test]
    fn display_name_strips_host_suffix() {
        assert_eq!(display_name("alice@arena"), "alice");
        assert_eq!(display_name("bob"), "bob");
        assert_eq!(display_name("a@b@c"), "a");
    }
}
