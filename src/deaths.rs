use std::collections::HashMap;

use web_sys::CanvasRenderingContext2d;

use crate::color::rgb_to_hex;
use crate::constants::{
    DEATH_FADE_FRAME_COUNT, DEATH_FRAME_COUNT, DEATH_FRAME_MS, DEFAULT_PLAYER_COLOR,
    PLAYER_IMAGE_SIZE,
};
use crate::sprites::PlayerSpriteSet;
use crate::state::DeadPlayer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathPose {
    pub frame: usize,
    pub alpha: f64,
}

/// Animation frame and opacity for a corpse `elapsed` ms after death, or
/// `None` once the fade window has fully run and the record can be dropped.
///
/// The animation holds on its last frame while a 10-frame fade runs; the
/// fade denominator spans one extra frame, matching the original timing.
pub fn death_pose(elapsed: f64) -> Option<DeathPose> {
    let index = (elapsed / DEATH_FRAME_MS).round();
    if index > (DEATH_FRAME_COUNT + DEATH_FADE_FRAME_COUNT) as f64 {
        return None;
    }

    let mut alpha = 1.0;
    if index > DEATH_FRAME_COUNT as f64 {
        let fade_elapsed = elapsed - DEATH_FRAME_COUNT as f64 * DEATH_FRAME_MS;
        let fade_out_time = (DEATH_FADE_FRAME_COUNT + 1) as f64 * DEATH_FRAME_MS;
        alpha = 1.0 - fade_elapsed / fade_out_time;
    }

    Some(DeathPose {
        frame: (index as usize).min(DEATH_FRAME_COUNT),
        alpha,
    })
}

/// Drops records whose animation-plus-fade window has elapsed.
pub fn prune_expired(dead_players: &mut HashMap<String, DeadPlayer>, now: f64) {
    dead_players.retain(|_, d| death_pose(now - d.death_time).is_some());
}

pub fn render_deaths(
    ctx: &CanvasRenderingContext2d,
    dead_players: &mut HashMap<String, DeadPlayer>,
    sprites: &mut PlayerSpriteSet,
    now: f64,
) {
    prune_expired(dead_players, now);

    let half = PLAYER_IMAGE_SIZE / 2.0;
    for dead in dead_players.values() {
        let Some(pose) = death_pose(now - dead.death_time) else {
            continue;
        };
        let color = dead
            .color
            .map(|[r, g, b]| rgb_to_hex(r, g, b))
            .unwrap_or_else(|| DEFAULT_PLAYER_COLOR.to_string());

        if let Some(img) = sprites.death(&color, pose.frame) {
            if pose.alpha < 1.0 {
                ctx.set_global_alpha(pose.alpha);
            }
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                dead.position[0] - half,
                dead.position[1] - half,
                PLAYER_IMAGE_SIZE,
                PLAYER_IMAGE_SIZE,
            );
            ctx.set_global_alpha(1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_advances_one_frame_per_100ms() {
        assert_eq!(death_pose(0.0), Some(DeathPose { frame: 0, alpha: 1.0 }));
        assert_eq!(death_pose(1000.0), Some(DeathPose { frame: 10, alpha: 1.0 }));
        assert_eq!(death_pose(2100.0), Some(DeathPose { frame: 21, alpha: 1.0 }));
    }

    #[test]
    fn last_frame_holds_while_fading() {
        let pose = death_pose(2500.0).unwrap();
        assert_eq!(pose.frame, 21);
        assert!(pose.alpha < 1.0);
        let expected = 1.0 - 400.0 / 1100.0;
        assert!((pose.alpha - expected).abs() < 1e-9);
    }

    #[test]
    fn pose_expires_after_full_window() {
        // (21 + 10) frames at 100ms each.
        assert!(death_pose(3100.0).is_some());
        assert!(death_pose(3200.0).is_none());
    }

    #[test]
    fn prune_drops_only_expired_records() {
        let mut dead = HashMap::new();
        let record = |death_time| DeadPlayer {
            position: [0.0, 0.0],
            direction: 3,
            color: None,
            death_time,
        };
        dead.insert("old".to_string(), record(0.0));
        dead.insert("fresh".to_string(), record(3000.0));

        prune_expired(&mut dead, 3200.0);
        assert!(!dead.contains_key("old"));
        assert!(dead.contains_key("fresh"));
    }
}
