use std::collections::{HashMap, HashSet};

use web_sys::CanvasRenderingContext2d;

use crate::audio;
use crate::constants::{BULLET_LEAD_TICKS, BULLET_RADIUS, BULLET_SPEED, SHOW_DEBUG_INFO};
use crate::game::Game;
use crate::protocol::BulletState;

/// Bullets never mutate client-side; their position is derived purely from
/// elapsed ticks since launch, pulled back by the visual lead offset.
pub fn bullet_position(bullet: &BulletState, tick: u64, partial_tick: f64) -> [f64; 2] {
    let elapsed = tick as f64 - bullet.start_tick as f64 + partial_tick - BULLET_LEAD_TICKS;
    let distance = elapsed * BULLET_SPEED;
    let [sx, sy] = bullet.start_position.value;
    let [dx, dy] = bullet.direction_coords.value;
    [sx + dx * distance, sy + dy * distance]
}

/// Registers every bullet id, returning how many are new this frame (one
/// firing sound each).
pub fn newly_sighted(known: &mut HashSet<String>, bullets: &HashMap<String, BulletState>) -> usize {
    bullets
        .keys()
        .filter(|id| known.insert((*id).clone()))
        .count()
}

/// Forgets ids no longer in the snapshot, re-arming the sound for reuse of
/// the id and bounding the set.
pub fn prune_known(known: &mut HashSet<String>, bullets: &HashMap<String, BulletState>) {
    known.retain(|id| bullets.contains_key(id));
}

pub fn render_bullets(
    ctx: &CanvasRenderingContext2d,
    game: &Game,
    partial_tick: f64,
    known: &mut HashSet<String>,
) {
    for _ in 0..newly_sighted(known, &game.bullets) {
        audio::play_fire_sound();
    }

    for bullet in game.bullets.values() {
        if SHOW_DEBUG_INFO {
            let ray_len = 200.0;
            let [sx, sy] = bullet.start_position.value;
            let [dx, dy] = bullet.direction_coords.value;
            ctx.begin_path();
            ctx.move_to(sx, sy);
            ctx.line_to(sx + dx * ray_len, sy + dy * ray_len);
            ctx.set_line_width(0.05);
            ctx.stroke();
        }

        let [x, y] = bullet_position(bullet, game.tick, partial_tick);
        ctx.begin_path();
        let _ = ctx.arc(x, y, BULLET_RADIUS, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style_str("orange");
        ctx.fill();
    }

    prune_known(known, &game.bullets);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Tagged;

    fn bullet(id: &str, start_tick: u64) -> BulletState {
        BulletState {
            id: id.to_string(),
            start_position: Tagged { value: [10.0, 20.0] },
            start_tick,
            direction_coords: Tagged { value: [1.0, 0.0] },
        }
    }

    #[test]
    fn position_extrapolates_from_elapsed_ticks() {
        let b = bullet("b1", 5);
        // (7 - 5 + 0.5 - 0.7) * 5 = 9 units along +x.
        let [x, y] = bullet_position(&b, 7, 0.5);
        assert!((x - 19.0).abs() < 1e-9);
        assert_eq!(y, 20.0);
    }

    #[test]
    fn fresh_bullet_starts_slightly_behind_its_muzzle() {
        let b = bullet("b1", 5);
        let [x, _] = bullet_position(&b, 5, 0.0);
        assert!((x - (10.0 - 0.7 * 5.0)).abs() < 1e-9);
    }

    #[test]
    fn sound_fires_once_per_bullet_lifetime() {
        let mut known = HashSet::new();
        let mut bullets = HashMap::new();
        bullets.insert("b1".to_string(), bullet("b1", 1));

        assert_eq!(newly_sighted(&mut known, &bullets), 1);
        // Same bullet across later frames: no further sound.
        assert_eq!(newly_sighted(&mut known, &bullets), 0);
        assert_eq!(newly_sighted(&mut known, &bullets), 0);

        bullets.insert("b2".to_string(), bullet("b2", 2));
        assert_eq!(newly_sighted(&mut known, &bullets), 1);
    }

    #[test]
    fn despawn_re_arms_the_id() {
        let mut known = HashSet::new();
        let mut bullets = HashMap::new();
        bullets.insert("b1".to_string(), bullet("b1", 1));
        newly_sighted(&mut known, &bullets);

        bullets.clear();
        prune_known(&mut known, &bullets);
        assert!(known.is_empty());

        bullets.insert("b1".to_string(), bullet("b1", 9));
        assert_eq!(newly_sighted(&mut known, &bullets), 1);
    }
}
