use std::cmp::Ordering;
use std::collections::HashMap;

use crate::constants::TICKS_PER_SECOND;
use crate::protocol::{BulletState, PlayerState, Snapshot};
use crate::state::{DeadPlayer, SharedState};

/// One received snapshot plus the previously rendered game it interpolates
/// from. The previous game's own predecessor is dropped on construction, so
/// at most two ticks of state are ever retained.
pub struct Game {
    pub tick: u64,
    /// Wall-clock time the snapshot was received (ms).
    pub tick_time: f64,
    pub players: HashMap<String, PlayerState>,
    pub bullets: HashMap<String, BulletState>,
    /// Player ids by ascending x, ties broken by id so the draw order is
    /// stable across frames.
    pub sorted_players: Vec<String>,
    pub prev: Option<Box<Game>>,
}

impl Game {
    pub fn new(snapshot: Snapshot, prev: Option<Game>, now: f64) -> Self {
        let mut sorted_players: Vec<String> = snapshot.players.keys().cloned().collect();
        sorted_players.sort_by(|a, b| {
            let ax = snapshot.players[a].position.value[0];
            let bx = snapshot.players[b].position.value[0];
            ax.partial_cmp(&bx)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.cmp(b))
        });

        Game {
            tick: snapshot.tick,
            tick_time: now,
            players: snapshot.players,
            bullets: snapshot.bullets,
            sorted_players,
            prev: prev.map(|mut g| {
                g.prev = None;
                Box::new(g)
            }),
        }
    }

    /// Fractional progress between this tick and the next, from wall-clock
    /// time since the snapshot arrived. Always in [0, 1].
    pub fn partial_tick(&self, now: f64) -> f64 {
        ((now - self.tick_time) / 1000.0 * TICKS_PER_SECOND).clamp(0.0, 1.0)
    }
}

pub fn receive_snapshot(state: &SharedState, snapshot: Snapshot) {
    receive_snapshot_at(state, snapshot, js_sys::Date::now());
}

/// Wraps a snapshot into the next `Game` and captures just-died players:
/// any id present in the previous snapshot but missing from this one starts
/// its death animation at `now`.
pub fn receive_snapshot_at(state: &SharedState, snapshot: Snapshot, now: f64) {
    let mut s = state.borrow_mut();
    let prev = s.game.take();
    let game = Game::new(snapshot, prev, now);

    if let Some(prev) = game.prev.as_deref() {
        for (id, player) in &prev.players {
            if !game.players.contains_key(id) {
                s.dead_players.insert(
                    id.clone(),
                    DeadPlayer {
                        position: player.position.value,
                        direction: player.direction,
                        color: player.color.map(|c| c.value),
                        death_time: now,
                    },
                );
            }
        }
    }

    s.game = Some(game);
}

/// Entry point for the external transport: one snapshot per tick as JSON.
pub fn ingest_json(state: &SharedState, text: &str) -> Result<(), serde_json::Error> {
    let snapshot: Snapshot = serde_json::from_str(text)?;
    receive_snapshot(state, snapshot);
    Ok(())
}
