use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::assets::Assets;
use crate::game::Game;

/// Last known state of a player that vanished from a snapshot, kept until
/// its death animation and fade-out have run.
#[derive(Debug, Clone)]
pub struct DeadPlayer {
    pub position: [f64; 2],
    pub direction: u8,
    pub color: Option<[u8; 3]>,
    /// Wall-clock time the player was first observed missing (ms).
    pub death_time: f64,
}

/// Session-lifetime rendering context: the current game pair plus the
/// per-entity animation tables, pruned each frame.
pub struct RenderState {
    pub game: Option<Game>,

    /// Per-player walk-cycle anchor; reset to "now" while a player idles.
    pub animation_offsets: HashMap<String, f64>,
    pub dead_players: HashMap<String, DeadPlayer>,
    /// Bullet ids whose firing sound already played.
    pub known_bullets: HashSet<String>,

    /// None until the session has started loading art; render skips frames
    /// until then.
    pub assets: Option<Assets>,
}

impl RenderState {
    pub fn new() -> Self {
        RenderState {
            game: None,
            animation_offsets: HashMap::new(),
            dead_players: HashMap::new(),
            known_bullets: HashSet::new(),
            assets: None,
        }
    }
}

pub type SharedState = Rc<RefCell<RenderState>>;

pub fn new_shared_state() -> SharedState {
    Rc::new(RefCell::new(RenderState::new()))
}
