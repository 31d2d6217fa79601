use std::collections::HashMap;

use serde::Deserialize;

/// Tuple envelope used by the server's serializer: `{"py/tuple": [..]}`.
/// Positions, direction vectors and colors all arrive wrapped in it.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Tagged<T> {
    #[serde(rename = "py/tuple")]
    pub value: T,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GunState {
    pub ammo_count: u32,
    pub full_ammo_count: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerState {
    pub id: String,
    pub position: Tagged<[f64; 2]>,
    /// Facing direction, one of 4 discrete values (0-3).
    #[serde(rename = "_direction")]
    pub direction: u8,
    #[serde(default)]
    pub color: Option<Tagged<[u8; 3]>>,
    pub gun: GunState,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BulletState {
    pub id: String,
    pub start_position: Tagged<[f64; 2]>,
    pub start_tick: u64,
    /// Unit vector; travel distance is derived purely from elapsed ticks.
    pub direction_coords: Tagged<[f64; 2]>,
}

/// One authoritative, immutable state of all players and bullets at a tick.
#[derive(Deserialize, Debug, Clone)]
pub struct Snapshot {
    #[serde(rename = "_tick")]
    pub tick: u64,
    #[serde(rename = "_players")]
    pub players: HashMap<String, PlayerState>,
    #[serde(rename = "_bullets")]
    pub bullets: HashMap<String, BulletState>,
}
