// Game constants (must match server)
pub const TICKS_PER_SECOND: f64 = 15.0;
pub const PLAYER_SIZE: f64 = 3.0;
pub const PLAYER_BOUNDING_BOX_SIZE: f64 = 2.1;
pub const BULLET_SPEED: f64 = 5.0;
pub const MAP_WIDTH: f64 = 160.0;
pub const MAP_HEIGHT: f64 = 90.0;

// Rendering
pub const BULLET_RADIUS: f64 = 0.15;
// Bullets are drawn 0.7 ticks behind their extrapolated position to hide
// the perceived muzzle-to-travel lag.
pub const BULLET_LEAD_TICKS: f64 = 0.7;
// Player sprite is drawn centered in a square of this size (world units).
pub const PLAYER_IMAGE_SIZE: f64 = PLAYER_SIZE * 4.0 + 4.0;

pub const SHOW_DEBUG_INFO: bool = false;

// Walk cycle: 4 directions x 8 frames, one frame per 50ms of movement.
pub const WALK_DIRECTIONS: usize = 4;
pub const WALK_FRAME_COUNT: usize = 8;
pub const WALK_FRAME_MS: f64 = 50.0;

// Death animation: frames 0..=21 at one per 100ms, then a 10-frame fade-out.
pub const DEATH_FRAME_COUNT: usize = 21;
pub const DEATH_FADE_FRAME_COUNT: usize = 10;
pub const DEATH_FRAME_MS: f64 = 100.0;

// HUD
pub const AMMO_BAR_LEN: f64 = 1.0;
pub const AMMO_BAR_FILL_LEN: f64 = 0.7;
pub const AMMO_BAR_HEIGHT: f64 = 0.2;
pub const HUD_COLOR: &str = "lightblue";

// Player ids may carry a display name before this delimiter.
pub const NAME_DELIMITER: char = '@';

// Used when a snapshot carries no color for a player.
pub const DEFAULT_PLAYER_COLOR: &str = "#fcba03";

// Assets
pub const BACKGROUND_SRC: &str = "assets/map.png";
pub const OBSTACLE_MASK_SRC: &str = "assets/map_mask.png";
pub const FIRE_SOUND_SRC: &str = "assets/audio/shot.mp3";

pub fn walk_sprite_src(direction: usize, frame: usize) -> String {
    format!("assets/sprites/walk_d{}_{:02}.png", direction, frame)
}

pub fn death_sprite_src(frame: usize) -> String {
    format!("assets/sprites/death_{:02}.png", frame)
}

// Static obstacle circles (cx, cy, radius). Debug visualization only;
// collision is server-authoritative.
pub const OBSTACLES: [[f64; 3]; 11] = [
    [120.5, 12.3, 3.5],
    [91.0, 40.0, 7.0],
    [83.5, 41.5, 4.0],
    [89.0, 76.0, 4.5],
    [135.0, 59.0, 4.5],
    [40.0, 53.0, 3.7],
    [36.0, 55.5, 3.7],
    [31.5, 59.0, 3.7],
    [21.0, 41.0, 4.0],
    [15.0, 15.0, 4.5],
    [57.0, 22.0, 13.0],
];
