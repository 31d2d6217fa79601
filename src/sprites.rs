use std::cell::Cell;
use std::collections::HashMap;

use web_sys::HtmlImageElement;

use crate::assets::{shift_color, TrackedImage};
use crate::color::ColorShift;
use crate::constants::{
    death_sprite_src, walk_sprite_src, DEATH_FRAME_COUNT, WALK_DIRECTIONS, WALK_FRAME_COUNT,
};

/// One complete sprite sheet set: walking frames per direction plus the
/// death animation. A variant is usable only once every image has decoded.
pub struct SpriteVariant {
    walking: Vec<Vec<TrackedImage>>,
    death: Vec<TrackedImage>,
    ready: Cell<bool>,
}

impl SpriteVariant {
    fn is_ready(&self) -> bool {
        if self.ready.get() {
            return true;
        }
        let all_loaded = self
            .walking
            .iter()
            .flatten()
            .chain(self.death.iter())
            .all(TrackedImage::is_loaded);
        if all_loaded {
            self.ready.set(true);
        }
        all_loaded
    }
}

/// Base reference-hue sprite set plus a cache of recolored variants.
///
/// Recoloring is a full pixel scan per image, so a variant is computed at
/// most once per color and its readiness polled from the render path.
pub struct PlayerSpriteSet {
    base: SpriteVariant,
    variants: HashMap<String, SpriteVariant>,
}

impl PlayerSpriteSet {
    pub fn load() -> Self {
        let walking = (0..WALK_DIRECTIONS)
            .map(|dir| {
                (0..WALK_FRAME_COUNT)
                    .map(|frame| TrackedImage::load(&walk_sprite_src(dir, frame)))
                    .collect()
            })
            .collect();
        let death = (0..=DEATH_FRAME_COUNT)
            .map(|frame| TrackedImage::load(&death_sprite_src(frame)))
            .collect();

        PlayerSpriteSet {
            base: SpriteVariant { walking, death, ready: Cell::new(false) },
            variants: HashMap::new(),
        }
    }

    /// True once the variant for `color` is fully decoded, starting the
    /// recolor on first request. Never blocks.
    fn ensure_variant(&mut self, color: &str) -> bool {
        if !self.base.is_ready() {
            return false;
        }

        if !self.variants.contains_key(color) {
            let Some(shift) = ColorShift::toward_hex(color) else {
                return false;
            };
            let walking = self
                .base
                .walking
                .iter()
                .map(|row| row.iter().map(|img| shift_color(img.element(), &shift)).collect())
                .collect();
            let death = self
                .base
                .death
                .iter()
                .map(|img| shift_color(img.element(), &shift))
                .collect();
            self.variants.insert(
                color.to_string(),
                SpriteVariant { walking, death, ready: Cell::new(false) },
            );
        }

        self.variants[color].is_ready()
    }

    pub fn walking(&mut self, color: &str, direction: usize, frame: usize) -> Option<&HtmlImageElement> {
        if !self.ensure_variant(color) {
            return None;
        }
        let row = self.variants[color].walking.get(direction)?;
        Some(row[frame % row.len()].element())
    }

    pub fn death(&mut self, color: &str, frame: usize) -> Option<&HtmlImageElement> {
        if !self.ensure_variant(color) {
            return None;
        }
        let frames = &self.variants[color].death;
        Some(frames[frame % frames.len()].element())
    }

    /// Bound the cache to the colors still on screen.
    pub fn retain_colors(&mut self, live: impl Fn(&str) -> bool) {
        self.variants.retain(|color, _| live(color));
    }
}
