//! Gameplay tuning
//!
//! Every field has a default, so hosts may override any subset from JSON.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Grid ===
    /// Tile edge on screen (pixels)
    pub tile_size: f32,
    /// Edge of one sheet cell (source pixels)
    pub sprite_cell: f32,

    // === Player ===
    /// Pixels moved per update on each held axis
    pub player_speed: f32,
    /// Hitbox width, centered inside the tile
    pub player_hitbox_w: f32,
    /// Hitbox height, centered inside the tile
    pub player_hitbox_h: f32,
    /// Animation ticks per frame step
    pub player_ticks_per_frame: u32,

    // === Ghosts ===
    /// Pixels moved per update
    pub enemy_speed: f32,
    /// Hitbox inset from the tile on every side
    pub enemy_hitbox_margin: f32,
    /// Animation ticks per frame step
    pub enemy_ticks_per_frame: u32,
    /// Ghosts present when a run starts
    pub initial_enemies: usize,
    /// Shortest countdown before a ghost picks a new direction
    pub enemy_turn_min_ticks: i32,
    /// Countdown upper bound (exclusive)
    pub enemy_turn_max_ticks: i32,

    // === Scoring ===
    /// Points per collectible
    pub score_per_pickup: u32,
    /// A ghost joins whenever the score lands on a multiple of this; 0 disables
    pub enemy_spawn_interval: u32,

    // === Debug ===
    /// Start with hitbox overlays visible
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            sprite_cell: SPRITE_CELL,

            player_speed: 3.0,
            player_hitbox_w: 10.0 * PIXEL_SCALE,
            player_hitbox_h: 12.0 * PIXEL_SCALE,
            player_ticks_per_frame: 6,

            enemy_speed: 1.5,
            enemy_hitbox_margin: 3.0 * PIXEL_SCALE,
            enemy_ticks_per_frame: 10,
            initial_enemies: 2,
            enemy_turn_min_ticks: ENEMY_TURN_MIN_TICKS,
            enemy_turn_max_ticks: ENEMY_TURN_MAX_TICKS,

            score_per_pickup: SCORE_PER_PICKUP,
            enemy_spawn_interval: ENEMY_SPAWN_SCORE_STEP,

            debug: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings, logging and falling back to defaults on bad input
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(settings) => {
                    log::info!("Loaded settings overrides");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings ({}), using defaults", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Inset between tile edge and player hitbox, per axis
    pub fn player_hitbox_margin(&self) -> (f32, f32) {
        (
            (self.tile_size - self.player_hitbox_w) / 2.0,
            (self.tile_size - self.player_hitbox_h) / 2.0,
        )
    }

    /// Ghost turn countdown range, never empty
    pub fn enemy_turn_range(&self) -> Range<i32> {
        let min = self.enemy_turn_min_ticks.max(1);
        min..self.enemy_turn_max_ticks.max(min + 1)
    }

    /// Whether reaching `score` brings in another ghost
    pub fn spawns_enemy_at(&self, score: u32) -> bool {
        self.enemy_spawn_interval > 0 && score % self.enemy_spawn_interval == 0
    }
}
