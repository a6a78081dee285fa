//! Ghost Dash - A tile-grid arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, animation strips, collisions, world update)
//! - `renderer`: Abstract 2D drawing surface and the per-frame scene
//! - `assets`: Declared sprite sheets and the startup load gate
//! - `game`: Frame driver tying input, simulation, score readout and drawing
//! - `platform`: Browser/native host glue
//! - `settings`: Data-driven gameplay tuning

pub mod assets;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Edge length of one sprite cell in every sheet (source pixels)
    pub const SPRITE_CELL: f32 = 16.0;
    /// Upscale factor from sprite pixels to screen pixels
    pub const PIXEL_SCALE: f32 = 3.0;
    /// Default tile edge on screen
    pub const TILE_SIZE: f32 = SPRITE_CELL * PIXEL_SCALE;

    /// Score awarded per collectible
    pub const SCORE_PER_PICKUP: u32 = 10;
    /// A new ghost joins every time the score hits a multiple of this
    pub const ENEMY_SPAWN_SCORE_STEP: u32 = 50;
    /// Number of distinct collectible frames in the item sheet
    pub const COLLECTIBLE_KINDS: u8 = 8;

    /// Ghost direction-change countdown range (ticks, half-open)
    pub const ENEMY_TURN_MIN_TICKS: i32 = 30;
    pub const ENEMY_TURN_MAX_TICKS: i32 = 90;

    /// Default playfield when the host cannot report one (16 x 12 tiles)
    pub const DEFAULT_PLAYFIELD_WIDTH: f32 = 768.0;
    pub const DEFAULT_PLAYFIELD_HEIGHT: f32 = 576.0;
}
