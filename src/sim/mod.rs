//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Stable iteration order (insertion order for ghosts, reverse for pickups)
//! - No rendering or platform dependencies

pub mod animation;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use animation::{AnimationDef, AnimationId, AnimationStrip, GHOST_CATALOG, PLAYER_CATALOG};
pub use collision::{Rect, rect_intersect};
pub use input::{HeldKeys, InputProvider, Key};
pub use state::{Collectible, Direction, Enemy, GameEvent, Player, World};
pub use tick::tick;
