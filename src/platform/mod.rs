//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Score readout (DOM element on web, log line natively)
//! - Keyboard mapping and one-shot host actions
//! - Sprite sheet loading (web only)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::sim::Key;

/// External score display, updated on every pickup
pub trait ScoreReadout {
    fn show_score(&mut self, score: u32);
}

/// Score readout that writes to the log
#[derive(Debug, Default)]
pub struct LogScoreReadout {
    pub last: Option<u32>,
}

impl ScoreReadout for LogScoreReadout {
    fn show_score(&mut self, score: u32) {
        log::info!("Score: {}", score);
        self.last = Some(score);
    }
}

/// One-shot key actions handled outside the held-key state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Flip hitbox overlays
    ToggleDebug,
    /// Start a new run (only honored after game over)
    Restart,
}

/// Map a `KeyboardEvent.key` value to a held movement key
pub fn movement_key(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Key::Up),
        "ArrowDown" | "s" | "S" => Some(Key::Down),
        "ArrowLeft" | "a" | "A" => Some(Key::Left),
        "ArrowRight" | "d" | "D" => Some(Key::Right),
        _ => None,
    }
}

/// Map a `KeyboardEvent.key` value to a one-shot action
pub fn host_action(key: &str) -> Option<HostAction> {
    match key {
        "F3" | "`" => Some(HostAction::ToggleDebug),
        "r" | "R" => Some(HostAction::Restart),
        _ => None,
    }
}
