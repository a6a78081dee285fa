//! Logical input keys
//!
//! The simulation only asks "is this key held right now"; the host decides how
//! physical keys map onto these.

use glam::Vec2;

/// Logical keys the player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

/// Source of held-key state
pub trait InputProvider {
    fn is_held(&self, key: Key) -> bool;
}

/// Plain held-key snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub const NONE: HeldKeys = HeldKeys {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Mark a key as held or released
    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Left => self.left = held,
            Key::Right => self.right = held,
        }
    }

    /// Keys that steer from `from` toward `to`, ignoring offsets within `deadzone`
    pub fn toward(from: Vec2, to: Vec2, deadzone: f32) -> Self {
        let d = to - from;
        Self {
            up: d.y < -deadzone,
            down: d.y > deadzone,
            left: d.x < -deadzone,
            right: d.x > deadzone,
        }
    }
}

impl InputProvider for HeldKeys {
    fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Left => self.left,
            Key::Right => self.right,
        }
    }
}
