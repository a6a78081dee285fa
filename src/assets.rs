//! Sprite sheets and the startup load gate
//!
//! The frame loop starts only once every declared sheet has answered, whether
//! it loaded or failed. A failed sheet just draws nothing.

use std::fmt;

/// Every sprite sheet the game draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetId {
    PlayerIdle,
    PlayerRun,
    Ghost,
    Items,
}

impl SheetId {
    pub const ALL: [SheetId; 4] = [
        SheetId::PlayerIdle,
        SheetId::PlayerRun,
        SheetId::Ghost,
        SheetId::Items,
    ];

    /// Path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            SheetId::PlayerIdle => "assets/player_idle.png",
            SheetId::PlayerRun => "assets/player_run.png",
            SheetId::Ghost => "assets/ghost.png",
            SheetId::Items => "assets/items.png",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SheetId::PlayerIdle => 0,
            SheetId::PlayerRun => 1,
            SheetId::Ghost => 2,
            SheetId::Items => 3,
        }
    }
}

/// A sheet the image provider could not deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetError {
    pub sheet: SheetId,
    pub reason: String,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {}: {}", self.sheet.path(), self.reason)
    }
}

impl std::error::Error for AssetError {}

/// Counts image provider responses until every declared sheet has reported
#[derive(Debug, Clone, Default)]
pub struct AssetGate {
    expected: usize,
    loaded: Vec<SheetId>,
    failed: Vec<AssetError>,
}

impl AssetGate {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            loaded: Vec::with_capacity(expected),
            failed: Vec::new(),
        }
    }

    /// Gate over every sheet in [`SheetId::ALL`]
    pub fn for_all_sheets() -> Self {
        Self::new(SheetId::ALL.len())
    }

    /// Record one provider response. Failures are logged and still count.
    pub fn record(&mut self, sheet: SheetId, result: Result<(), AssetError>) {
        match result {
            Ok(()) => {
                log::debug!("Loaded {}", sheet.path());
                self.loaded.push(sheet);
            }
            Err(e) => {
                log::warn!("{}", e);
                self.failed.push(e);
            }
        }
        if self.is_ready() {
            log::info!(
                "Assets ready: {} loaded, {} failed",
                self.loaded.len(),
                self.failed.len()
            );
        }
    }

    pub fn responses(&self) -> usize {
        self.loaded.len() + self.failed.len()
    }

    pub fn is_ready(&self) -> bool {
        self.responses() >= self.expected
    }

    pub fn failures(&self) -> &[AssetError] {
        &self.failed
    }
}
