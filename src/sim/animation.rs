//! Sprite-sheet animation strips
//!
//! Each entity kind has a fixed catalog of [`AnimationDef`]s. A strip plays
//! whichever id is current, stepping one frame every `ticks_per_frame + 1`
//! calls to [`AnimationStrip::advance`].
//!
//! An id missing from the strip's catalog is not an error: `advance` leaves the
//! frame alone and `frame_cell` yields `None`, so the entity simply isn't drawn.

use super::state::Direction;

/// Every animation the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationId {
    IdleUp,
    IdleDown,
    IdleLeft,
    IdleRight,
    RunUp,
    RunDown,
    RunLeft,
    RunRight,
    GhostUp,
    GhostDown,
    GhostLeft,
    GhostRight,
}

impl AnimationId {
    /// Player animation for a movement state and facing
    pub fn player(moving: bool, direction: Direction) -> Self {
        match (moving, direction) {
            (false, Direction::Up) => AnimationId::IdleUp,
            (false, Direction::Down) => AnimationId::IdleDown,
            (false, Direction::Left) => AnimationId::IdleLeft,
            (false, Direction::Right) => AnimationId::IdleRight,
            (true, Direction::Up) => AnimationId::RunUp,
            (true, Direction::Down) => AnimationId::RunDown,
            (true, Direction::Left) => AnimationId::RunLeft,
            (true, Direction::Right) => AnimationId::RunRight,
        }
    }

    /// Ghost animation for a facing
    pub fn ghost(direction: Direction) -> Self {
        match direction {
            Direction::Up => AnimationId::GhostUp,
            Direction::Down => AnimationId::GhostDown,
            Direction::Left => AnimationId::GhostLeft,
            Direction::Right => AnimationId::GhostRight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationId::IdleUp => "idle_up",
            AnimationId::IdleDown => "idle_down",
            AnimationId::IdleLeft => "idle_left",
            AnimationId::IdleRight => "idle_right",
            AnimationId::RunUp => "run_up",
            AnimationId::RunDown => "run_down",
            AnimationId::RunLeft => "run_left",
            AnimationId::RunRight => "run_right",
            AnimationId::GhostUp => "ghost_up",
            AnimationId::GhostDown => "ghost_down",
            AnimationId::GhostLeft => "ghost_left",
            AnimationId::GhostRight => "ghost_right",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self,
            AnimationId::RunUp | AnimationId::RunDown | AnimationId::RunLeft | AnimationId::RunRight
        )
    }
}

/// One row of frames in a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDef {
    pub id: AnimationId,
    /// Sheet row
    pub row: u32,
    /// Number of frames in the cycle
    pub frames: u32,
    /// Column of the first frame
    pub start_col: u32,
}

impl AnimationDef {
    const fn new(id: AnimationId, row: u32, frames: u32, start_col: u32) -> Self {
        Self {
            id,
            row,
            frames,
            start_col,
        }
    }
}

/// Player catalog. Idle rows live on the idle sheet, run rows on the run sheet;
/// both sheets use the same row order (down, up, left, right).
pub static PLAYER_CATALOG: [AnimationDef; 8] = [
    AnimationDef::new(AnimationId::IdleDown, 0, 4, 0),
    AnimationDef::new(AnimationId::IdleUp, 1, 4, 0),
    AnimationDef::new(AnimationId::IdleLeft, 2, 4, 0),
    AnimationDef::new(AnimationId::IdleRight, 3, 4, 0),
    AnimationDef::new(AnimationId::RunDown, 0, 6, 0),
    AnimationDef::new(AnimationId::RunUp, 1, 6, 0),
    AnimationDef::new(AnimationId::RunLeft, 2, 6, 0),
    AnimationDef::new(AnimationId::RunRight, 3, 6, 0),
];

/// Ghost catalog: two-frame wobble per facing, all on one row
pub static GHOST_CATALOG: [AnimationDef; 4] = [
    AnimationDef::new(AnimationId::GhostDown, 0, 2, 0),
    AnimationDef::new(AnimationId::GhostUp, 0, 2, 2),
    AnimationDef::new(AnimationId::GhostLeft, 0, 2, 4),
    AnimationDef::new(AnimationId::GhostRight, 0, 2, 6),
];

/// Frame cursor over a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationStrip {
    catalog: &'static [AnimationDef],
    current: AnimationId,
    frame_index: u32,
    tick: u32,
    ticks_per_frame: u32,
}

impl AnimationStrip {
    pub fn new(catalog: &'static [AnimationDef], current: AnimationId, ticks_per_frame: u32) -> Self {
        Self {
            catalog,
            current,
            frame_index: 0,
            tick: 0,
            ticks_per_frame,
        }
    }

    pub fn current(&self) -> AnimationId {
        self.current
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Look up a definition in this strip's catalog
    pub fn lookup(&self, id: AnimationId) -> Option<&'static AnimationDef> {
        self.catalog.iter().find(|def| def.id == id)
    }

    /// Switch animation. Frame index and tick counter carry over; the index is
    /// wrapped against the new length on the next `advance`.
    pub fn set_animation(&mut self, id: AnimationId) {
        self.current = id;
    }

    /// Count one tick, stepping the frame when the threshold is exceeded
    pub fn advance(&mut self) {
        self.tick += 1;
        if self.tick > self.ticks_per_frame {
            self.tick = 0;
            if let Some(def) = self.lookup(self.current) {
                self.frame_index += 1;
                if self.frame_index >= def.frames {
                    self.frame_index = 0;
                }
            }
        }
    }

    /// Sheet cell `(column, row)` of the current frame
    pub fn frame_cell(&self) -> Option<(u32, u32)> {
        self.lookup(self.current)
            .map(|def| (def.start_col + self.frame_index, def.row))
    }
}
