//! Game state and entity types
//!
//! Everything the frame loop mutates lives in [`World`].

use std::ops::Range;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::animation::{AnimationId, AnimationStrip, GHOST_CATALOG, PLAYER_CATALOG};
use super::collision::Rect;
use super::input::{InputProvider, Key};
use crate::assets::SheetId;
use crate::consts::*;
use crate::settings::Settings;

/// Facing / movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in screen space (y down)
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Uniformly random direction
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Largest top-left coordinate that keeps a tile inside the playfield
#[inline]
fn max_corner(playfield: Vec2, tile: f32) -> Vec2 {
    (playfield - Vec2::splat(tile)).max(Vec2::ZERO)
}

/// Uniformly random in-bounds tile position
pub fn random_position(rng: &mut impl Rng, playfield: Vec2, tile: f32) -> Vec2 {
    let max = max_corner(playfield, tile);
    Vec2::new(rng.random_range(0.0..=max.x), rng.random_range(0.0..=max.y))
}

/// The player's character
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub moving: bool,
    pub direction: Direction,
    /// Sheet the current animation is sampled from
    pub sheet: SheetId,
    pub anim: AnimationStrip,
    hitbox_margin: (f32, f32),
}

impl Player {
    pub fn new(pos: Vec2, settings: &Settings) -> Self {
        Self {
            pos,
            size: settings.tile_size,
            speed: settings.player_speed,
            moving: false,
            direction: Direction::Down,
            sheet: SheetId::PlayerIdle,
            anim: AnimationStrip::new(
                &PLAYER_CATALOG,
                AnimationId::IdleDown,
                settings.player_ticks_per_frame,
            ),
            hitbox_margin: settings.player_hitbox_margin(),
        }
    }

    /// Sample input, move, clamp to the playfield and animate
    pub fn update(&mut self, input: &impl InputProvider, playfield: Vec2) {
        let mut step = Vec2::ZERO;
        let mut moving = false;

        // Vertical axis first; Up wins over Down
        if input.is_held(Key::Up) {
            step.y = -self.speed;
            self.direction = Direction::Up;
            moving = true;
        } else if input.is_held(Key::Down) {
            step.y = self.speed;
            self.direction = Direction::Down;
            moving = true;
        }

        // Horizontal axis second, so it owns the facing on diagonals
        if input.is_held(Key::Left) {
            step.x = -self.speed;
            self.direction = Direction::Left;
            moving = true;
        } else if input.is_held(Key::Right) {
            step.x = self.speed;
            self.direction = Direction::Right;
            moving = true;
        }

        self.moving = moving;
        self.anim
            .set_animation(AnimationId::player(self.moving, self.direction));
        self.sheet = if self.anim.current().is_running() {
            SheetId::PlayerRun
        } else {
            SheetId::PlayerIdle
        };

        self.pos = (self.pos + step).clamp(Vec2::ZERO, max_corner(playfield, self.size));
        self.anim.advance();
    }

    /// Full tile occupied on screen
    pub fn tile(&self) -> Rect {
        Rect::tile(self.pos, self.size)
    }

    /// Centered hitbox, smaller than the tile
    pub fn hitbox(&self) -> Rect {
        self.tile().inset(self.hitbox_margin.0, self.hitbox_margin.1)
    }
}

/// A wandering ghost
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub direction: Direction,
    /// Ticks until the next random direction change
    pub turn_timer: i32,
    pub anim: AnimationStrip,
    hitbox_margin: f32,
    turn_ticks: Range<i32>,
}

impl Enemy {
    pub fn new(pos: Vec2, settings: &Settings, rng: &mut impl Rng) -> Self {
        let direction = Direction::random(rng);
        let turn_ticks = settings.enemy_turn_range();
        Self {
            pos,
            size: settings.tile_size,
            speed: settings.enemy_speed,
            direction,
            turn_timer: rng.random_range(turn_ticks.clone()),
            anim: AnimationStrip::new(
                &GHOST_CATALOG,
                AnimationId::ghost(direction),
                settings.enemy_ticks_per_frame,
            ),
            hitbox_margin: settings.enemy_hitbox_margin,
            turn_ticks,
        }
    }

    /// Wander one step; bounce inward off the playfield edges
    pub fn update(&mut self, playfield: Vec2, rng: &mut impl Rng) {
        self.turn_timer -= 1;
        if self.turn_timer <= 0 {
            self.direction = Direction::random(rng);
            self.turn_timer = rng.random_range(self.turn_ticks.clone());
        }

        self.pos += self.direction.delta() * self.speed;

        let max = max_corner(playfield, self.size);
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.direction = Direction::Right;
        } else if self.pos.x > max.x {
            self.pos.x = max.x;
            self.direction = Direction::Left;
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.direction = Direction::Down;
        } else if self.pos.y > max.y {
            self.pos.y = max.y;
            self.direction = Direction::Up;
        }

        self.anim.set_animation(AnimationId::ghost(self.direction));
        self.anim.advance();
    }

    pub fn tile(&self) -> Rect {
        Rect::tile(self.pos, self.size)
    }

    pub fn hitbox(&self) -> Rect {
        self.tile().inset(self.hitbox_margin, self.hitbox_margin)
    }
}

/// A pickup worth points; static, no animation
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: f32,
    /// Item sheet column, 0..COLLECTIBLE_KINDS
    pub kind: u8,
}

impl Collectible {
    pub fn new(pos: Vec2, size: f32, kind: u8) -> Self {
        Self {
            pos,
            size,
            kind: kind % COLLECTIBLE_KINDS,
        }
    }

    pub fn random(rng: &mut impl Rng, playfield: Vec2, size: f32) -> Self {
        let pos = random_position(rng, playfield, size);
        Self::new(pos, size, rng.random_range(0..COLLECTIBLE_KINDS))
    }

    pub fn tile(&self) -> Rect {
        Rect::tile(self.pos, self.size)
    }

    /// Inset by a quarter tile on every side
    pub fn hitbox(&self) -> Rect {
        let margin = self.size / 4.0;
        self.tile().inset(margin, margin)
    }
}

/// Notable things that happened during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A collectible was picked up; `score` is the new total
    Collected { kind: u8, score: u32 },
    /// A ghost joined; `count` is the new ghost total
    EnemySpawned { count: usize },
    /// The player was caught
    GameOver { score: u32 },
}

/// Complete mutable game state
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    /// Playfield size in pixels
    pub playfield: Vec2,
    pub player: Player,
    /// Update and draw order; only ever grows
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
    pub score: u32,
    pub game_over: bool,
    /// Hitbox overlays
    pub debug: bool,
    /// Completed update cycles
    pub frame: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl World {
    /// Fresh run: player centered, ghosts in the corners, one collectible
    pub fn new(playfield: Vec2, settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let tile = settings.tile_size;
        let max = max_corner(playfield, tile);

        let player = Player::new((max / 2.0).floor(), &settings);

        let corners = [
            Vec2::ZERO,
            Vec2::new(max.x, 0.0),
            Vec2::new(0.0, max.y),
            max,
        ];
        let enemies = (0..settings.initial_enemies)
            .map(|i| Enemy::new(corners[i % corners.len()], &settings, &mut rng))
            .collect();

        let collectibles = vec![Collectible::random(&mut rng, playfield, tile)];

        Self {
            seed,
            debug: settings.debug,
            settings,
            playfield,
            player,
            enemies,
            collectibles,
            score: 0,
            game_over: false,
            frame: 0,
            rng,
            events: Vec::new(),
        }
    }

    pub fn tile_size(&self) -> f32 {
        self.settings.tile_size
    }

    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
    }

    /// Add a ghost at `pos`
    pub fn spawn_enemy(&mut self, pos: Vec2) {
        let enemy = Enemy::new(pos, &self.settings, &mut self.rng);
        self.enemies.push(enemy);
        self.events.push(GameEvent::EnemySpawned {
            count: self.enemies.len(),
        });
    }

    /// Add a collectible of random kind at a random position
    pub fn spawn_collectible(&mut self) {
        let tile = self.settings.tile_size;
        let item = Collectible::random(&mut self.rng, self.playfield, tile);
        self.collectibles.push(item);
    }

    pub fn random_position(&mut self) -> Vec2 {
        let tile = self.settings.tile_size;
        random_position(&mut self.rng, self.playfield, tile)
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::HeldKeys;

    fn playfield() -> Vec2 {
        Vec2::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT)
    }

    #[test]
    fn test_new_world() {
        let world = World::new(playfield(), Settings::default(), 7);
        assert_eq!(world.enemies.len(), Settings::default().initial_enemies);
        assert_eq!(world.collectibles.len(), 1);
        assert_eq!(world.score, 0);
        assert!(!world.game_over);
        assert_eq!(world.player.pos, Vec2::new(360.0, 264.0));
        assert_eq!(world.enemies[0].pos, Vec2::ZERO);
        assert_eq!(world.enemies[1].pos, Vec2::new(720.0, 0.0));
    }

    #[test]
    fn test_player_moves_and_faces() {
        let settings = Settings::default();
        let mut player = Player::new(Vec2::new(100.0, 100.0), &settings);
        let keys = HeldKeys {
            right: true,
            ..HeldKeys::NONE
        };
        player.update(&keys, playfield());
        assert_eq!(player.pos, Vec2::new(100.0 + settings.player_speed, 100.0));
        assert!(player.moving);
        assert_eq!(player.direction, Direction::Right);
        assert_eq!(player.sheet, SheetId::PlayerRun);
        assert_eq!(player.anim.current(), AnimationId::RunRight);

        player.update(&HeldKeys::NONE, playfield());
        assert!(!player.moving);
        assert_eq!(player.direction, Direction::Right);
        assert_eq!(player.sheet, SheetId::PlayerIdle);
        assert_eq!(player.anim.current(), AnimationId::IdleRight);
    }

    #[test]
    fn test_player_first_listed_key_wins() {
        let settings = Settings::default();
        let mut player = Player::new(Vec2::new(100.0, 100.0), &settings);
        let keys = HeldKeys {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        player.update(&keys, playfield());
        let s = settings.player_speed;
        assert_eq!(player.pos, Vec2::new(100.0 - s, 100.0 - s));
        // Horizontal is evaluated last
        assert_eq!(player.direction, Direction::Left);

        let keys = HeldKeys {
            up: true,
            down: true,
            ..HeldKeys::NONE
        };
        player.update(&keys, playfield());
        assert_eq!(player.direction, Direction::Up);
    }

    #[test]
    fn test_player_clamped() {
        let settings = Settings::default();
        let mut player = Player::new(Vec2::new(1.0, 1.0), &settings);
        let keys = HeldKeys {
            up: true,
            left: true,
            ..HeldKeys::NONE
        };
        player.update(&keys, playfield());
        assert_eq!(player.pos, Vec2::ZERO);

        let mut player = Player::new(Vec2::new(719.0, 527.0), &settings);
        let keys = HeldKeys {
            down: true,
            right: true,
            ..HeldKeys::NONE
        };
        player.update(&keys, playfield());
        assert_eq!(player.pos, Vec2::new(720.0, 528.0));
    }

    #[test]
    fn test_player_hitbox_inset() {
        let settings = Settings::default();
        let player = Player::new(Vec2::new(48.0, 48.0), &settings);
        let hb = player.hitbox();
        assert_eq!(hb.w, settings.player_hitbox_w);
        assert_eq!(hb.h, settings.player_hitbox_h);
        assert_eq!(hb.center(), player.tile().center());
    }

    #[test]
    fn test_enemy_bounces_off_left_wall() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut enemy = Enemy::new(Vec2::ZERO, &settings, &mut rng);
        enemy.direction = Direction::Left;
        enemy.turn_timer = 50;
        enemy.update(playfield(), &mut rng);
        assert_eq!(enemy.pos.x, 0.0);
        assert_eq!(enemy.direction, Direction::Right);
        assert_eq!(enemy.anim.current(), AnimationId::GhostRight);
    }

    #[test]
    fn test_enemy_bounces_off_far_walls() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut enemy = Enemy::new(Vec2::new(720.0, 528.0), &settings, &mut rng);
        enemy.direction = Direction::Right;
        enemy.turn_timer = 50;
        enemy.update(playfield(), &mut rng);
        assert_eq!(enemy.pos.x, 720.0);
        assert_eq!(enemy.direction, Direction::Left);

        enemy.direction = Direction::Down;
        enemy.update(playfield(), &mut rng);
        assert_eq!(enemy.pos.y, 528.0);
        assert_eq!(enemy.direction, Direction::Up);
    }

    #[test]
    fn test_enemy_retargets_when_timer_expires() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut enemy = Enemy::new(Vec2::new(300.0, 300.0), &settings, &mut rng);
        enemy.turn_timer = 1;
        enemy.update(playfield(), &mut rng);
        assert!(settings.enemy_turn_range().contains(&enemy.turn_timer));
        // Still moved one step in whatever direction was picked
        let moved = (enemy.pos - Vec2::new(300.0, 300.0)).length();
        assert!((moved - settings.enemy_speed).abs() < 1e-4);
    }

    #[test]
    fn test_enemy_turn_range_from_settings() {
        let settings = Settings {
            enemy_turn_min_ticks: 5,
            enemy_turn_max_ticks: 6,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(8);
        let mut enemy = Enemy::new(Vec2::new(300.0, 300.0), &settings, &mut rng);
        assert_eq!(enemy.turn_timer, 5);
        for _ in 0..5 {
            enemy.update(playfield(), &mut rng);
        }
        assert_eq!(enemy.turn_timer, 5);
    }

    #[test]
    fn test_spawn_helpers_stay_in_bounds() {
        let mut world = World::new(playfield(), Settings::default(), 11);
        for _ in 0..50 {
            let p = world.random_position();
            assert!(p.x >= 0.0 && p.x <= 720.0);
            assert!(p.y >= 0.0 && p.y <= 528.0);
        }
        world.spawn_collectible();
        assert_eq!(world.collectibles.len(), 2);
        assert_eq!(world.collectibles[1].size, world.tile_size());
    }

    #[test]
    fn test_collectible_hitbox_quarter_inset() {
        let item = Collectible::new(Vec2::new(100.0, 100.0), 48.0, 3);
        assert_eq!(item.hitbox(), Rect::new(112.0, 112.0, 24.0, 24.0));
        assert_eq!(Collectible::new(Vec2::ZERO, 48.0, 11).kind, 3);
    }

    #[test]
    fn test_random_positions_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(4);
        for _ in 0..200 {
            let p = random_position(&mut rng, playfield(), 48.0);
            assert!(p.x >= 0.0 && p.x <= 720.0);
            assert!(p.y >= 0.0 && p.y <= 528.0);
        }
    }
}
