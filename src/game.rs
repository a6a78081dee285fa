//! Frame driver
//!
//! One [`Game::frame`] call per display refresh: update the world, forward
//! events to the host, draw. Each call runs to completion synchronously.

use glam::Vec2;

use crate::platform::{HostAction, ScoreReadout};
use crate::renderer::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, InputProvider, World, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
}

impl Game {
    pub fn new(playfield: Vec2, settings: Settings, seed: u64) -> Self {
        log::info!(
            "New run: {}x{} playfield, seed {}",
            playfield.x,
            playfield.y,
            seed
        );
        Self {
            world: World::new(playfield, settings, seed),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn is_over(&self) -> bool {
        self.world.game_over
    }

    pub fn toggle_debug(&mut self) {
        self.world.toggle_debug();
        log::info!("Debug overlays: {}", self.world.debug);
    }

    /// Start over with a new seed, keeping settings and the debug flag
    pub fn restart(&mut self, seed: u64) {
        let debug = self.world.debug;
        let settings = self.world.settings.clone();
        *self = Self::new(self.world.playfield, settings, seed);
        self.world.debug = debug;
    }

    /// Apply a one-shot key action; restart is ignored mid-run
    pub fn handle_action(&mut self, action: HostAction, seed: u64) {
        match action {
            HostAction::ToggleDebug => self.toggle_debug(),
            HostAction::Restart if self.is_over() => self.restart(seed),
            HostAction::Restart => {}
        }
    }

    /// Run the simulation step and report what happened
    pub fn update(&mut self, input: &impl InputProvider, readout: &mut impl ScoreReadout) {
        tick(&mut self.world, input);

        for event in self.world.drain_events() {
            match event {
                GameEvent::Collected { score, .. } => readout.show_score(score),
                GameEvent::EnemySpawned { count } => {
                    log::info!("A ghost appears ({} total)", count)
                }
                GameEvent::GameOver { score } => {
                    log::info!("Game over at frame {} with score {}", self.world.frame, score)
                }
            }
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        draw_frame(surface, Some(&self.world));
    }

    /// Update then draw
    pub fn frame(
        &mut self,
        input: &impl InputProvider,
        surface: &mut impl Surface,
        readout: &mut impl ScoreReadout,
    ) {
        self.update(input, readout);
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::LogScoreReadout;
    use crate::renderer::RecordingSurface;
    use crate::sim::{Collectible, HeldKeys};

    fn size() -> Vec2 {
        Vec2::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT)
    }

    fn game() -> Game {
        let settings = Settings {
            initial_enemies: 0,
            ..Default::default()
        };
        let mut game = Game::new(size(), settings, 5);
        let tile = game.world().tile_size();
        game.world_mut().collectibles = vec![Collectible::new(Vec2::ZERO, tile, 0)];
        game
    }

    #[test]
    fn test_pickup_reaches_readout() {
        let mut game = game();
        let pos = game.world().player.pos;
        let tile = game.world().tile_size();
        game.world_mut().collectibles = vec![Collectible::new(pos, tile, 6)];

        let mut readout = LogScoreReadout::default();
        let mut surface = RecordingSurface::new(size());
        game.frame(&HeldKeys::NONE, &mut surface, &mut readout);

        assert_eq!(readout.last, Some(10));
        assert_eq!(game.score(), 10);
        assert!(!surface.commands.is_empty());
    }

    #[test]
    fn test_no_readout_without_pickup() {
        let mut game = game();
        let mut readout = LogScoreReadout::default();
        game.update(&HeldKeys::NONE, &mut readout);
        assert_eq!(readout.last, None);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut game = game();
        game.toggle_debug();
        game.world_mut().score = 30;

        game.handle_action(HostAction::Restart, 77);
        assert_eq!(game.score(), 30);

        game.world_mut().game_over = true;
        game.handle_action(HostAction::Restart, 77);
        assert_eq!(game.score(), 0);
        assert!(!game.is_over());
        assert_eq!(game.world().seed, 77);
        assert!(game.world().debug);
        assert_eq!(game.world().settings.initial_enemies, 0);
    }

    #[test]
    fn test_debug_toggle_is_independent_of_game_over() {
        let mut game = game();
        game.world_mut().game_over = true;
        game.handle_action(HostAction::ToggleDebug, 0);
        assert!(game.world().debug);
        game.handle_action(HostAction::ToggleDebug, 0);
        assert!(!game.world().debug);
        assert!(game.is_over());
    }
}
