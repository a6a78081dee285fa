//! Per-frame world update
//!
//! Core game loop step: player, then ghosts, then pickups.

use super::input::InputProvider;
use super::state::{GameEvent, World};

/// Advance the world by one frame. Does nothing once the game is over.
pub fn tick(world: &mut World, input: &impl InputProvider) {
    if world.game_over {
        return;
    }

    let playfield = world.playfield;
    world.player.update(input, playfield);
    let player_box = world.player.hitbox();

    // Every ghost moves this frame, even after one has caught the player
    for enemy in world.enemies.iter_mut() {
        enemy.update(playfield, &mut world.rng);
        if enemy.hitbox().intersects(&player_box) && !world.game_over {
            world.game_over = true;
            world.events.push(GameEvent::GameOver { score: world.score });
        }
    }

    // Reverse so removals don't shift indices still to be visited
    for i in (0..world.collectibles.len()).rev() {
        if !world.collectibles[i].hitbox().intersects(&player_box) {
            continue;
        }
        let item = world.collectibles.remove(i);
        world.score += world.settings.score_per_pickup;
        world.events.push(GameEvent::Collected {
            kind: item.kind,
            score: world.score,
        });
        world.spawn_collectible();

        if world.settings.spawns_enemy_at(world.score) {
            let pos = world.random_position();
            world.spawn_enemy(pos);
        }
    }

    world.frame += 1;
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::input::HeldKeys;
    use crate::sim::state::{Collectible, Direction};

    fn quiet_world() -> World {
        let settings = Settings {
            initial_enemies: 0,
            ..Default::default()
        };
        let mut world = World::new(
            Vec2::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT),
            settings,
            12345,
        );
        // Park the starting item in a corner, away from the player
        let size = world.tile_size();
        world.collectibles = vec![Collectible::new(Vec2::new(0.0, 528.0), size, 5)];
        world
    }

    /// Place a collectible right under the player and clear the rest
    fn item_under_player(world: &mut World, kind: u8) {
        let size = world.tile_size();
        world.collectibles = vec![Collectible::new(world.player.pos, size, kind)];
    }

    #[test]
    fn test_pickup_scores_and_replaces() {
        let mut world = quiet_world();
        world.player.pos = Vec2::new(100.0, 100.0);
        item_under_player(&mut world, 3);

        tick(&mut world, &HeldKeys::NONE);

        assert_eq!(world.score, 10);
        assert_eq!(world.collectibles.len(), 1);
        assert_ne!(world.collectibles[0].pos, Vec2::new(100.0, 100.0));
        assert!(world.enemies.is_empty());
        assert_eq!(
            world.drain_events(),
            vec![GameEvent::Collected { kind: 3, score: 10 }]
        );
    }

    #[test]
    fn test_tile_overlap_outside_hitbox_is_ignored() {
        let mut world = quiet_world();
        world.player.pos = Vec2::new(100.0, 100.0);
        let size = world.tile_size();
        // Tiles overlap by 8px, item hitbox starts at 152 and player hitbox ends at 139
        world.collectibles = vec![Collectible::new(Vec2::new(140.0, 100.0), size, 2)];

        tick(&mut world, &HeldKeys::NONE);

        assert_eq!(world.score, 0);
        assert_eq!(world.collectibles[0].pos, Vec2::new(140.0, 100.0));
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_ghost_touching_tile_edge_is_harmless() {
        let mut world = quiet_world();
        world.player.pos = Vec2::new(100.0, 100.0);
        world.spawn_enemy(Vec2::new(148.0, 100.0));
        world.enemies[0].direction = Direction::Down;
        world.enemies[0].turn_timer = 100;
        world.drain_events();

        tick(&mut world, &HeldKeys::NONE);

        assert!(!world.game_over);
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_scoring_follows_settings() {
        let settings = Settings {
            initial_enemies: 0,
            score_per_pickup: 20,
            enemy_spawn_interval: 20,
            ..Default::default()
        };
        let mut world = World::new(
            Vec2::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT),
            settings,
            12345,
        );
        item_under_player(&mut world, 0);

        tick(&mut world, &HeldKeys::NONE);

        assert_eq!(world.score, 20);
        assert_eq!(world.enemies.len(), 1);
    }

    #[test]
    fn test_fiftieth_point_spawns_ghost() {
        let mut world = quiet_world();
        world.score = 40;
        item_under_player(&mut world, 0);

        tick(&mut world, &HeldKeys::NONE);

        assert_eq!(world.score, 50);
        assert_eq!(world.enemies.len(), 1);
        let events = world.drain_events();
        assert!(events.contains(&GameEvent::EnemySpawned { count: 1 }));
    }

    #[test]
    fn test_no_ghost_off_threshold() {
        let mut world = quiet_world();
        world.score = 50;
        item_under_player(&mut world, 0);
        tick(&mut world, &HeldKeys::NONE);
        assert_eq!(world.score, 60);
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_stacked_pickups_in_one_frame() {
        let mut world = quiet_world();
        world.score = 30;
        let size = world.tile_size();
        let pos = world.player.pos;
        world.collectibles = vec![
            Collectible::new(pos, size, 1),
            Collectible::new(pos, size, 2),
        ];

        tick(&mut world, &HeldKeys::NONE);

        assert_eq!(world.score, 50);
        assert_eq!(world.enemies.len(), 1);
        let kinds: Vec<u8> = world
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::Collected { kind, .. } => Some(kind),
                _ => None,
            })
            .collect();
        // Highest index first
        assert_eq!(kinds, vec![2, 1]);
    }

    #[test]
    fn test_game_over_does_not_stop_other_ghosts() {
        let mut world = quiet_world();
        let player_pos = world.player.pos;
        for pos in [Vec2::new(0.0, 0.0), player_pos, Vec2::new(300.0, 0.0)] {
            world.spawn_enemy(pos);
        }
        for enemy in world.enemies.iter_mut() {
            enemy.direction = Direction::Down;
            enemy.turn_timer = 100;
        }
        world.drain_events();
        let third_before = world.enemies[2].pos;

        tick(&mut world, &HeldKeys::NONE);

        assert!(world.game_over);
        assert_ne!(world.enemies[2].pos, third_before);
        assert_eq!(world.enemies[2].turn_timer, 99);
        assert_eq!(world.drain_events(), vec![GameEvent::GameOver { score: 0 }]);
    }

    #[test]
    fn test_frozen_after_game_over() {
        let mut world = quiet_world();
        world.spawn_enemy(Vec2::new(0.0, 0.0));
        world.game_over = true;
        let player_pos = world.player.pos;
        let enemy_pos = world.enemies[0].pos;
        let frame = world.player.anim.frame_index();

        let keys = HeldKeys {
            right: true,
            ..HeldKeys::NONE
        };
        for _ in 0..20 {
            tick(&mut world, &keys);
        }

        assert_eq!(world.player.pos, player_pos);
        assert_eq!(world.enemies[0].pos, enemy_pos);
        assert_eq!(world.player.anim.frame_index(), frame);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let size = Vec2::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT);
        let mut w1 = World::new(size, settings.clone(), 99999);
        let mut w2 = World::new(size, settings, 99999);

        let inputs = [
            HeldKeys {
                up: true,
                ..HeldKeys::NONE
            },
            HeldKeys {
                left: true,
                ..HeldKeys::NONE
            },
            HeldKeys::NONE,
        ];
        for i in 0..300 {
            let input = &inputs[i % inputs.len()];
            tick(&mut w1, input);
            tick(&mut w2, input);
        }

        assert_eq!(w1.frame, w2.frame);
        assert_eq!(w1.score, w2.score);
        assert_eq!(w1.player.pos, w2.player.pos);
        assert_eq!(w1.enemies.len(), w2.enemies.len());
        for (a, b) in w1.enemies.iter().zip(&w2.enemies) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
