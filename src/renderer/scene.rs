//! Per-frame scene drawing
//!
//! Draw order is fixed: background, grid, collectibles, ghosts, player, then
//! the game-over overlay. Nothing here mutates the world, so drawing twice
//! without an update produces the same commands.

use glam::Vec2;

use super::{Color, Surface};
use crate::assets::SheetId;
use crate::consts::TILE_SIZE;
use crate::sim::{Collectible, Enemy, Player, Rect, World};

const BACKGROUND: Color = Color::rgb(24, 20, 37);
const GRID_LINE: Color = Color::rgb(44, 38, 64);
const GRID_LINE_WIDTH: f32 = 1.0;

// Debug overlays, drawn under each sprite
const DEBUG_PLAYER: Color = Color::rgba(0, 160, 255, 0.3);
const DEBUG_ENEMY: Color = Color::rgba(255, 40, 40, 0.3);
const DEBUG_ITEM: Color = Color::rgba(255, 220, 0, 0.3);
const DEBUG_HITBOX: Color = Color::rgb(0, 255, 120);

const GAME_OVER_SHADE: Color = Color::rgba(0, 0, 0, 0.6);
const GAME_OVER_TEXT: Color = Color::rgb(255, 255, 255);
const GAME_OVER_FONT: f32 = 48.0;
const RESTART_FONT: f32 = 20.0;

/// Source rect of a sheet cell
fn cell(col: u32, row: u32, edge: f32) -> Rect {
    Rect::new(col as f32 * edge, row as f32 * edge, edge, edge)
}

/// Draw one frame. `world` is `None` until the game has been built.
pub fn draw_frame(surface: &mut impl Surface, world: Option<&World>) {
    let size = surface.size();
    surface.fill_rect(Rect::new(0.0, 0.0, size.x, size.y), BACKGROUND);

    let Some(world) = world else {
        draw_grid(surface, size, TILE_SIZE);
        return;
    };

    draw_grid(surface, size, world.tile_size());

    let edge = world.settings.sprite_cell;
    for item in &world.collectibles {
        draw_collectible(surface, item, edge, world.debug);
    }
    for enemy in &world.enemies {
        draw_enemy(surface, enemy, edge, world.debug);
    }
    draw_player(surface, &world.player, edge, world.debug);

    if world.game_over {
        draw_game_over(surface, size);
    }
}

/// Vertical lines left to right, then horizontal top to bottom
fn draw_grid(surface: &mut impl Surface, size: Vec2, tile: f32) {
    if tile <= 0.0 {
        return;
    }
    let mut x = 0.0;
    while x <= size.x {
        surface.line(Vec2::new(x, 0.0), Vec2::new(x, size.y), GRID_LINE, GRID_LINE_WIDTH);
        x += tile;
    }
    let mut y = 0.0;
    while y <= size.y {
        surface.line(Vec2::new(0.0, y), Vec2::new(size.x, y), GRID_LINE, GRID_LINE_WIDTH);
        y += tile;
    }
}

fn draw_collectible(surface: &mut impl Surface, item: &Collectible, edge: f32, debug: bool) {
    let dst = item.tile();
    if debug {
        surface.fill_rect(dst, DEBUG_ITEM);
    }
    surface.draw_sprite(SheetId::Items, cell(item.kind as u32, 0, edge), dst);
}

fn draw_enemy(surface: &mut impl Surface, enemy: &Enemy, edge: f32, debug: bool) {
    let dst = enemy.tile();
    if debug {
        surface.fill_rect(dst, DEBUG_ENEMY);
    }
    if let Some((col, row)) = enemy.anim.frame_cell() {
        surface.draw_sprite(SheetId::Ghost, cell(col, row, edge), dst);
    }
}

fn draw_player(surface: &mut impl Surface, player: &Player, edge: f32, debug: bool) {
    let dst = player.tile();
    if debug {
        surface.fill_rect(dst, DEBUG_PLAYER);
    }
    if let Some((col, row)) = player.anim.frame_cell() {
        surface.draw_sprite(player.sheet, cell(col, row, edge), dst);
    }
    if debug {
        surface.stroke_rect(player.hitbox(), DEBUG_HITBOX, 1.0);
    }
}

fn draw_game_over(surface: &mut impl Surface, size: Vec2) {
    surface.fill_screen(GAME_OVER_SHADE);
    let center = size / 2.0;
    surface.text_centered(
        "GAME OVER",
        center - Vec2::new(0.0, 24.0),
        GAME_OVER_FONT,
        GAME_OVER_TEXT,
    );
    surface.text_centered(
        "Press R to restart",
        center + Vec2::new(0.0, 30.0),
        RESTART_FONT,
        GAME_OVER_TEXT,
    );
}
