//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one frame.

use glam::Vec2;

use super::difficulty::max_enemies;
use super::fruit::Fruit;
use super::state::GameState;
use crate::consts::*;
use crate::input::InputSnapshot;

/// Frames between random fruit drops
pub const FRUIT_SPAWN_INTERVAL: u32 = 100;
/// Frames between robot drop-ins
pub const ROBOT_SPAWN_INTERVAL: u32 = 81;
/// Robots enter this far above the screen
pub const ROBOT_SPAWN_Y: f32 = -30.0;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &InputSnapshot) {
    state.timer += 1;

    {
        let (player, mut frame, orbs, next_id) = state.player_frame();
        player.update(input, &mut frame, orbs, next_id);
    }

    {
        let (enemies, mut frame, player, orbs, bolts) = state.enemy_frame();
        for robot in enemies.iter_mut() {
            robot.update(&mut frame, player, orbs, bolts);
        }
        // Trapped robots now belong to their orb
        enemies.retain(|robot| robot.alive);
    }

    {
        let (orbs, mut frame, pops, fruits) = state.orb_frame();
        for orb in orbs.iter_mut() {
            orb.update(&mut frame, pops, fruits);
        }
    }

    {
        let (bolts, mut frame, orbs, player) = state.bolt_frame();
        for bolt in bolts.iter_mut() {
            bolt.update(&mut frame, orbs, player);
        }
    }

    for pop in state.pops.iter_mut() {
        pop.update();
    }

    {
        let (fruits, mut frame, player, pops) = state.fruit_frame();
        for fruit in fruits.iter_mut() {
            fruit.update(&mut frame, player, pops);
        }
    }

    cull(state);
    spawn(state);

    if state.level_cleared() {
        log::info!(
            "Level {} cleared at frame {}, score {}",
            state.level + 1,
            state.timer,
            state.player.score
        );
        state.next_level();
    }
}

/// Drop everything that finished this frame
fn cull(state: &mut GameState) {
    state.bolts.retain(|bolt| bolt.active);
    state.fruits.retain(|fruit| !fruit.expired());
    state.pops.retain(|pop| !pop.expired());
    state.orbs.retain(|orb| !orb.expired());
}

fn spawn(state: &mut GameState) {
    let robots_left = !state.pending_enemies.is_empty() || !state.enemies.is_empty();
    if state.timer % FRUIT_SPAWN_INTERVAL == 0 && robots_left {
        let x = state.rng.range(MIN_X, MAX_X);
        let y = state.rng.range(75, 400);
        let fruit = Fruit::new(Vec2::new(x as f32, y as f32), None, &mut state.rng);
        log::debug!("Dropping {:?} at ({}, {})", fruit.kind, x, y);
        state.fruits.push(fruit);
    }

    if state.timer % ROBOT_SPAWN_INTERVAL == 0
        && state.enemies.len() < max_enemies(state.level)
    {
        if let Some(kind) = state.pending_enemies.pop() {
            let x = robot_spawn_x(state);
            state.spawn_robot(Vec2::new(x, ROBOT_SPAWN_Y), kind);
        }
    }
}

/// Centre of a random column that is open at the top of the level
///
/// Edge columns sit partly outside the world walls, so the result is
/// clamped to `MIN_X..=MAX_X`; a body outside that range cannot move at all.
pub fn robot_spawn_x(state: &mut GameState) -> f32 {
    let open: Vec<usize> = state.grid.open_top_columns().collect();
    let x = match state.rng.choose(&open) {
        Some(col) => col as i32 * TILE_SIZE + LEVEL_X_OFFSET + TILE_SIZE / 2,
        None => WIDTH / 2,
    };
    x.clamp(MIN_X, MAX_X) as f32
}
