//! Movement against the tile grid
//!
//! Bodies move in whole-pixel sub-steps and only test the grid when their
//! leading edge crosses a tile boundary. Speeds stay below one tile per
//! frame, so nothing tunnels through a block.

use glam::Vec2;

use super::grid::{Grid, block_at};
use crate::consts::*;

/// Axis-aligned hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Box whose bottom edge is centred on `pos`
    pub fn centre_bottom(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: pos.x - width / 2.0,
            top: pos.y - height,
            right: pos.x + width / 2.0,
            bottom: pos.y,
        }
    }

    /// Box centred on `pos`
    pub fn centred(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: pos.x - width / 2.0,
            top: pos.y - height / 2.0,
            right: pos.x + width / 2.0,
            bottom: pos.y + height / 2.0,
        }
    }

    /// Half-open containment (right and bottom edges excluded)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    pub fn centre(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Do the vertical extents overlap
    pub fn overlaps_vertically(&self, other: &Bounds) -> bool {
        self.top < other.bottom && self.bottom > other.top
    }
}

/// Advance `pos` up to `speed` pixels along `(dx, dy)`
///
/// Returns true on collision with a world wall or a solid tile. The
/// position is left at the last sub-step that did not collide.
pub fn move_by(pos: &mut Vec2, dx: i32, dy: i32, speed: i32, grid: &Grid) -> bool {
    let mut new_x = pos.x as i32;
    let mut new_y = pos.y as i32;

    for _ in 0..speed {
        new_x += dx;
        new_y += dy;

        if !(MIN_X..=MAX_X).contains(&new_x) {
            return true;
        }

        let crossing = (dy > 0 && new_y.rem_euclid(TILE_SIZE) == 0)
            || (dx > 0 && new_x.rem_euclid(TILE_SIZE) == 0)
            || (dx < 0 && new_x.rem_euclid(TILE_SIZE) == TILE_SIZE - 1);
        if crossing && block_at(grid, new_x, new_y) {
            return true;
        }

        *pos = Vec2::new(new_x as f32, new_y as f32);
    }

    false
}

/// Vertical velocity state shared by everything that falls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gravity {
    pub vel_y: i32,
    pub landed: bool,
}

impl Gravity {
    /// Accelerate and fall one frame
    ///
    /// `height` is the body's hitbox height (its position is the bottom
    /// centre). With `detect` off the body ignores the grid entirely.
    pub fn apply(&mut self, pos: &mut Vec2, height: f32, grid: &Grid, detect: bool) {
        self.vel_y = (self.vel_y + 1).min(MAX_FALL_SPEED);

        if !detect {
            pos.y += self.vel_y as f32;
            return;
        }

        if move_by(pos, 0, self.vel_y.signum(), self.vel_y.abs(), grid) {
            self.vel_y = 0;
            self.landed = true;
        }

        // Fell out of the bottom: reappear at the top
        if pos.y - height >= HEIGHT as f32 {
            pos.y = 1.0;
        }
    }
}
