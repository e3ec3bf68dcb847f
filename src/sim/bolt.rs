//! Bolts fired by robots

use glam::Vec2;

use super::body::move_by;
use super::orb::Orb;
use super::player::Player;
use super::sprite::{Facing, Sprite};
use super::state::Frame;

pub const BOLT_SPEED: i32 = 7;

#[derive(Debug, Clone)]
pub struct Bolt {
    pub pos: Vec2,
    pub direction_x: i32,
    pub active: bool,
}

impl Bolt {
    pub fn new(pos: Vec2, direction_x: i32) -> Self {
        Self {
            pos,
            direction_x,
            active: true,
        }
    }

    pub fn update(&mut self, frame: &mut Frame, orbs: &mut [Orb], player: &mut Player) {
        if move_by(&mut self.pos, self.direction_x, 0, BOLT_SPEED, frame.grid) {
            self.active = false;
            return;
        }

        // First thing hit absorbs the bolt
        if orbs.iter_mut().any(|orb| orb.hit_test(self.pos)) {
            self.active = false;
            return;
        }
        if player.hit_test(self.pos, self.direction_x, frame.events) {
            self.active = false;
        }
    }

    pub fn sprite(&self, timer: u32) -> Sprite {
        Sprite::Bolt {
            facing: Facing::from_direction(self.direction_x),
            frame: (timer / 4) % 2,
        }
    }
}
