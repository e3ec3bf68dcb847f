//! Pop: a short burst animation left behind by orbs and fruit

use glam::Vec2;

use super::sprite::{PopKind, Sprite};

/// Frames a pop stays alive
pub const POP_FRAMES: i32 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Pop {
    pub pos: Vec2,
    pub kind: PopKind,
    pub timer: i32,
}

impl Pop {
    pub fn new(pos: Vec2, kind: PopKind) -> Self {
        Self {
            pos,
            kind,
            timer: -1,
        }
    }

    pub fn update(&mut self) {
        self.timer += 1;
    }

    pub fn expired(&self) -> bool {
        self.timer >= POP_FRAMES
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::Pop {
            kind: self.kind,
            frame: (self.timer.max(0) / 2) as u32,
        }
    }
}
