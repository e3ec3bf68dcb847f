//! Orbs: blown by the player, they trap any robot they touch
//!
//! An orb drifts forward until it has been blown out (or hits a wall), then
//! floats up and eventually bursts, releasing fruit if it held a robot.

use glam::Vec2;

use super::body::{Bounds, move_by};
use super::events::SoundCue;
use super::fruit::Fruit;
use super::pop::Pop;
use super::sprite::{PopKind, RobotKind, Sprite};
use super::state::Frame;

pub const ORB_SIZE: f32 = 70.0;
/// Orb bursts once its timer reaches this
pub const MAX_TIMER: i32 = 250;
/// Orb bursts once it floats this far above the screen
pub const CEILING_Y: f32 = -40.0;

const FORWARD_SPEED: i32 = 4;
const FLOAT_SPEED: i32 = 1;
const INITIAL_BLOWN_FRAMES: i32 = 6;
const INFLATE_FRAMES: i32 = 9;

/// What an orb holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Captive {
    #[default]
    Empty,
    Holding(RobotKind),
}

#[derive(Debug, Clone)]
pub struct Orb {
    pub id: u32,
    pub pos: Vec2,
    pub direction_x: i32,
    pub floating: bool,
    pub captive: Captive,
    pub timer: i32,
    /// Frames of forward travel before the orb starts floating
    pub blown_frames: i32,
}

impl Orb {
    pub fn new(id: u32, pos: Vec2, direction_x: i32) -> Self {
        Self {
            id,
            pos,
            direction_x,
            floating: false,
            captive: Captive::Empty,
            timer: -1,
            blown_frames: INITIAL_BLOWN_FRAMES,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centred(self.pos, ORB_SIZE, ORB_SIZE)
    }

    pub fn trapped_enemy(&self) -> Option<RobotKind> {
        match self.captive {
            Captive::Empty => None,
            Captive::Holding(kind) => Some(kind),
        }
    }

    pub fn is_holding(&self) -> bool {
        self.captive != Captive::Empty
    }

    /// Take a robot; refuses if one is already held
    pub fn capture(&mut self, kind: RobotKind) -> bool {
        if self.is_holding() {
            return false;
        }
        self.captive = Captive::Holding(kind);
        self.floating = true;
        true
    }

    /// A bolt struck at `point`: burst on the next update
    pub fn hit_test(&mut self, point: Vec2) -> bool {
        if !self.bounds().contains(point) {
            return false;
        }
        self.timer = self.timer.max(MAX_TIMER - 1);
        true
    }

    pub fn expired(&self) -> bool {
        self.timer >= MAX_TIMER || self.pos.y <= CEILING_Y
    }

    pub fn update(&mut self, frame: &mut Frame, pops: &mut Vec<Pop>, fruits: &mut Vec<Fruit>) {
        self.timer += 1;

        if self.floating {
            move_by(&mut self.pos, 0, -1, FLOAT_SPEED, frame.grid);
        } else if move_by(&mut self.pos, self.direction_x, 0, FORWARD_SPEED, frame.grid) {
            self.floating = true;
        }

        if self.timer >= self.blown_frames {
            self.floating = true;
        }

        if self.expired() {
            pops.push(Pop::new(self.pos, PopKind::Orb));
            if let Some(kind) = self.trapped_enemy() {
                let fruit = Fruit::new(self.pos, Some(kind), frame.rng);
                log::debug!("Orb {} released {:?}", self.id, fruit.kind);
                fruits.push(fruit);
            }
            frame.emit(SoundCue::Pop);
        }
    }

    pub fn sprite(&self) -> Sprite {
        let timer = self.timer.max(0);
        if timer < INFLATE_FRAMES {
            return Sprite::Orb {
                frame: (timer / 3) as u32,
            };
        }
        match self.captive {
            Captive::Holding(kind) => Sprite::Trap {
                kind,
                frame: ((timer / 4) % 8) as u32,
            },
            Captive::Empty => Sprite::Orb {
                frame: (3 + ((timer - INFLATE_FRAMES) / 8) % 4) as u32,
            },
        }
    }
}
