//! Robots: the enemies
//!
//! A robot patrols, turns at walls or on a random timer, and fires bolts.
//! Aggressive robots also turn to shoot at nearby orbs. Touching an empty
//! orb traps the robot for good; from then on the orb owns it.

use glam::Vec2;

use super::body::{Bounds, Gravity, move_by};
use super::bolt::Bolt;
use super::difficulty::fire_probability;
use super::events::SoundCue;
use super::orb::Orb;
use super::player::Player;
use super::sprite::{Facing, RobotKind, Sprite};
use super::state::Frame;
use crate::sign;

pub const ROBOT_WIDTH: f32 = 60.0;
pub const ROBOT_HEIGHT: f32 = 75.0;

const INITIAL_FIRE_TIMER: i32 = 100;
/// fire_timer value at which the decided shot leaves the barrel
const BOLT_RELEASE_FRAME: i32 = 8;
const FIRE_READY: i32 = 12;
const ORB_ALERT_READY: i32 = 24;
const ORB_ALERT_RANGE: f32 = 200.0;
const SAME_LEVEL_MULTIPLIER: f64 = 10.0;
const BOLT_OFFSET_X: f32 = 20.0;
const BOLT_OFFSET_Y: f32 = 38.0;

#[derive(Debug, Clone)]
pub struct Robot {
    pub pos: Vec2,
    pub gravity: Gravity,
    pub kind: RobotKind,
    pub speed: i32,
    pub direction_x: i32,
    pub alive: bool,
    pub change_dir_timer: i32,
    pub fire_timer: i32,
}

impl Robot {
    pub fn new(pos: Vec2, kind: RobotKind, speed: i32) -> Self {
        Self {
            pos,
            gravity: Gravity::default(),
            kind,
            speed,
            direction_x: 1,
            alive: true,
            change_dir_timer: 0,
            fire_timer: INITIAL_FIRE_TIMER,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centre_bottom(self.pos, ROBOT_WIDTH, ROBOT_HEIGHT)
    }

    pub fn update(
        &mut self,
        frame: &mut Frame,
        player: &Player,
        orbs: &mut [Orb],
        bolts: &mut Vec<Bolt>,
    ) {
        if !self.alive {
            return;
        }

        self.gravity
            .apply(&mut self.pos, ROBOT_HEIGHT, frame.grid, true);
        self.change_dir_timer -= 1;
        self.fire_timer += 1;

        if move_by(&mut self.pos, self.direction_x, 0, self.speed, frame.grid) {
            self.change_dir_timer = 0;
        }

        if self.change_dir_timer <= 0 {
            // Two random choices plus one leaning toward the player
            let toward_player = sign(player.pos.x - self.pos.x);
            self.direction_x = frame.rng.choose(&[-1, 1, toward_player]).unwrap_or(1);
            self.change_dir_timer = frame.rng.range(100, 250);
        }

        let bounds = self.bounds();

        if self.kind == RobotKind::Aggressive && self.fire_timer >= ORB_ALERT_READY {
            let threat = orbs.iter().find(|orb| {
                orb.pos.y >= bounds.top
                    && orb.pos.y < bounds.bottom
                    && (orb.pos.x - self.pos.x).abs() < ORB_ALERT_RANGE
            });
            if let Some(orb) = threat {
                self.direction_x = sign(orb.pos.x - self.pos.x);
                self.fire_timer = 0;
            }
        }

        if self.fire_timer >= FIRE_READY {
            let mut probability = fire_probability(frame.level);
            if bounds.overlaps_vertically(&player.bounds()) {
                probability *= SAME_LEVEL_MULTIPLIER;
            }
            if frame.rng.chance(probability) {
                self.fire_timer = 0;
                frame.emit(SoundCue::Laser);
            }
        } else if self.fire_timer == BOLT_RELEASE_FRAME {
            let origin = Vec2::new(
                self.pos.x + self.direction_x as f32 * BOLT_OFFSET_X,
                self.pos.y - BOLT_OFFSET_Y,
            );
            bolts.push(Bolt::new(origin, self.direction_x));
        }

        self.try_capture(frame, orbs);
    }

    /// Get trapped by the first empty orb containing our centre
    fn try_capture(&mut self, frame: &mut Frame, orbs: &mut [Orb]) {
        let centre = self.bounds().centre();
        let Some(orb) = orbs
            .iter_mut()
            .find(|orb| !orb.is_holding() && orb.bounds().contains(centre))
        else {
            return;
        };

        if orb.capture(self.kind) {
            self.alive = false;
            log::debug!("Orb {} trapped a {:?} robot", orb.id, self.kind);
            frame.emit(SoundCue::Trap);
        }
    }

    pub fn sprite(&self, timer: u32) -> Sprite {
        Sprite::Robot {
            kind: self.kind,
            facing: Facing::from_direction(self.direction_x),
            frame: (timer / 6) % 8,
        }
    }
}
