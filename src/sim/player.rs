//! The player
//!
//! `hurt_timer` drives three things at once: recoil after a hit (above 100),
//! the invulnerability flicker (1..=100) and, with no health left, the
//! death fall.

use glam::Vec2;

use super::body::{Bounds, Gravity, move_by};
use super::events::{GameEvent, SoundCue};
use super::orb::Orb;
use super::sprite::{Facing, PlayerSprite, Sprite};
use super::state::Frame;
use crate::consts::*;
use crate::input::InputSnapshot;

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 70.0;
pub const MAX_HEALTH: i32 = 3;
pub const START_LIVES: i32 = 2;
pub const SPAWN_POS: Vec2 = Vec2::new(400.0, 100.0);

const WALK_SPEED: i32 = 4;
const JUMP_VELOCITY: i32 = -16;
const KNOCKBACK_VELOCITY: i32 = -12;
const FIRE_COOLDOWN: i32 = 20;
/// Below this fire_timer the player may walk again after blowing
const WALK_WHILE_FIRING: i32 = 10;
const MAX_ORBS: usize = 5;
const ORB_OFFSET_X: f32 = 38.0;
const ORB_OFFSET_Y: f32 = 35.0;
const HURT_FRAMES: i32 = 200;
const RECOIL_THRESHOLD: i32 = 100;
const BLOW_PER_FRAME: i32 = 4;
const MAX_BLOWN_FRAMES: i32 = 120;

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub gravity: Gravity,
    /// -1 means the game is over
    pub lives: i32,
    pub health: i32,
    pub score: u32,
    pub direction_x: i32,
    pub fire_timer: i32,
    pub hurt_timer: i32,
    /// Orb currently being blown (by entity id); the game owns the orb
    pub blowing_orb: Option<u32>,
    /// Horizontal input of the last update, for the run animation
    pub intent_x: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        let mut player = Self {
            pos: SPAWN_POS,
            gravity: Gravity::default(),
            lives: START_LIVES,
            health: MAX_HEALTH,
            score: 0,
            direction_x: 1,
            fire_timer: 0,
            hurt_timer: 0,
            blowing_orb: None,
            intent_x: 0,
        };
        player.reset();
        player
    }

    /// Back to the spawn point with full health; lives and score are kept
    pub fn reset(&mut self) {
        self.pos = SPAWN_POS;
        self.gravity = Gravity::default();
        self.direction_x = 1;
        self.fire_timer = 0;
        self.hurt_timer = RECOIL_THRESHOLD;
        self.health = MAX_HEALTH;
        self.blowing_orb = None;
        self.intent_x = 0;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centre_bottom(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn is_dying(&self) -> bool {
        self.health <= 0
    }

    pub fn is_recoiling(&self) -> bool {
        self.hurt_timer > RECOIL_THRESHOLD && self.health > 0
    }

    /// Try to hit the player at `point`; only lands when fully vulnerable
    pub fn hit_test(&mut self, point: Vec2, attacker_dir: i32, events: &mut Vec<GameEvent>) -> bool {
        if !self.bounds().contains(point) || self.hurt_timer >= 0 {
            return false;
        }

        self.hurt_timer = HURT_FRAMES;
        self.health -= 1;
        debug_assert!(self.health >= 0, "health went negative");
        self.health = self.health.max(0);
        self.gravity.vel_y = KNOCKBACK_VELOCITY;
        self.gravity.landed = false;
        self.direction_x = attacker_dir;

        let cue = if self.health == 0 {
            SoundCue::Die
        } else {
            SoundCue::Ouch
        };
        events.push(GameEvent::Sound(cue));
        true
    }

    pub fn update(
        &mut self,
        input: &InputSnapshot,
        frame: &mut Frame,
        orbs: &mut Vec<Orb>,
        next_id: &mut u32,
    ) {
        let detect = !self.is_dying();
        self.gravity
            .apply(&mut self.pos, PLAYER_HEIGHT, frame.grid, detect);

        self.fire_timer -= 1;
        self.hurt_timer -= 1;

        if self.gravity.landed {
            self.hurt_timer = self.hurt_timer.min(RECOIL_THRESHOLD);
        }

        self.intent_x = 0;
        if self.is_dying() {
            self.update_dying(frame);
        } else if self.is_recoiling() {
            move_by(&mut self.pos, self.direction_x, 0, WALK_SPEED, frame.grid);
        } else {
            self.update_control(input, frame, orbs, next_id);
        }

        self.update_blowing(input, orbs);
    }

    fn update_dying(&mut self, frame: &mut Frame) {
        let top = self.pos.y - PLAYER_HEIGHT;
        if top < HEIGHT as f32 * 1.5 || self.lives < 0 {
            return;
        }

        self.lives -= 1;
        frame
            .events
            .push(GameEvent::PlayerDied { lives_left: self.lives });
        if self.lives >= 0 {
            log::info!("Player died, {} lives left", self.lives);
            self.reset();
        } else {
            log::info!("Player died, game over");
            frame.events.push(GameEvent::GameOver);
        }
    }

    fn update_control(
        &mut self,
        input: &InputSnapshot,
        frame: &mut Frame,
        orbs: &mut Vec<Orb>,
        next_id: &mut u32,
    ) {
        let dx = if input.left {
            -1
        } else if input.right {
            1
        } else {
            0
        };
        self.intent_x = dx;

        if dx != 0 {
            self.direction_x = dx;
            if self.fire_timer < WALK_WHILE_FIRING {
                move_by(&mut self.pos, dx, 0, WALK_SPEED, frame.grid);
            }
        }

        if input.fire_pressed && self.fire_timer <= 0 && orbs.len() < MAX_ORBS {
            let x = (self.pos.x + self.direction_x as f32 * ORB_OFFSET_X)
                .clamp(MIN_X as f32, MAX_X as f32);
            let y = self.pos.y - ORB_OFFSET_Y;
            let id = *next_id;
            *next_id += 1;
            orbs.push(Orb::new(id, Vec2::new(x, y), self.direction_x));
            self.blowing_orb = Some(id);
            self.fire_timer = FIRE_COOLDOWN;
            frame.emit(SoundCue::Blow);
        }

        if input.jump_pressed && self.gravity.vel_y == 0 && self.gravity.landed {
            self.gravity.vel_y = JUMP_VELOCITY;
            self.gravity.landed = false;
            frame.emit(SoundCue::Jump);
        }
    }

    /// Holding fire keeps inflating the most recent orb
    fn update_blowing(&mut self, input: &InputSnapshot, orbs: &mut [Orb]) {
        if !input.fire_held {
            self.blowing_orb = None;
            return;
        }
        let Some(id) = self.blowing_orb else { return };

        match orbs.iter_mut().find(|o| o.id == id) {
            Some(orb) => {
                orb.blown_frames += BLOW_PER_FRAME;
                if orb.blown_frames >= MAX_BLOWN_FRAMES {
                    self.blowing_orb = None;
                }
            }
            None => self.blowing_orb = None,
        }
    }

    /// Sprite for this frame, derived from state and the frame counter
    pub fn sprite(&self, timer: u32) -> Sprite {
        if self.hurt_timer > 0 && self.hurt_timer % 2 == 0 {
            return Sprite::Player(PlayerSprite::Hidden);
        }

        let facing = Facing::from_direction(self.direction_x);
        let sprite = if self.hurt_timer > RECOIL_THRESHOLD {
            if self.health > 0 {
                PlayerSprite::Recoil { facing }
            } else {
                PlayerSprite::Fall {
                    frame: (timer / 4) % 2,
                }
            }
        } else if self.is_dying() {
            PlayerSprite::Fall {
                frame: (timer / 4) % 2,
            }
        } else if self.fire_timer > 0 {
            PlayerSprite::Blow { facing }
        } else if self.intent_x == 0 {
            PlayerSprite::Still
        } else {
            PlayerSprite::Run {
                facing,
                frame: (timer / 8) % 4,
            }
        };
        Sprite::Player(sprite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameState;

    fn fire() -> InputSnapshot {
        InputSnapshot {
            fire_pressed: true,
            fire_held: true,
            ..Default::default()
        }
    }

    /// Run one player update against a state's collections
    fn step(state: &mut GameState, input: &InputSnapshot) {
        let (player, mut frame, orbs, next_id) = state.player_frame();
        player.update(input, &mut frame, orbs, next_id);
    }

    #[test]
    fn test_fire_spawns_orb_in_front() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(400.0, 100.0);
        state.player.direction_x = 1;
        state.player.fire_timer = 0;

        step(&mut state, &fire());

        assert_eq!(state.orbs.len(), 1);
        let orb = &state.orbs[0];
        assert_eq!(orb.pos, Vec2::new(438.0, state.player.pos.y - 35.0));
        assert_eq!(orb.direction_x, 1);
        assert_eq!(state.player.fire_timer, 20);
        assert!(state.take_events().contains(&GameEvent::Sound(SoundCue::Blow)));
    }

    #[test]
    fn test_fire_respects_orb_cap_and_cooldown() {
        let mut state = GameState::new(1);
        for i in 0..5 {
            state.orbs.push(Orb::new(100 + i, Vec2::new(200.0, 200.0), 1));
        }
        step(&mut state, &fire());
        assert_eq!(state.orbs.len(), 5);

        state.orbs.clear();
        state.player.fire_timer = 5;
        step(&mut state, &fire());
        assert!(state.orbs.is_empty());
    }

    #[test]
    fn test_orb_x_clamped_to_world() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(720.0, 100.0);
        step(&mut state, &fire());
        assert_eq!(state.orbs[0].pos.x, MAX_X as f32);
    }

    #[test]
    fn test_holding_fire_inflates_until_cap() {
        let mut state = GameState::new(1);
        step(&mut state, &fire());
        let id = state.orbs[0].id;
        assert_eq!(state.player.blowing_orb, Some(id));

        let hold = InputSnapshot {
            fire_held: true,
            ..Default::default()
        };
        for _ in 0..40 {
            step(&mut state, &hold);
        }
        assert!(state.orbs[0].blown_frames >= MAX_BLOWN_FRAMES);
        assert_eq!(state.player.blowing_orb, None);
    }

    #[test]
    fn test_releasing_fire_drops_reference() {
        let mut state = GameState::new(1);
        step(&mut state, &fire());
        step(&mut state, &InputSnapshot::default());
        assert_eq!(state.player.blowing_orb, None);
    }

    #[test]
    fn test_hit_only_when_vulnerable() {
        let mut player = Player::new();
        let mut events = Vec::new();
        let point = player.pos - Vec2::new(0.0, 30.0);

        // Fresh spawn is invulnerable
        assert!(!player.hit_test(point, -1, &mut events));

        player.hurt_timer = -1;
        assert!(player.hit_test(point, -1, &mut events));
        assert_eq!(player.health, 2);
        assert_eq!(player.hurt_timer, 200);
        assert_eq!(player.gravity.vel_y, -12);
        assert_eq!(player.direction_x, -1);
        assert!(!player.gravity.landed);
        assert_eq!(events, vec![GameEvent::Sound(SoundCue::Ouch)]);

        // Outside the hitbox never lands
        player.hurt_timer = -1;
        assert!(!player.hit_test(Vec2::new(0.0, 0.0), 1, &mut events));
    }

    #[test]
    fn test_last_hit_plays_die() {
        let mut player = Player::new();
        let mut events = Vec::new();
        player.health = 1;
        player.hurt_timer = -1;
        let point = player.pos - Vec2::new(0.0, 10.0);
        assert!(player.hit_test(point, 1, &mut events));
        assert_eq!(player.health, 0);
        assert_eq!(events, vec![GameEvent::Sound(SoundCue::Die)]);
    }

    #[test]
    fn test_death_fall_costs_one_life_and_respawns() {
        let mut state = GameState::new(1);
        state.player.health = 0;
        state.player.hurt_timer = 200;
        state.player.pos = Vec2::new(300.0, 800.0);

        step(&mut state, &InputSnapshot::default());

        assert_eq!(state.player.lives, START_LIVES - 1);
        assert_eq!(state.player.health, MAX_HEALTH);
        assert_eq!(state.player.pos, SPAWN_POS);
        assert_eq!(state.player.hurt_timer, 100);
    }

    #[test]
    fn test_last_life_reports_game_over_once() {
        let mut state = GameState::new(1);
        state.player.lives = 0;
        state.player.health = 0;
        state.player.pos = Vec2::new(300.0, 900.0);

        step(&mut state, &InputSnapshot::default());
        step(&mut state, &InputSnapshot::default());

        assert_eq!(state.player.lives, -1);
        let events = state.take_events();
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == GameEvent::GameOver)
                .count(),
            1
        );
    }

    fn jump() -> InputSnapshot {
        InputSnapshot {
            up: true,
            jump_pressed: true,
            ..Default::default()
        }
    }

    /// Standing on the long ledge of the first level (top at y 225)
    fn standing(state: &mut GameState) {
        state.player.pos = Vec2::new(400.0, 224.0);
        state.player.hurt_timer = -1;
        state.player.gravity.vel_y = 0;
        state.player.gravity.landed = true;
    }

    #[test]
    fn test_jump_from_ground() {
        let mut state = GameState::new(1);
        standing(&mut state);

        step(&mut state, &jump());

        assert_eq!(state.player.gravity.vel_y, JUMP_VELOCITY);
        assert!(!state.player.gravity.landed);
        assert_eq!(state.take_events(), vec![GameEvent::Sound(SoundCue::Jump)]);
    }

    #[test]
    fn test_no_jump_in_mid_air() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(400.0, 100.0);
        state.player.hurt_timer = -1;
        state.player.gravity.vel_y = 0;
        state.player.gravity.landed = false;

        step(&mut state, &jump());

        assert_eq!(state.player.gravity.vel_y, 1);
        assert_eq!(state.player.pos.y, 101.0);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_no_second_jump_while_rising() {
        let mut state = GameState::new(1);
        standing(&mut state);
        step(&mut state, &jump());
        state.take_events();

        step(&mut state, &jump());

        assert!(state.player.gravity.vel_y < 0);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_dying_player_falls_through_blocks() {
        let mut state = GameState::new(1);
        standing(&mut state);
        for _ in 0..10 {
            step(&mut state, &InputSnapshot::default());
        }
        assert_eq!(state.player.pos.y, 224.0);

        standing(&mut state);
        state.player.health = 0;
        state.player.hurt_timer = HURT_FRAMES;
        for _ in 0..10 {
            step(&mut state, &InputSnapshot::default());
        }
        // 1 + 2 + ... + 10 frames of free fall
        assert_eq!(state.player.pos.y, 224.0 + 55.0);
        assert_eq!(state.player.lives, START_LIVES);
    }

    #[test]
    fn test_recoil_ignores_input() {
        let mut state = GameState::new(1);
        state.player.hurt_timer = 150;
        state.player.direction_x = -1;
        let x = state.player.pos.x;
        let right = InputSnapshot {
            right: true,
            ..Default::default()
        };
        step(&mut state, &right);
        assert_eq!(state.player.pos.x, x - 4.0);
        assert_eq!(state.player.direction_x, -1);
    }

    #[test]
    fn test_sprite_states() {
        let mut player = Player::new();
        player.hurt_timer = 0;
        assert_eq!(player.sprite(0), Sprite::Player(PlayerSprite::Still));

        player.intent_x = 1;
        assert_eq!(
            player.sprite(8),
            Sprite::Player(PlayerSprite::Run {
                facing: Facing::Right,
                frame: 1
            })
        );

        player.fire_timer = 5;
        assert_eq!(
            player.sprite(0),
            Sprite::Player(PlayerSprite::Blow {
                facing: Facing::Right
            })
        );

        player.hurt_timer = 150;
        player.direction_x = -1;
        assert_eq!(player.sprite(0), Sprite::Player(PlayerSprite::Hidden));
        player.hurt_timer = 151;
        assert_eq!(
            player.sprite(0),
            Sprite::Player(PlayerSprite::Recoil {
                facing: Facing::Left
            })
        );

        player.health = 0;
        assert_eq!(
            player.sprite(4),
            Sprite::Player(PlayerSprite::Fall { frame: 1 })
        );
    }
}
