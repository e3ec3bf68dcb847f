//! Fruit and bonus pickups

use glam::Vec2;

use super::body::Gravity;
use super::events::SoundCue;
use super::player::{MAX_HEALTH, Player};
use super::pop::Pop;
use super::rng::GameRng;
use super::sprite::{FruitKind, PopKind, RobotKind, Sprite};
use super::state::Frame;

/// Frames an uncollected fruit lasts
pub const FRUIT_TTL: i32 = 200;
/// Distance from the fruit's base to its centre
pub const FRUIT_HALF_HEIGHT: f32 = 27.0;

/// Odds for fruit released by an aggressive robot (apple, raspberry,
/// lemon, extra health, extra life)
pub const AGGRESSIVE_WEIGHTS: [u32; 5] = [10, 10, 10, 9, 1];
const ANIMATION: [u32; 4] = [0, 1, 2, 1];

#[derive(Debug, Clone)]
pub struct Fruit {
    pub pos: Vec2,
    pub gravity: Gravity,
    pub kind: FruitKind,
    pub time_to_live: i32,
}

impl Fruit {
    /// New fruit; the kind depends on which robot (if any) it came from
    pub fn new(pos: Vec2, source: Option<RobotKind>, rng: &mut GameRng) -> Self {
        Self {
            pos,
            gravity: Gravity::default(),
            kind: roll_kind(source, rng),
            time_to_live: FRUIT_TTL,
        }
    }

    pub fn centre(&self) -> Vec2 {
        self.pos - Vec2::new(0.0, FRUIT_HALF_HEIGHT)
    }

    pub fn expired(&self) -> bool {
        self.time_to_live <= 0
    }

    pub fn update(&mut self, frame: &mut Frame, player: &mut Player, pops: &mut Vec<Pop>) {
        self.gravity
            .apply(&mut self.pos, FRUIT_HALF_HEIGHT * 2.0, frame.grid, true);

        if player.bounds().contains(self.centre()) {
            self.collect(frame, player);
            self.time_to_live = 0;
        } else {
            self.time_to_live -= 1;
        }

        if self.expired() {
            pops.push(Pop::new(self.centre(), PopKind::Fruit));
        }
    }

    fn collect(&self, frame: &mut Frame, player: &mut Player) {
        match self.kind {
            FruitKind::ExtraHealth => {
                player.health = (player.health + 1).min(MAX_HEALTH);
                frame.emit(SoundCue::Bonus);
            }
            FruitKind::ExtraLife => {
                player.lives += 1;
                frame.emit(SoundCue::Bonus);
            }
            kind => {
                player.score += (kind.index() + 1) * 100;
                frame.emit(SoundCue::Score);
            }
        }
    }

    pub fn sprite(&self, timer: u32) -> Sprite {
        Sprite::Fruit {
            kind: self.kind,
            frame: ANIMATION[((timer / 6) % 4) as usize],
        }
    }
}

fn roll_kind(source: Option<RobotKind>, rng: &mut GameRng) -> FruitKind {
    match source {
        Some(RobotKind::Aggressive) => FruitKind::ALL[rng.weighted_index(&AGGRESSIVE_WEIGHTS)],
        _ => FruitKind::ALL[rng.range(0, 2) as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::events::GameEvent;
    use crate::sim::state::GameState;

    fn step(state: &mut GameState, index: usize) {
        let (fruits, mut frame, player, pops) = state.fruit_frame();
        fruits[index].update(&mut frame, player, pops);
    }

    fn place_under_player(state: &mut GameState, kind: FruitKind) {
        let mut rng = GameRng::new(0);
        let mut fruit = Fruit::new(state.player.pos, None, &mut rng);
        fruit.kind = kind;
        // Keep it still for the test
        fruit.gravity.vel_y = -1;
        state.fruits.push(fruit);
    }

    #[test]
    fn test_aggressive_fruit_distribution() {
        let mut rng = GameRng::new(1234);
        let mut counts = [0u32; 5];
        let samples = 10_000;
        for _ in 0..samples {
            let kind = roll_kind(Some(RobotKind::Aggressive), &mut rng);
            counts[kind.index() as usize] += 1;
        }
        let total_weight: u32 = AGGRESSIVE_WEIGHTS.iter().sum();
        for (i, &count) in counts.iter().enumerate() {
            let expected = samples as f64 * AGGRESSIVE_WEIGHTS[i] as f64 / total_weight as f64;
            let tolerance = expected * 0.15 + 10.0;
            assert!(
                (count as f64 - expected).abs() < tolerance,
                "kind {i}: got {count}, expected ~{expected}"
            );
        }
    }

    #[test]
    fn test_normal_sources_give_base_fruit() {
        let mut rng = GameRng::new(9);
        for source in [None, Some(RobotKind::Normal)] {
            for _ in 0..500 {
                let kind = roll_kind(source, &mut rng);
                assert!(kind.index() <= 2, "unexpected {kind:?}");
            }
        }
    }

    #[test]
    fn test_collect_scores() {
        let mut state = GameState::new(3);
        place_under_player(&mut state, FruitKind::Lemon);
        step(&mut state, 0);
        assert_eq!(state.player.score, 300);
        assert!(state.fruits[0].expired());
        assert_eq!(state.pops.len(), 1);
        assert!(state
            .take_events()
            .contains(&GameEvent::Sound(SoundCue::Score)));
    }

    #[test]
    fn test_extra_health_is_capped() {
        let mut state = GameState::new(3);
        place_under_player(&mut state, FruitKind::ExtraHealth);
        step(&mut state, 0);
        assert_eq!(state.player.health, MAX_HEALTH);

        state.player.health = 1;
        place_under_player(&mut state, FruitKind::ExtraHealth);
        step(&mut state, 1);
        assert_eq!(state.player.health, 2);
    }

    #[test]
    fn test_extra_life() {
        let mut state = GameState::new(3);
        let lives = state.player.lives;
        place_under_player(&mut state, FruitKind::ExtraLife);
        step(&mut state, 0);
        assert_eq!(state.player.lives, lives + 1);
    }

    #[test]
    fn test_uncollected_fruit_times_out() {
        let mut state = GameState::new(3);
        let mut rng = GameRng::new(0);
        state
            .fruits
            .push(Fruit::new(Vec2::new(150.0, 300.0), None, &mut rng));
        for _ in 0..FRUIT_TTL - 1 {
            step(&mut state, 0);
            assert!(!state.fruits[0].expired());
        }
        step(&mut state, 0);
        assert!(state.fruits[0].expired());
        assert_eq!(state.pops.len(), 1);
        assert_eq!(state.player.score, 0);
    }
}
