//! Difficulty curve
//!
//! All level-dependent tuning lives here.

use super::rng::GameRng;
use super::sprite::RobotKind;

/// Most robots allowed on screen at once
pub fn max_enemies(level: u32) -> usize {
    ((level as usize + 6) / 2).min(8)
}

/// Per-frame chance a ready robot decides to fire
pub fn fire_probability(level: u32) -> f64 {
    0.001 + 0.0001 * level.min(100) as f64
}

/// Robots queued for a level
pub fn enemy_count(level: u32) -> usize {
    4 + level as usize
}

/// How many of the queued robots are aggressive
pub fn aggressive_count(level: u32) -> usize {
    (level as usize / 3 + 1).min(enemy_count(level))
}

/// Shuffled spawn queue for a level
pub fn pending_enemies(level: u32, rng: &mut GameRng) -> Vec<RobotKind> {
    let total = enemy_count(level);
    let aggressive = aggressive_count(level);
    let mut queue = vec![RobotKind::Aggressive; aggressive];
    queue.resize(total, RobotKind::Normal);
    rng.shuffle(&mut queue);
    queue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_enemies_curve() {
        assert_eq!(max_enemies(0), 3);
        assert_eq!(max_enemies(1), 3);
        assert_eq!(max_enemies(4), 5);
        assert_eq!(max_enemies(10), 8);
        assert_eq!(max_enemies(500), 8);
    }

    #[test]
    fn test_fire_probability_caps_at_level_100() {
        assert!((fire_probability(0) - 0.001).abs() < 1e-12);
        assert!((fire_probability(100) - 0.011).abs() < 1e-12);
        assert_eq!(fire_probability(100), fire_probability(250));
    }

    #[test]
    fn test_pending_queue_composition() {
        let mut rng = GameRng::new(5);
        for level in 0..20 {
            let queue = pending_enemies(level, &mut rng);
            assert_eq!(queue.len(), enemy_count(level));
            let aggressive = queue
                .iter()
                .filter(|k| **k == RobotKind::Aggressive)
                .count();
            assert_eq!(aggressive, aggressive_count(level));
        }
    }

    #[test]
    fn test_more_aggressive_robots_later() {
        assert!(aggressive_count(9) > aggressive_count(0));
    }
}
