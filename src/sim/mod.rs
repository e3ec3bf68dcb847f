//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - No rendering, audio or platform dependencies; sounds are queued as events

pub mod body;
pub mod bolt;
pub mod difficulty;
pub mod events;
pub mod fruit;
pub mod grid;
pub mod levels;
pub mod orb;
pub mod player;
pub mod pop;
pub mod rng;
pub mod robot;
pub mod sprite;
pub mod state;
pub mod tick;

pub use body::{Bounds, Gravity, move_by};
pub use bolt::Bolt;
pub use events::{GameEvent, SoundCue};
pub use fruit::Fruit;
pub use grid::{Grid, block_at};
pub use levels::LevelTable;
pub use orb::{Captive, Orb};
pub use player::Player;
pub use pop::Pop;
pub use rng::GameRng;
pub use robot::Robot;
pub use sprite::{Facing, FruitKind, PlayerSprite, PopKind, RobotKind, Sprite};
pub use state::{Frame, GameState};
pub use tick::tick;
