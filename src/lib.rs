//! Cavern - a tile-grid cavern platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid collision, entities, game state)
//! - `input`: Per-frame input snapshots and edge detection
//! - `audio`: Sound cue dispatch to an external playback sink
//! - `render`: Draw lists and asset key resolution
//! - `app`: Menu/play/game-over screen shell
//! - `settings`: JSON configuration

pub mod app;
pub mod audio;
pub mod error;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use app::App;
pub use error::{AudioError, ConfigError, LevelError};
pub use input::InputSnapshot;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (frames per second)
    pub const SIM_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const WIDTH: i32 = 800;
    pub const HEIGHT: i32 = 480;

    /// Level grid geometry
    pub const TILE_SIZE: i32 = 25;
    pub const LEVEL_X_OFFSET: i32 = 50;
    pub const NUM_COLUMNS: usize = 28;
    /// Rows including the synthesized floor row
    pub const NUM_ROWS: usize = 18;

    /// Hard world side walls, independent of the grid
    pub const MIN_X: i32 = 70;
    pub const MAX_X: i32 = 730;

    /// Terminal fall speed for gravity bodies
    pub const MAX_FALL_SPEED: i32 = 10;
}

/// Sign of `x` as a facing direction (zero counts as right)
#[inline]
pub fn sign(x: f32) -> i32 {
    if x < 0.0 { -1 } else { 1 }
}
