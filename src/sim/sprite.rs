//! Sprite states
//!
//! Every entity derives one of these each frame from its own state. Asset
//! names are only produced at the render boundary (`render::asset_name`).

use serde::{Deserialize, Serialize};

/// Which way an entity faces, as used in asset keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn from_direction(direction_x: i32) -> Self {
        if direction_x > 0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            Facing::Left => 0,
            Facing::Right => 1,
        }
    }
}

/// Enemy kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RobotKind {
    #[default]
    Normal,
    Aggressive,
}

impl RobotKind {
    pub fn index(&self) -> u32 {
        match self {
            RobotKind::Normal => 0,
            RobotKind::Aggressive => 1,
        }
    }
}

/// Pickup kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Raspberry,
    Lemon,
    ExtraHealth,
    ExtraLife,
}

impl FruitKind {
    pub const ALL: [FruitKind; 5] = [
        FruitKind::Apple,
        FruitKind::Raspberry,
        FruitKind::Lemon,
        FruitKind::ExtraHealth,
        FruitKind::ExtraLife,
    ];

    pub fn index(&self) -> u32 {
        match self {
            FruitKind::Apple => 0,
            FruitKind::Raspberry => 1,
            FruitKind::Lemon => 2,
            FruitKind::ExtraHealth => 3,
            FruitKind::ExtraLife => 4,
        }
    }
}

/// What a pop animation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PopKind {
    Fruit,
    Orb,
}

impl PopKind {
    pub fn index(&self) -> u32 {
        match self {
            PopKind::Fruit => 0,
            PopKind::Orb => 1,
        }
    }
}

/// Player sprite state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSprite {
    /// Flicker frame while invulnerable
    Hidden,
    Still,
    Run { facing: Facing, frame: u32 },
    Blow { facing: Facing },
    Recoil { facing: Facing },
    Fall { frame: u32 },
}

/// Drawable sprite state for any entity or level element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Background { colour: u32 },
    Block { colour: u32 },
    Player(PlayerSprite),
    Robot {
        kind: RobotKind,
        facing: Facing,
        frame: u32,
    },
    /// Inflating (0..3) or idle floating (3..7) orb
    Orb { frame: u32 },
    /// Orb holding a captured robot
    Trap { kind: RobotKind, frame: u32 },
    Bolt { facing: Facing, frame: u32 },
    Fruit { kind: FruitKind, frame: u32 },
    Pop { kind: PopKind, frame: u32 },
    /// Menu title card
    Title,
    /// Animated "press space" prompt on the menu
    Prompt { frame: u32 },
    /// Game over banner
    GameOver,
}
