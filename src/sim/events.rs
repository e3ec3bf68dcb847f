//! Events emitted by a simulation tick
//!
//! The simulation never plays audio itself. It queues cues here and the
//! shell decides what to do with them.

/// Named sound cue with a fixed number of recorded variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Blow,
    Jump,
    Laser,
    Trap,
    Pop,
    Score,
    Bonus,
    Ouch,
    Die,
    Level,
    Over,
}

impl SoundCue {
    /// Asset prefix; the variant index is appended by the player
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Blow => "blow",
            SoundCue::Jump => "jump",
            SoundCue::Laser => "laser",
            SoundCue::Trap => "trap",
            SoundCue::Pop => "pop",
            SoundCue::Score => "score",
            SoundCue::Bonus => "bonus",
            SoundCue::Ouch => "ouch",
            SoundCue::Die => "die",
            SoundCue::Level => "level",
            SoundCue::Over => "over",
        }
    }

    pub fn variant_count(&self) -> u32 {
        match self {
            SoundCue::Blow | SoundCue::Laser | SoundCue::Trap | SoundCue::Pop | SoundCue::Ouch => 4,
            _ => 1,
        }
    }
}

/// Something the outside world may want to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundCue),
    /// A new level began (0-based index)
    LevelAdvanced { level: u32 },
    /// The player fell off the bottom after losing all health
    PlayerDied { lives_left: i32 },
    /// No lives remain
    GameOver,
}
