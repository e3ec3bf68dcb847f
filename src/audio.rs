//! Sound cue dispatch
//!
//! The simulation only queues [`SoundCue`]s. This module picks one of the
//! recorded variants and hands the asset to whatever [`AudioSink`] the
//! platform provides. Playback failures are logged and otherwise ignored.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::AudioError;
use crate::settings::Settings;
use crate::sim::{GameEvent, SoundCue};

/// Something that can play a named sound
pub trait AudioSink {
    /// Play variant `variant` of sound `name` at `volume` (0.0 - 1.0)
    fn play(&mut self, name: &str, variant: u32, volume: f32) -> Result<(), AudioError>;
}

/// Discards every sound
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _name: &str, _variant: u32, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Logs sounds instead of playing them (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, name: &str, variant: u32, volume: f32) -> Result<(), AudioError> {
        log::trace!("sound {name}{variant} at volume {volume:.2}");
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn AudioSink>,
    rng: Pcg32,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>, seed: u64) -> Self {
        Self {
            sink,
            rng: Pcg32::seed_from_u64(seed),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with volumes taken from settings
    pub fn from_settings(sink: Box<dyn AudioSink>, seed: u64, settings: &Settings) -> Self {
        let mut audio = Self::new(sink, seed);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play one cue, choosing a variant at random
    pub fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let variant = self.rng.random_range(0..cue.variant_count());
        log::debug!("Playing {}{}", cue.name(), variant);
        if let Err(err) = self.sink.play(cue.name(), variant, vol) {
            log::warn!("Failed to play {}{}: {}", cue.name(), variant, err);
        }
    }

    /// Play every sound cue among `events`
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Sound(cue) = event {
                self.play(*cue);
            }
        }
    }
}
