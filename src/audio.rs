//! Sound cue mixing
//!
//! The simulation asks for cues through [`AudioOut`]; the audio manager applies
//! the player's volume settings and queues what should actually be heard. The
//! platform layer drains the queue once per frame and hands it to the device.

use crate::config::AudioSettings;
use crate::platform::{AudioOut, SoundId};

/// A cue ready for the audio device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedCue {
    pub sound: SoundId,
    /// Effective volume (0.0 - 1.0)
    pub volume: f32,
}

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    queue: Vec<QueuedCue>,
    /// Total cues accepted since creation
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&AudioSettings::default())
    }
}

impl AudioManager {
    pub fn new(settings: &AudioSettings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            queue: Vec::new(),
            played: 0,
        }
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

    /// Take every cue queued since the last drain
    pub fn drain(&mut self) -> std::vec::Drain<'_, QueuedCue> {
        self.queue.drain(..)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioOut for AudioManager {
    fn play(&mut self, sound: SoundId) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return;
        }
        self.queue.push(QueuedCue { sound, volume });
        self.played += 1;
    }
}
