//! Audio: background music and procedural sound effects
//!
//! Music is a fire-and-forget collaborator. Browsers may refuse to start it
//! before a user gesture; that refusal is logged and otherwise ignored, and
//! playback is never retried on its own.

#[cfg(target_arch = "wasm32")]
pub mod web;

use thiserror::Error;

use crate::sim::GameEvent;

/// Why music did not start
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("music element not found")]
    Missing,

    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Platform side of the music player
pub trait MusicBackend {
    fn set_volume(&mut self, volume: f32);
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
}

/// Backend for builds without audio output
#[derive(Debug, Default)]
pub struct SilentBackend;

impl MusicBackend for SilentBackend {
    fn set_volume(&mut self, _volume: f32) {}

    fn play(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn pause(&mut self) {}
}

/// Background music player with a fixed volume preset
pub struct Music<B: MusicBackend> {
    backend: B,
    volume: f32,
    playing: bool,
}

impl<B: MusicBackend> Music<B> {
    pub fn new(backend: B, volume: f32) -> Self {
        Self {
            backend,
            volume: volume.clamp(0.0, 1.0),
            playing: false,
        }
    }

    /// Start playback; a refusal is logged and swallowed
    pub fn play(&mut self) {
        self.backend.set_volume(self.volume);
        match self.backend.play() {
            Ok(()) => self.playing = true,
            Err(e) => {
                self.playing = false;
                log::warn!("Music autoplay blocked; user interaction needed ({})", e);
            }
        }
    }

    pub fn pause(&mut self) {
        self.backend.pause();
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Triangle,
}

/// One enveloped oscillator note
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    /// Seconds after the effect starts
    pub delay: f64,
    /// Seconds until the note stops
    pub duration: f64,
    /// Peak gain relative to the effect volume
    pub gain: f32,
    pub wave: Wave,
}

const fn tone(freq: f32, delay: f64, duration: f64, gain: f32, wave: Wave) -> Tone {
    Tone {
        freq,
        delay,
        duration,
        gain,
        wave,
    }
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Heart landed in the paddle
    Catch,
    /// Love meter filled
    MeterFull,
}

const CATCH_TONES: [Tone; 2] = [
    tone(660.0, 0.0, 0.15, 0.25, Wave::Sine),
    tone(880.0, 0.06, 0.2, 0.2, Wave::Sine),
];

const METER_FULL_TONES: [Tone; 5] = [
    tone(523.0, 0.0, 0.3, 0.25, Wave::Triangle),
    tone(659.0, 0.1, 0.3, 0.25, Wave::Triangle),
    tone(784.0, 0.2, 0.3, 0.25, Wave::Triangle),
    tone(1047.0, 0.3, 0.5, 0.3, Wave::Triangle),
    tone(1319.0, 0.45, 0.6, 0.2, Wave::Sine),
];

impl SoundEffect {
    /// Effect that accompanies a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::HeartCaught { .. } => Some(SoundEffect::Catch),
            GameEvent::ThresholdReached { .. } => Some(SoundEffect::MeterFull),
            _ => None,
        }
    }

    pub fn tones(&self) -> &'static [Tone] {
        match self {
            SoundEffect::Catch => &CATCH_TONES,
            SoundEffect::MeterFull => &METER_FULL_TONES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// Counts calls and fails playback on demand
    #[derive(Default)]
    struct ScriptedBackend {
        refuse: bool,
        plays: u32,
        pauses: u32,
        volume: Option<f32>,
    }

    impl MusicBackend for ScriptedBackend {
        fn set_volume(&mut self, volume: f32) {
            self.volume = Some(volume);
        }

        fn play(&mut self) -> Result<(), PlaybackError> {
            self.plays += 1;
            if self.refuse {
                Err(PlaybackError::Rejected("NotAllowedError".into()))
            } else {
                Ok(())
            }
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    #[test]
    fn test_play_applies_volume_preset() {
        let mut music = Music::new(ScriptedBackend::default(), 0.3);
        music.play();
        assert!(music.is_playing());
        assert_eq!(music.backend().volume, Some(0.3));
        music.pause();
        assert!(!music.is_playing());
        assert_eq!(music.backend().pauses, 1);
    }

    #[test]
    fn test_refused_play_is_swallowed_without_retry() {
        let backend = ScriptedBackend {
            refuse: true,
            ..Default::default()
        };
        let mut music = Music::new(backend, 0.3);
        music.play();
        assert!(!music.is_playing());
        assert_eq!(music.backend().plays, 1);
    }

    #[test]
    fn test_effects_for_events() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::HeartCaught { pos: Vec2::ZERO }),
            Some(SoundEffect::Catch)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::ThresholdReached { score: 15 }),
            Some(SoundEffect::MeterFull)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::HeartMissed), None);
    }

    #[test]
    fn test_tones_are_audible() {
        for effect in [SoundEffect::Catch, SoundEffect::MeterFull] {
            for t in effect.tones() {
                assert!(t.freq > 20.0 && t.freq < 20_000.0);
                assert!(t.duration > 0.0 && t.gain > 0.0);
            }
        }
    }
}
