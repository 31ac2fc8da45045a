//! Web Audio backends (WASM only)

use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContext, GainNode, HtmlAudioElement, OscillatorNode, OscillatorType};

use super::{MusicBackend, PlaybackError, SoundEffect, Wave};

/// `<audio>` element driven music
pub struct HtmlAudioBackend {
    el: Option<HtmlAudioElement>,
}

impl HtmlAudioBackend {
    pub fn new(el: Option<HtmlAudioElement>) -> Self {
        Self { el }
    }
}

impl MusicBackend for HtmlAudioBackend {
    fn set_volume(&mut self, volume: f32) {
        if let Some(el) = &self.el {
            el.set_volume(volume as f64);
        }
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let el = self.el.as_ref().ok_or(PlaybackError::Missing)?;
        let promise = el
            .play()
            .map_err(|e| PlaybackError::Rejected(format!("{:?}", e)))?;

        // Autoplay refusals arrive later as a rejected promise
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Music autoplay blocked; user interaction needed ({:?})", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(el) = &self.el {
            el.pause().ok();
        }
    }
}

/// Procedural sound effects
pub struct SfxPlayer {
    ctx: Option<AudioContext>,
    volume: f32,
    enabled: bool,
}

impl SfxPlayer {
    pub fn new(enabled: bool) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - sound effects disabled");
        }
        Self {
            ctx,
            volume: 0.8,
            enabled,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    pub fn play(&self, effect: SoundEffect) {
        if !self.enabled || self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        for tone in effect.tones() {
            let wave = match tone.wave {
                Wave::Sine => OscillatorType::Sine,
                Wave::Triangle => OscillatorType::Triangle,
            };
            let Some((osc, gain)) = self.create_osc(ctx, tone.freq, wave) else {
                continue;
            };
            let t = ctx.current_time() + tone.delay;
            gain.gain()
                .set_value_at_time(self.volume * tone.gain, t)
                .ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + tone.duration * 0.8)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + tone.duration).ok();
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}
