//! Audio via the Web Audio API
//!
//! Procedurally generated sounds - no external files needed. The game
//! signals exactly two events: run start (looping background pad) and run
//! end (stop the pad, play a one-shot terminal sweep). Every call is
//! fire-and-forget; a rejected or failed playback never reaches game state.

use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;

/// Level of the background pad relative to the music volume
const PAD_LEVEL: f32 = 0.15;

/// Oscillators backing the looping background pad
struct MusicHandle {
    voices: Vec<OscillatorNode>,
    gain: GainNode,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    music: Option<MusicHandle>,
    master_volume: f32,
    music_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            music: None,
            master_volume: 0.8,
            music_volume: 0.4,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Adopt the persisted preferences
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.master_volume = settings.master_volume.clamp(0.0, 1.0);
        self.music_volume = settings.music_volume.clamp(0.0, 1.0);
        self.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        self.muted = settings.muted;
    }

    /// Mute/unmute, adjusting a playing pad in place
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(handle) = &self.music {
            handle.gain.gain().set_value(self.music_gain());
        }
    }

    /// Resume the context (required after a user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    fn music_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume * PAD_LEVEL
        }
    }

    fn sfx_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Run started: start the looping background pad (restarting if one is
    /// somehow still up)
    pub fn run_started(&mut self) {
        self.stop_music();

        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Ok(gain) = ctx.create_gain() else { return };
        gain.gain().set_value(self.music_gain());
        if gain.connect_with_audio_node(&ctx.destination()).is_err() {
            return;
        }

        // Two detuned triangles give the pad some width
        let mut voices = Vec::new();
        for freq in [110.0_f32, 164.8] {
            let Ok(osc) = ctx.create_oscillator() else {
                continue;
            };
            osc.set_type(OscillatorType::Triangle);
            osc.frequency().set_value(freq);
            if osc.connect_with_audio_node(&gain).is_ok() && osc.start().is_ok() {
                voices.push(osc);
            }
        }

        // Slow amplitude wobble so the loop does not sit still
        if let (Ok(lfo), Ok(depth)) = (ctx.create_oscillator(), ctx.create_gain()) {
            lfo.set_type(OscillatorType::Sine);
            lfo.frequency().set_value(0.4);
            depth.gain().set_value(self.music_gain() * 0.5);
            if lfo.connect_with_audio_node(&depth).is_ok()
                && depth.connect_with_audio_param(&gain.gain()).is_ok()
                && lfo.start().is_ok()
            {
                voices.push(lfo);
            }
        }

        self.music = Some(MusicHandle { voices, gain });
    }

    /// Run ended: stop the pad and play the terminal sweep
    pub fn run_ended(&mut self) {
        self.stop_music();
        self.play_terminal_sweep();
    }

    fn stop_music(&mut self) {
        if let Some(handle) = self.music.take() {
            for osc in &handle.voices {
                let _ = osc.stop();
            }
            let _ = handle.gain.disconnect();
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

    /// Game over - falling sweep with a low thump under it
    fn play_terminal_sweep(&self) {
        let vol = self.sfx_gain();
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        let t = ctx.current_time();

        if let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sawtooth) {
            gain.gain().set_value_at_time(vol * 0.35, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                .ok();
            osc.frequency().set_value_at_time(400.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(80.0, t + 0.5)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.6).ok();
        }

        if let Some((osc, gain)) = self.create_osc(ctx, 60.0, OscillatorType::Sine) {
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.3).ok();
        }
    }
}
