//! Audible feedback for presses, low time and expiry.
//!
//! The browser implementation builds a short oscillator graph per cue on a
//! single shared `AudioContext`. That context is created on the first cue
//! and lives as long as the [`WebAudioTone`] that owns it; the root component
//! hands one instance to the rest of the app through [`ToneService`].

use crate::config::{
    EXPIRY_DURATION_SECS, EXPIRY_FREQUENCY_HZ, FADE_FLOOR_GAIN, PRESS_FADE_SECS,
    PRESS_FREQUENCY_HZ, TONE_GAIN, WARNING_DURATION_SECS, WARNING_FREQUENCY_HZ,
};
use log::{debug, warn};
use once_cell::unsync::OnceCell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// The three cues the clock can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Press,
    Warning,
    Expiry,
}

/// How the gain behaves over the life of a cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope {
    /// Constant gain, hard stop at the end.
    Flat,
    /// Exponential ramp down to near silence at the end.
    Fade,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneProfile {
    pub frequency_hz: f32,
    pub duration_secs: f64,
    pub waveform: OscillatorType,
    pub envelope: Envelope,
}

impl Tone {
    pub fn profile(self) -> ToneProfile {
        match self {
            Tone::Press => ToneProfile {
                frequency_hz: PRESS_FREQUENCY_HZ,
                duration_secs: PRESS_FADE_SECS,
                waveform: OscillatorType::Sine,
                envelope: Envelope::Fade,
            },
            Tone::Warning => ToneProfile {
                frequency_hz: WARNING_FREQUENCY_HZ,
                duration_secs: WARNING_DURATION_SECS,
                waveform: OscillatorType::Sine,
                envelope: Envelope::Flat,
            },
            Tone::Expiry => ToneProfile {
                frequency_hz: EXPIRY_FREQUENCY_HZ,
                duration_secs: EXPIRY_DURATION_SECS,
                waveform: OscillatorType::Sine,
                envelope: Envelope::Flat,
            },
        }
    }
}

/// Failure reported by the audio backend.
#[derive(Debug)]
pub enum ToneError {
    ContextUnavailable(String),
    Graph { tone: Tone, detail: String },
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::ContextUnavailable(detail) => {
                write!(f, "Audio context unavailable: {}", detail)
            }
            ToneError::Graph { tone, detail } => {
                write!(f, "Failed to play {:?} tone: {}", tone, detail)
            }
        }
    }
}

impl std::error::Error for ToneError {}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Anything that can turn a [`Tone`] into sound. Playing never blocks and
/// never reports back to the caller.
pub trait ToneSink {
    fn play(&self, tone: Tone);
}

/// Web Audio backed sink.
#[derive(Default)]
pub struct WebAudioTone {
    context: OnceCell<AudioContext>,
}

impl WebAudioTone {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&self) -> Result<&AudioContext, ToneError> {
        self.context.get_or_try_init(|| {
            debug!("Creating shared audio context");
            AudioContext::new().map_err(|e| ToneError::ContextUnavailable(describe(&e)))
        })
    }

    fn try_play(&self, tone: Tone) -> Result<(), ToneError> {
        let ctx = self.context()?;
        let profile = tone.profile();
        let graph_err = |e: JsValue| ToneError::Graph {
            tone,
            detail: describe(&e),
        };

        let oscillator = ctx.create_oscillator().map_err(graph_err)?;
        let gain = ctx.create_gain().map_err(graph_err)?;
        oscillator.set_type(profile.waveform);
        oscillator.frequency().set_value(profile.frequency_hz);
        oscillator
            .connect_with_audio_node(&gain)
            .map_err(graph_err)?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(graph_err)?;

        let now = ctx.current_time();
        let stop_at = now + profile.duration_secs;
        gain.gain().set_value(TONE_GAIN);
        if profile.envelope == Envelope::Fade {
            gain.gain()
                .exponential_ramp_to_value_at_time(FADE_FLOOR_GAIN, stop_at)
                .map_err(graph_err)?;
        }

        oscillator.start().map_err(graph_err)?;
        oscillator.stop_with_when(stop_at).map_err(graph_err)?;
        Ok(())
    }
}

impl ToneSink for WebAudioTone {
    fn play(&self, tone: Tone) {
        if let Err(e) = self.try_play(tone) {
            warn!("{}", e);
        }
    }
}

/// Shared handle to the app's tone sink, provided through Yew context.
#[derive(Clone)]
pub struct ToneService(Rc<dyn ToneSink>);

impl ToneService {
    pub fn new(sink: impl ToneSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    pub fn play(&self, tone: Tone) {
        self.0.play(tone);
    }
}

impl PartialEq for ToneService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ToneService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ToneService")
    }
}
