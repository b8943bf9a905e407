//! Two-player countdown clock ("chess clock") for the browser.
//!
//! The core is the turn/timer state machine in [`clock`]; [`hooks`] wires it
//! to a Yew component tree together with the one-second [`ticker`] and the
//! Web Audio [`tone`] cues.

pub mod clock;
pub mod components;
pub mod config;
pub mod history;
pub mod hooks;
pub mod ticker;
pub mod tone;

pub use clock::{ClockAction, ClockState, Effect, Effects, GameConfig, Phase, Player};
pub use history::{History, Turn};
pub use tone::{Tone, ToneService, ToneSink, WebAudioTone};
