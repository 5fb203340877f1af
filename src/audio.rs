//! Sine-tone sound effects written as mono 16-bit PCM WAV.

pub mod tone;
pub mod wav;

pub use tone::{SoundEffect, ToneParams, default_effects, make_sine, make_test_audio};
pub use wav::{encode_wav, write_wav};
