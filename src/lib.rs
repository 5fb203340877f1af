//! Deterministic generators for static game assets.
//!
//! - [`icons::make_fishing_icon`]: rounded gradient tile with a drop-shadowed cutout.
//! - [`icons::make_app_icon`]: photo (or gradient) background with glow and sprites.
//! - [`audio::make_test_audio`]: sine-tone sound effects as mono 16-bit WAV.
//!
//! Every generator also has a pure counterpart that works on in-memory buffers.
#![forbid(unsafe_code)]

pub mod assets;
pub mod audio;
pub mod blur_cpu;
pub mod cli;
pub mod composite_cpu;
pub mod foundation;
pub mod icons;
pub mod shapes;
pub mod surface;

pub use foundation::core::{Canvas, Offset, Rgb8, Rgba8, Rgba8Premul};
pub use foundation::error::{AssetError, AssetResult};
pub use surface::Surface;
