use std::{
    f64::consts::PI,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{AssetError, AssetResult};

/// Full-scale magnitude of a 16-bit sample. Symmetric, so `-32768` is never produced.
pub const FULL_SCALE: f64 = 32767.0;

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// A pure sine tone.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToneParams {
    pub frequency_hz: f64,
    pub duration_secs: f64,
    /// Peak amplitude as a fraction of full scale, in `[0, 1]`.
    pub amplitude: f64,
    pub sample_rate: u32,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            frequency_hz: 440.0,
            duration_secs: 0.18,
            amplitude: 0.5,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl ToneParams {
    pub fn new(frequency_hz: f64, duration_secs: f64, amplitude: f64) -> Self {
        Self {
            frequency_hz,
            duration_secs,
            amplitude,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> AssetResult<()> {
        if self.sample_rate == 0 {
            return Err(AssetError::validation("sample rate must be > 0"));
        }
        if !self.frequency_hz.is_finite() {
            return Err(AssetError::validation("frequency must be finite"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(AssetError::validation("duration must be finite and >= 0"));
        }
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(AssetError::validation(format!(
                "amplitude must be in [0, 1], got {}",
                self.amplitude
            )));
        }
        Ok(())
    }

    /// `floor(duration * rate)`.
    pub fn sample_count(&self) -> usize {
        (self.duration_secs * f64::from(self.sample_rate)) as usize
    }
}

/// Synthesize the tone as signed 16-bit samples.
///
/// Sample `i` is `trunc(32767 * amp * sin(2π * freq * i / rate))`.
pub fn make_sine(params: &ToneParams) -> AssetResult<Vec<i16>> {
    params.validate()?;
    let rate = f64::from(params.sample_rate);
    let peak = FULL_SCALE * params.amplitude;
    let samples = (0..params.sample_count())
        .map(|i| {
            let t = i as f64 / rate;
            (peak * (2.0 * PI * params.frequency_hz * t).sin()) as i16
        })
        .collect();
    Ok(samples)
}

/// A named effect file and the tone it holds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SoundEffect {
    pub file_name: String,
    pub tone: ToneParams,
}

/// Output directory for effects, relative to the asset root.
pub const AUDIO_DIR: &str = "assets/audio";

/// The shipped effects: short swap/match blips and a long low ambient pad.
pub fn default_effects() -> Vec<SoundEffect> {
    vec![
        SoundEffect {
            file_name: "swap.wav".to_string(),
            tone: ToneParams::new(880.0, 0.08, 0.25),
        },
        SoundEffect {
            file_name: "match.wav".to_string(),
            tone: ToneParams::new(440.0, 0.18, 0.28),
        },
        SoundEffect {
            file_name: "ambient.wav".to_string(),
            tone: ToneParams::new(110.0, 8.0, 0.12),
        },
    ]
}

/// Create `<root>/assets/audio` if needed and write every effect into it.
#[tracing::instrument(skip(effects), fields(count = effects.len()))]
pub fn make_test_audio(root: &Path, effects: &[SoundEffect]) -> AssetResult<Vec<PathBuf>> {
    let dir = root.join(AUDIO_DIR);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create directory '{}'", dir.display()))?;

    let mut written = Vec::with_capacity(effects.len());
    for effect in effects {
        let samples = make_sine(&effect.tone)?;
        let path = dir.join(&effect.file_name);
        super::wav::write_wav(&path, &samples, effect.tone.sample_rate)?;
        tracing::debug!(path = %path.display(), samples = samples.len(), "wrote tone");
        written.push(path);
    }
    Ok(written)
}
