use std::{io::Cursor, path::Path};

use anyhow::Context;
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::AssetResult;

fn mono_pcm16(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Serialize mono 16-bit samples as an uncompressed PCM WAV file image.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> AssetResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut writer =
            WavWriter::new(&mut buf, mono_pcm16(sample_rate)).context("start wav stream")?;
        for &s in samples {
            writer.write_sample(s).context("write wav sample")?;
        }
        writer.finalize().context("finalize wav header")?;
    }
    Ok(buf.into_inner())
}

/// Encode then write in one shot. The parent directory must already exist.
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) -> AssetResult<()> {
    let bytes = encode_wav(samples, sample_rate)?;
    std::fs::write(path, bytes).with_context(|| format!("write wav '{}'", path.display()))?;
    Ok(())
}
