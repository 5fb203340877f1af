use std::{io::Cursor, path::Path};

use anyhow::Context;
use image::RgbaImage;

use crate::{AssetError, AssetResult};

/// Encode `img` as PNG entirely in memory.
pub fn encode_png(img: &RgbaImage) -> AssetResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| AssetError::encode(format!("png: {e}")))?;
    Ok(buf)
}

/// Encode then write `img` to `path` in a single write, creating parent directories.
///
/// Encoding finishes before the file is opened, so an encode failure never leaves a
/// partial file behind.
pub fn write_png(path: &Path, img: &RgbaImage) -> AssetResult<()> {
    let bytes = encode_png(img)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, &bytes).with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

/// `mkdir -p` for the directory holding `path`; a no-op when it already exists.
pub fn ensure_parent_dir(path: &Path) -> AssetResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory '{}'", parent.display()))?;
    }
    Ok(())
}
