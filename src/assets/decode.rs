use std::path::Path;

use anyhow::Context;
use image::{RgbaImage, imageops::FilterType};

use crate::{AssetError, AssetResult, Surface, foundation::core::premul};

/// Read and decode an image file, converting it to straight RGBA8.
///
/// The container format is sniffed from the bytes, not the extension.
pub fn load_rgba(path: &Path) -> AssetResult<RgbaImage> {
    let bytes = std::fs::read(path).with_context(|| format!("open image '{}'", path.display()))?;
    decode_rgba(&bytes).map_err(|e| AssetError::decode(format!("'{}': {e}", path.display())))
}

fn decode_rgba(bytes: &[u8]) -> image::ImageResult<RgbaImage> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Largest centered square inside `img`.
pub fn center_square_crop(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    let side = w.min(h);
    let left = (w - side) / 2;
    let top = (h - side) / 2;
    image::imageops::crop_imm(img, left, top, side, side).to_image()
}

/// Lanczos3 resample to exactly `width` x `height`, filtering premultiplied pixels.
///
/// Filtering straight alpha would drag the color of fully transparent neighbors into
/// antialiased edges; premultiplying first keeps edge colors intact.
pub fn resize_lanczos(img: &RgbaImage, width: u32, height: u32) -> AssetResult<Surface> {
    if width == 0 || height == 0 {
        return Err(AssetError::validation(format!(
            "resize target must be non-empty, got {width}x{height}"
        )));
    }
    if img.width() == 0 || img.height() == 0 {
        return Err(AssetError::decode("cannot resize an empty image"));
    }

    let mut buf = img.clone();
    premultiply_rgba8_in_place(&mut buf);
    let resized = image::imageops::resize(&buf, width, height, FilterType::Lanczos3);
    Surface::from_premultiplied(width, height, resized.into_raw())
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        px[0] = premul(px[0], a);
        px[1] = premul(px[1], a);
        px[2] = premul(px[2], a);
    }
}
