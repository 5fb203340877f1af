use image::{GrayImage, RgbaImage};

use crate::{
    AssetError, AssetResult, Canvas, Rgba8, Rgba8Premul,
    assets::decode::premultiply_rgba8_in_place,
    blur_cpu,
    composite_cpu::{self, BlendMode},
    foundation::core::unpremul,
};

/// Owned raster in premultiplied RGBA8, row-major, tightly packed.
///
/// All compositing happens in premultiplied space; conversion to straight alpha only
/// happens at the edges ([`Surface::from_rgba_image`] / [`Surface::to_rgba_image`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    rgba8_premul: Vec<u8>,
}

impl Surface {
    /// Fully transparent surface covering `canvas`.
    pub fn transparent(canvas: Canvas) -> AssetResult<Self> {
        let len = canvas.rgba_len()?;
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            rgba8_premul: vec![0u8; len],
        })
    }

    /// Premultiply a straight-alpha image.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut rgba8_premul = img.as_raw().clone();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        Self {
            width,
            height,
            rgba8_premul,
        }
    }

    /// Wrap an already premultiplied buffer.
    ///
    /// Filtering can overshoot, so color channels are clamped to alpha.
    pub fn from_premultiplied(
        width: u32,
        height: u32,
        mut rgba8_premul: Vec<u8>,
    ) -> AssetResult<Self> {
        if rgba8_premul.len() != width as usize * height as usize * 4 {
            return Err(AssetError::validation(
                "premultiplied buffer must match width*height*4",
            ));
        }
        for px in rgba8_premul.chunks_exact_mut(4) {
            let a = px[3];
            px[0] = px[0].min(a);
            px[1] = px[1].min(a);
            px[2] = px[2].min(a);
        }
        Ok(Self {
            width,
            height,
            rgba8_premul,
        })
    }

    /// Convert back to a straight-alpha image for encoding.
    pub fn to_rgba_image(&self) -> AssetResult<RgbaImage> {
        let mut raw = self.rgba8_premul.clone();
        for px in raw.chunks_exact_mut(4) {
            let a = px[3];
            px[0] = unpremul(px[0], a);
            px[1] = unpremul(px[1], a);
            px[2] = unpremul(px[2], a);
        }
        RgbaImage::from_raw(self.width, self.height, raw)
            .ok_or_else(|| AssetError::encode("surface buffer does not match its dimensions"))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.rgba8_premul
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let p = &self.rgba8_premul[i..i + 4];
        Some(Rgba8Premul {
            r: p[0],
            g: p[1],
            b: p[2],
            a: p[3],
        })
    }

    /// Overwrite the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: Rgba8Premul) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        self.rgba8_premul[i..i + 4].copy_from_slice(&px.to_array());
    }

    /// Overwrite a whole row with one color.
    pub fn fill_row(&mut self, y: u32, color: Rgba8) {
        if y >= self.height {
            return;
        }
        let px = color.premultiplied().to_array();
        let start = self.index(0, y);
        let end = start + self.width as usize * 4;
        for dst in self.rgba8_premul[start..end].chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }

    /// Source-over composite `src` with its top-left corner at `(x, y)`.
    pub fn draw_over(&mut self, src: &Surface, x: i64, y: i64) -> AssetResult<()> {
        self.composite(src, x, y, BlendMode::Over)
    }

    /// Paste `src` at `(x, y)` masked by its own alpha (see [`composite_cpu::paste`]).
    pub fn paste(&mut self, src: &Surface, x: i64, y: i64) -> AssetResult<()> {
        self.composite(src, x, y, BlendMode::Paste)
    }

    /// Place `src` at `(x, y)` with the given blend. Off-canvas pixels are dropped.
    pub fn composite(&mut self, src: &Surface, x: i64, y: i64, mode: BlendMode) -> AssetResult<()> {
        composite_cpu::composite_at_in_place(
            &mut self.rgba8_premul,
            self.width,
            self.height,
            &src.rgba8_premul,
            src.width,
            src.height,
            x,
            y,
            mode,
        )
    }

    /// Clip to `mask`: every pixel is scaled by its mask value / 255.
    pub fn apply_mask(&mut self, mask: &GrayImage) -> AssetResult<()> {
        if mask.dimensions() != (self.width, self.height) {
            return Err(AssetError::validation(format!(
                "mask is {}x{}, surface is {}x{}",
                mask.width(),
                mask.height(),
                self.width,
                self.height
            )));
        }
        composite_cpu::mask_in_place(&mut self.rgba8_premul, mask.as_raw())
    }

    /// Stamp a solid `color` through the alpha channel of `src` placed at `(x, y)`.
    ///
    /// Each covered pixel is replaced by `color` scaled by the source alpha; pixels where
    /// the source is fully transparent are left untouched.
    pub fn stamp_alpha(&mut self, src: &Surface, x: i64, y: i64, color: Rgba8) {
        let solid = color.premultiplied().to_array();
        for sy in 0..src.height {
            let dy = y + i64::from(sy);
            if dy < 0 || dy >= i64::from(self.height) {
                continue;
            }
            for sx in 0..src.width {
                let dx = x + i64::from(sx);
                if dx < 0 || dx >= i64::from(self.width) {
                    continue;
                }
                let coverage = src.rgba8_premul[src.index(sx, sy) + 3];
                if coverage == 0 {
                    continue;
                }
                let di = self.index(dx as u32, dy as u32);
                let d = &mut self.rgba8_premul[di..di + 4];
                let out = composite_cpu::paste([d[0], d[1], d[2], d[3]], solid, coverage);
                d.copy_from_slice(&out);
            }
        }
    }

    /// Gaussian blur with standard deviation `sigma` (pixels).
    pub fn gaussian_blur(&self, sigma: f32) -> AssetResult<Self> {
        let rgba8_premul =
            blur_cpu::blur_rgba8_premul(&self.rgba8_premul, self.width, self.height, sigma)?;
        Ok(Self {
            width: self.width,
            height: self.height,
            rgba8_premul,
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}
