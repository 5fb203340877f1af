use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::{
    AssetError, AssetResult, Canvas, Offset, Rgb8, Rgba8, Surface,
    assets::{decode, encode},
    shapes,
};

use super::centered;

/// Inputs of the fishing icon: a rounded gradient tile with a drop-shadowed cutout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FishingIconParams {
    pub canvas: Canvas,
    pub gradient_top: Rgb8,
    pub gradient_bottom: Rgb8,
    /// Corner radius of the rounded-square clip, in pixels.
    pub corner_radius: u32,
    /// Subject width as a fraction of the canvas width; height follows the source aspect.
    pub subject_width_frac: f64,
    pub shadow_offset: Offset,
    pub shadow_color: Rgba8,
    /// Gaussian standard deviation of the shadow, in pixels.
    pub shadow_blur: f32,
    /// Subject image, relative to the asset root.
    pub subject_path: PathBuf,
    /// Output PNG, relative to the asset root.
    pub output_path: PathBuf,
}

impl Default for FishingIconParams {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 512,
                height: 512,
            },
            gradient_top: Rgb8::new(30, 144, 255),
            gradient_bottom: Rgb8::new(0, 0, 139),
            corner_radius: 90,
            subject_width_frac: 0.8,
            shadow_offset: Offset { x: 5, y: 5 },
            shadow_color: Rgba8::new(0, 0, 0, 100),
            shadow_blur: 5.0,
            subject_path: PathBuf::from("assets/images/fishing_source.png"),
            output_path: PathBuf::from("assets/images/fishing_app_icon.png"),
        }
    }
}

impl FishingIconParams {
    /// Size the subject is resampled to for a source of `src_w` x `src_h`.
    pub fn subject_size(&self, src_w: u32, src_h: u32) -> AssetResult<(u32, u32)> {
        if src_w == 0 || src_h == 0 {
            return Err(AssetError::decode("subject image is empty"));
        }
        let width = (f64::from(self.canvas.width) * self.subject_width_frac) as u32;
        let aspect = f64::from(src_h) / f64::from(src_w);
        let height = (f64::from(width) * aspect) as u32;
        if width == 0 || height == 0 {
            return Err(AssetError::validation(format!(
                "subject scales to an empty {width}x{height} image"
            )));
        }
        Ok((width, height))
    }
}

/// Masked gradient background alone, before any subject is placed.
pub fn render_background(params: &FishingIconParams) -> AssetResult<Surface> {
    let mut bg =
        shapes::vertical_gradient(params.canvas, params.gradient_top, params.gradient_bottom)?;
    let mask = shapes::rounded_rect_mask(params.canvas, params.corner_radius);
    bg.apply_mask(&mask)?;
    Ok(bg)
}

/// Compose the icon from an already-decoded subject image.
#[tracing::instrument(skip_all, fields(src_w = subject.width(), src_h = subject.height()))]
pub fn render_fishing_icon(
    params: &FishingIconParams,
    subject: &RgbaImage,
) -> AssetResult<RgbaImage> {
    let mut icon = render_background(params)?;

    let (w, h) = params.subject_size(subject.width(), subject.height())?;
    let subject = decode::resize_lanczos(subject, w, h)?;
    let x = centered(params.canvas.width, w);
    let y = centered(params.canvas.height, h);
    tracing::debug!(w, h, x, y, "placed subject");

    let mut shadow = Surface::transparent(params.canvas)?;
    shadow.stamp_alpha(
        &subject,
        x + params.shadow_offset.x,
        y + params.shadow_offset.y,
        params.shadow_color,
    );
    let shadow = shadow.gaussian_blur(params.shadow_blur)?;

    // Each layer is pasted using its own alpha as the mask, so translucent pixels
    // lower the icon's alpha instead of accumulating toward opaque.
    icon.paste(&shadow, 0, 0)?;
    icon.paste(&subject, x, y)?;
    icon.to_rgba_image()
}

/// Load the subject under `root`, render, and write the PNG. Returns the written path.
pub fn make_fishing_icon(root: &Path, params: &FishingIconParams) -> AssetResult<PathBuf> {
    let subject = decode::load_rgba(&root.join(&params.subject_path))?;
    let icon = render_fishing_icon(params, &subject)?;
    let out = root.join(&params.output_path);
    encode::write_png(&out, &icon)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_size_keeps_aspect() {
        let p = FishingIconParams::default();
        assert_eq!(p.subject_size(100, 100).unwrap(), (409, 409));
        assert_eq!(p.subject_size(200, 100).unwrap(), (409, 204));
        assert_eq!(p.subject_size(100, 150).unwrap(), (409, 613));
        assert!(p.subject_size(0, 10).is_err());
        assert!(p.subject_size(10_000, 1).is_err());
    }

    #[test]
    fn background_is_clipped_gradient() {
        let bg = render_background(&FishingIconParams::default()).unwrap();
        assert_eq!(bg.pixel(0, 0).unwrap().a, 0);
        assert_eq!(bg.pixel(256, 0).unwrap().to_array(), [30, 144, 255, 255]);
        assert_eq!(bg.pixel(511, 511).unwrap().a, 0);
    }
}
