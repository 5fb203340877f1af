use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::{
    AssetError, AssetResult, Canvas, Offset, Rgb8, Rgba8, Surface,
    assets::{decode, encode},
    shapes::{self, PixelBox},
};

use super::centered;

/// Inputs of the layered app icon.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppIconParams {
    pub canvas: Canvas,
    /// Optional background photo; any failure switches to the fallback gradient.
    pub background_path: PathBuf,
    /// Fallback gradient color; alpha ramps from 0 at the top row.
    pub fallback_color: Rgb8,
    pub alien_path: PathBuf,
    pub crystal_path: PathBuf,
    pub star_path: PathBuf,
    /// Alien edge length as a fraction of the canvas width.
    pub alien_frac: f64,
    pub crystal_size: u32,
    pub star_size: u32,
    pub glow_bbox: PixelBox,
    pub glow_color: Rgba8,
    pub glow_blur: f32,
    pub crystal_at: Offset,
    /// Every entry gets its own copy of the star sprite, drawn in order.
    pub stars_at: Vec<Offset>,
    pub output_path: PathBuf,
}

impl Default for AppIconParams {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 512,
                height: 512,
            },
            background_path: PathBuf::from("assets/images/backgrounds/bg_galaxy.jpg"),
            fallback_color: Rgb8::new(20, 40, 100),
            alien_path: PathBuf::from("assets/images/tile_alien.png"),
            crystal_path: PathBuf::from("assets/images/tile_crystal.png"),
            star_path: PathBuf::from("assets/images/tile_star.png"),
            alien_frac: 0.6,
            crystal_size: 120,
            star_size: 80,
            glow_bbox: PixelBox::new(128, 128, 384, 384),
            glow_color: Rgba8::new(0, 255, 150, 100),
            glow_blur: 30.0,
            crystal_at: Offset { x: 40, y: 350 },
            stars_at: vec![Offset { x: 380, y: 60 }, Offset { x: 60, y: 80 }],
            output_path: PathBuf::from("assets/images/app_icon.png"),
        }
    }
}

impl AppIconParams {
    pub fn alien_size(&self) -> u32 {
        (f64::from(self.canvas.width) * self.alien_frac) as u32
    }
}

/// Vertical ramp of `color` from transparent (top) to nearly opaque (bottom).
///
/// Row `y` has alpha `255 * (y / height)`, truncated.
pub fn fallback_background(canvas: Canvas, color: Rgb8) -> AssetResult<Surface> {
    let mut bg = Surface::transparent(canvas)?;
    let h = f64::from(canvas.height);
    for y in 0..canvas.height {
        let alpha = (255.0 * (f64::from(y) / h)) as u8;
        bg.fill_row(y, Rgba8::new(color.r, color.g, color.b, alpha));
    }
    Ok(bg)
}

fn load_photo_background(path: &Path, canvas: Canvas) -> AssetResult<Surface> {
    let photo = decode::load_rgba(path)?;
    let square = decode::center_square_crop(&photo);
    decode::resize_lanczos(&square, canvas.width, canvas.height)
}

/// Background photo cropped and scaled to `canvas`, or the fallback gradient.
///
/// Load and decode failures never surface; only an unallocatable canvas is an error.
pub fn load_background(path: &Path, canvas: Canvas, fallback: Rgb8) -> AssetResult<Surface> {
    match load_photo_background(path, canvas) {
        Ok(bg) => Ok(bg),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "background unavailable, using fallback gradient"
            );
            fallback_background(canvas, fallback)
        }
    }
}

/// Required sprites, already resampled to their on-icon sizes.
#[derive(Clone, Debug)]
pub struct AppIconSprites {
    pub alien: Surface,
    pub crystal: Surface,
    pub star: Surface,
}

impl AppIconSprites {
    /// Load every sprite under `root`. Any missing or undecodable sprite is an error.
    pub fn load(root: &Path, params: &AppIconParams) -> AssetResult<Self> {
        let load = |rel: &Path, w: u32, h: u32| -> AssetResult<Surface> {
            let img = decode::load_rgba(&root.join(rel))?;
            decode::resize_lanczos(&img, w, h)
        };
        let alien_size = params.alien_size();
        Ok(Self {
            alien: load(params.alien_path.as_path(), alien_size, alien_size)?,
            crystal: load(
                params.crystal_path.as_path(),
                params.crystal_size,
                params.crystal_size,
            )?,
            star: load(params.star_path.as_path(), params.star_size, params.star_size)?,
        })
    }
}

/// Soft ellipse behind the alien.
pub fn render_glow(params: &AppIconParams) -> AssetResult<Surface> {
    let mut glow = Surface::transparent(params.canvas)?;
    shapes::fill_ellipse(&mut glow, params.glow_bbox, params.glow_color);
    glow.gaussian_blur(params.glow_blur)
}

/// Stack glow, alien, crystal and stars onto `background`, in that order.
#[tracing::instrument(skip_all)]
pub fn render_app_icon(
    params: &AppIconParams,
    mut background: Surface,
    sprites: &AppIconSprites,
) -> AssetResult<RgbaImage> {
    if background.canvas() != params.canvas {
        return Err(AssetError::validation(format!(
            "background is {}x{}, canvas is {}x{}",
            background.width(),
            background.height(),
            params.canvas.width,
            params.canvas.height
        )));
    }

    background.draw_over(&render_glow(params)?, 0, 0)?;

    let alien_x = centered(params.canvas.width, sprites.alien.width());
    let alien_y = centered(params.canvas.height, sprites.alien.height());
    background.draw_over(&sprites.alien, alien_x, alien_y)?;

    background.draw_over(&sprites.crystal, params.crystal_at.x, params.crystal_at.y)?;
    for at in &params.stars_at {
        background.draw_over(&sprites.star, at.x, at.y)?;
    }
    background.to_rgba_image()
}

/// Resolve inputs under `root`, render, and write the PNG. Returns the written path.
///
/// The background degrades to a gradient; sprite failures abort before anything is written.
pub fn make_app_icon(root: &Path, params: &AppIconParams) -> AssetResult<PathBuf> {
    let background = load_background(
        &root.join(&params.background_path),
        params.canvas,
        params.fallback_color,
    )?;
    let sprites = AppIconSprites::load(root, params)?;
    let icon = render_app_icon(params, background, &sprites)?;
    let out = root.join(&params.output_path);
    encode::write_png(&out, &icon)?;
    Ok(out)
}
