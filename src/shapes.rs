use image::{GrayImage, Luma};

use crate::{AssetResult, Canvas, Rgb8, Rgba8, Surface};

/// Inclusive pixel bounding box `[x0, y0, x1, y1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelBox {
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// Opaque top-to-bottom gradient; each row is one flat color.
///
/// Row `y` takes `top + (bottom - top) * y / height` per channel, truncated.
pub fn vertical_gradient(canvas: Canvas, top: Rgb8, bottom: Rgb8) -> AssetResult<Surface> {
    let mut surface = Surface::transparent(canvas)?;
    let h = f64::from(canvas.height);
    for y in 0..canvas.height {
        let lerp = |a: u8, b: u8| {
            let diff = f64::from(i32::from(b) - i32::from(a)) * f64::from(y);
            (f64::from(a) + diff / h) as u8
        };
        surface.fill_row(
            y,
            Rgba8::new(
                lerp(top.r, bottom.r),
                lerp(top.g, bottom.g),
                lerp(top.b, bottom.b),
                255,
            ),
        );
    }
    Ok(surface)
}

/// Hard-edged rounded rectangle covering the whole canvas: 255 inside, 0 outside.
///
/// Corners are quarter circles spanning `2 * radius + 1` pixels.
pub fn rounded_rect_mask(canvas: Canvas, radius: u32) -> GrayImage {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let rr = (f64::from(radius) + 0.5).min(w / 2.0).min(h / 2.0);
    let (left, right) = (rr, w - rr);
    let (top, bottom) = (rr, h - rr);

    GrayImage::from_fn(canvas.width, canvas.height, |x, y| {
        let px = f64::from(x) + 0.5;
        let py = f64::from(y) + 0.5;
        let dx = (left - px).max(px - right).max(0.0);
        let dy = (top - py).max(py - bottom).max(0.0);
        if dx * dx + dy * dy <= rr * rr {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Fill a hard-edged ellipse inscribed in `bbox`, replacing covered pixels with `color`.
pub fn fill_ellipse(surface: &mut Surface, bbox: PixelBox, color: Rgba8) {
    let cx = (bbox.x0 + bbox.x1 + 1) as f64 / 2.0;
    let cy = (bbox.y0 + bbox.y1 + 1) as f64 / 2.0;
    let rx = (bbox.x1 - bbox.x0 + 1) as f64 / 2.0;
    let ry = (bbox.y1 - bbox.y0 + 1) as f64 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let px = color.premultiplied();
    let y_range = bbox.y0.max(0)..=bbox.y1.min(i64::from(surface.height()) - 1);
    for y in y_range {
        let ny = (y as f64 + 0.5 - cy) / ry;
        for x in bbox.x0.max(0)..=bbox.x1.min(i64::from(surface.width()) - 1) {
            let nx = (x as f64 + 0.5 - cx) / rx;
            if nx * nx + ny * ny <= 1.0 {
                surface.put_pixel(x as u32, y as u32, px);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_rows_match_truncated_lerp() {
        let canvas = Canvas::square(512).unwrap();
        let s = vertical_gradient(canvas, Rgb8::new(30, 144, 255), Rgb8::new(0, 0, 139)).unwrap();

        assert_eq!(s.pixel(0, 0).unwrap().to_array(), [30, 144, 255, 255]);
        // 30 - 30*256/512 = 15, 144 - 144*256/512 = 72, 255 - 116*256/512 = 197
        assert_eq!(s.pixel(300, 256).unwrap().to_array(), [15, 72, 197, 255]);
        // 30 - 30*511/512 = 0.05.., 144 - 143.71.. = 0.28.., 255 - 115.77.. = 139.22..
        assert_eq!(s.pixel(0, 511).unwrap().to_array(), [0, 0, 139, 255]);
    }

    #[test]
    fn rounded_mask_clears_corners_only() {
        let canvas = Canvas::square(512).unwrap();
        let mask = rounded_rect_mask(canvas, 90);
        for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511), (20, 20)] {
            assert_eq!(mask.get_pixel(x, y).0[0], 0, "({x}, {y})");
        }
        for (x, y) in [(256, 256), (256, 0), (0, 256), (511, 256), (256, 511), (90, 0)] {
            assert_eq!(mask.get_pixel(x, y).0[0], 255, "({x}, {y})");
        }
    }

    #[test]
    fn rounded_mask_is_symmetric() {
        let mask = rounded_rect_mask(Canvas::square(64).unwrap(), 12);
        for y in 0..64 {
            for x in 0..64 {
                let v = mask.get_pixel(x, y).0[0];
                assert_eq!(v, mask.get_pixel(63 - x, y).0[0]);
                assert_eq!(v, mask.get_pixel(x, 63 - y).0[0]);
            }
        }
    }

    #[test]
    fn ellipse_fills_center_not_bbox_corners() {
        let mut s = Surface::transparent(Canvas::square(512).unwrap()).unwrap();
        let green = Rgba8::new(0, 255, 150, 100);
        fill_ellipse(&mut s, PixelBox::new(128, 128, 384, 384), green);

        assert_eq!(s.pixel(256, 256).unwrap(), green.premultiplied());
        assert_eq!(s.pixel(128, 256).unwrap(), green.premultiplied());
        assert_eq!(s.pixel(128, 128).unwrap().a, 0);
        assert_eq!(s.pixel(127, 256).unwrap().a, 0);
    }
}
