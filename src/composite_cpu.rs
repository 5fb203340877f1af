use crate::{
    AssetError, AssetResult,
    foundation::core::{premul, unpremul},
};

pub type PremulRgba8 = [u8; 4];

/// How a placed layer combines with what is already on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlendMode {
    /// Porter-Duff source-over; the result is never less opaque than the destination.
    Over,
    /// Masked paste with the layer's own alpha as the mask: all four straight-alpha
    /// channels, alpha included, interpolate linearly toward the source.
    Paste,
}

/// Porter-Duff source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Scale every channel of a premultiplied pixel by `coverage / 255`.
pub fn scale(px: PremulRgba8, coverage: u8) -> PremulRgba8 {
    match coverage {
        0 => [0; 4],
        255 => px,
        c => {
            let c = u16::from(c);
            [
                mul_div255(u16::from(px[0]), c),
                mul_div255(u16::from(px[1]), c),
                mul_div255(u16::from(px[2]), c),
                mul_div255(u16::from(px[3]), c),
            ]
        }
    }
}

/// Masked paste: move `dst` toward `src` by `coverage / 255`.
///
/// Interpolation happens on straight (unpremultiplied) channels, alpha included, so
/// pasting a translucent pixel onto an opaque one lowers the opacity:
/// `a = a_s * m + a_d * (1 - m)`.
pub fn paste(dst: PremulRgba8, src: PremulRgba8, coverage: u8) -> PremulRgba8 {
    match coverage {
        0 => return dst,
        255 => return src,
        _ => {}
    }
    let s = straight(src);
    let d = straight(dst);
    let m = u32::from(coverage);
    let mut out = [0u8; 4];
    for c in 0..4 {
        out[c] = ((u32::from(s[c]) * m + u32::from(d[c]) * (255 - m) + 127) / 255) as u8;
    }
    let a = out[3];
    [premul(out[0], a), premul(out[1], a), premul(out[2], a), a]
}

fn straight(px: PremulRgba8) -> [u8; 4] {
    let a = px[3];
    [unpremul(px[0], a), unpremul(px[1], a), unpremul(px[2], a), a]
}

/// Composite `src` (`src_w` x `src_h`) onto `dst` (`dst_w` x `dst_h`) with its top-left
/// corner at `(x, y)`. Pixels falling outside `dst` are dropped.
#[allow(clippy::too_many_arguments)]
pub fn composite_at_in_place(
    dst: &mut [u8],
    dst_w: u32,
    dst_h: u32,
    src: &[u8],
    src_w: u32,
    src_h: u32,
    x: i64,
    y: i64,
    mode: BlendMode,
) -> AssetResult<()> {
    if dst.len() != dst_w as usize * dst_h as usize * 4
        || src.len() != src_w as usize * src_h as usize * 4
    {
        return Err(AssetError::validation(
            "composite_at_in_place expects rgba8 buffers matching their dimensions",
        ));
    }

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src_w)).min(i64::from(dst_w));
    let y1 = (y + i64::from(src_h)).min(i64::from(dst_h));
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    for dy in y0..y1 {
        let sy = (dy - y) as usize;
        for dx in x0..x1 {
            let sx = (dx - x) as usize;
            let si = (sy * src_w as usize + sx) * 4;
            let di = (dy as usize * dst_w as usize + dx as usize) * 4;
            let s = [src[si], src[si + 1], src[si + 2], src[si + 3]];
            let d = &mut dst[di..di + 4];
            let cur = [d[0], d[1], d[2], d[3]];
            let out = match mode {
                BlendMode::Over => over(cur, s),
                BlendMode::Paste => paste(cur, s, s[3]),
            };
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

/// Multiply each pixel of `dst` by the matching single-channel `mask` value.
pub fn mask_in_place(dst: &mut [u8], mask: &[u8]) -> AssetResult<()> {
    if dst.len() != mask.len() * 4 {
        return Err(AssetError::validation(
            "mask_in_place expects one mask byte per rgba8 pixel",
        ));
    }
    for (d, &m) in dst.chunks_exact_mut(4).zip(mask) {
        let out = scale([d[0], d[1], d[2], d[3]], m);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_src_alpha_0_is_noop() {
        let dst = [10, 20, 30, 40];
        let src = [0, 0, 0, 0];
        assert_eq!(over(dst, src), dst);
    }

    #[test]
    fn over_src_opaque_replaces_dst() {
        let dst = [0, 0, 0, 255];
        let src = [255, 0, 0, 255];
        assert_eq!(over(dst, src), src);
    }

    #[test]
    fn over_dst_transparent_returns_src() {
        let dst = [0, 0, 0, 0];
        let src = [100, 110, 120, 200];
        assert_eq!(over(dst, src), src);
    }

    #[test]
    fn over_half_black_on_white_is_mid_gray() {
        let dst = [255, 255, 255, 255];
        let src = [0, 0, 0, 128];
        assert_eq!(over(dst, src), [127, 127, 127, 255]);
    }

    #[test]
    fn scale_by_mask_extremes() {
        let px = [40, 50, 60, 200];
        assert_eq!(scale(px, 0), [0, 0, 0, 0]);
        assert_eq!(scale(px, 255), px);
    }

    #[test]
    fn paste_full_coverage_replaces_and_zero_keeps() {
        let dst = [1, 2, 3, 4];
        let src = [0, 0, 0, 100];
        assert_eq!(paste(dst, src, 255), src);
        assert_eq!(paste(dst, src, 0), dst);
    }

    #[test]
    fn paste_translucent_onto_opaque_lowers_alpha() {
        // Black at alpha 100 pasted through its own alpha onto opaque white.
        let dst = [255, 255, 255, 255];
        let src = [0, 0, 0, 100];
        let out = paste(dst, src, 100);
        // a = 100 * 100 / 255 + 255 * 155 / 255 = 194.2
        assert_eq!(out[3], 194);
        // Straight color: 255 * 155 / 255 = 155, premultiplied by 194.
        assert_eq!(out[0], premul(155, 194));
    }

    #[test]
    fn paste_and_over_agree_only_for_opaque_sources() {
        let dst = [10, 60, 120, 255];
        let opaque = [200, 100, 0, 255];
        assert_eq!(paste(dst, opaque, 255), over(dst, opaque));
        let soft = [100, 100, 100, 128];
        assert_eq!(over(dst, soft)[3], 255);
        assert!(paste(dst, soft, 128)[3] < 255);
    }

    #[test]
    fn paste_mode_uses_source_alpha_as_mask() {
        let mut dst = [0u8, 0, 255, 255].to_vec();
        let src = [128u8, 128, 128, 128];
        composite_at_in_place(&mut dst, 1, 1, &src, 1, 1, 0, 0, BlendMode::Paste).unwrap();
        assert_eq!(dst, paste([0, 0, 255, 255], [128, 128, 128, 128], 128).to_vec());
        assert!(dst[3] < 255);
    }

    #[test]
    fn over_at_clips_negative_and_overflowing_offsets() {
        let mut dst = vec![0u8; 2 * 2 * 4];
        let src = [9u8, 9, 9, 255].repeat(4);
        composite_at_in_place(&mut dst, 2, 2, &src, 2, 2, 1, -1, BlendMode::Over).unwrap();
        // Only dst (1, 0) is covered, by src (0, 1).
        assert_eq!(&dst[4..8], &[9, 9, 9, 255]);
        assert_eq!(&dst[0..4], &[0, 0, 0, 0]);
        assert_eq!(&dst[8..16], &[0u8; 8]);
    }

    #[test]
    fn over_at_fully_outside_is_noop() {
        let mut dst = vec![1u8; 4];
        let src = vec![255u8; 4];
        composite_at_in_place(&mut dst, 1, 1, &src, 1, 1, 5, 5, BlendMode::Paste).unwrap();
        assert_eq!(dst, vec![1u8; 4]);
    }

    #[test]
    fn mask_rejects_mismatched_lengths() {
        let mut dst = vec![0u8; 8];
        assert!(mask_in_place(&mut dst, &[255]).is_err());
    }
}
