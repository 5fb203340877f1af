use crate::foundation::error::{AssetError, AssetResult};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> AssetResult<Self> {
        if width == 0 || height == 0 {
            return Err(AssetError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Square canvas with edge length `edge`.
    pub fn square(edge: u32) -> AssetResult<Self> {
        Self::new(edge, edge)
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> AssetResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| AssetError::validation("canvas buffer size overflow"))
    }
}

/// Signed pixel offset; placements may start off-canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Offset {
    /// Horizontal offset in pixels; negative starts left of the canvas.
    pub x: i64,
    /// Vertical offset in pixels; negative starts above the canvas.
    pub y: i64,
}

/// Opaque straight RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Straight-alpha RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel, not scaled by alpha.
    pub r: u8,
    /// Green channel, not scaled by alpha.
    pub g: u8,
    /// Blue channel, not scaled by alpha.
    pub b: u8,
    /// Coverage, 0 transparent to 255 opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Build a straight-alpha color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with r, g and b scaled by alpha, rounded.
    pub fn premultiplied(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Convert back to straight alpha. Transparent pixels become transparent black.
    pub fn to_straight(self) -> Rgba8 {
        if self.a == 0 {
            return Rgba8::new(0, 0, 0, 0);
        }
        Rgba8::new(
            unpremul(self.r, self.a),
            unpremul(self.g, self.a),
            unpremul(self.b, self.a),
            self.a,
        )
    }

    /// Channels in `[r, g, b, a]` byte order, as stored in a [`crate::Surface`].
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

pub(crate) fn premul(c: u8, a: u8) -> u8 {
    let c = u16::from(c);
    let a = u16::from(a);
    (((c * a) + 127) / 255) as u8
}

pub(crate) fn unpremul(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let c = u32::from(c.min(a));
    let a = u32::from(a);
    ((c * 255 + a / 2) / a) as u8
}
