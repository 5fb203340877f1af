//! Composited app icons.
//!
//! Each icon has a pure `render_*` function working on already-loaded images and a
//! `make_*` wrapper that resolves the fixed asset paths under a root directory, loads the
//! inputs, renders and writes the PNG.

pub mod app;
pub mod fishing;

pub use app::{
    AppIconParams, AppIconSprites, fallback_background, load_background, make_app_icon,
    render_app_icon,
};
pub use fishing::{FishingIconParams, make_fishing_icon, render_fishing_icon};

/// Top-left coordinate that centers a `size`-long span inside `extent`.
///
/// Floors like integer division on the signed difference, so oversized spans go negative.
pub(crate) fn centered(extent: u32, size: u32) -> i64 {
    (i64::from(extent) - i64::from(size)).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::centered;

    #[test]
    fn centered_floors_toward_negative() {
        assert_eq!(centered(512, 409), 51);
        assert_eq!(centered(512, 307), 102);
        assert_eq!(centered(512, 513), -1);
    }
}
