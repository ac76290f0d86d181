//! Colours, the fixed palette and logo-driven auto-styling

mod color;
mod dominant;
mod palette;

pub use color::Color;
pub use dominant::dominant_color;
pub use palette::{nearest, PaletteEntry, PALETTE};

use std::path::Path;

use crate::constants::TINT_STRENGTH;
use crate::render::load_image;
use crate::{Error, Result};

/// Colours picked by auto-style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoStyle {
    pub entry: &'static PaletteEntry,
    pub fill: Color,
    pub background: Color,
}

impl AutoStyle {
    /// Fill is the palette colour; background is white with a hint of it.
    pub fn from_entry(entry: &'static PaletteEntry) -> Self {
        Self {
            entry,
            fill: entry.color,
            background: tint(entry.color),
        }
    }
}

/// Subtle background wash of `color`
pub fn tint(color: Color) -> Color {
    color.mix_into(Color::WHITE, TINT_STRENGTH)
}

/// Decode the image at `path` and derive an [`AutoStyle`] from its dominant colour.
pub fn resolve_auto_style(path: &Path) -> Result<AutoStyle> {
    let image = load_image(path)?;
    let dominant = dominant_color(&image).ok_or_else(|| Error::ImageContent {
        path: path.to_path_buf(),
        reason: "no opaque pixels to sample".to_string(),
    })?;
    let entry = nearest(dominant);
    tracing::debug!(dominant = %dominant, palette = entry.name, "resolved auto-style");
    Ok(AutoStyle::from_entry(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_tint_stays_light() {
        for entry in &PALETTE {
            let bg = tint(entry.color);
            assert!(bg.r >= 0xE0 && bg.g >= 0xE0 && bg.b >= 0xE0, "{} -> {bg}", entry.name);
            assert_ne!(bg, Color::WHITE);
        }
        assert_eq!(tint(Color::rgb(0x93, 0x81, 0xFF)), Color::rgb(0xF6, 0xF5, 0xFF));
    }

    #[test]
    fn test_resolve_from_uniform_palette_images() {
        let dir = tempfile::tempdir().unwrap();
        for entry in &PALETTE {
            let path = dir.path().join(format!("{}.png", entry.slug()));
            let c = entry.color;
            RgbaImage::from_pixel(40, 40, Rgba([c.r, c.g, c.b, 255])).save(&path).unwrap();

            let style = resolve_auto_style(&path).unwrap();
            assert_eq!(style.entry, entry);
            assert_eq!(style.fill, entry.color);
            assert_eq!(style.background, tint(entry.color));
        }
    }

    #[test]
    fn test_resolve_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.png");
        assert!(matches!(resolve_auto_style(&missing), Err(Error::ImageDecode { .. })));

        let garbage = dir.path().join("garbage.png");
        std::fs::write(&garbage, b"definitely not a png").unwrap();
        assert!(matches!(resolve_auto_style(&garbage), Err(Error::ImageDecode { .. })));

        let clear = dir.path().join("clear.png");
        RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0])).save(&clear).unwrap();
        assert!(matches!(resolve_auto_style(&clear), Err(Error::ImageContent { .. })));
    }
}
