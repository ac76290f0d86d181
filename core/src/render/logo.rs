use image::imageops::FilterType;
use image::DynamicImage;

use crate::constants::{LOGO_MIN_PADDING, LOGO_RADIUS_RATIO, LOGO_RATIO};
use crate::render::{Canvas, Rect};
use crate::style::Color;

/// Centre container for a canvas of side `canvas_side`
pub(crate) fn container_rect(canvas_side: u32) -> Rect {
    let side = (canvas_side as f32 * LOGO_RATIO).round() as u32;
    Rect::centered_square(canvas_side, side)
}

/// Draw a rounded container in `background` and paste `logo` inside it.
pub(crate) fn draw_logo<C: Canvas>(canvas: &mut C, logo: &DynamicImage, background: Color) {
    let (side, _) = canvas.dimensions();
    let container = container_rect(side);
    let radius = (container.width as f32 * LOGO_RADIUS_RATIO).round() as u32;
    canvas.fill_rounded_rect(container, radius, background);

    let padding = (container.width / 10).max(LOGO_MIN_PADDING);
    let slot = container.inset(padding);
    if slot.width == 0 || logo.width() == 0 || logo.height() == 0 {
        tracing::warn!(canvas = side, "canvas too small to fit a logo; container left empty");
        return;
    }

    // resize() keeps the aspect ratio and fits inside the bounds
    let fitted = logo.resize(slot.width, slot.height, FilterType::Lanczos3).to_rgba8();
    let x = slot.x + (slot.width - fitted.width()) / 2;
    let y = slot.y + (slot.height - fitted.height()) / 2;
    tracing::debug!(w = fitted.width(), h = fitted.height(), x, y, "pasting logo");
    canvas.paste(&fitted, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RasterCanvas;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_container_is_centered_fraction() {
        let rect = container_rect(330);
        assert_eq!(rect.width, 73);
        assert_eq!(rect.x, (330 - 73) / 2);
        assert_eq!(rect.x, rect.y);
    }

    #[test]
    fn test_wide_logo_keeps_aspect_and_centers() {
        let red = Color::rgb(255, 0, 0);
        let mut canvas = RasterCanvas::new(300, 300, Color::BLACK);
        let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(200, 50, Rgba([255, 0, 0, 255])));
        draw_logo(&mut canvas, &logo, Color::WHITE);

        let container = container_rect(300);
        let mid = 150;
        assert_eq!(canvas.pixel(mid, mid), red);
        // above and below the flattened logo the container background shows
        assert_eq!(canvas.pixel(mid, container.y + 8), Color::WHITE);
        assert_eq!(canvas.pixel(mid, container.y + container.height - 8), Color::WHITE);
        // outside the container the canvas is untouched
        assert_eq!(canvas.pixel(mid, container.y - 1), Color::BLACK);
    }
}
