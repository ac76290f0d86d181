use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, Rgb, RgbImage, RgbaImage};

use crate::style::Color;
use crate::{Error, Result};

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Square of side `side` centred in a `outer` x `outer` area
    pub fn centered_square(outer: u32, side: u32) -> Self {
        let side = side.min(outer);
        let offset = (outer - side) / 2;
        Self::new(offset, offset, side, side)
    }

    /// Shrink by `by` pixels on every side
    pub fn inset(&self, by: u32) -> Self {
        let by = by.min(self.width / 2).min(self.height / 2);
        Self::new(self.x + by, self.y + by, self.width - 2 * by, self.height - 2 * by)
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Drawing surface the renderer paints on
pub trait Canvas {
    fn dimensions(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color);

    /// Outline of a rounded rectangle, `thickness` pixels wide, drawn inwards from `rect`
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: u32, thickness: u32, color: Color);

    /// Alpha-composite `image` with its top-left corner at (x, y)
    fn paste(&mut self, image: &RgbaImage, x: u32, y: u32);

    fn write_png(&self, writer: &mut dyn Write) -> Result<()>;
}

/// [`Canvas`] over an in-memory `image::RgbImage`
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbImage,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.to_rgb()),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from(*self.image.get_pixel(x, y))
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_png(&mut out)?;
        Ok(out)
    }

    /// Call `f` for every canvas pixel inside `rect`
    fn for_each_in(&mut self, rect: Rect, mut f: impl FnMut(u32, u32, &mut Rgb<u8>)) {
        let (w, h) = self.image.dimensions();
        let x_end = rect.x.saturating_add(rect.width).min(w);
        let y_end = rect.y.saturating_add(rect.height).min(h);
        for y in rect.y.min(h)..y_end {
            for x in rect.x.min(w)..x_end {
                f(x, y, self.image.get_pixel_mut(x, y));
            }
        }
    }
}

/// Whether the centre of pixel (px, py) falls inside `rect` with rounded corners.
fn inside_rounded(rect: Rect, radius: f32, px: u32, py: u32) -> bool {
    if rect.is_empty() {
        return false;
    }
    let (x0, y0) = (rect.x as f32, rect.y as f32);
    let (x1, y1) = (x0 + rect.width as f32, y0 + rect.height as f32);
    let r = radius.min(rect.width as f32 / 2.0).min(rect.height as f32 / 2.0);
    let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);

    if cx < x0 || cx > x1 || cy < y0 || cy > y1 {
        return false;
    }
    // nearest point of the inner (corner-centre) rectangle
    let nx = if cx < x0 + r { x0 + r } else if cx > x1 - r { x1 - r } else { cx };
    let ny = if cy < y0 + r { y0 + r } else if cy > y1 - r { y1 - r } else { cy };
    let (dx, dy) = (cx - nx, cy - ny);
    dx * dx + dy * dy <= r * r
}

impl Canvas for RasterCanvas {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let px = color.to_rgb();
        self.for_each_in(rect, |_, _, p| *p = px);
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color) {
        let px = color.to_rgb();
        let r = radius as f32;
        self.for_each_in(rect, |x, y, p| {
            if inside_rounded(rect, r, x, y) {
                *p = px;
            }
        });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: u32, thickness: u32, color: Color) {
        let px = color.to_rgb();
        let inner = rect.inset(thickness);
        let outer_r = radius as f32;
        let inner_r = radius.saturating_sub(thickness) as f32;
        self.for_each_in(rect, |x, y, p| {
            if inside_rounded(rect, outer_r, x, y) && !inside_rounded(inner, inner_r, x, y) {
                *p = px;
            }
        });
    }

    fn paste(&mut self, image: &RgbaImage, x: u32, y: u32) {
        let rect = Rect::new(x, y, image.width(), image.height());
        self.for_each_in(rect, |cx, cy, dst| {
            let [r, g, b, a] = image.get_pixel(cx - x, cy - y).0;
            let a = a as u16;
            let blend = |s: u8, d: u8| ((s as u16 * a + d as u16 * (255 - a) + 127) / 255) as u8;
            *dst = Rgb([blend(r, dst[0]), blend(g, dst[1]), blend(b, dst[2])]);
        });
    }

    fn write_png(&self, writer: &mut dyn Write) -> Result<()> {
        let (w, h) = self.image.dimensions();
        PngEncoder::new(writer)
            .write_image(self.image.as_raw(), w, h, ExtendedColorType::Rgb8)
            .map_err(|e| match e {
                ImageError::IoError(io) => Error::Io(io),
                other => Error::Render(other.to_string()),
            })
    }
}
