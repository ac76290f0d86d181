//! Rasterization of a module matrix plus the frame and logo layers

mod canvas;
mod logo;

pub use canvas::{Canvas, RasterCanvas, Rect};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::constants::{FRAME_RADIUS_RATIO, MIN_FRAMED_QUIET_ZONE};
use crate::encoder::Matrix;
use crate::style::Color;
use crate::{Error, Result};

/// Everything the renderer needs besides the matrix
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub fill: Color,
    pub background: Color,
    pub frame: bool,
    pub logo: Option<&'a DynamicImage>,
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            background: Color::WHITE,
            frame: true,
            logo: None,
        }
    }
}

/// Render `matrix` onto a fresh [`RasterCanvas`].
pub fn render(matrix: &Matrix, options: &RenderOptions<'_>) -> RasterCanvas {
    let side = matrix.canvas_size();
    let mut canvas = RasterCanvas::new(side, side, options.background);
    paint(&mut canvas, matrix, options);
    canvas
}

/// Paint modules, frame and logo, in that order, onto a background-filled canvas.
pub fn paint<C: Canvas>(canvas: &mut C, matrix: &Matrix, options: &RenderOptions<'_>) {
    draw_modules(canvas, matrix, options.fill);
    if options.frame {
        if matrix.quiet_zone() < MIN_FRAMED_QUIET_ZONE {
            tracing::warn!(
                quiet_zone = matrix.quiet_zone(),
                "quiet zone too narrow for a frame; drawing without one"
            );
        } else {
            draw_frame(canvas, matrix, options.fill);
        }
    }
    if let Some(logo) = options.logo {
        logo::draw_logo(canvas, logo, options.background);
    }
}

fn draw_modules<C: Canvas>(canvas: &mut C, matrix: &Matrix, fill: Color) {
    let size = matrix.module_size();
    let offset = matrix.quiet_zone() * size;
    for y in 0..matrix.width() {
        for x in 0..matrix.width() {
            if matrix.is_dark(x, y) {
                let rect = Rect::new(offset + x as u32 * size, offset + y as u32 * size, size, size);
                canvas.fill_rect(rect, fill);
            }
        }
    }
}

fn draw_frame<C: Canvas>(canvas: &mut C, matrix: &Matrix, color: Color) {
    let (side, _) = canvas.dimensions();
    let module = matrix.module_size();
    let inset = module / 2;
    let thickness = (module / 2).max(1);

    // Cap the radius so the curved inner edge stays inside the quiet zone.
    let quiet_px = (matrix.quiet_zone() * module) as f32;
    let max_radius = ((quiet_px - inset as f32 - thickness as f32 * std::f32::consts::FRAC_1_SQRT_2)
        / (1.0 - std::f32::consts::FRAC_1_SQRT_2))
        .max(0.0);
    let radius = (side as f32 * FRAME_RADIUS_RATIO).min(max_radius).round() as u32;

    let rect = Rect::new(0, 0, side, side).inset(inset);
    canvas.stroke_rounded_rect(rect, radius, thickness, color);
}

/// Decode an image file, sniffing the format from its contents.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: image::ImageError| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)
}

/// Write `canvas` as PNG to `path`, replacing any existing file.
pub fn save_png(canvas: &impl Canvas, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    canvas.write_png(&mut writer)?;
    writer.flush()?;
    Ok(())
}
