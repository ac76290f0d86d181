//! End-to-end pipeline: normalize, style, encode, render, save

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::encoder::{encode_payload, Matrix, MatrixEncoder, QrcodeEncoder};
use crate::payload::{self, Payload};
use crate::render::{self, Canvas, RasterCanvas, RenderOptions};
use crate::request::Request;
use crate::style::{resolve_auto_style, Color, PaletteEntry};
use crate::Result;

/// Below this squared RGB distance fill and background are hard to tell apart
const LOW_CONTRAST_DISTANCE_SQ: u32 = 64 * 64;

/// What a run produced
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub payload: Payload,
    pub matrix: Matrix,
    pub fill: Color,
    pub background: Color,
    /// Palette entry chosen by auto-style, when it ran
    pub palette: Option<&'static PaletteEntry>,
    /// Canvas side in pixels
    pub side: u32,
    pub output: PathBuf,
}

/// Runs requests through a [`MatrixEncoder`]
#[derive(Debug, Clone, Default)]
pub struct Generator<E = QrcodeEncoder> {
    encoder: E,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: MatrixEncoder> Generator<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    /// Run the pipeline and write the PNG to `request.output`.
    pub fn generate(&self, request: &Request) -> Result<GenerateReport> {
        let (canvas, report) = self.build(request)?;
        render::save_png(&canvas, &request.output)?;
        info!(path = %request.output.display(), side = report.side, "saved QR code");
        Ok(report)
    }

    /// Run the pipeline up to the rendered canvas, without touching the filesystem output.
    pub fn build(&self, request: &Request) -> Result<(RasterCanvas, GenerateReport)> {
        request.validate()?;

        let payload = payload::normalize(&request.text, request.mode, request.sms_body.as_deref())?;
        debug!(payload = %payload, "normalized input");

        let matrix = encode_payload(&self.encoder, &payload, request.ec_level, request.logo.is_some())?
            .with_layout(request.quiet_zone, request.module_size);

        let (fill, background, palette) = resolve_colors(request);
        if fill.distance_sq(background) < LOW_CONTRAST_DISTANCE_SQ {
            warn!(fill = %fill, background = %background, "low contrast colours may not scan");
        }

        let logo = request.logo.as_deref().map(render::load_image).transpose()?;

        let options = RenderOptions {
            fill,
            background,
            frame: request.frame,
            logo: logo.as_ref(),
        };
        let canvas = render::render(&matrix, &options);
        let (side, _) = canvas.dimensions();

        let report = GenerateReport {
            payload,
            matrix,
            fill,
            background,
            palette,
            side,
            output: request.output.clone(),
        };
        Ok((canvas, report))
    }
}

/// Fill and background for the run. Auto-style failures fall back to the requested colours.
fn resolve_colors(request: &Request) -> (Color, Color, Option<&'static PaletteEntry>) {
    let fallback = (request.fill, request.background, None);
    if !request.auto_style {
        return fallback;
    }
    let Some(source) = request.style_image() else {
        warn!("auto-style needs a logo or style image; keeping configured colours");
        return fallback;
    };

    match resolve_auto_style(source) {
        Ok(style) => {
            info!(palette = style.entry.name, fill = %style.fill, background = %style.background, "auto-style applied");
            (style.fill, style.background, Some(style.entry))
        }
        Err(e) => {
            warn!(error = %e, "auto-style skipped");
            fallback
        }
    }
}
