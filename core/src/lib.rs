//! qrtool core - styled QR code generation
//!
//! Turns raw text (URLs, phone numbers, email addresses, SMS payloads, plain
//! text) into a QR code PNG, optionally decorated with a rounded frame, a
//! centred logo and colours picked from a fixed palette.
//!
//! The pipeline is: [`payload::normalize`] → [`encoder::MatrixEncoder`] →
//! [`render::render`] → [`render::save_png`], with [`style`] feeding colours
//! into the renderer. [`Generator`] runs it end to end for a [`Request`].

pub mod constants;
pub mod encoder;
pub mod generator;
pub mod payload;
pub mod render;
pub mod request;
pub mod style;

mod error;

pub use error::{Error, Result};

// Re-export key types for convenience
pub use encoder::{EcLevel, Matrix, MatrixEncoder, QrcodeEncoder};
pub use generator::{GenerateReport, Generator};
pub use payload::{Mode, Payload};
pub use render::{Canvas, RasterCanvas, RenderOptions};
pub use request::Request;
pub use style::{Color, PaletteEntry, PALETTE};
