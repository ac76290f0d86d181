//! QR matrix generation behind a narrow encoder interface

mod matrix;

pub use matrix::Matrix;
pub use qrcode::types::QrError;

use std::fmt;
use std::str::FromStr;

use qrcode::QrCode;

use crate::payload::Payload;
use crate::{Error, Result};

/// QR error-correction tier, lowest to highest redundancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EcLevel {
    /// ~7% recovery
    Low,
    /// ~15% recovery
    #[default]
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

impl EcLevel {
    pub const MAX: EcLevel = EcLevel::High;

    pub fn as_str(&self) -> &'static str {
        match self {
            EcLevel::Low => "low",
            EcLevel::Medium => "medium",
            EcLevel::Quartile => "quartile",
            EcLevel::High => "high",
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EcLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(EcLevel::Low),
            "m" | "medium" => Ok(EcLevel::Medium),
            "q" | "quartile" => Ok(EcLevel::Quartile),
            "h" | "high" => Ok(EcLevel::High),
            other => Err(Error::validation(format!("unknown error-correction level '{other}'"))),
        }
    }
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::Low => qrcode::EcLevel::L,
            EcLevel::Medium => qrcode::EcLevel::M,
            EcLevel::Quartile => qrcode::EcLevel::Q,
            EcLevel::High => qrcode::EcLevel::H,
        }
    }
}

impl From<qrcode::EcLevel> for EcLevel {
    fn from(level: qrcode::EcLevel) -> Self {
        match level {
            qrcode::EcLevel::L => EcLevel::Low,
            qrcode::EcLevel::M => EcLevel::Medium,
            qrcode::EcLevel::Q => EcLevel::Quartile,
            qrcode::EcLevel::H => EcLevel::High,
        }
    }
}

/// Level actually used: a centre logo hides data modules, so it always gets the top tier.
pub fn effective_level(requested: EcLevel, has_logo: bool) -> EcLevel {
    if has_logo {
        EcLevel::MAX
    } else {
        requested
    }
}

/// Turns a payload into a module matrix
pub trait MatrixEncoder {
    fn encode(&self, payload: &Payload, level: EcLevel) -> Result<Matrix>;
}

/// [`MatrixEncoder`] backed by the `qrcode` crate.
///
/// Picks the smallest version that fits the payload at the given level.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeEncoder;

impl MatrixEncoder for QrcodeEncoder {
    fn encode(&self, payload: &Payload, level: EcLevel) -> Result<Matrix> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), level.into())?;

        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        let version = match code.version() {
            qrcode::Version::Normal(v) | qrcode::Version::Micro(v) => v,
        };

        tracing::debug!(width, version, ec = %level, "encoded matrix");
        Ok(Matrix::new(width, modules, code.error_correction_level().into(), version))
    }
}

/// Encode `payload`, raising the level to the maximum when a logo will be drawn.
pub fn encode_payload(
    encoder: &impl MatrixEncoder,
    payload: &Payload,
    requested: EcLevel,
    has_logo: bool,
) -> Result<Matrix> {
    let level = effective_level(requested, has_logo);
    if level != requested {
        tracing::debug!(requested = %requested, effective = %level, "raised error correction for logo");
    }
    encoder.encode(payload, level)
}
