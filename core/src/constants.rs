//! Centralized rendering constants
//!
//! Defaults shared by the library builder and the CLI flags, plus the fixed
//! proportions used by the decorative layers.

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "qr.png";

/// Default pixel size of one module
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Accepted range for the module pixel size
pub const MODULE_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Default quiet zone, in modules
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Accepted range for the quiet zone
pub const QUIET_ZONE_RANGE: std::ops::RangeInclusive<u32> = 1..=16;

/// Narrowest quiet zone that still leaves a clear module between frame and code
pub const MIN_FRAMED_QUIET_ZONE: u32 = 2;

/// Default fill colour
pub const DEFAULT_FILL: &str = "black";

/// Default background colour
pub const DEFAULT_BACKGROUND: &str = "white";

/// Frame corner radius as a fraction of the canvas side
pub const FRAME_RADIUS_RATIO: f32 = 0.06;

/// Logo container side as a fraction of the canvas side
pub const LOGO_RATIO: f32 = 0.22;

/// Logo container corner radius as a fraction of the container side
pub const LOGO_RADIUS_RATIO: f32 = 0.20;

/// Minimum padding between the container edge and the logo, in pixels
pub const LOGO_MIN_PADDING: u32 = 2;

/// Longest side the dominant-colour sampler downsamples to
pub const SAMPLE_MAX_SIDE: u32 = 64;

/// Alpha below which a sampled pixel is ignored
pub const SAMPLE_MIN_ALPHA: u8 = 128;

/// Share of the palette colour mixed into white for the auto-style background
pub const TINT_STRENGTH: f32 = 0.08;
