//! Invocation parameters for one QR generation

use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_MODULE_SIZE, DEFAULT_OUTPUT, DEFAULT_QUIET_ZONE, MODULE_SIZE_RANGE, QUIET_ZONE_RANGE,
};
use crate::encoder::EcLevel;
use crate::payload::Mode;
use crate::style::Color;
use crate::{Error, Result};

/// Everything one run needs, built once from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Raw text as typed by the user
    pub text: String,
    /// Explicit mode; `None` auto-detects
    pub mode: Option<Mode>,
    /// Message body for SMS payloads
    pub sms_body: Option<String>,
    /// Pixel size of one module
    pub module_size: u32,
    /// Blank border, in modules
    pub quiet_zone: u32,
    /// Requested error correction; raised to High when a logo is set
    pub ec_level: EcLevel,
    pub fill: Color,
    pub background: Color,
    pub logo: Option<PathBuf>,
    pub auto_style: bool,
    /// Image sampled by auto-style; falls back to `logo`
    pub style_source: Option<PathBuf>,
    pub frame: bool,
    pub output: PathBuf,
}

impl Request {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: None,
            sms_body: None,
            module_size: DEFAULT_MODULE_SIZE,
            quiet_zone: DEFAULT_QUIET_ZONE,
            ec_level: EcLevel::default(),
            fill: Color::BLACK,
            background: Color::WHITE,
            logo: None,
            auto_style: false,
            style_source: None,
            frame: true,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn sms_body(mut self, body: impl Into<String>) -> Self {
        self.sms_body = Some(body.into());
        self
    }

    pub fn module_size(mut self, size: u32) -> Self {
        self.module_size = size;
        self
    }

    pub fn quiet_zone(mut self, modules: u32) -> Self {
        self.quiet_zone = modules;
        self
    }

    pub fn ec_level(mut self, level: EcLevel) -> Self {
        self.ec_level = level;
        self
    }

    pub fn colors(mut self, fill: Color, background: Color) -> Self {
        self.fill = fill;
        self.background = background;
        self
    }

    pub fn logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo = Some(path.into());
        self
    }

    pub fn auto_style(mut self, enabled: bool) -> Self {
        self.auto_style = enabled;
        self
    }

    pub fn style_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.style_source = Some(path.into());
        self
    }

    pub fn frame(mut self, enabled: bool) -> Self {
        self.frame = enabled;
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Image auto-style samples, if any
    pub fn style_image(&self) -> Option<&Path> {
        self.style_source.as_deref().or(self.logo.as_deref())
    }

    /// Check numeric settings before any work is done
    pub fn validate(&self) -> Result<()> {
        if !MODULE_SIZE_RANGE.contains(&self.module_size) {
            return Err(Error::validation(format!(
                "module size {} outside {}..={}",
                self.module_size,
                MODULE_SIZE_RANGE.start(),
                MODULE_SIZE_RANGE.end()
            )));
        }
        if !QUIET_ZONE_RANGE.contains(&self.quiet_zone) {
            return Err(Error::validation(format!(
                "quiet zone {} outside {}..={}",
                self.quiet_zone,
                QUIET_ZONE_RANGE.start(),
                QUIET_ZONE_RANGE.end()
            )));
        }
        if self.output.as_os_str().is_empty() {
            return Err(Error::validation("output path is empty"));
        }
        Ok(())
    }
}
