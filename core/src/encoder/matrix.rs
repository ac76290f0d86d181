use crate::encoder::EcLevel;
use crate::constants::{DEFAULT_MODULE_SIZE, DEFAULT_QUIET_ZONE};

/// Square grid of dark/light modules plus the layout used to rasterize it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    width: usize,
    modules: Vec<bool>,
    ec_level: EcLevel,
    version: i16,
    quiet_zone: u32,
    module_size: u32,
}

impl Matrix {
    /// `modules` is row-major, `width * width` long, `true` meaning dark.
    pub fn new(width: usize, modules: Vec<bool>, ec_level: EcLevel, version: i16) -> Self {
        debug_assert_eq!(modules.len(), width * width);
        Self {
            width,
            modules,
            ec_level,
            version,
            quiet_zone: DEFAULT_QUIET_ZONE,
            module_size: DEFAULT_MODULE_SIZE,
        }
    }

    pub fn with_layout(mut self, quiet_zone: u32, module_size: u32) -> Self {
        self.quiet_zone = quiet_zone;
        self.module_size = module_size;
        self
    }

    /// Side length in modules, without quiet zone
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Whether the module at (x, y) is dark; out-of-grid positions are light
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    pub fn ec_level(&self) -> EcLevel {
        self.ec_level
    }

    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn quiet_zone(&self) -> u32 {
        self.quiet_zone
    }

    pub fn module_size(&self) -> u32 {
        self.module_size
    }

    /// Canvas side in pixels, quiet zone included
    pub fn canvas_size(&self) -> u32 {
        (self.width as u32 + 2 * self.quiet_zone) * self.module_size
    }
}
