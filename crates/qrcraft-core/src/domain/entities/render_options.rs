//! Render options and the pixel geometry derived from them.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Color, ErrorCorrection},
};

pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_MARGIN: u32 = 2;
pub const DEFAULT_SCALE: u32 = 4;

const MAX_WIDTH: u32 = 10_000;
const MAX_MARGIN: u32 = 100;
const MAX_SCALE: u32 = 100;

/// How a QR symbol is turned into an image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Target image side in pixels. `None` means "size by `scale`".
    pub width: Option<u32>,
    /// Quiet-zone width in modules.
    pub margin: u32,
    /// Pixels per module when `width` is unset or too small for the symbol.
    pub scale: u32,
    pub dark: Color,
    pub light: Color,
    pub error_correction: ErrorCorrection,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: Some(DEFAULT_WIDTH),
            margin: DEFAULT_MARGIN,
            scale: DEFAULT_SCALE,
            dark: Color::BLACK,
            light: Color::WHITE,
            error_correction: ErrorCorrection::M,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(width) = self.width {
            if width == 0 || width > MAX_WIDTH {
                return Err(DomainError::InvalidDimension {
                    field: "width",
                    reason: format!("must be between 1 and {MAX_WIDTH} pixels, got {width}"),
                });
            }
        }
        if self.margin > MAX_MARGIN {
            return Err(DomainError::InvalidDimension {
                field: "margin",
                reason: format!("must be at most {MAX_MARGIN} modules, got {}", self.margin),
            });
        }
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(DomainError::InvalidDimension {
                field: "scale",
                reason: format!("must be between 1 and {MAX_SCALE}, got {}", self.scale),
            });
        }
        Ok(())
    }

    /// Reject geometry whose raster for a `size`-module symbol would exceed
    /// the width limit. Only the `scale` fallback can get there.
    pub fn validate_for_size(&self, size: usize) -> Result<(), DomainError> {
        let side = self.modules_with_margin(size) as u64;
        let fits_width = self.width.is_some_and(|width| u64::from(width) >= side);
        if !fits_width && side * u64::from(self.scale) > u64::from(MAX_WIDTH) {
            return Err(DomainError::InvalidDimension {
                field: "scale",
                reason: format!(
                    "{side} modules at {} px each exceed {MAX_WIDTH} pixels; lower scale or margin",
                    self.scale
                ),
            });
        }
        Ok(())
    }

    /// Pixels per module for a symbol of `size` modules.
    ///
    /// `width` wins when it can fit every module plus the margin at one pixel
    /// or more; otherwise `scale` applies. May be fractional.
    pub fn pixels_per_module(&self, size: usize) -> f64 {
        let modules = self.modules_with_margin(size) as f64;
        match self.width {
            Some(width) if f64::from(width) >= modules => f64::from(width) / modules,
            _ => f64::from(self.scale),
        }
    }

    /// Side of the rendered raster in pixels.
    pub fn image_width(&self, size: usize) -> u32 {
        let modules = self.modules_with_margin(size) as u32;
        match self.width {
            Some(width) if width >= modules => width,
            _ => modules * self.scale,
        }
    }

    /// Symbol side plus the quiet zone on both edges, in modules.
    pub fn modules_with_margin(&self, size: usize) -> usize {
        size + 2 * self.margin as usize
    }
}
