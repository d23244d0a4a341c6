use crate::constants::MAX_PIXEL_RATIO;

/// Drawable area in CSS/logical pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel ratio handed to the renderer, capped at `MAX_PIXEL_RATIO`.
    #[inline]
    pub fn render_pixel_ratio(&self) -> f64 {
        if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        }
    }

    /// Backing-store size in physical pixels at the capped ratio.
    pub fn physical_size(&self) -> (u32, u32) {
        let r = self.render_pixel_ratio();
        (
            ((self.width as f64 * r) as u32).max(1),
            ((self.height as f64 * r) as u32).max(1),
        )
    }
}
