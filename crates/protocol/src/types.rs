use serde::{Deserialize, Serialize};

const DEFAULT_DEVICE_PIXEL_RATIO: f64 = 1.0;
const DEFAULT_VIEWPORT_WIDTH: f64 = 0.0;

/// Snapshot of the host window, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Vertical scroll offset of the document.
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            scroll_y,
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Build a viewport from values a host may not be able to report.
    ///
    /// A missing, zero, negative or non-finite pixel ratio becomes `1`; a
    /// missing, negative or non-finite width becomes `0`.
    pub fn from_host(
        scroll_y: f64,
        height: f64,
        width: Option<f64>,
        device_pixel_ratio: Option<f64>,
    ) -> Self {
        Self::new(
            scroll_y,
            width.unwrap_or(DEFAULT_VIEWPORT_WIDTH),
            height,
            device_pixel_ratio.unwrap_or(DEFAULT_DEVICE_PIXEL_RATIO),
        )
        .normalized()
    }

    /// Copy with the pixel ratio and width replaced by their defaults when
    /// unusable: a zero, negative or non-finite ratio becomes `1`, a negative
    /// or non-finite width becomes `0`.
    pub fn normalized(&self) -> Self {
        let dpr = self.device_pixel_ratio;
        let device_pixel_ratio = if dpr.is_finite() && dpr > 0.0 {
            dpr
        } else {
            DEFAULT_DEVICE_PIXEL_RATIO
        };
        let width = if self.width.is_finite() && self.width >= 0.0 {
            self.width
        } else {
            DEFAULT_VIEWPORT_WIDTH
        };
        Self {
            width,
            device_pixel_ratio,
            ..*self
        }
    }

    pub fn top(&self) -> f64 {
        self.scroll_y
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeBox {
    pub top: f64,
    pub height: f64,
}

impl NodeBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
