use std::num::NonZeroU32;

use serde::Serialize;

/// One entry of an image set: a source plus the largest pixel ratio and
/// viewport width it is meant for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCandidate {
    src: String,
    device_pixel_ratio: NonZeroU32,
    /// Maximum viewport width in pixels.
    breakpoint: NonZeroU32,
}

impl ImageCandidate {
    pub fn new(
        src: impl Into<String>,
        device_pixel_ratio: NonZeroU32,
        breakpoint: NonZeroU32,
    ) -> Self {
        Self {
            src: src.into(),
            device_pixel_ratio,
            breakpoint,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn device_pixel_ratio(&self) -> u32 {
        self.device_pixel_ratio.get()
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint.get()
    }

    /// Ordering key used to sort an image set.
    pub fn sort_key(&self) -> (u32, u32) {
        (self.device_pixel_ratio(), self.breakpoint())
    }

    /// Whether this candidate is large enough for the given device.
    ///
    /// Both thresholds are ceilings: the candidate qualifies when its pixel
    /// ratio and breakpoint are at or above the current values.
    pub fn covers(&self, device_pixel_ratio: f64, viewport_width: f64) -> bool {
        f64::from(self.device_pixel_ratio()) >= device_pixel_ratio
            && f64::from(self.breakpoint()) >= viewport_width
    }
}
