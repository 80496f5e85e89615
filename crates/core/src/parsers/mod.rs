pub mod image_set;

pub use image_set::{CandidateParseError, ImageSetParseError, parse_image_set};

use crate::model::ImageDescriptor;

/// Parse an image-set attribute into a sorted descriptor.
///
/// Parsing is best-effort: bad entries are dropped, and a list with no
/// usable entry yields `None` so the caller can leave the element alone.
pub fn parse_descriptor(raw: &str, fallback_src: impl Into<String>) -> Option<ImageDescriptor> {
    match parse_image_set(raw) {
        Ok(candidates) => ImageDescriptor::new(candidates, fallback_src),
        Err(err) => {
            tracing::debug!(raw, %err, "discarding image-set descriptor");
            None
        }
    }
}
