use std::num::{IntErrorKind, NonZeroU32, ParseIntError};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::ImageCandidate;

/// Entries are separated by one or more commas with optional surrounding
/// whitespace.
static ENTRY_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,+\s*").expect("entry separator pattern is valid"));

/// `<src> <N>x <M>px`, unit suffixes case-insensitive.
static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(.+)\s+([0-9]+)x\s+([0-9]+)px\s*$").expect("entry pattern is valid")
});

#[derive(Debug, Error)]
pub enum CandidateParseError {
    #[error("entry does not match `<src> <N>x <M>px`")]
    Malformed,
    #[error("invalid device pixel ratio {value:?}: {source}")]
    DevicePixelRatio { value: String, source: ParseIntError },
    #[error("invalid breakpoint {value:?}: {source}")]
    Breakpoint { value: String, source: ParseIntError },
}

#[derive(Debug, Error)]
pub enum ImageSetParseError {
    #[error("no valid image-set entries found")]
    Empty,
}

/// Parse an all-digit threshold. Values too large for `u32` saturate, so a
/// huge declared ceiling still covers every device.
fn parse_threshold(digits: &str) -> Result<NonZeroU32, ParseIntError> {
    match digits.parse::<NonZeroU32>() {
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(NonZeroU32::MAX),
        other => other,
    }
}

impl FromStr for ImageCandidate {
    type Err = CandidateParseError;

    /// Parse a single image-set entry such as `hero@2x.jpg 2x 1024px`.
    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let caps = ENTRY.captures(entry).ok_or(CandidateParseError::Malformed)?;
        let (Some(src), Some(dpr), Some(breakpoint)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            return Err(CandidateParseError::Malformed);
        };

        let device_pixel_ratio = parse_threshold(dpr.as_str()).map_err(|source| {
            CandidateParseError::DevicePixelRatio {
                value: dpr.as_str().to_string(),
                source,
            }
        })?;
        let breakpoint = parse_threshold(breakpoint.as_str()).map_err(|source| {
            CandidateParseError::Breakpoint {
                value: breakpoint.as_str().to_string(),
                source,
            }
        })?;

        Ok(ImageCandidate::new(src.as_str(), device_pixel_ratio, breakpoint))
    }
}

/// Parse the text of an image-set attribute into its candidates.
///
/// The format is a comma-separated list of `<src> <N>x <M>px` entries, e.g.
/// `small.jpg 1x 480px, large.jpg 2x 1280px`. `N` is the highest device
/// pixel ratio and `M` the widest viewport (in pixels) the source is meant
/// for. Both must be positive integers.
///
/// Entries that fail to parse are skipped. Candidates come back in
/// declaration order; sorting is the descriptor's job.
pub fn parse_image_set(raw: &str) -> Result<Vec<ImageCandidate>, ImageSetParseError> {
    let mut candidates = Vec::new();

    for entry in ENTRY_SEPARATOR.split(raw) {
        match entry.parse::<ImageCandidate>() {
            Ok(candidate) => candidates.push(candidate),
            Err(err) => tracing::debug!(entry, %err, "dropping image-set entry"),
        }
    }

    if candidates.is_empty() {
        return Err(ImageSetParseError::Empty);
    }
    Ok(candidates)
}
