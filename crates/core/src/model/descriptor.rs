use serde::Serialize;

use super::ImageCandidate;

/// A parsed image set together with the source to use when no candidate fits.
///
/// Candidates are non-empty and sorted ascending by
/// `(device_pixel_ratio, breakpoint)`. Both properties are established by
/// the parser; a descriptor is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageDescriptor {
    candidates: Vec<ImageCandidate>,
    fallback_src: String,
}

impl ImageDescriptor {
    /// Build a descriptor from candidates in any order.
    ///
    /// Returns `None` for an empty candidate list. Candidates with equal
    /// sort keys keep their relative order.
    pub fn new(
        mut candidates: Vec<ImageCandidate>,
        fallback_src: impl Into<String>,
    ) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        candidates.sort_by_key(ImageCandidate::sort_key);
        Some(Self {
            candidates,
            fallback_src: fallback_src.into(),
        })
    }

    /// Parse the text of an image-set attribute.
    ///
    /// Malformed entries are dropped. Returns `None` when nothing survives.
    pub fn parse(raw: &str, fallback_src: impl Into<String>) -> Option<Self> {
        crate::parsers::parse_descriptor(raw, fallback_src)
    }

    pub fn candidates(&self) -> &[ImageCandidate] {
        &self.candidates
    }

    pub fn fallback_src(&self) -> &str {
        &self.fallback_src
    }

    /// Pick the smallest candidate that still covers the device.
    ///
    /// Scans candidates in ascending order and returns the first whose pixel
    /// ratio and breakpoint are both at or above the given values, or the
    /// fallback source when none does.
    pub fn select_source(&self, device_pixel_ratio: f64, viewport_width: f64) -> &str {
        self.candidates
            .iter()
            .find(|c| c.covers(device_pixel_ratio, viewport_width))
            .map_or(self.fallback_src.as_str(), ImageCandidate::src)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    fn candidate(src: &str, dpr: u32, breakpoint: u32) -> ImageCandidate {
        ImageCandidate::new(
            src,
            NonZeroU32::new(dpr).unwrap(),
            NonZeroU32::new(breakpoint).unwrap(),
        )
    }

    fn two_step() -> ImageDescriptor {
        ImageDescriptor::new(
            vec![candidate("b.png", 2, 800), candidate("a.png", 1, 400)],
            "fallback.png",
        )
        .unwrap()
    }

    #[test]
    fn empty_candidates_are_absent() {
        assert!(ImageDescriptor::new(Vec::new(), "x.png").is_none());
    }

    #[test]
    fn construction_sorts_candidates() {
        let d = two_step();
        let srcs: Vec<_> = d.candidates().iter().map(ImageCandidate::src).collect();
        assert_eq!(srcs, ["a.png", "b.png"]);
    }

    #[test]
    fn ties_keep_declaration_order() {
        let d = ImageDescriptor::new(
            vec![
                candidate("second.png", 1, 400),
                candidate("first.png", 1, 200),
                candidate("third.png", 1, 400),
            ],
            "",
        )
        .unwrap();
        let srcs: Vec<_> = d.candidates().iter().map(ImageCandidate::src).collect();
        assert_eq!(srcs, ["first.png", "second.png", "third.png"]);
    }

    #[test]
    fn selects_first_covering_candidate() {
        let d = two_step();
        assert_eq!(d.select_source(1.0, 300.0), "a.png");
        assert_eq!(d.select_source(1.0, 800.0), "b.png");
        assert_eq!(d.select_source(2.0, 400.0), "b.png");
    }

    #[test]
    fn falls_back_beyond_every_ceiling() {
        let d = two_step();
        assert_eq!(d.select_source(2.0, 900.0), "fallback.png");
        assert_eq!(d.select_source(3.0, 100.0), "fallback.png");
    }

    #[test]
    fn serializes_for_hosts() {
        let d = ImageDescriptor::new(vec![candidate("a.png", 1, 400)], "f.png").unwrap();
        assert_eq!(
            serde_json::to_string(&d).unwrap(),
            r#"{"candidates":[{"src":"a.png","device_pixel_ratio":1,"breakpoint":400}],"fallback_src":"f.png"}"#
        );
    }

    #[test]
    fn pixel_ratio_is_checked_before_width_wins() {
        // A wide low-density asset does not satisfy a dense screen.
        let d = ImageDescriptor::new(
            vec![candidate("wide@1x.png", 1, 2000), candidate("narrow@3x.png", 3, 500)],
            "",
        )
        .unwrap();
        assert_eq!(d.select_source(1.0, 1500.0), "wide@1x.png");
        assert_eq!(d.select_source(2.0, 400.0), "narrow@3x.png");
        assert_eq!(d.select_source(2.0, 1500.0), "");
    }
}
