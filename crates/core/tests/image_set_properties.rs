//! Property tests for image-set parsing and source selection.

use lil_core::{ImageCandidate, ImageDescriptor};
use proptest::prelude::*;

type Entry = (String, u32, u32);

fn entry() -> impl Strategy<Value = Entry> {
    ("[a-z]{1,8}(/[a-z0-9]{1,6})?\\.(png|jpg|webp)", 1..6u32, 1..4000u32)
}

fn malformed() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z-]{1,12}",
        "[a-z]{1,6}\\.png [0-9]{1,3}x",
        "[a-z]{1,6}\\.png [0-9]{1,3} [0-9]{1,4}px",
    ]
}

fn render(entry: &Entry) -> String {
    format!("{} {}x {}px", entry.0, entry.1, entry.2)
}

fn triples(d: &ImageDescriptor) -> Vec<Entry> {
    d.candidates()
        .iter()
        .map(|c| (c.src().to_string(), c.device_pixel_ratio(), c.breakpoint()))
        .collect()
}

proptest! {
    #[test]
    fn candidates_are_sorted(entries in proptest::collection::vec(entry(), 1..12)) {
        let raw = entries.iter().map(render).collect::<Vec<_>>().join(", ");
        let d = ImageDescriptor::parse(&raw, "fallback.png").unwrap();
        prop_assert_eq!(d.candidates().len(), entries.len());
        for pair in d.candidates().windows(2) {
            prop_assert!(pair[0].sort_key() <= pair[1].sort_key());
        }
    }

    #[test]
    fn only_valid_entries_survive(
        mixed in proptest::collection::vec(
            prop_oneof![entry().prop_map(Ok::<Entry, String>), malformed().prop_map(Err::<Entry, String>)],
            1..16,
        )
    ) {
        let raw = mixed
            .iter()
            .map(|item| match item {
                Ok(e) => render(e),
                Err(bad) => bad.clone(),
            })
            .collect::<Vec<_>>()
            .join(" , ");

        let mut expected: Vec<Entry> = mixed.iter().filter_map(|item| item.clone().ok()).collect();
        expected.sort_by_key(|e| (e.1, e.2));

        match ImageDescriptor::parse(&raw, "") {
            Some(d) => prop_assert_eq!(triples(&d), expected),
            None => prop_assert!(expected.is_empty()),
        }
    }

    #[test]
    fn parsing_is_idempotent(entries in proptest::collection::vec(entry(), 0..8)) {
        let raw = entries.iter().map(render).collect::<Vec<_>>().join(",");
        prop_assert_eq!(
            ImageDescriptor::parse(&raw, "f.png"),
            ImageDescriptor::parse(&raw, "f.png")
        );
    }

    #[test]
    fn smallest_candidate_covers_minimal_device(
        entries in proptest::collection::vec(entry(), 1..8),
        dpr_frac in 0.0..=1.0f64,
        width_frac in 0.0..=1.0f64,
    ) {
        let raw = entries.iter().map(render).collect::<Vec<_>>().join(", ");
        let d = ImageDescriptor::parse(&raw, "fallback.png").unwrap();
        let first = &d.candidates()[0];
        let dpr = f64::from(first.device_pixel_ratio()) * dpr_frac;
        let width = f64::from(first.breakpoint()) * width_frac;
        prop_assert_eq!(d.select_source(dpr, width), first.src());
    }

    #[test]
    fn beyond_every_ceiling_uses_fallback(
        entries in proptest::collection::vec(entry(), 1..8),
        extra_dpr in 0.01..3.0f64,
        extra_width in 0.5..500.0f64,
    ) {
        let raw = entries.iter().map(render).collect::<Vec<_>>().join(", ");
        let d = ImageDescriptor::parse(&raw, "fallback.png").unwrap();
        let max_dpr = d.candidates().iter().map(ImageCandidate::device_pixel_ratio).max().unwrap();
        let max_width = d.candidates().iter().map(ImageCandidate::breakpoint).max().unwrap();
        prop_assert_eq!(
            d.select_source(f64::from(max_dpr) + extra_dpr, f64::from(max_width) + extra_width),
            "fallback.png"
        );
    }
}

#[test]
fn documented_examples() {
    let d = ImageDescriptor::parse("a.png 1x 400px, b.png 2x 800px", "fallback.png").unwrap();
    assert_eq!(
        triples(&d),
        vec![("a.png".to_string(), 1, 400), ("b.png".to_string(), 2, 800)]
    );
    assert_eq!(d.select_source(1.0, 300.0), "a.png");
    assert_eq!(d.select_source(2.0, 900.0), "fallback.png");
    assert_eq!(d.select_source(1.0, 800.0), "b.png");

    let d = ImageDescriptor::parse("bad-entry, c.png 3x 1200px", "").unwrap();
    assert_eq!(triples(&d), vec![("c.png".to_string(), 3, 1200)]);

    assert!(ImageDescriptor::parse("", "fallback.png").is_none());
    assert!(ImageDescriptor::parse("bad-entry, worse entry", "fallback.png").is_none());
}
