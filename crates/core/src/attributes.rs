use serde::{Deserialize, Serialize};

use crate::config::LoaderConfig;
use crate::model::ImageDescriptor;

pub const IMAGE_SET_ATTRIBUTE: &str = "data-lil-image-set";
pub const FALLBACK_SRC_ATTRIBUTE: &str = "data-lil-fallback-src";
pub const SRC_ATTRIBUTE: &str = "src";

/// Attribute values read from one image element by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttributes {
    pub image_set: Option<String>,
    pub fallback_src: Option<String>,
    pub src: Option<String>,
}

impl ImageAttributes {
    pub fn new(image_set: impl Into<String>) -> Self {
        Self {
            image_set: Some(image_set.into()),
            ..Self::default()
        }
    }

    pub fn with_fallback_src(mut self, fallback_src: impl Into<String>) -> Self {
        self.fallback_src = Some(fallback_src.into());
        self
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Pick out the attributes the loader cares about from an element's
    /// `(name, value)` pairs. Names compare ASCII case-insensitively, as in
    /// HTML.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
        config: &LoaderConfig,
    ) -> Self {
        let mut attrs = Self::default();
        for (name, value) in pairs {
            let slot = if name.eq_ignore_ascii_case(&config.image_set_attribute) {
                &mut attrs.image_set
            } else if name.eq_ignore_ascii_case(&config.fallback_src_attribute) {
                &mut attrs.fallback_src
            } else if name.eq_ignore_ascii_case(SRC_ATTRIBUTE) {
                &mut attrs.src
            } else {
                continue;
            };
            *slot = Some(value.to_string());
        }
        attrs
    }

    /// The source used when no candidate qualifies: the explicit fallback,
    /// then the element's current source, then the empty string. Empty
    /// values are skipped.
    pub fn resolve_fallback(&self) -> &str {
        [&self.fallback_src, &self.src]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }

    /// Parse the image set. `None` means the element is not lazily loaded.
    pub fn to_descriptor(&self) -> Option<ImageDescriptor> {
        let raw = self.image_set.as_deref().filter(|s| !s.is_empty())?;
        ImageDescriptor::parse(raw, self.resolve_fallback())
    }
}
