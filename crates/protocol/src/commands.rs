use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Handle for an image registered with a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub u32);

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Instruction for the host: set this image's source.
///
/// A render pass emits a `Vec<SrcAssignment>`; each entry carries all the
/// data the host needs to apply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrcAssignment {
    pub image: ImageId,
    pub src: String,
}

/// Window notifications that schedule a re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportEvent {
    Scroll,
    Resize,
}

impl std::str::FromStr for ViewportEvent {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scroll" => Ok(Self::Scroll),
            "resize" => Ok(Self::Resize),
            other => Err(UnknownEvent(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown viewport event: {0}")]
pub struct UnknownEvent(pub String);
