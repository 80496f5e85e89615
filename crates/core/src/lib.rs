//! Lazy, responsive image source selection.
//!
//! Elements declare an image set such as
//! `data-lil-image-set="small.jpg 1x 480px, large.jpg 2x 1280px"`. The
//! loader parses it once, then on each render picks the smallest source
//! that covers the device's pixel ratio and viewport width for every
//! element currently on screen.

pub mod attributes;
pub mod config;
pub mod loader;
pub mod model;
pub mod parsers;
pub mod throttle;
pub mod visibility;

pub use attributes::ImageAttributes;
pub use config::{ConfigError, LoaderConfig};
pub use loader::{LazyImage, LazyImageLoader};
pub use model::{ImageCandidate, ImageDescriptor};
pub use parsers::{parse_descriptor, parse_image_set};
