pub mod commands;
pub mod types;

pub use commands::{ImageId, SrcAssignment, UnknownEvent, ViewportEvent};
pub use types::{NodeBox, Viewport};
