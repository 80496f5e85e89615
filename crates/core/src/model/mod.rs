pub mod candidate;
pub mod descriptor;

pub use candidate::ImageCandidate;
pub use descriptor::ImageDescriptor;
