//! Domain logic - version values and bump classifications, free of any I/O

pub mod classification;
pub mod prerelease;
pub mod version;

pub use classification::BumpClassification;
pub use prerelease::{PreRelease, PreReleaseType};
pub use version::Version;
