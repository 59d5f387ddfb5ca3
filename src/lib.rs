pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod registry;
pub mod strategy;
pub mod ui;

pub use domain::{BumpClassification, PreRelease, PreReleaseType, Version};
pub use error::{Result, VersioningError};
pub use registry::StrategyRegistry;
pub use strategy::{bump_str, StrategyOptions, VersioningStrategy};
