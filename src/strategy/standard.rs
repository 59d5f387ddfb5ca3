//! The `default` strategy: plain semantic versioning.

use super::{StrategyOptions, VersionBump, VersioningStrategy};
use crate::domain::{BumpClassification, Version};
use crate::error::Result;

/// Breaking changes bump major once past 1.0; during initial development
/// (`0.x`) they bump minor unless `force_major` is set.
#[derive(Debug, Clone, Default)]
pub struct DefaultStrategy {
    options: StrategyOptions,
}

impl DefaultStrategy {
    pub const ID: &'static str = "default";

    pub fn new(options: StrategyOptions) -> Self {
        DefaultStrategy { options }
    }

    pub fn factory(options: &StrategyOptions) -> Result<Box<dyn VersioningStrategy>> {
        Ok(Box::new(DefaultStrategy::new(options.clone())))
    }
}

impl VersioningStrategy for DefaultStrategy {
    fn name(&self) -> &'static str {
        Self::ID
    }

    fn options(&self) -> &StrategyOptions {
        &self.options
    }

    fn target(&self, current: &Version, classification: BumpClassification) -> VersionBump {
        match classification {
            BumpClassification::Patch => VersionBump::Patch,
            BumpClassification::Minor => VersionBump::Minor,
            BumpClassification::Breaking if current.major >= 1 || self.options.force_major => {
                VersionBump::Major
            }
            BumpClassification::Breaking => VersionBump::Minor,
        }
    }
}
