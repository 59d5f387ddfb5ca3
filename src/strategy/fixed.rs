//! Strategies that ignore the classification and always move the same component.

use super::{StrategyOptions, VersionBump, VersioningStrategy};
use crate::domain::{BumpClassification, Version};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AlwaysBumpStrategy {
    component: VersionBump,
    options: StrategyOptions,
}

impl AlwaysBumpStrategy {
    pub const PATCH_ID: &'static str = "always-bump-patch";
    pub const MINOR_ID: &'static str = "always-bump-minor";
    pub const MAJOR_ID: &'static str = "always-bump-major";

    pub fn new(component: VersionBump, options: StrategyOptions) -> Self {
        AlwaysBumpStrategy { component, options }
    }

    pub fn patch_factory(options: &StrategyOptions) -> Result<Box<dyn VersioningStrategy>> {
        Ok(Box::new(AlwaysBumpStrategy::new(VersionBump::Patch, options.clone())))
    }

    pub fn minor_factory(options: &StrategyOptions) -> Result<Box<dyn VersioningStrategy>> {
        Ok(Box::new(AlwaysBumpStrategy::new(VersionBump::Minor, options.clone())))
    }

    pub fn major_factory(options: &StrategyOptions) -> Result<Box<dyn VersioningStrategy>> {
        Ok(Box::new(AlwaysBumpStrategy::new(VersionBump::Major, options.clone())))
    }
}

impl VersioningStrategy for AlwaysBumpStrategy {
    fn name(&self) -> &'static str {
        match self.component {
            VersionBump::Patch => Self::PATCH_ID,
            VersionBump::Minor => Self::MINOR_ID,
            VersionBump::Major => Self::MAJOR_ID,
        }
    }

    fn options(&self) -> &StrategyOptions {
        &self.options
    }

    fn target(&self, _current: &Version, _classification: BumpClassification) -> VersionBump {
        self.component
    }
}
