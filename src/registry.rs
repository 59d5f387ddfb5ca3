//! Strategy registry
//!
//! Maps strategy identifiers to factories. The registry is built once at
//! startup and handed to whatever needs to construct strategies; there is no
//! global registration.

use std::collections::BTreeMap;

use crate::error::{Result, VersioningError};
use crate::strategy::{
    AlwaysBumpStrategy, DefaultStrategy, MinorBreakingStrategy, StrategyOptions,
    VersioningStrategy,
};

/// Builds a strategy from its options
pub type StrategyFactory = fn(&StrategyOptions) -> Result<Box<dyn VersioningStrategy>>;

#[derive(Clone, Default)]
pub struct StrategyRegistry {
    factories: BTreeMap<String, StrategyFactory>,
}

impl StrategyRegistry {
    /// An empty registry
    pub fn new() -> Self {
        StrategyRegistry::default()
    }

    /// A registry holding every built-in strategy
    pub fn with_builtins() -> Self {
        let builtins: [(&str, StrategyFactory); 5] = [
            (DefaultStrategy::ID, DefaultStrategy::factory),
            (MinorBreakingStrategy::ID, MinorBreakingStrategy::factory),
            (AlwaysBumpStrategy::PATCH_ID, AlwaysBumpStrategy::patch_factory),
            (AlwaysBumpStrategy::MINOR_ID, AlwaysBumpStrategy::minor_factory),
            (AlwaysBumpStrategy::MAJOR_ID, AlwaysBumpStrategy::major_factory),
        ];

        let factories = builtins
            .into_iter()
            .map(|(id, factory)| (id.to_string(), factory))
            .collect();
        StrategyRegistry { factories }
    }

    /// Register a factory under a new identifier
    pub fn register(&mut self, id: impl Into<String>, factory: StrategyFactory) -> Result<()> {
        let id = id.into();
        if self.factories.contains_key(&id) {
            return Err(VersioningError::DuplicateStrategy(id));
        }
        tracing::debug!(strategy = %id, "registered versioning strategy");
        self.factories.insert(id, factory);
        Ok(())
    }

    /// Construct the strategy registered under `id`
    pub fn create(&self, id: &str, options: &StrategyOptions) -> Result<Box<dyn VersioningStrategy>> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| VersioningError::UnknownStrategy(id.to_string()))?;
        factory(options)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered identifiers, sorted
    pub fn ids(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}
