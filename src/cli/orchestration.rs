//! Bump workflow orchestration
//!
//! Keeps the CLI thin: argument parsing lives in main.rs, while this module
//! merges overrides into the loaded config, builds the strategy and runs it.

use crate::config::Config;
use crate::domain::{BumpClassification, Version};
use crate::error::{Result, VersioningError};
use crate::registry::StrategyRegistry;

/// Arguments for the bump workflow
///
/// Mirrors the CLI args without depending on clap. `None`/`false` leaves the
/// config file's value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Strategy identifier overriding `versioning`
    pub strategy: Option<String>,

    /// Current released version; `None` for a first release
    pub current: Option<String>,

    /// Bump classification, required unless this is a first release
    pub classification: Option<String>,

    pub force_major: bool,

    pub prerelease: bool,

    pub prerelease_type: Option<String>,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Strategy that computed the version
    pub strategy: String,

    /// Version bumped from; `None` for a first release
    pub previous: Option<Version>,

    pub classification: Option<BumpClassification>,

    /// The computed version
    pub next: Version,
}

/// Apply CLI/env overrides on top of the file config.
pub fn merge_overrides(mut config: Config, args: &BumpWorkflowArgs) -> Config {
    if let Some(strategy) = &args.strategy {
        config.versioning = strategy.clone();
    }
    if args.force_major {
        config.force_major = true;
    }
    if args.prerelease {
        config.prerelease = true;
    }
    if let Some(label) = &args.prerelease_type {
        config.prerelease_type = Some(label.clone());
    }
    config
}

/// Main bump workflow
///
/// 1. Merge overrides into the config
/// 2. Build the configured strategy from the registry
/// 3. Use the strategy's initial version when there is no current version,
///    otherwise parse and bump the current version
pub fn run_bump_workflow(
    args: &BumpWorkflowArgs,
    config: Config,
    registry: &StrategyRegistry,
) -> Result<WorkflowResult> {
    let config = merge_overrides(config, args);
    let options = config.strategy_options()?;
    let strategy = registry.create(&config.versioning, &options)?;
    tracing::debug!(strategy = strategy.name(), ?options, "strategy ready");

    let Some(raw_current) = args.current.as_deref() else {
        let next = strategy.initial_version();
        tracing::info!(%next, "no current version, using initial version");
        return Ok(WorkflowResult {
            strategy: strategy.name().to_string(),
            previous: None,
            classification: None,
            next,
        });
    };

    let current = Version::parse(raw_current)?;
    let raw_classification = args
        .classification
        .as_deref()
        .ok_or_else(|| VersioningError::classification(""))?;
    let classification = BumpClassification::parse(raw_classification)?;

    let next = strategy.bump(&current, classification)?;
    tracing::info!(%current, %classification, %next, "bumped version");

    Ok(WorkflowResult {
        strategy: strategy.name().to_string(),
        previous: Some(current),
        classification: Some(classification),
        next,
    })
}
