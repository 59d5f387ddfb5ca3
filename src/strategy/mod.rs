//! Versioning strategies
//!
//! A strategy turns a component's current version and a bump classification
//! into the next version. Strategies only decide *which* release component
//! moves (see [`VersionBump`]); pre-release handling and the arithmetic are
//! shared through [`apply_bump`] so every strategy treats labels the same way.
//!
//! Strategies hold nothing but their immutable [`StrategyOptions`], so one
//! instance can serve every component of a release run, from any thread.

pub mod fixed;
pub mod minor_breaking;
pub mod standard;

pub use fixed::AlwaysBumpStrategy;
pub use minor_breaking::MinorBreakingStrategy;
pub use standard::DefaultStrategy;

use crate::domain::{BumpClassification, PreRelease, PreReleaseType, Version};
use crate::error::Result;

/// Release component moved by a bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

/// Construction-time options shared by all strategies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyOptions {
    /// Promote breaking changes to a major bump
    pub force_major: bool,
    /// Produce pre-release versions instead of releases
    pub prerelease: bool,
    /// Label for new pre-releases; `rc` when unset
    pub prerelease_type: Option<PreReleaseType>,
    /// Version used for a component's first release
    pub initial_version: Option<Version>,
}

impl StrategyOptions {
    pub fn prerelease_label(&self) -> PreReleaseType {
        self.prerelease_type
            .clone()
            .unwrap_or(PreReleaseType::ReleaseCandidate)
    }
}

/// Trait for versioning strategies
pub trait VersioningStrategy: Send + Sync {
    /// Identifier the strategy is registered under
    fn name(&self) -> &'static str;

    fn options(&self) -> &StrategyOptions;

    /// Decide which component a classification moves for `current`
    fn target(&self, current: &Version, classification: BumpClassification) -> VersionBump;

    /// Compute the next version. Pure: `current` is never modified and the
    /// result is strictly greater than `current`.
    fn bump(&self, current: &Version, classification: BumpClassification) -> Result<Version> {
        let target = self.target(current, classification);
        let next = apply_bump(current, target, self.options())?;
        tracing::debug!(
            strategy = self.name(),
            %current,
            %classification,
            ?target,
            %next,
            "computed next version"
        );
        Ok(next)
    }

    /// Version for a component that has never been released
    fn initial_version(&self) -> Version {
        self.options()
            .initial_version
            .clone()
            .unwrap_or_else(|| Version::new(1, 0, 0))
    }
}

/// Parse both inputs and bump, reporting `MalformedVersion` or `InvalidClassification`
pub fn bump_str(
    strategy: &dyn VersioningStrategy,
    current: &str,
    classification: &str,
) -> Result<Version> {
    let current = Version::parse(current)?;
    let classification = BumpClassification::parse(classification)?;
    strategy.bump(&current, classification)
}

/// Whether a pre-release's core already carries `bump` relative to the last release
fn core_satisfies(version: &Version, bump: VersionBump) -> bool {
    match bump {
        VersionBump::Patch => true,
        VersionBump::Minor => version.patch == 0,
        VersionBump::Major => version.minor == 0 && version.patch == 0,
    }
}

/// Apply a component bump to `current`, honouring the pre-release options.
///
/// A pre-release whose core already reflects the bump is either iterated
/// (pre-releases on) or graduated to its core (pre-releases off). Otherwise
/// the core moves and, with pre-releases on, gets a fresh `<label>.1`.
/// Build metadata never survives.
pub fn apply_bump(
    current: &Version,
    bump: VersionBump,
    options: &StrategyOptions,
) -> Result<Version> {
    if let Some(pre) = &current.pre {
        if core_satisfies(current, bump) {
            if !options.prerelease {
                return Ok(current.core());
            }

            let promoted = PreRelease::first(options.prerelease_label());
            let next_pre = if promoted > *pre {
                promoted
            } else {
                pre.increment_iteration()?
            };
            return Ok(current.with_prerelease(next_pre));
        }
    }

    let core = match bump {
        VersionBump::Major => current.next_major()?,
        VersionBump::Minor => current.next_minor()?,
        VersionBump::Patch => current.next_patch()?,
    };

    if options.prerelease {
        Ok(core.with_prerelease(PreRelease::first(options.prerelease_label())))
    } else {
        Ok(core)
    }
}
