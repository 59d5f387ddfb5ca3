//! The `minor-breaking` strategy
//!
//! Breaking changes bump the minor component, on both sides of 1.0. Before
//! 1.0, `force_major` promotes a breaking change to `1.0.0` instead.

use super::{StrategyOptions, VersionBump, VersioningStrategy};
use crate::domain::{BumpClassification, Version};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct MinorBreakingStrategy {
    options: StrategyOptions,
}

impl MinorBreakingStrategy {
    pub const ID: &'static str = "minor-breaking";

    pub fn new(options: StrategyOptions) -> Self {
        MinorBreakingStrategy { options }
    }

    /// Registry factory
    pub fn factory(options: &StrategyOptions) -> Result<Box<dyn VersioningStrategy>> {
        Ok(Box::new(MinorBreakingStrategy::new(options.clone())))
    }
}

impl VersioningStrategy for MinorBreakingStrategy {
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
            BumpClassification::Breaking if current.major == 0 && self.options.force_major => {
                VersionBump::Major
            }
            BumpClassification::Breaking => VersionBump::Minor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VersioningError;
    use crate::strategy::bump_str;
    use std::sync::Arc;

    const SAMPLES: [&str; 8] = [
        "0.0.0", "0.0.7", "0.3.1", "0.9.12", "1.0.0", "1.4.2", "3.17.0", "12.0.99",
    ];

    fn v(raw: &str) -> Version {
        Version::parse(raw).unwrap()
    }

    fn strategy() -> MinorBreakingStrategy {
        MinorBreakingStrategy::new(StrategyOptions::default())
    }

    fn forced() -> MinorBreakingStrategy {
        MinorBreakingStrategy::new(StrategyOptions {
            force_major: true,
            ..StrategyOptions::default()
        })
    }

    #[test]
    fn test_patch_increments_patch_only() {
        let s = strategy();
        for raw in SAMPLES {
            let current = v(raw);
            let next = s.bump(&current, BumpClassification::Patch).unwrap();
            assert_eq!(next, Version::new(current.major, current.minor, current.patch + 1));
        }
    }

    #[test]
    fn test_minor_increments_minor_and_resets_patch() {
        let s = strategy();
        for raw in SAMPLES {
            let current = v(raw);
            let next = s.bump(&current, BumpClassification::Minor).unwrap();
            assert_eq!(next, Version::new(current.major, current.minor + 1, 0));
        }
    }

    #[test]
    fn test_breaking_is_a_minor_bump() {
        let s = strategy();
        for raw in SAMPLES {
            let current = v(raw);
            let next = s.bump(&current, BumpClassification::Breaking).unwrap();
            assert_eq!(next, Version::new(current.major, current.minor + 1, 0));
        }
    }

    #[test]
    fn test_force_major_promotes_pre_one_breaking() {
        let s = forced();
        for raw in SAMPLES.iter().filter(|raw| raw.starts_with("0.")) {
            let next = s.bump(&v(raw), BumpClassification::Breaking).unwrap();
            assert_eq!(next, Version::new(1, 0, 0));
        }
    }

    #[test]
    fn test_force_major_keeps_minor_bump_after_one() {
        let s = forced();
        assert_eq!(bump_str(&s, "1.4.2", "breaking").unwrap().to_string(), "1.5.0");
        for raw in SAMPLES.iter().filter(|raw| !raw.starts_with("0.")) {
            let current = v(raw);
            let next = s.bump(&current, BumpClassification::Breaking).unwrap();
            assert_eq!(next, Version::new(current.major, current.minor + 1, 0));
        }
    }

    #[test]
    fn test_force_major_leaves_other_kinds_alone() {
        let s = forced();
        assert_eq!(s.bump(&v("1.4.2"), BumpClassification::Patch).unwrap(), v("1.4.3"));
        assert_eq!(s.bump(&v("1.4.2"), BumpClassification::Minor).unwrap(), v("1.5.0"));
    }

    #[test]
    fn test_documented_scenarios() {
        let s = strategy();
        assert_eq!(bump_str(&s, "1.4.2", "patch").unwrap().to_string(), "1.4.3");
        assert_eq!(bump_str(&s, "1.4.2", "minor").unwrap().to_string(), "1.5.0");
        assert_eq!(bump_str(&s, "1.4.2", "breaking").unwrap().to_string(), "1.5.0");
        assert_eq!(bump_str(&s, "0.3.1", "breaking").unwrap().to_string(), "0.4.0");
        assert_eq!(bump_str(&forced(), "0.3.1", "breaking").unwrap().to_string(), "1.0.0");
        assert!(matches!(
            bump_str(&s, "1.4.2", "unknown"),
            Err(VersioningError::InvalidClassification(_))
        ));
    }

    #[test]
    fn test_malformed_current_is_reported() {
        let err = bump_str(&strategy(), "one.four.two", "patch").unwrap_err();
        assert!(matches!(err, VersioningError::MalformedVersion(ref s) if s == "one.four.two"));
    }

    #[test]
    fn test_bump_is_pure_and_increasing() {
        let s = strategy();
        for raw in SAMPLES {
            let current = v(raw);
            let snapshot = current.clone();
            for kind in BumpClassification::ALL {
                let first = s.bump(&current, kind).unwrap();
                let second = s.bump(&current, kind).unwrap();
                assert_eq!(first, second);
                assert!(first > current);
            }
            assert_eq!(current, snapshot);
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let s: Arc<dyn VersioningStrategy> = Arc::new(strategy());
        let handles: Vec<_> = SAMPLES
            .iter()
            .map(|raw| {
                let s = Arc::clone(&s);
                let current = v(raw);
                std::thread::spawn(move || s.bump(&current, BumpClassification::Breaking))
            })
            .collect();

        for (raw, handle) in SAMPLES.iter().zip(handles) {
            let current = v(raw);
            let next = handle.join().unwrap().unwrap();
            assert_eq!(next, Version::new(current.major, current.minor + 1, 0));
        }
    }

    #[test]
    fn test_initial_version_default() {
        assert_eq!(strategy().initial_version(), Version::new(1, 0, 0));
    }
}
