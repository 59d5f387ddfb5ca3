// tests/strategy_test.rs
use release_versioning::strategy::VersionBump;
use release_versioning::{
    bump_str, BumpClassification, StrategyOptions, StrategyRegistry, Version, VersioningError,
    VersioningStrategy,
};

fn minor_breaking(options: StrategyOptions) -> Box<dyn VersioningStrategy> {
    StrategyRegistry::with_builtins()
        .create("minor-breaking", &options)
        .unwrap()
}

fn force_major() -> StrategyOptions {
    StrategyOptions {
        force_major: true,
        ..StrategyOptions::default()
    }
}

/// Release versions spread over pre-1.0 and post-1.0 ranges.
fn sample_versions() -> Vec<Version> {
    let mut versions = Vec::new();
    for major in [0, 1, 2, 10] {
        for minor in [0, 1, 4, 19] {
            for patch in [0, 1, 2, 99] {
                versions.push(Version::new(major, minor, patch));
            }
        }
    }
    versions
}

#[test]
fn test_patch_property() {
    let strategy = minor_breaking(StrategyOptions::default());
    for v in sample_versions() {
        let next = strategy.bump(&v, BumpClassification::Patch).unwrap();
        assert_eq!(next, Version::new(v.major, v.minor, v.patch + 1));
    }
}

#[test]
fn test_minor_property() {
    let strategy = minor_breaking(StrategyOptions::default());
    for v in sample_versions() {
        let next = strategy.bump(&v, BumpClassification::Minor).unwrap();
        assert_eq!(next, Version::new(v.major, v.minor + 1, 0));
    }
}

#[test]
fn test_breaking_property() {
    let strategy = minor_breaking(StrategyOptions::default());
    for v in sample_versions() {
        let next = strategy.bump(&v, BumpClassification::Breaking).unwrap();
        assert_eq!(next, Version::new(v.major, v.minor + 1, 0));
    }
}

#[test]
fn test_breaking_pre_one_with_force_major() {
    let strategy = minor_breaking(force_major());
    for v in sample_versions().into_iter().filter(|v| v.major == 0) {
        let next = strategy.bump(&v, BumpClassification::Breaking).unwrap();
        assert_eq!(next, Version::new(1, 0, 0));
    }
}

#[test]
fn test_breaking_post_one_ignores_force_major() {
    let strategy = minor_breaking(force_major());
    for v in sample_versions().into_iter().filter(|v| v.major >= 1) {
        let next = strategy.bump(&v, BumpClassification::Breaking).unwrap();
        assert_eq!(next, Version::new(v.major, v.minor + 1, 0));
    }
}

#[test]
fn test_ordering_law_across_strategies() {
    let registry = StrategyRegistry::with_builtins();
    for id in registry.ids() {
        for options in [StrategyOptions::default(), force_major()] {
            let strategy = registry.create(id, &options).unwrap();
            for v in sample_versions() {
                for kind in BumpClassification::ALL {
                    let next = strategy.bump(&v, kind).unwrap();
                    assert!(next > v, "{}: {} {} gave {}", id, v, kind, next);
                }
            }
        }
    }
}

#[test]
fn test_scenarios() {
    let strategy = minor_breaking(StrategyOptions::default());
    let forced = minor_breaking(force_major());

    let cases = [
        ("1.4.2", "patch", "1.4.3"),
        ("1.4.2", "minor", "1.5.0"),
        ("1.4.2", "breaking", "1.5.0"),
        ("0.3.1", "breaking", "0.4.0"),
    ];
    for (current, kind, expected) in cases {
        assert_eq!(
            bump_str(strategy.as_ref(), current, kind).unwrap().to_string(),
            expected
        );
    }

    assert_eq!(
        bump_str(forced.as_ref(), "0.3.1", "breaking").unwrap().to_string(),
        "1.0.0"
    );
    assert_eq!(
        bump_str(forced.as_ref(), "1.4.2", "breaking").unwrap().to_string(),
        "1.5.0"
    );
    assert!(matches!(
        bump_str(strategy.as_ref(), "1.4.2", "unknown"),
        Err(VersioningError::InvalidClassification(_))
    ));
}

#[test]
fn test_target_is_exposed_for_hosts() {
    let strategy = minor_breaking(StrategyOptions::default());
    let current = Version::new(1, 4, 2);
    assert_eq!(
        strategy.target(&current, BumpClassification::Breaking),
        VersionBump::Minor
    );
}
