use crate::domain::prerelease::PreRelease;
use crate::error::{Result, VersioningError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// Values are never mutated in place; every bump returns a new `Version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<PreRelease>,
    pub build: Option<String>,
}

impl Version {
    /// Create a new release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
            build: None,
        }
    }

    /// Parse a version string (e.g., "v1.2.3" or "1.2.3-rc.1+build.5")
    ///
    /// A single leading `v`/`V` is accepted. Everything after it must be
    /// strict semantic-version syntax with a pre-release label of the form
    /// `label` or `label.N`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let clean = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let parsed = semver::Version::parse(clean).map_err(|e| {
            tracing::debug!(input, error = %e, "rejected version");
            VersioningError::malformed(input)
        })?;

        let pre = if parsed.pre.is_empty() {
            None
        } else {
            Some(PreRelease::parse(parsed.pre.as_str()).map_err(|e| {
                tracing::debug!(input, error = %e, "rejected pre-release label");
                VersioningError::malformed(input)
            })?)
        };

        let build = if parsed.build.is_empty() {
            None
        } else {
            Some(parsed.build.to_string())
        };

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            pre,
            build,
        })
    }

    /// Attach a pre-release label, dropping any build metadata
    pub fn with_prerelease(&self, pre: PreRelease) -> Self {
        Version {
            pre: Some(pre),
            build: None,
            ..self.core()
        }
    }

    /// The release this version belongs to, without pre-release or build metadata
    pub fn core(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// Next major release: (M+1, 0, 0)
    pub fn next_major(&self) -> Result<Self> {
        let major = self
            .major
            .checked_add(1)
            .ok_or_else(|| VersioningError::overflow(self.to_string()))?;
        Ok(Version::new(major, 0, 0))
    }

    /// Next minor release: (M, m+1, 0)
    pub fn next_minor(&self) -> Result<Self> {
        let minor = self
            .minor
            .checked_add(1)
            .ok_or_else(|| VersioningError::overflow(self.to_string()))?;
        Ok(Version::new(self.major, minor, 0))
    }

    /// Next patch release: (M, m, p+1)
    pub fn next_patch(&self) -> Result<Self> {
        let patch = self
            .patch
            .checked_add(1)
            .ok_or_else(|| VersioningError::overflow(self.to_string()))?;
        Ok(Version::new(self.major, self.minor, patch))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                // a release outranks its own pre-releases
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersioningError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(de::Error::custom)
    }
}
