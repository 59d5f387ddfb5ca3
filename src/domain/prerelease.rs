//! Pre-release labels for semantic versions
//!
//! Supports pre-release identifiers (alpha, beta, rc, and custom) with optional iteration numbers.
//! Precedence follows semver.org: https://semver.org/#spec-item-11

use crate::error::{Result, VersioningError};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Pre-release identifier type (alpha, beta, rc, or custom)
///
/// Equality, hashing and ordering go through the written identifier, so
/// `Custom("rc")` and `ReleaseCandidate` are the same label.
#[derive(Debug, Clone)]
pub enum PreReleaseType {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
    /// Custom pre-release identifier
    Custom(String),
}

impl PreReleaseType {
    /// Parse a pre-release type from a user-supplied option
    ///
    /// Accepts: "alpha", "a", "beta", "b", "rc" in any case, or any custom
    /// alphanumeric-hyphen string
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Read the identifier of a version's pre-release label as written
    ///
    /// Only the exact spellings "alpha", "beta" and "rc" map to the built-in
    /// variants; anything else is kept verbatim.
    pub fn from_label(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(PreReleaseType::Alpha),
            "beta" => Ok(PreReleaseType::Beta),
            "rc" => Ok(PreReleaseType::ReleaseCandidate),
            _ => {
                validate_identifier(s)?;
                Ok(PreReleaseType::Custom(s.to_string()))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PreReleaseType::Alpha => "alpha",
            PreReleaseType::Beta => "beta",
            PreReleaseType::ReleaseCandidate => "rc",
            PreReleaseType::Custom(s) => s,
        }
    }
}

fn validate_identifier(s: &str) -> Result<()> {
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Ok(())
    } else {
        Err(VersioningError::malformed(format!(
            "invalid pre-release identifier '{}'",
            s
        )))
    }
}

impl FromStr for PreReleaseType {
    type Err = VersioningError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" | "a" => Ok(PreReleaseType::Alpha),
            "beta" | "b" => Ok(PreReleaseType::Beta),
            "rc" => Ok(PreReleaseType::ReleaseCandidate),
            _ => {
                validate_identifier(s)?;
                Ok(PreReleaseType::Custom(s.to_string()))
            }
        }
    }
}

impl PartialEq for PreReleaseType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PreReleaseType {}

impl Hash for PreReleaseType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-release label with optional iteration number
///
/// # Examples
/// - "alpha" -> PreRelease { identifier: Alpha, iteration: None }
/// - "beta.1" -> PreRelease { identifier: Beta, iteration: Some(1) }
/// - "rc.3" -> PreRelease { identifier: ReleaseCandidate, iteration: Some(3) }
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    /// The pre-release identifier (alpha, beta, rc, or custom)
    pub identifier: PreReleaseType,
    /// Optional iteration number (incremented per release cycle)
    pub iteration: Option<u64>,
}

impl PreRelease {
    /// Create a new pre-release label
    pub fn new(identifier: PreReleaseType, iteration: Option<u64>) -> Self {
        PreRelease {
            identifier,
            iteration,
        }
    }

    /// First iteration of a label, e.g. "rc" -> "rc.1"
    pub fn first(identifier: PreReleaseType) -> Self {
        PreRelease::new(identifier, Some(1))
    }

    /// Parse a pre-release label from a string
    ///
    /// Accepts formats like "beta", "beta.1", "rc.2", or "custom-id.5". The
    /// identifier is kept exactly as written.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(VersioningError::malformed("empty pre-release identifier"));
        }

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() > 2 {
            return Err(VersioningError::malformed(format!(
                "pre-release '{}' has more than an identifier and an iteration",
                s
            )));
        }

        let identifier = PreReleaseType::from_label(parts[0])?;

        let iteration = match parts.get(1) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                VersioningError::malformed(format!("invalid iteration number '{}'", raw))
            })?),
            None => None,
        };

        Ok(PreRelease {
            identifier,
            iteration,
        })
    }

    /// Increment the iteration number
    ///
    /// If iteration is None, returns Some(1). Otherwise increments by 1.
    pub fn increment_iteration(&self) -> Result<Self> {
        let next = match self.iteration {
            Some(n) => n
                .checked_add(1)
                .ok_or_else(|| VersioningError::overflow(self.to_string()))?,
            None => 1,
        };

        Ok(PreRelease {
            identifier: self.identifier.clone(),
            iteration: Some(next),
        })
    }
}

/// Semver identifier precedence: numeric identifiers compare numerically and
/// sort below alphanumeric ones, which compare in ASCII order.
fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_identifiers(self.identifier.as_str(), other.identifier.as_str())
            .then_with(|| self.iteration.cmp(&other.iteration))
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(iter) = self.iteration {
            write!(f, ".{}", iter)?;
        }
        Ok(())
    }
}
