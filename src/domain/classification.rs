use crate::error::{Result, VersioningError};
use std::fmt;
use std::str::FromStr;

/// Kind of change that triggered a release, derived by the caller from commit history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpClassification {
    Patch,
    Minor,
    /// Breaking change; `major` is accepted as an alias when parsing
    Breaking,
}

impl BumpClassification {
    pub const ALL: [BumpClassification; 3] = [
        BumpClassification::Patch,
        BumpClassification::Minor,
        BumpClassification::Breaking,
    ];

    /// Parse a classification name, case-insensitively
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpClassification::Patch => "patch",
            BumpClassification::Minor => "minor",
            BumpClassification::Breaking => "breaking",
        }
    }
}

impl FromStr for BumpClassification {
    type Err = VersioningError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "patch" => Ok(BumpClassification::Patch),
            "minor" => Ok(BumpClassification::Minor),
            "breaking" | "major" => Ok(BumpClassification::Breaking),
            _ => Err(VersioningError::classification(s)),
        }
    }
}

impl fmt::Display for BumpClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
