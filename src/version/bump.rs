//! Version parsing and bump arithmetic.

use semver::Version;

use crate::error::VersionError;

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Patch => "patch",
            BumpType::Minor => "minor",
            BumpType::Major => "major",
        }
    }
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BumpType {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(VersionError::InvalidBumpType(s.to_string())),
        }
    }
}

/// Parse a strict `X.Y.Z` triple.
///
/// Anything other than exactly three dot-separated base-10 integers is rejected.
/// Pre-release and build metadata are not accepted.
pub fn parse_version(s: &str) -> Result<Version, VersionError> {
    let parts: Vec<&str> = s.split('.').collect();

    let [major, minor, patch] = parts.as_slice() else {
        return Err(VersionError::InvalidFormat(s.to_string()));
    };

    let component = |c: &str| {
        c.parse::<u64>().map_err(|e| VersionError::InvalidComponent {
            version: s.to_string(),
            component: c.to_string(),
            source: e,
        })
    };

    Ok(Version::new(
        component(*major)?,
        component(*minor)?,
        component(*patch)?,
    ))
}

/// Compute the version that follows `base` for the given bump.
///
/// Lower components reset to zero when a higher one is incremented. Fails with
/// `ComponentOverflow` when the incremented component is already `u64::MAX`.
pub fn apply_bump(base: &Version, bump: BumpType) -> Result<Version, VersionError> {
    let increment = |n: u64| {
        n.checked_add(1).ok_or_else(|| VersionError::ComponentOverflow {
            version: base.to_string(),
            bump,
        })
    };

    Ok(match bump {
        BumpType::Major => Version::new(increment(base.major)?, 0, 0),
        BumpType::Minor => Version::new(base.major, increment(base.minor)?, 0),
        BumpType::Patch => Version::new(base.major, base.minor, increment(base.patch)?),
    })
}
