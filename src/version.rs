//! Platform version values.
//!
//! [`SemanticVersion`] understands the version strings found in package lock
//! files: `2.4.4`, `2.4`, `v2.4.0`, `2.4.3-p2` (a platform patch release) and
//! pre-releases such as `2.4.4-beta1`.
//!
//! Ordering follows release order:
//!
//! ```
//! use predeploy::version::SemanticVersion;
//!
//! let base: SemanticVersion = "2.4.4".parse().unwrap();
//! assert!("2.4.3-p2".parse::<SemanticVersion>().unwrap() < base);
//! assert!("2.4.4-beta1".parse::<SemanticVersion>().unwrap() < base);
//! assert!("2.4.4-p1".parse::<SemanticVersion>().unwrap() > base);
//! assert!(
//!     "2.4.4-beta2".parse::<SemanticVersion>().unwrap()
//!         < "2.4.4-beta10".parse::<SemanticVersion>().unwrap()
//! );
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[vV]?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z][0-9A-Za-z.]*))?$")
        .expect("VERSION_REGEX must compile")
});

static PATCH_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[pP](\d+)$").expect("PATCH_SUFFIX_REGEX must compile"));

static PRE_RELEASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]*)\.?(\d+)?$").expect("PRE_RELEASE_REGEX must compile")
});

/// A version string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version '{input}'")]
pub struct VersionParseError {
    /// The rejected input.
    pub input: String,
}

/// A pre-release suffix, split into its tag and trailing number.
///
/// Tags order by stability (`dev` < `alpha` < `beta` < `rc`), with unknown
/// tags first. Equal tags order by number, so `beta2` < `beta10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    /// Lowercased tag, e.g. `beta`.
    pub tag: String,
    /// Trailing number, e.g. `2` in `beta2`.
    pub number: Option<u64>,
}

impl PreRelease {
    fn parse(suffix: &str) -> Self {
        let suffix = suffix.to_lowercase();
        let split = PRE_RELEASE_REGEX.captures(&suffix).and_then(|caps| {
            let number = match caps.get(2) {
                Some(m) => Some(m.as_str().parse().ok()?),
                None => None,
            };
            Some(Self {
                tag: caps[1].to_string(),
                number,
            })
        });

        split.unwrap_or_else(|| Self {
            tag: suffix,
            number: None,
        })
    }

    fn stability(&self) -> u8 {
        match self.tag.as_str() {
            "dev" => 1,
            "alpha" | "a" => 2,
            "beta" | "b" => 3,
            "rc" => 4,
            _ => 0,
        }
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stability()
            .cmp(&other.stability())
            .then_with(|| self.tag.cmp(&other.tag))
            .then_with(|| self.number.cmp(&other.number))
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        match self.number {
            Some(n) => write!(f, "{}", n),
            None => Ok(()),
        }
    }
}

/// Release stage of a version, ordered pre-release < release < patch release.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// `-alpha`, `-beta2`, `-rc1`, ...
    PreRelease(PreRelease),
    /// No suffix.
    Release,
    /// `-pN`
    Patch(u32),
}

/// A `major.minor.patch` version with an optional stage suffix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub stage: Stage,
}

impl SemanticVersion {
    /// Create a plain release version.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            stage: Stage::Release,
        }
    }

    /// Whether this version is at least `other`.
    pub fn is_at_least(&self, other: &SemanticVersion) -> bool {
        self >= other
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || VersionParseError {
            input: s.to_string(),
        };

        let caps = VERSION_REGEX.captures(input).ok_or_else(err)?;
        let component = |idx: usize| -> Result<u64, VersionParseError> {
            match caps.get(idx) {
                Some(m) => m.as_str().parse().map_err(|_| err()),
                None => Ok(0),
            }
        };

        let stage = match caps.get(4).map(|m| m.as_str()) {
            None => Stage::Release,
            Some(suffix) => match PATCH_SUFFIX_REGEX.captures(suffix) {
                Some(p) => Stage::Patch(p[1].parse().map_err(|_| err())?),
                None => Stage::PreRelease(PreRelease::parse(suffix)),
            },
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
            stage,
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        match &self.stage {
            Stage::Release => Ok(()),
            Stage::PreRelease(pre) => write!(f, "-{}", pre),
            Stage::Patch(n) => write!(f, "-p{}", n),
        }
    }
}
