//! Version component selectors.

use crate::BundleError;
use std::fmt;
use std::str::FromStr;

/// Which component of the version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// First component (`X.0.0`).
    Major,
    /// Second component (`x.Y.0`).
    Minor,
    /// Third component (`x.y.Z`).
    Patch,
    /// Fourth component (`x.y.z.W`).
    Increment,
}

impl Selector {
    /// All selectors in component order.
    pub const ALL: [Selector; 4] = [Self::Major, Self::Minor, Self::Patch, Self::Increment];

    /// Position of the version component this selector bumps.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Major => 0,
            Self::Minor => 1,
            Self::Patch => 2,
            Self::Increment => 3,
        }
    }

    /// Get the selector keyword (e.g., "minor").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Increment => "increment",
        }
    }

    /// Comma separated list of every keyword, for usage messages.
    #[must_use]
    pub fn keywords() -> String {
        Self::ALL
            .iter()
            .map(Selector::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Selector {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|selector| selector.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BundleError::UnknownSelector(s.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
