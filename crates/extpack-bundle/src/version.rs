//! Dotted numeric versions.
//!
//! Only the release segment of a version is kept. Pre-release, post-release,
//! development and local suffixes are accepted on input and dropped, so
//! `1.2.3-beta.1` and `v01.2.3` both normalize to `1.2.3`. A suffix must follow
//! the PEP 440 shape (`rc1`, `.post2`, `-1`, `.dev3`, `+local.tag`); anything
//! else, such as `1.2.3abc` or `1.2.3-SNAPSHOT`, is rejected.
//!
//! Each release component is held in a `u64`, so components above
//! `18446744073709551615` are rejected rather than truncated.

use crate::{BundleError, BundleResult, Selector};
use std::fmt;
use std::str::FromStr;

/// Pre-release spellings, longest first so `alpha` wins over `a`.
const PRE_RELEASE_TAGS: [&str; 8] = ["preview", "alpha", "beta", "pre", "rc", "a", "b", "c"];

const POST_RELEASE_TAGS: [&str; 3] = ["post", "rev", "r"];

const DEV_RELEASE_TAGS: [&str; 1] = ["dev"];

/// An ordered list of non-negative release components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Create a version from its components.
    ///
    /// An empty list is treated as `0`.
    #[must_use]
    pub fn new(components: Vec<u64>) -> Self {
        if components.is_empty() {
            return Self {
                components: vec![0],
            };
        }
        Self { components }
    }

    /// Parse a version string, keeping only its release components.
    pub fn parse(s: &str) -> BundleResult<Self> {
        let invalid = |reason: String| BundleError::InvalidVersion {
            version: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        let body = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

        let release_end = body
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(body.len());
        let (mut release, mut suffix) = body.split_at(release_end);

        // "1.2.post1": the separator dot belongs to the suffix
        if !suffix.is_empty() && release.ends_with('.') {
            release = &release[..release.len() - 1];
            suffix = &body[release.len()..];
        }

        if release.is_empty() {
            return Err(invalid("missing release number".to_string()));
        }

        if !is_known_suffix(suffix) {
            return Err(invalid(format!("unrecognized suffix '{suffix}'")));
        }

        let components = release
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    return Err(invalid("empty version component".to_string()));
                }
                part.parse::<u64>().map_err(|_| {
                    invalid(format!(
                        "component '{part}' exceeds the maximum of {}",
                        u64::MAX
                    ))
                })
            })
            .collect::<BundleResult<Vec<_>>>()?;

        Ok(Self { components })
    }

    /// Release components, most significant first.
    #[must_use]
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Return the version with the selected component bumped.
    ///
    /// Missing components up to the selected one are treated as zero, every
    /// later component is reset to zero.
    pub fn bump(&self, selector: Selector) -> BundleResult<Self> {
        let index = selector.index();
        let mut components = self.components.clone();

        if components.len() <= index {
            components.resize(index + 1, 0);
        }

        components[index] =
            components[index]
                .checked_add(1)
                .ok_or_else(|| BundleError::InvalidVersion {
                    version: self.to_string(),
                    reason: format!("{selector} component overflows"),
                })?;

        for component in components.iter_mut().skip(index + 1) {
            *component = 0;
        }

        Ok(Self { components })
    }
}

fn is_known_suffix(suffix: &str) -> bool {
    let lowered = suffix.to_ascii_lowercase();
    let (public, local) = match lowered.split_once('+') {
        Some((public, local)) => (public, Some(local)),
        None => (lowered.as_str(), None),
    };

    if local.is_some_and(|label| !is_local_label(label)) {
        return false;
    }

    let rest = strip_tagged(public, &PRE_RELEASE_TAGS).unwrap_or(public);
    let rest = strip_implicit_post(rest)
        .or_else(|| strip_tagged(rest, &POST_RELEASE_TAGS))
        .unwrap_or(rest);
    let rest = strip_tagged(rest, &DEV_RELEASE_TAGS).unwrap_or(rest);

    rest.is_empty()
}

/// Strip `[sep]tag[[sep]number]` from the front of `s`.
fn strip_tagged<'a>(s: &'a str, tags: &[&str]) -> Option<&'a str> {
    let s = strip_separator(s);
    let tag = tags.iter().find(|tag| s.starts_with(**tag))?;
    let after_tag = &s[tag.len()..];

    let after_sep = strip_separator(after_tag);
    match leading_digits(after_sep) {
        0 => Some(after_tag),
        n => Some(&after_sep[n..]),
    }
}

/// Strip a bare `-N` post-release number.
fn strip_implicit_post(s: &str) -> Option<&str> {
    let number = s.strip_prefix('-')?;
    match leading_digits(number) {
        0 => None,
        n => Some(&number[n..]),
    }
}

fn strip_separator(s: &str) -> &str {
    s.strip_prefix(['.', '-', '_']).unwrap_or(s)
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn is_local_label(label: &str) -> bool {
    label
        .split(['.', '-', '_'])
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_alphanumeric()))
}

impl FromStr for Version {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .components
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&rendered)
    }
}
