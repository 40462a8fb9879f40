//! Artifact include-pattern representation for the solbind descriptor.
//!
//! Every pattern in a descriptor selects the interface artifacts under one
//! contract's build-output directory, so the only accepted shape is
//! `<artifact>/**` (e.g. `Registry.sol/**`). Patterns are checked once, at
//! construction; a descriptor holding an [`ArtifactPattern`] always holds a
//! well-formed glob.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated artifact glob of the shape `<artifact>/**`.
///
/// Accepts patterns like:
/// - `Registry.sol/**` (every artifact compiled from `Registry.sol`)
/// - `CollectionFactory.sol/**`
///
/// The `<artifact>` part is a single path segment free of glob
/// metacharacters; the trailing `/**` selects everything beneath it. On the
/// wire the pattern is a plain string, exactly as written in the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactPattern {
    /// Original pattern string as written in the descriptor.
    pattern: String,
    /// Leading segment naming the artifact directory (e.g. `Registry.sol`).
    artifact: String,
}

/// Errors that can occur while parsing an artifact pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The pattern string was empty.
    #[error("pattern must not be empty")]
    Empty,
    /// The pattern is not valid glob syntax.
    #[error("invalid glob syntax: {0}")]
    Glob(#[from] glob::PatternError),
    /// The pattern is a valid glob but not of the `<artifact>/**` shape.
    #[error("pattern '{0}' must have the shape '<artifact>/**'")]
    Shape(String),
    /// A regex error occurred while checking the pattern shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ArtifactPattern {
    /// Parse an `ArtifactPattern` from a string in the `<artifact>/**` shape.
    pub fn from_string(s: &str) -> Result<Self, PatternError> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        // Glob syntax first: an unclosed character class is a glob error,
        // not a shape error.
        glob::Pattern::new(s)?;

        // Expected shape: one wildcard-free artifact segment, then `/**`.
        let re = Regex::new(r"^([^/*?\[\]]+)/\*\*$")
            .map_err(|e: regex::Error| PatternError::Parse(e.to_string()))?;
        let caps = re.captures(s).ok_or_else(|| PatternError::Shape(s.to_string()))?;

        Ok(Self { pattern: s.to_string(), artifact: caps[1].to_string() })
    }

    /// Return the original pattern string.
    pub fn as_str(&self) -> &str { &self.pattern }

    /// The artifact directory the pattern selects (e.g. `Registry.sol`).
    pub fn artifact_name(&self) -> &str { &self.artifact }

    /// The contract name behind the artifact directory: `Registry.sol`
    /// becomes `Registry`. Artifact names without a `.sol` suffix are
    /// returned unchanged.
    pub fn contract_name(&self) -> &str {
        self.artifact.strip_suffix(".sol").unwrap_or(&self.artifact)
    }
}

impl fmt::Display for ArtifactPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.pattern) }
}

impl FromStr for ArtifactPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_string(s) }
}

impl TryFrom<String> for ArtifactPattern {
    type Error = PatternError;

    fn try_from(s: String) -> Result<Self, Self::Error> { Self::from_string(&s) }
}

impl From<ArtifactPattern> for String {
    fn from(pattern: ArtifactPattern) -> Self { pattern.pattern }
}
