#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Solbind Configuration
//!
//! This crate provides the configuration contract for the solbind bindings
//! generator. It handles loading, saving, locating, and validating the
//! project-local `Solbind.toml` descriptor that specifies:
//! - Where the generated Rust bindings file is written
//! - Which generator plugins run, and which compiled contract artifacts
//!   each one processes
//!
//! The descriptor is stored in TOML format and can be loaded from files or
//! created with sensible defaults for development and testing. Loading and
//! validation are separate steps so tooling can inspect a malformed project
//! without rejecting it outright.

/// Artifact glob pattern representation and parsing
pub mod pattern;
/// Generator plugin configuration
pub mod plugin;
/// Re-export the `ArtifactPattern` type for convenience.
pub use pattern::{ArtifactPattern, PatternError};
/// Re-export the `PluginConfig` type for convenience.
pub use plugin::{PluginConfig, PluginKind};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the descriptor file searched for in the project tree
pub const FILENAME: &str = "Solbind.toml";

/// File extension the output path must carry
pub const GENERATED_EXTENSION: &str = "rs";

/// Errors that can occur when loading, saving, or locating a descriptor
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the descriptor file on disk
    #[error("Failed to read descriptor file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML descriptor file
    #[error("Failed to parse descriptor file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize the descriptor to TOML format
    #[error("Failed to serialize descriptor: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// No descriptor file exists at the given path, or at or above the
    /// starting directory when searching
    #[error("No Solbind.toml found at: {0}")]
    NotFound(PathBuf),
    /// The descriptor parsed but violates a structural rule
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Structural rules a descriptor must satisfy beyond being well-formed TOML
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The output path is empty
    #[error("output path is empty")]
    EmptyOut,
    /// The output path does not end in the generated-code extension
    #[error("output path {0} must end in .rs")]
    OutExtension(PathBuf),
    /// A plugin's project path is empty
    #[error("plugin {0} has an empty project path")]
    EmptyProject(usize),
    /// A plugin's artifacts override is present but empty
    #[error("plugin {0} has an empty artifacts path")]
    EmptyArtifacts(usize),
    /// A plugin lists the same pattern more than once
    #[error("plugin {0} lists pattern {1} more than once")]
    DuplicatePattern(usize, String),
}

/// The `Solbind.toml` descriptor
///
/// A descriptor names the single output file for generated bindings and the
/// ordered list of generator plugins that select compiled contract artifacts.
/// Instances are immutable once constructed; to change a descriptor, build a
/// new value and save it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the generated bindings file, relative to the descriptor
    out: PathBuf,
    /// Generator plugins, in declaration order
    #[serde(default)]
    plugins: Vec<PluginConfig>,
}

impl Config {
    /// Create a descriptor writing bindings to `out` with the given plugins
    pub fn new(out: impl Into<PathBuf>, plugins: Vec<PluginConfig>) -> Self {
        Self { out: out.into(), plugins }
    }

    /// Path of the generated bindings file
    pub fn out(&self) -> &Path { &self.out }

    /// Generator plugins, in declaration order
    pub fn plugins(&self) -> &[PluginConfig] { &self.plugins }

    /// Load a descriptor from a TOML file at `path` without validating it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load the descriptor at `path` and check its structural rules
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Save this descriptor as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Locate the nearest `Solbind.toml`, searching upward from the current
    /// directory
    pub fn locate() -> Result<PathBuf, ConfigError> {
        let current = std::env::current_dir()?;
        Self::locate_from(&current)
    }

    /// Locate the nearest `Solbind.toml` at or above `start`
    ///
    /// Returns the path of the first descriptor found walking up the
    /// directory tree, so a nested package picks up its own descriptor
    /// before the workspace one.
    pub fn locate_from(start: &Path) -> Result<PathBuf, ConfigError> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(FILENAME);
            if candidate.is_file() {
                return Ok(candidate);
            }
            if !current.pop() {
                return Err(ConfigError::NotFound(start.to_path_buf()));
            }
        }
    }

    /// Check the structural rules a descriptor must satisfy
    ///
    /// Validation is pure: it never touches the filesystem, so a descriptor
    /// for a project that has not been compiled yet still validates. A
    /// plugin with no include patterns selects nothing but is not an error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.out.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOut);
        }
        if self.out.extension().and_then(|ext| ext.to_str()) != Some(GENERATED_EXTENSION) {
            return Err(ValidationError::OutExtension(self.out.clone()));
        }
        for (index, plugin) in self.plugins.iter().enumerate() {
            if plugin.project().as_os_str().is_empty() {
                return Err(ValidationError::EmptyProject(index));
            }
            if let Some(artifacts) = plugin.artifacts() {
                if artifacts.as_os_str().is_empty() {
                    return Err(ValidationError::EmptyArtifacts(index));
                }
            }
            check_duplicates(index, plugin.include())?;
            check_duplicates(index, plugin.exclude())?;
        }
        Ok(())
    }
}

/// Reject a pattern list that names the same artifact twice
fn check_duplicates(index: usize, patterns: &[ArtifactPattern]) -> Result<(), ValidationError> {
    use std::collections::BTreeSet;

    let mut seen = BTreeSet::new();
    for pattern in patterns {
        if !seen.insert(pattern.as_str()) {
            return Err(ValidationError::DuplicatePattern(index, pattern.as_str().to_string()));
        }
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self { out: PathBuf::from("src/generated.rs"), plugins: Vec::new() }
    }
}
