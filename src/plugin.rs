//! Generator plugin configuration for the solbind descriptor.
//!
//! Each `[[plugins]]` table in `Solbind.toml` names one generator plugin and
//! the set of compiled interface artifacts it should process.
//!
//! To add a new plugin later: add a variant to `PluginKind` with its
//! metadata, and teach the generator to scan that build layout.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pattern::ArtifactPattern;

/// Known generator plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PluginKind {
    /// Foundry projects: artifacts live under `<project>/out/<Source>.sol/`.
    #[default]
    #[serde(rename = "foundry")]
    Foundry,
}

impl PluginKind {
    /// Get the string representation of the plugin kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginKind::Foundry => "foundry",
        }
    }

    /// Get the human-readable display name for the plugin kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            PluginKind::Foundry => "Foundry",
        }
    }

    /// Directory under the project root where this plugin expects build
    /// output when the descriptor does not override it.
    pub fn default_artifacts_dir(&self) -> &'static str {
        match self {
            PluginKind::Foundry => "out",
        }
    }
}

impl FromStr for PluginKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "foundry" => Ok(PluginKind::Foundry),
            _ => Err(format!("Unknown plugin kind: {}", s)),
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Configuration for one generator plugin.
///
/// A plugin configuration names the project directory a plugin scans and the
/// ordered include/exclude patterns selecting compiled interface artifacts
/// under its build output. Pattern order is preserved exactly as declared;
/// how matches from several plugins merge into the output is decided by the
/// generator, not the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Which plugin processes this entry.
    #[serde(default)]
    kind: PluginKind,
    /// Directory from which artifact search begins.
    project: PathBuf,
    /// Build-output subdirectory override; the kind's default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    artifacts: Option<PathBuf>,
    /// Ordered glob patterns selecting artifacts to process.
    #[serde(default)]
    include: Vec<ArtifactPattern>,
    /// Ordered glob patterns removing artifacts from the include set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    exclude: Vec<ArtifactPattern>,
}

impl PluginConfig {
    /// Create a plugin configuration scanning `project` with the default
    /// plugin kind and no patterns.
    pub fn new(project: impl Into<PathBuf>) -> Self {
        Self {
            kind: PluginKind::default(),
            project: project.into(),
            artifacts: None,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Append an include pattern, preserving declaration order.
    pub fn add_include(mut self, pattern: ArtifactPattern) -> Self {
        self.include.push(pattern);
        self
    }

    /// Append an exclude pattern, preserving declaration order.
    pub fn add_exclude(mut self, pattern: ArtifactPattern) -> Self {
        self.exclude.push(pattern);
        self
    }

    /// Override the build-output subdirectory for this plugin.
    pub fn with_artifacts(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts = Some(dir.into());
        self
    }

    /// Which plugin processes this entry.
    pub fn kind(&self) -> PluginKind { self.kind }

    /// Directory from which artifact search begins.
    pub fn project(&self) -> &Path { &self.project }

    /// The configured build-output override, if any.
    pub fn artifacts(&self) -> Option<&Path> { self.artifacts.as_deref() }

    /// The build-output subdirectory the generator scans: the configured
    /// override, or the plugin kind's default.
    pub fn artifacts_dir(&self) -> &Path {
        self.artifacts.as_deref().unwrap_or_else(|| Path::new(self.kind.default_artifacts_dir()))
    }

    /// Ordered include patterns.
    pub fn include(&self) -> &[ArtifactPattern] { &self.include }

    /// Ordered exclude patterns.
    pub fn exclude(&self) -> &[ArtifactPattern] { &self.exclude }

    /// True when the plugin has no include patterns and therefore selects
    /// nothing. The descriptor treats this as valid; the generator decides
    /// whether to warn.
    pub fn is_empty(&self) -> bool { self.include.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> ArtifactPattern {
        ArtifactPattern::from_string(s).expect("valid pattern")
    }

    #[test]
    fn test_plugin_kind_as_str() {
        assert_eq!(PluginKind::Foundry.as_str(), "foundry");
    }

    #[test]
    fn test_plugin_kind_display_name() {
        assert_eq!(PluginKind::Foundry.display_name(), "Foundry");
    }

    #[test]
    fn test_plugin_kind_default_artifacts_dir() {
        assert_eq!(PluginKind::Foundry.default_artifacts_dir(), "out");
    }

    #[test]
    fn test_plugin_kind_from_str() {
        let kind = "foundry".parse::<PluginKind>().expect("Failed to parse plugin kind");
        assert_eq!(kind, PluginKind::Foundry);

        let error = "hardhat".parse::<PluginKind>().expect_err("Expected unknown-kind error");
        assert!(error.contains("Unknown plugin kind"));
    }

    #[test]
    fn test_plugin_kind_display() {
        assert_eq!(PluginKind::Foundry.to_string(), "foundry");
    }

    #[test]
    fn test_plugin_kind_default() {
        assert_eq!(PluginKind::default(), PluginKind::Foundry);
    }

    #[test]
    fn test_new_plugin_defaults() {
        let plugin = PluginConfig::new("./");
        assert_eq!(plugin.kind(), PluginKind::Foundry);
        assert_eq!(plugin.project(), Path::new("./"));
        assert_eq!(plugin.artifacts(), None);
        assert!(plugin.include().is_empty());
        assert!(plugin.exclude().is_empty());
        assert!(plugin.is_empty());
    }

    #[test]
    fn test_add_include_preserves_order() {
        let plugin = PluginConfig::new("./")
            .add_include(pattern("Registry.sol/**"))
            .add_include(pattern("Controller.sol/**"));
        let names: Vec<&str> = plugin.include().iter().map(|p| p.artifact_name()).collect();
        assert_eq!(names, vec!["Registry.sol", "Controller.sol"]);
        assert!(!plugin.is_empty());
    }

    #[test]
    fn test_add_exclude_preserves_order() {
        let plugin = PluginConfig::new("./")
            .add_exclude(pattern("Common.sol/**"))
            .add_exclude(pattern("Test.sol/**"));
        let names: Vec<&str> = plugin.exclude().iter().map(|p| p.artifact_name()).collect();
        assert_eq!(names, vec!["Common.sol", "Test.sol"]);
    }

    #[test]
    fn test_artifacts_dir_defaults_per_kind() {
        let plugin = PluginConfig::new("./");
        assert_eq!(plugin.artifacts_dir(), Path::new("out"));
    }

    #[test]
    fn test_artifacts_dir_override() {
        let plugin = PluginConfig::new("./").with_artifacts("build/artifacts");
        assert_eq!(plugin.artifacts(), Some(Path::new("build/artifacts")));
        assert_eq!(plugin.artifacts_dir(), Path::new("build/artifacts"));
    }
}
