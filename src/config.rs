//! Resolver configuration
//!
//! The layout marker is the layout identifier this crate answers for. Any other
//! non-empty layout identifier on a page belongs to a competing provider.

use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::page::DEFAULT_MAX_DEPTH;

/// Layout identifier used when no configuration names one
pub const DEFAULT_LAYOUT_MARKER: &str = "fluidpages__fluidpages";

/// Configuration shared by all resolution calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Layout identifier owned by this crate
    pub layout_marker: String,
    /// Maximum number of records fetched per ancestry walk
    pub max_depth: usize,
}

/// TOML structure for deserializing resolver configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlResolverConfig {
    layout_marker: Option<String>,
    max_depth: Option<usize>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            layout_marker: DEFAULT_LAYOUT_MARKER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, LoadError> {
        let parsed: TomlResolverConfig = toml::from_str(content)?;
        let defaults = Self::default();

        let layout_marker = parsed.layout_marker.unwrap_or(defaults.layout_marker);
        if layout_marker.is_empty() {
            return Err(LoadError::EmptyLayoutMarker);
        }

        Ok(Self {
            layout_marker,
            max_depth: parsed.max_depth.unwrap_or(defaults.max_depth),
        })
    }

    /// Set the layout marker
    pub fn with_layout_marker(mut self, marker: impl Into<String>) -> Self {
        self.layout_marker = marker.into();
        self
    }

    /// Set the ancestry walk depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
