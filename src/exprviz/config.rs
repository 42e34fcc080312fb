//! Configuration loading
//!
//! `defaults/exprviz.default.toml` is embedded into the crate so that the documented
//! defaults and runtime behavior stay in sync. Callers layer user files and single-key
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`ExprvizConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::exprviz::building::BuildOptions;
use crate::exprviz::formats::TreevizOptions;

const DEFAULT_TOML: &str = include_str!("../../defaults/exprviz.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExprvizConfig {
    pub build: BuildConfig,
    pub treeviz: TreevizConfig,
    pub output: OutputConfig,
}

/// Tree builder knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    pub max_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreevizConfig {
    pub max_label_width: usize,
    pub show_literal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

impl ExprvizConfig {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            max_depth: self.build.max_depth,
        }
    }

    pub fn treeviz_options(&self) -> TreevizOptions {
        TreevizOptions {
            max_label_width: self.treeviz.max_label_width,
            show_literal: self.treeviz.show_literal,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ExprvizConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ExprvizConfig, ConfigError> {
    Loader::new().build()
}
