//! Configuration management for `glossa.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[build]`   | Input file, output directory, minify, slugs    |
//! | `[render]`  | Headings, link prefix, separators, term style  |
//!
//! # Example
//!
//! ```toml
//! [build]
//! input = "terms.txt"
//! output = "site"
//!
//! [render]
//! title = "Pet Glossary"
//! ```
//!
//! The file is optional. Command-line arguments override it, and any path
//! still missing afterwards is asked for on stdin.

mod build;
pub mod defaults;
mod error;
mod render;

pub use build::SlugMode;
pub use error::ConfigError;

use build::BuildConfig;
use render::RenderConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing glossa.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct GlossaryConfig {
    /// Path of the loaded config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Input, output and page naming
    #[serde(default)]
    pub build: BuildConfig,

    /// Page text and cross-linking
    #[serde(default)]
    pub render: RenderConfig,
}

impl GlossaryConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config =
            Self::from_str(&content).map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.build.input = Some(input.clone());
        }
        if let Some(output) = &cli.output {
            self.build.output = Some(output.clone());
        }
        Self::update_option(&mut self.build.minify, cli.minify.as_ref());
        Self::update_option(&mut self.build.slug, cli.slug.as_ref());
        Self::update_option(&mut self.render.link_prefix, cli.link_prefix.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Ask for any path still unset, then normalize both to absolute paths.
    ///
    /// `ask` receives the question and returns the user's answer.
    pub fn fill_missing_paths(&mut self, mut ask: impl FnMut(&str) -> Result<String>) -> Result<()> {
        if self.build.input.is_none() {
            self.build.input = Some(Self::ask_path(&mut ask, "Enter an input file: ", "input file")?);
        }
        if self.build.output.is_none() {
            self.build.output =
                Some(Self::ask_path(&mut ask, "Enter a destination folder: ", "destination folder")?);
        }

        self.build.input = self.build.input.as_deref().map(Self::normalize_path);
        self.build.output = self.build.output.as_deref().map(Self::normalize_path);
        Ok(())
    }

    fn ask_path(
        ask: &mut impl FnMut(&str) -> Result<String>,
        question: &str,
        what: &'static str,
    ) -> Result<PathBuf> {
        let answer = ask(question)?;
        if answer.is_empty() {
            bail!(ConfigError::MissingPath(what));
        }
        Ok(PathBuf::from(answer))
    }

    /// Input file and output directory, once both are known.
    pub fn paths(&self) -> Result<(&Path, &Path), ConfigError> {
        let input = self
            .build
            .input
            .as_deref()
            .ok_or(ConfigError::MissingPath("input file"))?;
        let output = self
            .build
            .output
            .as_deref()
            .ok_or(ConfigError::MissingPath("destination folder"))?;
        Ok((input, output))
    }

    /// Expand `~` and make a path absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        let path = match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => path.to_path_buf(),
        };

        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.clone()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(&path))
                    .unwrap_or_else(|_| path.clone())
            }
        })
    }

    /// Validate settings that do not depend on the filesystem
    pub fn validate(&self) -> Result<()> {
        if self.render.separator_set().is_empty() {
            bail!(ConfigError::Validation(
                "[render.separators] must contain at least one character".into()
            ));
        }

        if self.render.link_prefix.contains('"') {
            bail!(ConfigError::Validation(
                "[render.link_prefix] must not contain `\"`".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
