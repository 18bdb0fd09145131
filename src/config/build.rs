//! `[build]` section configuration.
//!
//! Contains input/output paths, minification and page naming.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a term becomes the file name of its page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Always convert to a lowercase ASCII slug (e.g., "Café au lait" → "cafe-au-lait").
    On,
    /// Keep the term, dropping characters that are invalid in file names (default).
    #[default]
    Safe,
    /// Use the term verbatim.
    No,
}

/// `[build]` section in glossa.toml - input, output and page files.
///
/// # Example
/// ```toml
/// [build]
/// input = "terms.txt"   # Glossary source
/// output = "site"       # Existing directory for the pages
/// minify = true         # Minify HTML
/// slug = "on"           # Page file naming
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Glossary source file. Prompted for when neither config nor CLI set it.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Destination directory. Must already exist.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Minify HTML output.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Page file naming mode.
    #[serde(default = "defaults::build::slug")]
    #[educe(Default = defaults::build::slug())]
    pub slug: SlugMode,
}

#[cfg(test)]
mod tests {
    use super::super::GlossaryConfig;
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config: GlossaryConfig = toml::from_str("[build]").unwrap();

        assert_eq!(config.build.input, None);
        assert_eq!(config.build.output, None);
        assert!(!config.build.minify);
        assert_eq!(config.build.slug, SlugMode::Safe);
    }

    #[test]
    fn test_build_config_full() {
        let config = r#"
            [build]
            input = "terms.txt"
            output = "site"
            minify = true
            slug = "on"
        "#;
        let config: GlossaryConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.input, Some(PathBuf::from("terms.txt")));
        assert_eq!(config.build.output, Some(PathBuf::from("site")));
        assert!(config.build.minify);
        assert_eq!(config.build.slug, SlugMode::On);
    }

    #[test]
    fn test_slug_mode_parsing() {
        for (value, expected) in [("on", SlugMode::On), ("safe", SlugMode::Safe), ("no", SlugMode::No)] {
            let config: GlossaryConfig =
                toml::from_str(&format!("[build]\nslug = \"{value}\"")).unwrap();
            assert_eq!(config.build.slug, expected);
        }

        let result: Result<GlossaryConfig, _> = toml::from_str("[build]\nslug = \"maybe\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<GlossaryConfig, _> = toml::from_str("[build]\ncontent = \"posts\"");
        assert!(result.is_err());
    }
}
