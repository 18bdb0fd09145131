//! `[render]` section configuration.
//!
//! Controls page headings, link targets and how definitions are split
//! into words.

use super::defaults;
use crate::glossary::SeparatorSet;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in glossa.toml - page text and cross-linking.
///
/// # Example
/// ```toml
/// [render]
/// title = "Cat Glossary"
/// link_prefix = "/glossary"
/// separators = " .,;:"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Top heading of the index page.
    #[serde(default = "defaults::render::title")]
    #[educe(Default = defaults::render::title())]
    pub title: String,

    /// Title and sub-heading of the index page.
    #[serde(default = "defaults::render::index_title")]
    #[educe(Default = defaults::render::index_title())]
    pub index_title: String,

    /// Directory label placed in front of every generated href.
    /// An empty prefix produces bare relative links.
    #[serde(default = "defaults::render::link_prefix")]
    #[educe(Default = defaults::render::link_prefix())]
    pub link_prefix: String,

    /// Characters that split definitions into words.
    #[serde(default = "defaults::render::separators")]
    #[educe(Default = defaults::render::separators())]
    pub separators: String,

    /// Inline CSS for the term heading.
    #[serde(default = "defaults::render::term_style")]
    #[educe(Default = defaults::render::term_style())]
    pub term_style: String,
}

impl RenderConfig {
    pub fn separator_set(&self) -> SeparatorSet {
        SeparatorSet::new(&self.separators)
    }
}
