//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use crate::config::SlugMode;

    pub fn slug() -> SlugMode {
        SlugMode::default()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    use crate::glossary::DEFAULT_SEPARATORS;

    pub fn title() -> String {
        "Glossary".into()
    }

    pub fn index_title() -> String {
        "Index".into()
    }

    pub fn link_prefix() -> String {
        ".".into()
    }

    pub fn separators() -> String {
        DEFAULT_SEPARATORS.into()
    }

    pub fn term_style() -> String {
        "color:red;font-style:italic".into()
    }
}
