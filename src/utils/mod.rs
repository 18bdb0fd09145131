//! Utility modules for the glossary generator.

pub mod log;
pub mod minify;
pub mod slug;
