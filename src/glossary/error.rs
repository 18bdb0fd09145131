//! Glossary error types.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while reading a glossary or writing its pages.
#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("input file `{0}` not found")]
    InputNotFound(PathBuf),

    #[error("IO error when reading `{0}`")]
    InputUnreadable(PathBuf, #[source] io::Error),

    #[error("output directory `{0}` does not exist or is not a directory")]
    OutputDirectoryInvalid(PathBuf),

    #[error("term `{term}` on line {line} has no definition")]
    MalformedStanza { term: String, line: usize },

    #[error("term `{term}` does not produce a usable file name")]
    InvalidTermName { term: String },

    #[error("term `{term}` would overwrite the index page")]
    ReservedPageName { term: String },

    #[error("terms `{first}` and `{second}` would both be written to `{file}`")]
    PageCollision {
        first: String,
        second: String,
        file: String,
    },

    #[error("IO error when writing `{0}`")]
    WriteFailure(PathBuf, #[source] io::Error),
}

impl GlossaryError {
    /// Classify an error from opening the input file.
    pub fn from_input(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::InputNotFound(path),
            _ => Self::InputUnreadable(path, err),
        }
    }
}
