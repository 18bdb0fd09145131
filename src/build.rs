//! Glossary generation orchestration.
//!
//! # Architecture
//!
//! ```text
//! generate()
//!     │
//!     ├── check_paths()   ──► input is a file, output is a directory
//!     │
//!     ├── read_glossary() ──► Glossary ──► TermSet + sorted entries
//!     │
//!     ├── plan_pages()    ──► one unique file name per term
//!     │
//!     └── write_page()    ──► index.html, then <term>.html per entry
//! ```
//!
//! Nothing is written until the input is parsed and every page name is
//! known to be valid. A write failure stops the run and leaves the pages
//! written so far in place.

use crate::{
    config::{GlossaryConfig, SlugMode},
    glossary::{Entry, GlossaryError, read_glossary, sort_terms},
    log,
    render::PageRenderer,
    utils::{
        minify::minify,
        slug::{INDEX_STEM, page_file_name, page_stem},
    },
};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of glossary terms
    pub terms: usize,
    /// Number of files written, index included
    pub files: usize,
    /// Directory the files were written into
    pub output: PathBuf,
}

/// Generate the index and one page per term from `input` into `output`.
///
/// Re-running with the same input overwrites the same files with identical
/// content. Pages of terms that have since been removed are left alone.
pub fn generate(input: &Path, output: &Path, config: &GlossaryConfig) -> Result<Summary> {
    check_paths(input, output)?;

    let glossary = read_glossary(input)
        .with_context(|| format!("Failed to load glossary from {}", input.display()))?;
    if glossary.is_empty() {
        log!("warn"; "no terms found in {}", input.display());
    } else {
        log!("glossary"; "loaded {} terms", glossary.len());
    }

    let terms = glossary.term_set();
    let entries = sort_terms(glossary);
    let pages = plan_pages(&entries, config.build.slug)?;
    let renderer = PageRenderer::new(config);

    write_page(
        &output.join(page_file_name(INDEX_STEM)),
        &renderer.render_index(&entries),
        config,
    )?;
    for (entry, file_name) in entries.iter().zip(&pages) {
        write_page(
            &output.join(file_name),
            &renderer.render_term_page(entry, &terms),
            config,
        )?;
    }

    Ok(Summary {
        terms: entries.len(),
        files: entries.len() + 1,
        output: output.to_path_buf(),
    })
}

/// Check both paths before anything is read or written.
fn check_paths(input: &Path, output: &Path) -> Result<(), GlossaryError> {
    if !input.exists() {
        return Err(GlossaryError::InputNotFound(input.to_path_buf()));
    }
    if !input.is_file() {
        return Err(GlossaryError::InputUnreadable(
            input.to_path_buf(),
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    if !output.is_dir() {
        return Err(GlossaryError::OutputDirectoryInvalid(output.to_path_buf()));
    }
    Ok(())
}

/// Page file name for every entry, in entry order.
///
/// Fails on terms that produce no name or a name reaching outside the
/// output directory, that would replace the index page, or that share a
/// name with another term.
fn plan_pages(entries: &[Entry], mode: SlugMode) -> Result<Vec<String>, GlossaryError> {
    let mut owners: FxHashMap<String, &str> = FxHashMap::default();
    let mut pages = Vec::with_capacity(entries.len());

    for entry in entries {
        let stem = page_stem(&entry.term, mode);
        if !is_file_stem(&stem) {
            return Err(GlossaryError::InvalidTermName {
                term: entry.term.clone(),
            });
        }
        if stem == INDEX_STEM {
            return Err(GlossaryError::ReservedPageName {
                term: entry.term.clone(),
            });
        }

        let file_name = page_file_name(&stem);
        if let Some(first) = owners.insert(stem, &entry.term) {
            return Err(GlossaryError::PageCollision {
                first: first.to_owned(),
                second: entry.term.clone(),
                file: file_name,
            });
        }
        pages.push(file_name);
    }

    Ok(pages)
}

/// A stem must name a single file directly inside the output directory.
fn is_file_stem(stem: &str) -> bool {
    if stem.is_empty() || stem.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(stem).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Write one page, minified if enabled. The file is closed on return.
fn write_page(path: &Path, html: &str, config: &GlossaryConfig) -> Result<(), GlossaryError> {
    let content = minify(html.as_bytes(), config);
    fs::write(path, &*content).map_err(|err| GlossaryError::WriteFailure(PathBuf::from(path), err))
}

// ============================================================================
// Tests
// ============================================================================
