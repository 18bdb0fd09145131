//! Stanza parsing of the plain-text glossary format.
//!
//! ```text
//! cat
//! A small domesticated feline.
//!
//! dog
//! A loyal canine,
//! often seen with a cat.
//! ```
//!
//! The first line of a stanza is the term, every following non-empty line
//! belongs to the definition and is joined with a single space. A blank
//! line (or the end of input) closes the stanza.

use super::{Glossary, GlossaryError};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Parse glossary stanzas from already split lines.
///
/// Extra blank lines between stanzas are skipped. A later stanza with the
/// same term replaces the earlier one.
pub fn extract_terms<I, S>(lines: I) -> Result<Glossary, GlossaryError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut glossary = Glossary::new();
    let mut lines = lines.into_iter().enumerate();

    while let Some((index, term)) = lines.find(|(_, line)| !line.as_ref().is_empty()) {
        let term = term.as_ref().to_owned();

        let mut definition = match lines.next() {
            Some((_, line)) if !line.as_ref().is_empty() => line.as_ref().to_owned(),
            _ => {
                return Err(GlossaryError::MalformedStanza {
                    term,
                    line: index + 1,
                });
            }
        };

        for (_, line) in lines.by_ref() {
            let line = line.as_ref();
            if line.is_empty() {
                break;
            }
            definition.push(' ');
            definition.push_str(line);
        }

        glossary.insert(term, definition);
    }

    Ok(glossary)
}

/// Read and parse a glossary file.
///
/// The file handle is dropped before parsing starts.
pub fn read_glossary(path: &Path) -> Result<Glossary, GlossaryError> {
    let lines = {
        let file = File::open(path).map_err(|err| GlossaryError::from_input(path.to_path_buf(), err))?;
        BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| GlossaryError::InputUnreadable(path.to_path_buf(), err))?
    };

    extract_terms(lines)
}
