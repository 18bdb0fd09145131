//! Glossary data model.
//!
//! # Lifecycle
//!
//! ```text
//! read_glossary() ──► Glossary ──┬──► term_set() ──► TermSet   (link lookup)
//!                                │
//!                                └──► sort_terms() ──► Vec<Entry> (render order)
//! ```

mod error;
mod extract;
mod tokenizer;

pub use error::GlossaryError;
pub use extract::{extract_terms, read_glossary};
pub use tokenizer::{DEFAULT_SEPARATORS, SeparatorSet, TokenKind, tokenize};

use rustc_hash::{FxHashMap, FxHashSet};

/// A single term with its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub term: String,
    pub definition: String,
}

/// Mapping from term to definition. Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: FxHashMap<String, String>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term, replacing any previous definition.
    pub fn insert(&mut self, term: String, definition: String) -> Option<String> {
        self.entries.insert(term, definition)
    }

    #[cfg(test)]
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collect every term for cross-link lookups.
    pub fn term_set(&self) -> TermSet {
        self.entries.keys().cloned().collect()
    }
}

/// Consume a glossary into entries ordered by term.
///
/// Comparison is plain byte order, so `"Zebra"` sorts before `"apple"`.
pub fn sort_terms(glossary: Glossary) -> Vec<Entry> {
    let mut entries: Vec<Entry> = glossary
        .entries
        .into_iter()
        .map(|(term, definition)| Entry { term, definition })
        .collect();
    // Keys are unique, so stability is irrelevant
    entries.sort_unstable_by(|a, b| a.term.cmp(&b.term));
    entries
}

/// Read-only set of all glossary terms.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    terms: FxHashSet<String>,
}

impl TermSet {
    /// Find the term a word should link to, skipping `own`.
    ///
    /// Candidates are all non-empty terms other than `own` occurring as a
    /// substring of `word`. The longest candidate (in chars) wins; equal
    /// lengths go to the lexicographically smallest term. The result never
    /// depends on set iteration order.
    ///
    /// A term page passes its own term, so it only links to other pages.
    pub fn best_match(&self, word: &str, own: &str) -> Option<&str> {
        self.terms
            .iter()
            .filter(|term| {
                !term.is_empty() && term.as_str() != own && word.contains(term.as_str())
            })
            .map(|term| (term.chars().count(), term.as_str()))
            .min_by(|(a_len, a), (b_len, b)| b_len.cmp(a_len).then_with(|| a.cmp(b)))
            .map(|(_, term)| term)
    }
}

impl FromIterator<String> for TermSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}
