//! Page file names and hrefs derived from terms.
//!
//! | Mode   | `"Café / Bar"`  |
//! |--------|-----------------|
//! | `safe` | `Café  Bar`     |
//! | `on`   | `cafe-bar`      |
//! | `no`   | `Café / Bar`    |

use crate::config::SlugMode;

/// Characters forbidden in file names
const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Stem of the index page, no term may map to it.
pub const INDEX_STEM: &str = "index";

/// File stem for a term's page under the given mode.
pub fn page_stem(term: &str, mode: SlugMode) -> String {
    match mode {
        SlugMode::Safe => sanitize_text(term),
        SlugMode::On => slugify(term),
        SlugMode::No => term.to_owned(),
    }
}

/// File name (`<stem>.html`) for a stem.
pub fn page_file_name(stem: &str) -> String {
    format!("{stem}.html")
}

/// Href of a page, placed under `prefix`.
///
/// The stem is percent-encoded, an empty prefix gives a bare relative link.
pub fn page_href(prefix: &str, stem: &str) -> String {
    let file = page_file_name(&urlencoding::encode(stem));
    if prefix.is_empty() {
        file
    } else {
        format!("{}/{file}", prefix.trim_end_matches('/'))
    }
}

/// Remove characters that cannot appear in a file name
fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c) && !c.is_control())
        .collect()
}

/// Transliterate to ASCII and join alphanumeric runs with `-`
fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len());

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let trimmed = slug.trim_end_matches('-').len();
    slug.truncate(trimmed);
    slug
}
