//! HTML rendering of the index page and term pages.
//!
//! # Index Page
//!
//! ```html
//! <h1>Glossary</h1>
//! <hr>
//! <h2>Index</h2>
//! <ul>
//! <li><a href="./cat.html">cat</a></li>
//! </ul>
//! ```
//!
//! # Term Page
//!
//! ```html
//! <h1 style="color:red;font-style:italic">dog</h1>
//! <p>A loyal canine, often seen with a <a href="./cat.html">cat</a>.</p>
//! <hr>
//! <p>Return to <a href="./index.html">index</a></p>
//! ```

use crate::{
    config::{GlossaryConfig, SlugMode},
    glossary::{Entry, SeparatorSet, TermSet, TokenKind, tokenize},
    utils::slug::{INDEX_STEM, page_href, page_stem},
};
use std::borrow::Cow;

/// Renders pages with the headings, link prefix and separators of a config.
pub struct PageRenderer<'a> {
    config: &'a GlossaryConfig,
    slug: SlugMode,
    separators: SeparatorSet,
}

impl<'a> PageRenderer<'a> {
    pub fn new(config: &'a GlossaryConfig) -> Self {
        Self {
            config,
            slug: config.build.slug,
            separators: config.render.separator_set(),
        }
    }

    /// Render the index page listing every entry in the given order.
    pub fn render_index(&self, entries: &[Entry]) -> String {
        let render = &self.config.render;
        let mut html = String::with_capacity(512 + entries.len() * 64);

        push_head(&mut html, &render.index_title);
        html.push_str(&format!("<h1>{}</h1>\n", escape_html(&render.title)));
        html.push_str("<hr>\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&render.index_title)));

        html.push_str("<ul>\n");
        for entry in entries {
            html.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                escape_html(&self.term_href(&entry.term)),
                escape_html(&entry.term)
            ));
        }
        html.push_str("</ul>\n");

        push_tail(&mut html);
        html
    }

    /// Render the page of one entry, cross-linking its definition.
    pub fn render_term_page(&self, entry: &Entry, terms: &TermSet) -> String {
        let render = &self.config.render;
        let term = escape_html(&entry.term);
        let mut html = String::with_capacity(512 + entry.definition.len() * 2);

        push_head(&mut html, &entry.term);
        html.push_str(&format!(
            "<h1 style=\"{}\">{term}</h1>\n",
            escape_html(&render.term_style)
        ));
        html.push_str(&format!(
            "<p>{}</p>\n",
            self.render_definition(&entry.definition, terms, &entry.term)
        ));
        html.push_str("<hr>\n");
        html.push_str(&format!(
            "<p>Return to <a href=\"{}\">index</a></p>\n",
            escape_html(&page_href(&render.link_prefix, INDEX_STEM))
        ));

        push_tail(&mut html);
        html
    }

    /// Escape a definition and wrap every word containing another term in a
    /// link.
    ///
    /// The linked term is chosen by [`TermSet::best_match`], `own` is never
    /// linked. Separator runs are never linked. Stripping the `<a>` tags and
    /// unescaping gives back the definition unchanged.
    pub fn render_definition(&self, definition: &str, terms: &TermSet, own: &str) -> String {
        let mut html = String::with_capacity(definition.len());

        for token in tokenize(definition, &self.separators) {
            let text = escape_html(token.text);
            let target = match token.kind {
                TokenKind::Word => terms.best_match(token.text, own),
                TokenKind::Separator => None,
            };

            match target {
                Some(term) => html.push_str(&format!(
                    "<a href=\"{}\">{text}</a>",
                    escape_html(&self.term_href(term))
                )),
                None => html.push_str(&text),
            }
        }

        html
    }

    fn term_href(&self, term: &str) -> String {
        page_href(&self.config.render.link_prefix, &page_stem(term, self.slug))
    }
}

fn push_head(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("</head>\n<body>\n");
}

fn push_tail(html: &mut String) {
    html.push_str("</body>\n</html>\n");
}

/// Escape HTML special characters, including both quote styles.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
