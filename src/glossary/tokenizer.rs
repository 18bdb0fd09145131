//! Word/separator tokenization of definition text.
//!
//! A definition is split into maximal runs of separator characters and
//! maximal runs of everything else. Concatenating the tokens in order gives
//! back the original text.
//!
//! ```text
//! "...Hello...World"
//!  ^^^     ^^^          separator runs
//!     ^^^^^   ^^^^^     word runs
//! ```

use rustc_hash::FxHashSet;

/// Characters treated as word boundaries unless configured otherwise.
pub const DEFAULT_SEPARATORS: &str = " .,/\":;-!><(){}[]";

/// Fixed set of word-boundary characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: FxHashSet<char>,
}

impl SeparatorSet {
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

/// Return the separator run or word run starting at byte offset `position`.
///
/// The token is never empty while `position < text.len()`. At the end of
/// the text an empty slice is returned.
///
/// # Panics
/// If `position` is past the end of `text` or not on a char boundary.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> &'a str {
    let rest = &text[position..];
    let Some(first) = rest.chars().next() else {
        return rest;
    };

    let in_separator_run = separators.contains(first);
    let end = rest
        .char_indices()
        .find(|&(_, c)| separators.contains(c) != in_separator_run)
        .map_or(rest.len(), |(i, _)| i);

    &rest[..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Iterator over the tokens of a text, see [`tokenize`].
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
    separators: &'a SeparatorSet,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.position >= self.text.len() {
            return None;
        }

        let separators = self.separators;
        let text = next_token(self.text, self.position, separators);
        self.position += text.len();

        let kind = if text.starts_with(|c: char| separators.contains(c)) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        };
        Some(Token { text, kind })
    }
}

/// Split `text` into alternating word and separator tokens.
pub fn tokenize<'a>(text: &'a str, separators: &'a SeparatorSet) -> Tokens<'a> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_next_token_word() {
        let separators = SeparatorSet::default();
        assert_eq!(next_token("...Hello...World", 3, &separators), "Hello");
    }

    #[test]
    fn test_next_token_separator_run() {
        let separators = SeparatorSet::default();
        assert_eq!(next_token("...Hello...World", 0, &separators), "...");
    }

    #[test]
    fn test_next_token_last_char() {
        let separators = SeparatorSet::default();
        assert_eq!(next_token("Hello.", 5, &separators), ".");
        assert_eq!(next_token("Hello", 4, &separators), "o");
    }

    #[test]
    fn test_next_token_mid_word() {
        let separators = SeparatorSet::default();
        // Byte 3 is the `o` of "loyal"
        assert_eq!(next_token("a loyal canine", 3, &separators), "oyal");
        assert_eq!(next_token("a loyal canine", 4, &separators), "yal");
    }

    #[test]
    fn test_next_token_at_end_is_empty() {
        let separators = SeparatorSet::default();
        assert_eq!(next_token("abc", 3, &separators), "");
    }

    #[test]
    fn test_next_token_multibyte() {
        let separators = SeparatorSet::default();
        let text = "café, naïve";
        assert_eq!(next_token(text, 0, &separators), "café");
        assert_eq!(next_token(text, "café".len(), &separators), ", ");
        assert_eq!(next_token(text, "café, ".len(), &separators), "naïve");
    }

    #[test]
    fn test_custom_separators() {
        let separators = SeparatorSet::new("_");
        assert_eq!(next_token("snake_case word", 0, &separators), "snake");
        assert_eq!(next_token("snake_case word", 6, &separators), "case word");
    }

    #[test]
    fn test_tokens_partition_text() {
        let separators = SeparatorSet::default();
        let text = "A loyal canine, often seen with a cat. {see: [dog]}";
        let tokens: Vec<_> = tokenize(text, &separators).collect();

        assert!(tokens.iter().all(|t| !t.text.is_empty()));
        assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), text);

        // Runs alternate, so no two neighbours share a kind
        for pair in tokens.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn test_tokens_kinds() {
        let separators = SeparatorSet::default();
        let tokens: Vec<_> = tokenize("(cat) dog", &separators).collect();

        assert_eq!(
            tokens,
            vec![
                Token { text: "(", kind: TokenKind::Separator },
                Token { text: "cat", kind: TokenKind::Word },
                Token { text: ") ", kind: TokenKind::Separator },
                Token { text: "dog", kind: TokenKind::Word },
            ]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        let separators = SeparatorSet::default();
        assert_eq!(tokenize("", &separators).count(), 0);
    }

    #[test]
    fn test_default_separator_set() {
        let separators = SeparatorSet::default();
        for c in DEFAULT_SEPARATORS.chars() {
            assert!(separators.contains(c), "missing {c:?}");
        }
        assert!(!separators.contains('a'));
        assert!(!separators.contains('\''));
        assert!(!separators.is_empty());
    }

    proptest! {
        /// Walking `next_token` from 0 covers the text with non-empty,
        /// non-overlapping runs.
        #[test]
        fn prop_next_token_partitions_text(text in r#"[a-zA-Zé .,;:!()\[\]{}"<>/-]{0,64}"#) {
            let separators = SeparatorSet::default();
            let mut position = 0;
            let mut rebuilt = String::new();

            while position < text.len() {
                let token = next_token(&text, position, &separators);
                prop_assert!(!token.is_empty());
                rebuilt.push_str(token);
                position += token.len();
            }
            prop_assert_eq!(rebuilt, text);
        }

        #[test]
        fn prop_tokens_alternate_kinds(text in "[a-z .,()-]{0,64}") {
            let separators = SeparatorSet::default();
            let tokens: Vec<_> = tokenize(&text, &separators).collect();

            prop_assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), text.as_str());
            prop_assert!(tokens.windows(2).all(|pair| pair[0].kind != pair[1].kind));
        }
    }
}
