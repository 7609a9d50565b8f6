//! Whitespace tokenization and corpus reading
//!
//! Words are maximal runs of non-whitespace characters. Punctuation stays
//! attached to its word, so `"Hello,"` and `"hello"` are different tokens.

use crate::errors::{PoetError, Result};
use std::path::Path;

/// A whitespace tokenizer with optional case folding
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    /// Lowercase every token
    case_fold: bool,
}

impl Tokenizer {
    /// Create a new tokenizer that preserves case
    pub fn new() -> Self {
        Self { case_fold: false }
    }

    /// Enable or disable lowercasing of tokens
    pub fn with_case_folding(mut self, case_fold: bool) -> Self {
        self.case_fold = case_fold;
        self
    }

    /// Lazily split `text` into tokens, in order
    pub fn tokens<'a>(&self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        let case_fold = self.case_fold;
        text.split_whitespace().map(move |word| {
            if case_fold {
                word.to_lowercase()
            } else {
                word.to_string()
            }
        })
    }

    /// Split `text` into a vector of tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokens(text).collect()
    }
}

/// Read a whole corpus file into memory.
///
/// A missing or unreadable file is reported as [`PoetError::Io`], never as
/// an empty corpus.
pub fn read_corpus(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| PoetError::io(source, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Hello, HELLO, hello, goodbye!");

        assert_eq!(tokens, vec!["Hello,", "HELLO,", "hello,", "goodbye!"]);
    }

    #[test]
    fn test_case_folding() {
        let tokenizer = Tokenizer::new().with_case_folding(true);
        let tokens = tokenizer.tokenize("Hello, HELLO, hello, goodbye!");

        assert_eq!(tokens, vec!["hello,", "hello,", "hello,", "goodbye!"]);
    }

    #[test]
    fn test_newlines_and_runs_of_spaces() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("  line one\n\nline   two \n");

        assert_eq!(tokens, vec!["line", "one", "line", "two"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" \n ").is_empty());
    }

    #[test]
    fn test_unicode_preserved() {
        let tokenizer = Tokenizer::new().with_case_folding(true);
        let tokens = tokenizer.tokenize("Café RÉSUMÉ");

        assert_eq!(tokens, vec!["café", "résumé"]);
    }

    #[test]
    fn test_read_corpus() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "To be or not to be").unwrap();

        let text = read_corpus(file.path()).unwrap();
        assert_eq!(text, "To be or not to be");
    }

    #[test]
    fn test_read_corpus_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("xyz.txt");

        let err = read_corpus(&missing).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("xyz.txt"));
    }
}
