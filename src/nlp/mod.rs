//! Text handling: tokenization and corpus reading

pub mod tokenizer;

pub use tokenizer::{read_corpus, Tokenizer};
