//! Public API for souci query segmentation
//!
//! This crate provides a stable interface over the expansion engine in
//! `souci-core`: build a [`QueryTokenizer`] from a word list once, share it
//! freely, and tokenize sentences into recall-oriented token sequences.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::sync::Arc;

use souci_core::{QuerySegmenter, TrieLexicon};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output, Token};
pub use error::ApiError;
pub use souci_core::{ByteSpan, WordRange};

use error::Result;

/// Main entry point for query tokenization
///
/// Holds the lexicon and segmenter behind an `Arc`; cloning the tokenizer
/// is cheap and all methods take `&self`, so one instance can serve many
/// threads.
#[derive(Clone)]
pub struct QueryTokenizer {
    inner: Arc<QuerySegmenter>,
    config: Config,
}

impl QueryTokenizer {
    /// Create a tokenizer from a word list with default configuration
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(Config::with_words(words))
    }

    /// Create a tokenizer from a configuration
    pub fn with_config(config: Config) -> Result<Self> {
        if config.words.iter().all(|word| word.is_empty()) {
            return Err(ApiError::Config(
                "at least one dictionary word required".to_string(),
            ));
        }
        let lexicon = Arc::new(TrieLexicon::new(config.words.iter()));
        let inner = match &config.symbols {
            Some(symbols) => QuerySegmenter::with_symbols(lexicon, symbols.clone()),
            None => QuerySegmenter::new(lexicon),
        };
        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Tokenize input into expanded tokens with statistics
    pub fn tokenize(&self, input: Input) -> Result<Output> {
        let text = input.read_text()?;
        let spans = self.inner.cut_spans(&text, self.config.hmm);
        let tokens: Vec<Token> = spans
            .into_iter()
            .map(|span| Token {
                text: text[span.offset..span.offset + span.len].to_string(),
                offset: span.offset,
                len: span.len,
            })
            .collect();
        Ok(Output {
            metadata: Metadata {
                total_bytes: text.len(),
                total_runes: text.chars().count(),
                token_count: tokens.len(),
            },
            tokens,
        })
    }

    /// Tokenize a sentence into plain token strings
    pub fn tokenize_text(&self, text: &str) -> Vec<String> {
        self.inner.cut(text, self.config.hmm)
    }

    /// Tokenize with an explicit unknown-word flag, overriding the default
    pub fn tokenize_text_with_hmm(&self, text: &str, hmm: bool) -> Vec<String> {
        self.inner.cut(text, hmm)
    }

    /// Byte spans of the expanded segmentation
    pub fn tokenize_spans(&self, text: &str) -> Vec<ByteSpan> {
        self.inner.cut_spans(text, self.config.hmm)
    }

    /// Rune ranges of the expanded segmentation, for position-based callers
    pub fn tokenize_ranges(&self, text: &str) -> Vec<WordRange> {
        self.inner.cut_ranges(text, self.config.hmm)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Tokenize text against a word list with default configuration
pub fn tokenize_text<I, S>(text: &str, words: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokenizer = QueryTokenizer::new(words)?;
    Ok(tokenizer.tokenize_text(text))
}

/// Tokenize a file's contents against a word list
pub fn tokenize_file<P, I, S>(path: P, words: I) -> Result<Output>
where
    P: AsRef<std::path::Path>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokenizer = QueryTokenizer::new(words)?;
    tokenizer.tokenize(Input::from_file(path.as_ref().to_path_buf()))
}
