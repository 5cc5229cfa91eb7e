//! High-level tokenizer configuration

use crate::error::{ApiError, Result};
use souci_core::SymbolSet;

/// High-level configuration for query tokenization
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) words: Vec<String>,
    pub(crate) symbols: Option<SymbolSet>,
    pub(crate) hmm: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            symbols: None,
            hmm: true,
        }
    }
}

impl Config {
    /// Create a configuration from a word list, defaults elsewhere
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether unknown-word recognition is on by default
    pub fn hmm(&self) -> bool {
        self.hmm
    }

    /// The configured dictionary words
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the dictionary word list
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Add one word on top of the configured list
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.config.words.push(word.into());
        self
    }

    /// Replace the separator set
    pub fn symbols<I: IntoIterator<Item = char>>(mut self, symbols: I) -> Self {
        self.config.symbols = Some(SymbolSet::new(symbols));
        self
    }

    /// Default unknown-word recognition flag
    pub fn hmm(mut self, enabled: bool) -> Self {
        self.config.hmm = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.words.iter().all(|word| word.is_empty()) {
            return Err(ApiError::Config(
                "at least one dictionary word required".to_string(),
            ));
        }
        Ok(self.config)
    }
}
