//! Recall-oriented query segmentation
//!
//! Splits a sentence with a primary dictionary segmenter, then re-emits
//! every 2- and 3-rune substring of longer words that is itself a known
//! word. Search indexes built from the enriched sequence can match
//! partial-word queries that the primary segmentation alone would miss.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use souci_core::{QuerySegmenter, TrieLexicon};
//!
//! let lexicon = Arc::new(TrieLexicon::new(["北京", "大学", "北京大学"]));
//! let segmenter = QuerySegmenter::new(lexicon);
//!
//! let tokens = segmenter.cut("北京大学", true);
//! assert_eq!(tokens, ["北京", "大学", "北京大学"]);
//! ```

#![warn(missing_docs)]

pub mod lexicon;
pub mod query;
pub mod rune;
pub mod segment;
pub mod split;

// Re-export key types
pub use lexicon::{Lexicon, TrieLexicon};
pub use query::QuerySegmenter;
pub use rune::{ByteSpan, RuneStr, RuneText, WordRange};
pub use segment::{GreedyJoiner, HybridSegmenter, Segmenter, UnknownWordModel};
pub use split::{SymbolSet, SymbolSplitter};
