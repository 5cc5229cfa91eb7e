//! Query expansion over a primary segmentation
//!
//! Re-emits every 2- and 3-rune substring of longer primary words that is
//! itself a known word, interleaved with the primary words in a fixed
//! order. The enriched sequence trades segmentation purity for retrieval
//! recall: an index built from it can match partial words.

use std::sync::Arc;

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::rune::{ByteSpan, RuneText, WordRange};
use crate::segment::{HybridSegmenter, Segmenter};
use crate::split::{SymbolSet, SymbolSplitter};

/// Expands a primary segmentation with dictionary-validated sub-words
///
/// For each primary word, in producer order, the output carries: every
/// adjacent rune pair of words longer than two runes that the lexicon
/// knows, then every 3-rune window of words longer than three runes that
/// the lexicon knows, then the word itself. Nothing is deduplicated: a
/// sub-word generated from two different words appears once per
/// generating word.
///
/// The lexicon and segmenter are shared, read-only collaborators; one
/// `QuerySegmenter` may serve many threads at once.
pub struct QuerySegmenter<S: Segmenter = HybridSegmenter> {
    lexicon: Arc<dyn Lexicon>,
    segmenter: S,
    symbols: SymbolSet,
}

impl QuerySegmenter {
    /// Expansion over the default hybrid segmenter and symbol set
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self::with_symbols(lexicon, SymbolSet::default())
    }

    /// Expansion over the default hybrid segmenter with custom separators
    pub fn with_symbols(lexicon: Arc<dyn Lexicon>, symbols: SymbolSet) -> Self {
        let segmenter = HybridSegmenter::new(Arc::clone(&lexicon));
        Self {
            lexicon,
            segmenter,
            symbols,
        }
    }
}

impl<S: Segmenter> QuerySegmenter<S> {
    /// Expansion over a caller-provided primary segmenter
    pub fn with_segmenter(lexicon: Arc<dyn Lexicon>, segmenter: S, symbols: SymbolSet) -> Self {
        Self {
            lexicon,
            segmenter,
            symbols,
        }
    }

    /// Segment a sentence into expanded token strings
    pub fn cut(&self, sentence: &str, hmm: bool) -> Vec<String> {
        let text = RuneText::new(sentence);
        self.expand(&text, hmm)
            .into_iter()
            .map(|range| text.slice(range).to_string())
            .collect()
    }

    /// Segment a sentence into expanded rune ranges
    pub fn cut_ranges(&self, sentence: &str, hmm: bool) -> Vec<WordRange> {
        self.expand(&RuneText::new(sentence), hmm)
    }

    /// Segment a sentence into expanded byte spans of the original text
    ///
    /// The form an indexing pipeline wants: no substring copies, just
    /// offset/length pairs into the text it already holds.
    pub fn cut_spans(&self, sentence: &str, hmm: bool) -> Vec<ByteSpan> {
        let text = RuneText::new(sentence);
        self.expand(&text, hmm)
            .into_iter()
            .map(|range| text.byte_span(range))
            .collect()
    }

    fn expand(&self, text: &RuneText<'_>, hmm: bool) -> Vec<WordRange> {
        let runes = text.runes();
        let mut result = Vec::with_capacity(runes.len() / 2);
        let mut mix = Vec::new();
        for span in SymbolSplitter::new(&self.symbols, text) {
            mix.clear();
            self.segmenter.cut(text, span, hmm, &mut mix);
            for word in &mix {
                let len = word.len();
                if len > 2 {
                    for i in 0..len - 1 {
                        let bigram = WordRange::new(word.left + i, word.left + i + 1);
                        if self.lexicon.contains(&runes[bigram.left..=bigram.right]) {
                            result.push(bigram);
                        }
                    }
                }
                if len > 3 {
                    for i in 0..len - 2 {
                        let trigram = WordRange::new(word.left + i, word.left + i + 2);
                        if self.lexicon.contains(&runes[trigram.left..=trigram.right]) {
                            result.push(trigram);
                        }
                    }
                }
                result.push(*word);
            }
        }
        debug!(runes = runes.len(), ranges = result.len(), "expanded segmentation");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::TrieLexicon;

    fn segmenter(words: &[&str]) -> QuerySegmenter {
        QuerySegmenter::new(Arc::new(TrieLexicon::new(words)))
    }

    #[test]
    fn test_sub_words_precede_their_word() {
        let seg = segmenter(&["北京", "大学", "北京大学"]);
        assert_eq!(seg.cut("北京大学", true), ["北京", "大学", "北京大学"]);
    }

    #[test]
    fn test_trigram_expansion() {
        let seg = segmenter(&["abcd", "ab", "bc", "abc", "bcd"]);
        // bigrams ab, bc attempted at starts 0..3; cd missing from the
        // lexicon; trigrams abc, bcd attempted at starts 0..2
        assert_eq!(seg.cut("abcd", true), ["ab", "bc", "abc", "bcd", "abcd"]);
    }

    #[test]
    fn test_short_words_are_never_expanded() {
        let seg = segmenter(&["ab", "a", "b"]);
        assert_eq!(seg.cut("ab", true), ["ab"]);
    }

    #[test]
    fn test_length_three_word_attempts_only_bigrams() {
        let seg = segmenter(&["abc", "ab", "bc"]);
        assert_eq!(seg.cut("abc", true), ["ab", "bc", "abc"]);
    }

    #[test]
    fn test_no_deduplication_across_generating_words() {
        // 大学 is emitted for each generating word, once per context
        let seg = segmenter(&["大学生", "大学", "学生"]);
        assert_eq!(
            seg.cut("大学生大学生", true),
            ["大学", "学生", "大学生", "大学", "学生", "大学生"]
        );
    }

    #[test]
    fn test_symbol_runs_are_processed_independently() {
        let seg = segmenter(&["北京", "大学"]);
        assert_eq!(seg.cut("北京，大学", true), ["北京", "大学"]);
    }

    #[test]
    fn test_empty_sentence() {
        let seg = segmenter(&["北京"]);
        assert!(seg.cut("", true).is_empty());
        assert!(seg.cut_ranges("", true).is_empty());
        assert!(seg.cut_spans("", true).is_empty());
    }

    #[test]
    fn test_ranges_projection_orders_match() {
        let seg = segmenter(&["北京", "大学", "北京大学"]);
        let ranges = seg.cut_ranges("北京大学", true);
        assert_eq!(
            ranges,
            vec![
                WordRange::new(0, 1),
                WordRange::new(2, 3),
                WordRange::new(0, 3),
            ]
        );
    }

    #[test]
    fn test_spans_projection() {
        let seg = segmenter(&["北京", "大学", "北京大学"]);
        let spans = seg.cut_spans("北京大学", true);
        assert_eq!(
            spans,
            vec![
                ByteSpan { offset: 0, len: 6 },
                ByteSpan { offset: 6, len: 6 },
                ByteSpan { offset: 0, len: 12 },
            ]
        );
    }

    #[test]
    fn test_custom_segmenter_substitution() {
        /// Emits the whole sub-range as one word
        struct WholeRun;

        impl Segmenter for WholeRun {
            fn cut(
                &self,
                _text: &RuneText<'_>,
                span: std::ops::Range<usize>,
                _hmm: bool,
                out: &mut Vec<WordRange>,
            ) {
                if !span.is_empty() {
                    out.push(WordRange::new(span.start, span.end - 1));
                }
            }
        }

        let lexicon = Arc::new(TrieLexicon::new(["京大"]));
        let seg = QuerySegmenter::with_segmenter(lexicon, WholeRun, SymbolSet::default());
        // the lexicon would never produce 北京大学 as a primary word, but the
        // substituted segmenter does, and expansion still validates sub-words
        assert_eq!(seg.cut("北京大学", true), ["京大", "北京大学"]);
    }
}
