//! Property and contract tests for the expansion engine

use std::collections::HashSet;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use souci_core::{
    HybridSegmenter, Lexicon, QuerySegmenter, RuneStr, RuneText, Segmenter, SymbolSet,
    SymbolSplitter, TrieLexicon, WordRange,
};

const WORDS: &[&str] = &["北京", "大学", "北京大学", "学生", "大学生", "我", "爱"];

fn sentence_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::sample::select(vec![
            '北', '京', '大', '学', '生', '我', '爱', '，', ' ', 'a',
        ]),
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn idempotent_over_repeated_calls(sentence in sentence_strategy(), hmm in any::<bool>()) {
        let seg = QuerySegmenter::new(Arc::new(TrieLexicon::new(WORDS)));
        prop_assert_eq!(seg.cut_ranges(&sentence, hmm), seg.cut_ranges(&sentence, hmm));
        prop_assert_eq!(seg.cut(&sentence, hmm), seg.cut(&sentence, hmm));
    }

    #[test]
    fn primary_words_survive_in_order(sentence in sentence_strategy(), hmm in any::<bool>()) {
        let lexicon = Arc::new(TrieLexicon::new(WORDS));
        let seg = QuerySegmenter::new(lexicon.clone());

        // the primary partition, computed the way the engine drives it
        let text = RuneText::new(&sentence);
        let hybrid = HybridSegmenter::new(lexicon);
        let symbols = SymbolSet::default();
        let mut primary = Vec::new();
        for span in SymbolSplitter::new(&symbols, &text) {
            hybrid.cut(&text, span, hmm, &mut primary);
        }

        // sub-word candidates are strictly shorter than their generating
        // word and lie inside it, so range equality identifies primaries
        let primary_set: HashSet<WordRange> = primary.iter().copied().collect();
        let surviving: Vec<WordRange> = seg
            .cut_ranges(&sentence, hmm)
            .into_iter()
            .filter(|range| primary_set.contains(range))
            .collect();
        prop_assert_eq!(surviving, primary);
    }

    #[test]
    fn span_projection_matches_token_projection(
        sentence in sentence_strategy(),
        hmm in any::<bool>(),
    ) {
        let seg = QuerySegmenter::new(Arc::new(TrieLexicon::new(WORDS)));
        let tokens = seg.cut(&sentence, hmm);
        let spans = seg.cut_spans(&sentence, hmm);
        prop_assert_eq!(tokens.len(), spans.len());
        for (token, span) in tokens.iter().zip(&spans) {
            prop_assert_eq!(token.as_str(), &sentence[span.offset..span.offset + span.len]);
        }
    }
}

/// Counts membership lookups so attempted candidates are observable
struct CountingLexicon {
    inner: TrieLexicon,
    contains_calls: AtomicUsize,
}

impl Lexicon for CountingLexicon {
    fn contains(&self, runes: &[RuneStr]) -> bool {
        self.contains_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.contains(runes)
    }

    fn is_prefix(&self, runes: &[RuneStr]) -> bool {
        self.inner.is_prefix(runes)
    }
}

/// Emits every sub-range as a single primary word without touching the lexicon
struct WholeRun;

impl Segmenter for WholeRun {
    fn cut(&self, _text: &RuneText<'_>, span: Range<usize>, _hmm: bool, out: &mut Vec<WordRange>) {
        if !span.is_empty() {
            out.push(WordRange::new(span.start, span.end - 1));
        }
    }
}

#[test]
fn test_attempted_candidate_counts_per_word_length() {
    // a length-L primary word attempts L-1 bigrams (L > 2) and L-2
    // trigrams (L > 3), each as one membership lookup
    let cases = [
        ("a", 0),
        ("ab", 0),
        ("abc", 2),
        ("abcd", 3 + 2),
        ("abcde", 4 + 3),
        ("abcdef", 5 + 4),
    ];
    for (sentence, expected) in cases {
        let lexicon = Arc::new(CountingLexicon {
            inner: TrieLexicon::default(),
            contains_calls: AtomicUsize::new(0),
        });
        let seg = QuerySegmenter::with_segmenter(lexicon.clone(), WholeRun, SymbolSet::default());
        let tokens = seg.cut(sentence, true);
        // with an empty dictionary only the primary word comes through
        assert_eq!(tokens, [sentence]);
        assert_eq!(
            lexicon.contains_calls.load(Ordering::Relaxed),
            expected,
            "attempt count for {sentence:?}"
        );
    }
}
