//! Primary word segmentation
//!
//! [`HybridSegmenter`] produces the base partition the expansion engine
//! enriches: longest dictionary match with single-rune fallback, plus an
//! optional unknown-word pass that merges runs the dictionary cannot cover.

use std::ops::Range;
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::trace;

use crate::lexicon::Lexicon;
use crate::rune::{RuneStr, RuneText, WordRange};

/// Cuts one pre-split sub-range into a primary word partition
///
/// The appended ranges index into the full rune sequence of `text`, stay
/// inside `span`, and cover it left to right, contiguous and
/// non-overlapping.
pub trait Segmenter: Send + Sync {
    /// Append the partition of `span` to `out`
    fn cut(&self, text: &RuneText<'_>, span: Range<usize>, hmm: bool, out: &mut Vec<WordRange>);
}

/// Recognizes words inside a run of runes no dictionary entry covers
///
/// Invoked only when unknown-word recognition is enabled and only on runs of
/// at least two runes. A statistical decoder slots in behind this trait.
pub trait UnknownWordModel: Send + Sync {
    /// Append a partition of the unknown run `span` to `out`
    fn decode(&self, text: &RuneText<'_>, span: Range<usize>, out: &mut Vec<WordRange>);
}

/// Unknown-word model that emits each run as a single word
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyJoiner;

impl UnknownWordModel for GreedyJoiner {
    fn decode(&self, _text: &RuneText<'_>, span: Range<usize>, out: &mut Vec<WordRange>) {
        if !span.is_empty() {
            out.push(WordRange::new(span.start, span.end - 1));
        }
    }
}

/// Dictionary-maximizing segmenter with single-rune fallback
///
/// Scans left to right taking the longest dictionary word at each position.
/// Runes no word covers fall back to single-rune words; with `hmm` enabled,
/// each maximal run of two or more adjacent fallback runes goes through the
/// unknown-word model instead.
pub struct HybridSegmenter<M: UnknownWordModel = GreedyJoiner> {
    lexicon: Arc<dyn Lexicon>,
    model: M,
}

impl HybridSegmenter {
    /// Segment against `lexicon` with the default unknown-word model
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self {
            lexicon,
            model: GreedyJoiner,
        }
    }
}

impl<M: UnknownWordModel> HybridSegmenter<M> {
    /// Segment against `lexicon` with a custom unknown-word model
    pub fn with_model(lexicon: Arc<dyn Lexicon>, model: M) -> Self {
        Self { lexicon, model }
    }

    /// End index (inclusive) of the longest dictionary word starting at `begin`
    fn longest_match(&self, runes: &[RuneStr], begin: usize, end: usize) -> Option<usize> {
        let mut best = None;
        for probe in begin..end {
            let candidate = &runes[begin..=probe];
            if !self.lexicon.is_prefix(candidate) {
                break;
            }
            if self.lexicon.contains(candidate) {
                best = Some(probe);
            }
        }
        best
    }

    /// Drain buffered fallback runes into the output
    fn flush(
        &self,
        text: &RuneText<'_>,
        pending: &mut SmallVec<[WordRange; 8]>,
        hmm: bool,
        out: &mut Vec<WordRange>,
    ) {
        match pending.as_slice() {
            [] => {}
            [single] => out.push(*single),
            [first, .., last] if hmm => self.model.decode(text, first.left..last.right + 1, out),
            _ => out.extend(pending.iter().copied()),
        }
        pending.clear();
    }
}

impl<M: UnknownWordModel> Segmenter for HybridSegmenter<M> {
    fn cut(&self, text: &RuneText<'_>, span: Range<usize>, hmm: bool, out: &mut Vec<WordRange>) {
        let runes = text.runes();
        let mut pending: SmallVec<[WordRange; 8]> = SmallVec::new();
        let mut cursor = span.start;
        while cursor < span.end {
            match self.longest_match(runes, cursor, span.end) {
                Some(end) => {
                    self.flush(text, &mut pending, hmm, out);
                    out.push(WordRange::new(cursor, end));
                    cursor = end + 1;
                }
                None => {
                    pending.push(WordRange::new(cursor, cursor));
                    cursor += 1;
                }
            }
        }
        self.flush(text, &mut pending, hmm, out);
        trace!(begin = span.start, end = span.end, hmm, "cut sub-range");
    }
}
