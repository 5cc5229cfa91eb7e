//! Rune records, word ranges, and byte-span projection
//!
//! Segmentation works over a decoded rune sequence so candidate generation
//! can index scalar values directly while byte offsets stay available for
//! projection back onto the original text.

/// A single decoded Unicode scalar with its position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuneStr {
    /// The scalar value
    pub ch: char,
    /// Byte offset in the original text
    pub byte_offset: usize,
    /// Encoded length in bytes
    pub byte_len: usize,
}

/// An inclusive span of rune positions representing one candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordRange {
    /// Index of the first rune, inclusive
    pub left: usize,
    /// Index of the last rune, inclusive
    pub right: usize,
}

impl WordRange {
    /// Create a range; `left` must not exceed `right`
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert!(left <= right, "word range out of order: {left} > {right}");
        Self { left, right }
    }

    /// Inclusive rune count spanned by the range
    #[allow(clippy::len_without_is_empty)] // a range always spans at least one rune
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }
}

/// The byte-offset/length projection of a [`WordRange`] onto the encoded text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteSpan {
    /// Byte offset of the first rune
    pub offset: usize,
    /// Total byte length, last rune included
    pub len: usize,
}

/// A sentence decoded into runes, keeping a handle on the source text
#[derive(Debug, Clone)]
pub struct RuneText<'a> {
    text: &'a str,
    runes: Vec<RuneStr>,
}

impl<'a> RuneText<'a> {
    /// Decode a sentence into one record per Unicode scalar, in order
    pub fn new(text: &'a str) -> Self {
        let runes = text
            .char_indices()
            .map(|(byte_offset, ch)| RuneStr {
                ch,
                byte_offset,
                byte_len: ch.len_utf8(),
            })
            .collect();
        Self { text, runes }
    }

    /// The decoded rune records
    pub fn runes(&self) -> &[RuneStr] {
        &self.runes
    }

    /// Number of runes in the sentence
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Whether the sentence decoded to no runes
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// The original text this sequence was decoded from
    pub fn source(&self) -> &'a str {
        self.text
    }

    /// Project a word range onto the original byte stream
    ///
    /// # Panics
    /// Panics if the range is reversed. A collaborator handing back a range
    /// with `left` past `right` has broken its contract; that is a fatal
    /// precondition failure, not something to paper over.
    pub fn byte_span(&self, range: WordRange) -> ByteSpan {
        let left = &self.runes[range.left];
        let right = &self.runes[range.right];
        assert!(
            left.byte_offset <= right.byte_offset,
            "word range out of order: byte {} past byte {}",
            left.byte_offset,
            right.byte_offset
        );
        ByteSpan {
            offset: left.byte_offset,
            len: right.byte_offset - left.byte_offset + right.byte_len,
        }
    }

    /// The literal substring a word range spans
    pub fn slice(&self, range: WordRange) -> &'a str {
        let span = self.byte_span(range);
        &self.text[span.offset..span.offset + span.len]
    }
}
