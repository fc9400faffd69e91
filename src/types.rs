use serde::Serialize;

/// One whitespace-delimited fragment of the reference script.
///
/// Fragments with no alphabetic content (standalone punctuation, dashes)
/// are kept as non-word tokens so positions against the original text are
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptToken {
    pub raw: String,
    /// Lowercase ASCII letters and apostrophes only; empty for non-word tokens.
    pub normalized: String,
    pub is_word: bool,
}

/// A recognized token with timing, as reported by the external aligner.
#[derive(Debug, Clone, PartialEq)]
pub struct HypothesisToken {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

/// One step of an edit-distance alignment. Exactly one side may be `None`:
/// a missing `hyp_index` is a deletion, a missing `ref_index` an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentPair {
    pub ref_index: Option<usize>,
    pub hyp_index: Option<usize>,
}

impl AlignmentPair {
    pub fn matched(ref_index: usize, hyp_index: usize) -> Self {
        Self {
            ref_index: Some(ref_index),
            hyp_index: Some(hyp_index),
        }
    }

    pub fn deletion(ref_index: usize) -> Self {
        Self {
            ref_index: Some(ref_index),
            hyp_index: None,
        }
    }

    pub fn insertion(hyp_index: usize) -> Self {
        Self {
            ref_index: None,
            hyp_index: Some(hyp_index),
        }
    }
}

/// A subtitle entry ready for serialization. Ordinals are dense and start at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedSubtitleEntry {
    pub ordinal: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// A single timed word on the segmentation path.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSpan {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

/// Sentence-level segment reconstructed from word spans.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceSegment {
    pub id: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
    /// Sum of non-space character counts of the constituent words.
    pub char_count: usize,
    pub word_count: usize,
    pub words: Vec<WordSpan>,
}

impl SentenceSegment {
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// Aggregate statistics for one candidate grouping; drives the interval
/// search and is reported alongside the final segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentationStats {
    pub interval: f64,
    pub avg_chars: f64,
    pub std_chars: f64,
    pub min_chars: usize,
    pub max_chars: usize,
    pub segment_count: usize,
}

/// Alignment quality counters surfaced to the metadata-writing layer.
/// `missing_tokens` is the primary signal of alignment quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignmentSummary {
    pub matched_tokens: usize,
    pub missing_tokens: usize,
    pub total_tokens: usize,
}

/// Output of the script-alignment path.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSubtitles {
    pub entries: Vec<TimedSubtitleEntry>,
    pub summary: AlignmentSummary,
}

/// Output of the raw word-timestamp segmentation path.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedSubtitles {
    pub segments: Vec<SentenceSegment>,
    pub stats: SegmentationStats,
    pub entries: Vec<TimedSubtitleEntry>,
}
