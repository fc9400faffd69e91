use crate::alignment::edit_distance::align_sequences;
use crate::alignment::tokenization::tokenize;
use crate::config::SegmenterConfig;
use crate::pipeline::traits::{ScriptTokenizer, SequenceAligner, SubtitleSegmenter};
use crate::segmentation::segment_words_adaptive;
use crate::types::{AlignmentPair, ScriptToken, SegmentationStats, SentenceSegment, WordSpan};

pub struct WhitespaceTokenizer;

impl ScriptTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<ScriptToken> {
        tokenize(text)
    }
}

pub struct EditDistanceAligner;

impl SequenceAligner for EditDistanceAligner {
    fn align(&self, reference: &[String], hypothesis: &[String]) -> Vec<AlignmentPair> {
        align_sequences(reference, hypothesis)
    }
}

pub struct AdaptiveSegmenter;

impl SubtitleSegmenter for AdaptiveSegmenter {
    fn segment(
        &self,
        words: &[WordSpan],
        cfg: &SegmenterConfig,
    ) -> (Vec<SentenceSegment>, SegmentationStats) {
        segment_words_adaptive(words, cfg)
    }
}
