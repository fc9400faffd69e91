use crate::config::SegmenterConfig;
use crate::types::{AlignmentPair, ScriptToken, SegmentationStats, SentenceSegment, WordSpan};

pub trait ScriptTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<ScriptToken>;
}

pub trait SequenceAligner: Send + Sync {
    fn align(&self, reference: &[String], hypothesis: &[String]) -> Vec<AlignmentPair>;
}

pub trait SubtitleSegmenter: Send + Sync {
    fn segment(
        &self,
        words: &[WordSpan],
        cfg: &SegmenterConfig,
    ) -> (Vec<SentenceSegment>, SegmentationStats);
}
