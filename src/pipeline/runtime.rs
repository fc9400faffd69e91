use textgrid::TextGrid;

use crate::alignment::hypothesis::{
    asr_hypothesis_tokens, extract_interval_tokens, flatten_asr_words, AsrAlignment,
};
use crate::alignment::propagation::propagate;
use crate::config::SegmenterConfig;
use crate::error::AlignmentError;
use crate::pipeline::traits::{ScriptTokenizer, SequenceAligner, SubtitleSegmenter};
use crate::srt;
use crate::types::{
    AlignedSubtitles, AlignmentSummary, HypothesisToken, ScriptToken, SegmentedSubtitles, WordSpan,
};

/// Orchestrates the two subtitle paths: aligning a reference script against
/// timed hypothesis tokens, and regrouping raw word timestamps into
/// sentence segments. Both paths share one sequence aligner.
pub struct SubtitlePipeline {
    tier_name: String,
    segmenter_config: SegmenterConfig,
    tokenizer: Box<dyn ScriptTokenizer>,
    sequence_aligner: Box<dyn SequenceAligner>,
    segmenter: Box<dyn SubtitleSegmenter>,
}

pub(crate) struct SubtitlePipelineParts {
    pub tier_name: String,
    pub segmenter_config: SegmenterConfig,
    pub tokenizer: Box<dyn ScriptTokenizer>,
    pub sequence_aligner: Box<dyn SequenceAligner>,
    pub segmenter: Box<dyn SubtitleSegmenter>,
}

impl SubtitlePipeline {
    pub(crate) fn from_parts(parts: SubtitlePipelineParts) -> Self {
        Self {
            tier_name: parts.tier_name,
            segmenter_config: parts.segmenter_config,
            tokenizer: parts.tokenizer,
            sequence_aligner: parts.sequence_aligner,
            segmenter: parts.segmenter,
        }
    }

    /// Word-level subtitles from a forced-aligner TextGrid and the clean
    /// reference script.
    pub fn align_textgrid(
        &self,
        transcript: &str,
        grid: &TextGrid,
    ) -> Result<AlignedSubtitles, AlignmentError> {
        let hypothesis = extract_interval_tokens(grid, &self.tier_name)?;
        self.align_hypothesis(transcript, &hypothesis)
    }

    /// Word-level subtitles from per-word ASR output and the clean
    /// reference script.
    pub fn align_asr(
        &self,
        transcript: &str,
        result: &AsrAlignment,
    ) -> Result<AlignedSubtitles, AlignmentError> {
        let hypothesis = asr_hypothesis_tokens(result)?;
        self.align_hypothesis(transcript, &hypothesis)
    }

    fn align_hypothesis(
        &self,
        transcript: &str,
        hypothesis: &[HypothesisToken],
    ) -> Result<AlignedSubtitles, AlignmentError> {
        let script_tokens = self.tokenizer.tokenize(transcript);
        let reference = reference_words(&script_tokens);
        if reference.is_empty() {
            return Err(AlignmentError::invalid_input(
                "script contains no word tokens",
            ));
        }

        let hypothesis_words: Vec<String> =
            hypothesis.iter().map(|token| token.text.clone()).collect();
        let alignment = self.sequence_aligner.align(&reference, &hypothesis_words);
        let propagated = propagate(&script_tokens, &alignment);
        let entries = srt::word_entries(&script_tokens, hypothesis, &propagated.mapped);

        let summary = AlignmentSummary {
            matched_tokens: propagated.matched,
            missing_tokens: propagated.missing,
            total_tokens: reference.len(),
        };
        tracing::debug!(
            matched = summary.matched_tokens,
            missing = summary.missing_tokens,
            total = summary.total_tokens,
            "script alignment complete"
        );

        Ok(AlignedSubtitles { entries, summary })
    }

    /// Sentence-level subtitles from raw word timestamps, no script needed.
    pub fn segment_words(&self, words: &[WordSpan]) -> SegmentedSubtitles {
        let (segments, stats) = self.segmenter.segment(words, &self.segmenter_config);
        let entries = srt::segment_entries(&segments);
        tracing::debug!(
            segment_count = stats.segment_count,
            avg_chars = format!("{:.1}", stats.avg_chars),
            interval = format!("{:.3}", stats.interval),
            "segmentation complete"
        );
        SegmentedSubtitles {
            segments,
            stats,
            entries,
        }
    }

    /// Convenience wrapper over [`SubtitlePipeline::segment_words`] for a
    /// whole ASR alignment result.
    pub fn segment_asr(&self, result: &AsrAlignment) -> SegmentedSubtitles {
        let words = flatten_asr_words(result);
        self.segment_words(&words)
    }
}

fn reference_words(script_tokens: &[ScriptToken]) -> Vec<String> {
    script_tokens
        .iter()
        .filter(|token| token.is_word)
        .map(|token| token.normalized.clone())
        .collect()
}
