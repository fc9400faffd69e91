use crate::config::SubtitleConfig;
use crate::pipeline::defaults::{AdaptiveSegmenter, EditDistanceAligner, WhitespaceTokenizer};
use crate::pipeline::runtime::{SubtitlePipeline, SubtitlePipelineParts};
use crate::pipeline::traits::{ScriptTokenizer, SequenceAligner, SubtitleSegmenter};

pub struct SubtitlePipelineBuilder {
    config: SubtitleConfig,
    tokenizer: Option<Box<dyn ScriptTokenizer>>,
    sequence_aligner: Option<Box<dyn SequenceAligner>>,
    segmenter: Option<Box<dyn SubtitleSegmenter>>,
}

impl SubtitlePipelineBuilder {
    pub fn new(config: SubtitleConfig) -> Self {
        Self {
            config,
            tokenizer: None,
            sequence_aligner: None,
            segmenter: None,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn ScriptTokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn with_sequence_aligner(mut self, sequence_aligner: Box<dyn SequenceAligner>) -> Self {
        self.sequence_aligner = Some(sequence_aligner);
        self
    }

    pub fn with_segmenter(mut self, segmenter: Box<dyn SubtitleSegmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    pub fn build(self) -> SubtitlePipeline {
        let tier_name = if self.config.tier_name.is_empty() {
            SubtitleConfig::DEFAULT_TIER_NAME.to_string()
        } else {
            self.config.tier_name
        };

        SubtitlePipeline::from_parts(SubtitlePipelineParts {
            tier_name,
            segmenter_config: self.config.segmenter,
            tokenizer: self
                .tokenizer
                .unwrap_or_else(|| Box::new(WhitespaceTokenizer)),
            sequence_aligner: self
                .sequence_aligner
                .unwrap_or_else(|| Box::new(EditDistanceAligner)),
            segmenter: self.segmenter.unwrap_or_else(|| Box::new(AdaptiveSegmenter)),
        })
    }
}

impl Default for SubtitlePipelineBuilder {
    fn default() -> Self {
        Self::new(SubtitleConfig::default())
    }
}
