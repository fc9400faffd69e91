pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod segmentation;
pub mod srt;
pub mod types;

pub use alignment::hypothesis::AsrAlignment;
pub use config::{SegmenterConfig, SubtitleConfig};
pub use error::AlignmentError;
pub use pipeline::builder::SubtitlePipelineBuilder;
pub use pipeline::runtime::SubtitlePipeline;
pub use pipeline::traits::{ScriptTokenizer, SequenceAligner, SubtitleSegmenter};
pub use types::{
    AlignedSubtitles, AlignmentPair, AlignmentSummary, HypothesisToken, ScriptToken,
    SegmentationStats, SegmentedSubtitles, SentenceSegment, TimedSubtitleEntry, WordSpan,
};
