use std::path::Path;

use crate::error::AlignmentError;

/// Top-level configuration for a subtitle pipeline.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SubtitleConfig {
    #[serde(default = "default_tier_name")]
    pub tier_name: String,
    #[serde(default)]
    pub segmenter: SegmenterConfig,
}

impl SubtitleConfig {
    pub const DEFAULT_TIER_NAME: &'static str = "words";

    pub fn load(path: &Path) -> Result<Self, AlignmentError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| AlignmentError::io("read pipeline config", e))?;
        serde_json::from_str(&data).map_err(|e| AlignmentError::json("parse pipeline config", e))
    }
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            tier_name: default_tier_name(),
            segmenter: SegmenterConfig::default(),
        }
    }
}

/// Constraints and search bounds for adaptive sentence segmentation.
///
/// The segmenter bisects the grouping interval within
/// `[min_interval, max_interval]` until the average segment length lands in
/// `[target_avg_chars_min, target_avg_chars_max]` with acceptable spread.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SegmenterConfig {
    #[serde(default = "default_target_avg_chars_min")]
    pub target_avg_chars_min: f64,
    #[serde(default = "default_target_avg_chars_max")]
    pub target_avg_chars_max: f64,
    #[serde(default = "default_max_std_chars")]
    pub max_std_chars: f64,
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_max_duration")]
    pub max_duration: f64,
    #[serde(default = "default_min_interval")]
    pub min_interval: f64,
    #[serde(default = "default_max_interval")]
    pub max_interval: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_fallback_interval")]
    pub fallback_interval: f64,
    /// A gap at least this long always forces a segment break.
    #[serde(default = "default_max_silence_gap")]
    pub max_silence_gap: f64,
}

fn default_tier_name() -> String {
    SubtitleConfig::DEFAULT_TIER_NAME.to_string()
}
fn default_target_avg_chars_min() -> f64 {
    18.0
}
fn default_target_avg_chars_max() -> f64 {
    22.0
}
fn default_max_std_chars() -> f64 {
    8.0
}
fn default_min_chars() -> usize {
    12
}
fn default_max_chars() -> usize {
    48
}
fn default_max_duration() -> f64 {
    8.0
}
fn default_min_interval() -> f64 {
    0.25
}
fn default_max_interval() -> f64 {
    1.2
}
fn default_max_iterations() -> usize {
    14
}
fn default_tolerance() -> f64 {
    0.02
}
fn default_fallback_interval() -> f64 {
    0.45
}
fn default_max_silence_gap() -> f64 {
    1.0
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            target_avg_chars_min: default_target_avg_chars_min(),
            target_avg_chars_max: default_target_avg_chars_max(),
            max_std_chars: default_max_std_chars(),
            min_chars: default_min_chars(),
            max_chars: default_max_chars(),
            max_duration: default_max_duration(),
            min_interval: default_min_interval(),
            max_interval: default_max_interval(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            fallback_interval: default_fallback_interval(),
            max_silence_gap: default_max_silence_gap(),
        }
    }
}
