use std::path::Path;

use serde::Deserialize;
use textgrid::TextGrid;

use crate::alignment::tokenization::{extract_word_tokens, normalize_fragment};
use crate::error::AlignmentError;
use crate::types::{HypothesisToken, WordSpan};

/// Word-level alignment output of an ASR+alignment tool, e.g. WhisperX.
/// Words are grouped under segments; only the word records carry timing we
/// care about.
#[derive(Debug, Clone, Deserialize)]
pub struct AsrAlignment {
    #[serde(default)]
    pub segments: Vec<AsrSegment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AsrSegment {
    #[serde(default)]
    pub words: Vec<AsrWord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AsrWord {
    pub word: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

impl AsrAlignment {
    pub fn load(path: &Path) -> Result<Self, AlignmentError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| AlignmentError::io("read alignment json", e))?;
        serde_json::from_str(&data).map_err(|e| AlignmentError::json("parse alignment json", e))
    }
}

/// Reads a forced-aligner TextGrid from disk.
pub fn load_textgrid(path: &Path) -> Result<TextGrid, AlignmentError> {
    TextGrid::from_file(path).map_err(|e| AlignmentError::runtime("read TextGrid", e))
}

/// Extracts time-stamped hypothesis tokens from a TextGrid interval tier.
///
/// Empty labels and `[...]`-wrapped labels are the aligner's silence/OOV
/// markers and are skipped. A multi-word label emits several tokens that all
/// share the interval's bounds. Intervals with `end < start` are dropped,
/// not clamped.
pub fn extract_interval_tokens(
    grid: &TextGrid,
    tier_name: &str,
) -> Result<Vec<HypothesisToken>, AlignmentError> {
    let tier = grid
        .tiers
        .iter()
        .find(|tier| tier.name == tier_name)
        .ok_or_else(|| AlignmentError::missing_tier(tier_name))?;

    let mut tokens = Vec::new();
    for interval in &tier.intervals {
        let label = interval.text.trim();
        if label.is_empty() || (label.starts_with('[') && label.ends_with(']')) {
            continue;
        }
        if interval.xmax < interval.xmin {
            tracing::warn!(
                label,
                start = interval.xmin,
                end = interval.xmax,
                "dropping malformed interval"
            );
            continue;
        }
        for piece in extract_word_tokens(label) {
            tokens.push(HypothesisToken {
                text: piece,
                start: interval.xmin,
                end: interval.xmax,
            });
        }
    }

    if tokens.is_empty() {
        return Err(AlignmentError::EmptyHypothesis);
    }
    Ok(tokens)
}

/// Extracts hypothesis tokens from per-word ASR output: one token per
/// reported word, timing taken directly. Words with `end < start` or no
/// alphabetic content are dropped.
pub fn asr_hypothesis_tokens(result: &AsrAlignment) -> Result<Vec<HypothesisToken>, AlignmentError> {
    let mut tokens = Vec::new();
    for span in flatten_asr_words(result) {
        let normalized = normalize_fragment(&span.text);
        if normalized.is_empty() {
            continue;
        }
        tokens.push(HypothesisToken {
            text: normalized,
            start: span.start,
            end: span.end,
        });
    }
    if tokens.is_empty() {
        return Err(AlignmentError::EmptyHypothesis);
    }
    Ok(tokens)
}

/// Flattens an ASR alignment into timed word spans for the segmentation
/// path, sorted by `(start, end)`. The original text (with punctuation) is
/// preserved here; normalization happens only on the alignment path.
pub fn flatten_asr_words(result: &AsrAlignment) -> Vec<WordSpan> {
    let mut words = Vec::new();
    for segment in &result.segments {
        for word in &segment.words {
            let text = word.word.trim();
            if text.is_empty() {
                continue;
            }
            let start = word.start.unwrap_or(0.0);
            let end = word.end.unwrap_or(start);
            if end < start {
                tracing::warn!(word = text, start, end, "dropping malformed word timing");
                continue;
            }
            words.push(WordSpan {
                text: text.to_string(),
                start,
                end,
            });
        }
    }
    words.sort_by(|a, b| {
        (a.start, a.end)
            .partial_cmp(&(b.start, b.end))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    words
}
