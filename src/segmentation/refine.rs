use crate::config::SegmenterConfig;
use crate::types::SentenceSegment;

use super::{build_segment, char_len};

/// Post-processes the winning candidate: splits segments that exceed
/// `max_chars` (when they have more than one word) and merges segments that
/// fall below `min_chars` into a neighbour, preferring the following one.
/// Repeats until a full pass makes no change or the iteration budget is
/// spent.
pub(super) fn refine_outliers(
    segments: Vec<SentenceSegment>,
    cfg: &SegmenterConfig,
) -> Vec<SentenceSegment> {
    let mut refined = segments;
    let mut changed = true;
    let mut iterations = 0usize;

    while changed && iterations < cfg.max_iterations {
        iterations += 1;
        changed = false;

        let mut split_pass = Vec::with_capacity(refined.len());
        for segment in refined {
            if segment.char_count > cfg.max_chars && segment.word_count > 1 {
                let (left, right) = split_segment(&segment);
                split_pass.push(left);
                split_pass.push(right);
                changed = true;
            } else {
                split_pass.push(segment);
            }
        }
        refined = split_pass;

        let mut i = 0;
        while i < refined.len() {
            if refined[i].char_count >= cfg.min_chars || refined.len() == 1 {
                i += 1;
                continue;
            }

            if i + 1 < refined.len() {
                refined[i] = merge_segments(&refined[i], &refined[i + 1]);
                refined.remove(i + 1);
                changed = true;
                continue;
            }
            if i > 0 {
                refined[i - 1] = merge_segments(&refined[i - 1], &refined[i]);
                refined.remove(i);
                changed = true;
                continue;
            }
            i += 1;
        }
    }

    refined
}

/// Splits at the word where the running character count crosses half the
/// segment's budget; that boundary word starts the right half.
fn split_segment(segment: &SentenceSegment) -> (SentenceSegment, SentenceSegment) {
    let half_chars = segment.char_count as f64 / 2.0;
    let mut accumulator = 0usize;
    let mut split_index = 0usize;

    for (idx, word) in segment.words.iter().enumerate() {
        accumulator += char_len(&word.text);
        if accumulator as f64 >= half_chars {
            split_index = idx + 1;
            break;
        }
    }

    let split_index = split_index.clamp(1, segment.words.len() - 1);
    let left = build_segment(&segment.words[..split_index]);
    let right = build_segment(&segment.words[split_index..]);
    (left, right)
}

fn merge_segments(a: &SentenceSegment, b: &SentenceSegment) -> SentenceSegment {
    let mut words = a.words.clone();
    words.extend(b.words.iter().cloned());
    build_segment(&words)
}
