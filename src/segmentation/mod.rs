use crate::config::SegmenterConfig;
use crate::types::{SegmentationStats, SentenceSegment, WordSpan};

mod refine;

/// Tracks the best interval candidate seen across search iterations.
struct IntervalSearchState {
    best_segments: Vec<SentenceSegment>,
    best_stats: Option<SegmentationStats>,
}

impl IntervalSearchState {
    fn new() -> Self {
        Self {
            best_segments: Vec::new(),
            best_stats: None,
        }
    }

    fn consider(
        &mut self,
        segments: &[SentenceSegment],
        stats: SegmentationStats,
        cfg: &SegmenterConfig,
    ) {
        let target_hit = stats.avg_chars >= cfg.target_avg_chars_min
            && stats.avg_chars <= cfg.target_avg_chars_max
            && stats.std_chars <= cfg.max_std_chars;

        let Some(best) = self.best_stats else {
            self.best_segments = segments.to_vec();
            self.best_stats = Some(stats);
            return;
        };
        if target_hit {
            self.best_segments = segments.to_vec();
            self.best_stats = Some(stats);
            return;
        }

        let current_err = avg_error(&stats, cfg);
        let best_err = avg_error(&best, cfg);
        if current_err < best_err
            || (current_err == best_err && stats.std_chars < best.std_chars)
        {
            self.best_segments = segments.to_vec();
            self.best_stats = Some(stats);
        }
    }
}

/// Regroups a flat list of timed words into sentence-like segments.
///
/// Bisects the grouping interval within `[min_interval, max_interval]` until
/// the mean segment character count lands in the target band, keeping the
/// best candidate seen in case the iteration budget runs out, then refines
/// outliers (split/merge) and re-numbers ids densely from 1.
///
/// An empty word list is not an error: it returns no segments and zeroed
/// stats.
pub fn segment_words_adaptive(
    words: &[WordSpan],
    cfg: &SegmenterConfig,
) -> (Vec<SentenceSegment>, SegmentationStats) {
    if words.is_empty() {
        return (Vec::new(), empty_stats(cfg.fallback_interval));
    }

    let mut state = IntervalSearchState::new();
    let mut low = cfg.min_interval;
    let mut high = cfg.max_interval;
    let mut last_interval = cfg.fallback_interval;

    for iteration in 0..cfg.max_iterations {
        let interval = (low + high) / 2.0;
        let segments = simulate_segments(words, interval, cfg);
        let stats = evaluate_segments(&segments, interval);
        state.consider(&segments, stats, cfg);

        tracing::debug!(
            iteration,
            interval = format!("{interval:.3}"),
            avg_chars = format!("{:.1}", stats.avg_chars),
            std_chars = format!("{:.1}", stats.std_chars),
            segment_count = stats.segment_count,
            "interval search step"
        );

        let avg_in_band = stats.avg_chars >= cfg.target_avg_chars_min
            && stats.avg_chars <= cfg.target_avg_chars_max;
        if avg_in_band && (stats.std_chars <= cfg.max_std_chars || (high - low).abs() <= cfg.tolerance)
        {
            last_interval = interval;
            break;
        }

        if stats.avg_chars < cfg.target_avg_chars_min {
            low = interval;
        } else if stats.avg_chars > cfg.target_avg_chars_max {
            high = interval;
        } else {
            // Mean is in band but the spread is still too wide and the
            // bracket cannot shrink it further.
            last_interval = interval;
            break;
        }

        last_interval = interval;
        if (high - low).abs() <= cfg.tolerance {
            break;
        }
    }

    let (segments, stats) = match state.best_stats {
        Some(stats) => (state.best_segments, stats),
        None => {
            let segments = simulate_segments(words, last_interval, cfg);
            let stats = evaluate_segments(&segments, last_interval);
            (segments, stats)
        }
    };

    let mut refined = refine::refine_outliers(segments, cfg);
    let stats = evaluate_segments(&refined, stats.interval);
    assign_ids(&mut refined);
    (refined, stats)
}

/// Distance of the mean segment length from the target band; zero inside it.
fn avg_error(stats: &SegmentationStats, cfg: &SegmenterConfig) -> f64 {
    if stats.avg_chars < cfg.target_avg_chars_min {
        cfg.target_avg_chars_min - stats.avg_chars
    } else if stats.avg_chars > cfg.target_avg_chars_max {
        stats.avg_chars - cfg.target_avg_chars_max
    } else {
        0.0
    }
}

/// Single greedy pass accumulating words into buckets for one candidate
/// interval. A bucket closes on max duration, max length, interval-plus-min
/// length, or a silence gap (silence always forces a break).
fn simulate_segments(
    words: &[WordSpan],
    interval: f64,
    cfg: &SegmenterConfig,
) -> Vec<SentenceSegment> {
    let mut segments = Vec::new();
    let mut bucket: Vec<WordSpan> = Vec::new();

    for word in words {
        if word.text.is_empty() {
            continue;
        }

        if let Some(last) = bucket.last() {
            let gap = (word.start - last.end).max(0.0);
            if gap >= cfg.max_silence_gap {
                segments.push(build_segment(&bucket));
                bucket.clear();
            }
        }

        bucket.push(word.clone());
        let duration = bucket[bucket.len() - 1].end - bucket[0].start;
        let char_count = char_count(&bucket);

        let should_close = duration >= cfg.max_duration
            || char_count >= cfg.max_chars
            || (duration >= interval && char_count >= cfg.min_chars);
        if should_close {
            segments.push(build_segment(&bucket));
            bucket.clear();
        }
    }

    if !bucket.is_empty() {
        segments.push(build_segment(&bucket));
    }

    segments
}

/// Mean and population standard deviation of segment character counts.
fn evaluate_segments(segments: &[SentenceSegment], interval: f64) -> SegmentationStats {
    if segments.is_empty() {
        return empty_stats(interval);
    }

    let counts: Vec<usize> = segments.iter().map(|s| s.char_count).collect();
    let n = counts.len() as f64;
    let avg_chars = counts.iter().sum::<usize>() as f64 / n;
    let std_chars = if counts.len() > 1 {
        let var = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - avg_chars;
                d * d
            })
            .sum::<f64>()
            / n;
        var.sqrt()
    } else {
        0.0
    };

    SegmentationStats {
        interval,
        avg_chars,
        std_chars,
        min_chars: counts.iter().copied().min().unwrap_or(0),
        max_chars: counts.iter().copied().max().unwrap_or(0),
        segment_count: segments.len(),
    }
}

fn empty_stats(interval: f64) -> SegmentationStats {
    SegmentationStats {
        interval,
        avg_chars: 0.0,
        std_chars: 0.0,
        min_chars: 0,
        max_chars: 0,
        segment_count: 0,
    }
}

/// Builds a frozen segment from a non-empty run of words.
pub(crate) fn build_segment(words: &[WordSpan]) -> SentenceSegment {
    debug_assert!(!words.is_empty(), "cannot build a segment without words");
    let text = words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();
    SentenceSegment {
        id: 0,
        start: words[0].start,
        end: words[words.len() - 1].end,
        text,
        char_count: char_count(words),
        word_count: words.len(),
        words: words.to_vec(),
    }
}

fn assign_ids(segments: &mut [SentenceSegment]) {
    for (idx, segment) in segments.iter_mut().enumerate() {
        segment.id = idx + 1;
    }
}

/// Non-space character count of a word.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().filter(|c| *c != ' ').count()
}

fn char_count(words: &[WordSpan]) -> usize {
    words.iter().map(|w| char_len(&w.text)).sum()
}
