use crate::types::{HypothesisToken, ScriptToken, SentenceSegment, TimedSubtitleEntry};

/// Formats seconds as `HH:MM:SS,mmm`, carrying rounding overflow through
/// seconds, minutes and hours. Negative inputs clamp to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let mut hours = (seconds / 3600.0) as u64;
    let mut minutes = ((seconds % 3600.0) / 60.0) as u64;
    let mut secs = (seconds % 60.0) as u64;
    let mut millis = ((seconds - seconds.floor()) * 1000.0).round() as u64;

    if millis == 1000 {
        millis = 0;
        secs += 1;
    }
    if secs == 60 {
        secs = 0;
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        hours += 1;
    }
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

/// Builds word-level subtitle entries from the propagated interval mapping.
/// Tokens without a resolved interval are omitted; ordinals stay dense.
pub fn word_entries(
    script_tokens: &[ScriptToken],
    hypothesis: &[HypothesisToken],
    mapped: &[Option<usize>],
) -> Vec<TimedSubtitleEntry> {
    let mut entries = Vec::new();
    for (token, slot) in script_tokens.iter().zip(mapped) {
        let Some(hyp_idx) = slot else {
            continue;
        };
        let interval = &hypothesis[*hyp_idx];
        entries.push(TimedSubtitleEntry {
            ordinal: entries.len() + 1,
            start: interval.start,
            end: interval.end,
            text: token.raw.clone(),
        });
    }
    entries
}

/// One subtitle entry per sentence segment.
pub fn segment_entries(segments: &[SentenceSegment]) -> Vec<TimedSubtitleEntry> {
    segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| TimedSubtitleEntry {
            ordinal: idx + 1,
            start: segment.start,
            end: segment.end,
            text: segment.text.clone(),
        })
        .collect()
}

/// Serializes entries as an SRT document with a trailing newline.
pub fn render(entries: &[TimedSubtitleEntry]) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{}\n{} --> {}\n{}\n",
                entry.ordinal,
                format_timestamp(entry.start),
                format_timestamp(entry.end),
                entry.text
            )
        })
        .collect();
    let mut out = blocks.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordSpan;

    #[test]
    fn zero_formats_as_zero() {
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(format_timestamp(-1.5), "00:00:00,000");
    }

    #[test]
    fn millisecond_rounding_carries_into_minutes() {
        assert_eq!(format_timestamp(59.9996), "00:01:00,000");
        assert_eq!(format_timestamp(60.0), "00:01:00,000");
    }

    #[test]
    fn carry_propagates_to_hours() {
        assert_eq!(format_timestamp(3599.9996), "01:00:00,000");
    }

    #[test]
    fn plain_values_format_with_padding() {
        assert_eq!(format_timestamp(3725.25), "01:02:05,250");
        assert_eq!(format_timestamp(0.5), "00:00:00,500");
    }

    #[test]
    fn word_entries_skip_unmapped_and_stay_dense() {
        let tokens = crate::alignment::tokenization::tokenize("a b c");
        let hypothesis = vec![
            HypothesisToken {
                text: "a".to_string(),
                start: 0.0,
                end: 1.0,
            },
            HypothesisToken {
                text: "c".to_string(),
                start: 2.0,
                end: 3.0,
            },
        ];
        let mapped = vec![Some(0), None, Some(1)];
        let entries = word_entries(&tokens, &hypothesis, &mapped);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].ordinal, 1);
        assert_eq!(entries[1].ordinal, 2);
        assert_eq!(entries[1].text, "c");
        assert_eq!(entries[1].start, 2.0);
    }

    #[test]
    fn render_produces_blank_separated_blocks() {
        let entries = vec![
            TimedSubtitleEntry {
                ordinal: 1,
                start: 0.0,
                end: 0.5,
                text: "Hello".to_string(),
            },
            TimedSubtitleEntry {
                ordinal: 2,
                start: 0.6,
                end: 1.0,
                text: "world".to_string(),
            },
        ];
        let srt = render(&entries);
        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:00,500\nHello\n\n2\n00:00:00,600 --> 00:00:01,000\nworld\n"
        );
    }

    #[test]
    fn render_empty_is_single_newline() {
        assert_eq!(render(&[]), "\n");
    }

    #[test]
    fn segment_entries_use_segment_text() {
        let segment = crate::segmentation::build_segment(&[
            WordSpan {
                text: "hello".to_string(),
                start: 0.0,
                end: 0.5,
            },
            WordSpan {
                text: "world".to_string(),
                start: 0.6,
                end: 1.0,
            },
        ]);
        let entries = segment_entries(&[segment]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "hello world");
        assert_eq!(entries[0].start, 0.0);
        assert_eq!(entries[0].end, 1.0);
    }
}
