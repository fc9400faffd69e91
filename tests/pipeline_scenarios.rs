use subalign_rs::{srt, AsrAlignment, SubtitleConfig, SubtitlePipelineBuilder, SubtitlePipeline};
use textgrid::{Interval, TextGrid, Tier, TierType};

fn pipeline() -> SubtitlePipeline {
    SubtitlePipelineBuilder::new(SubtitleConfig::default()).build()
}

fn words_grid(intervals: &[(f64, f64, &str)]) -> TextGrid {
    let xmax = intervals
        .iter()
        .map(|(_, end, _)| *end)
        .fold(1.0f64, f64::max);
    let mut grid = TextGrid::new(0.0, xmax).expect("grid bounds");
    grid.add_tier(Tier {
        name: "words".to_string(),
        tier_type: TierType::IntervalTier,
        xmin: 0.0,
        xmax,
        intervals: intervals
            .iter()
            .map(|(xmin, xmax, text)| Interval {
                xmin: *xmin,
                xmax: *xmax,
                text: text.to_string(),
            })
            .collect(),
        points: Vec::new(),
    })
    .expect("add tier");
    grid
}

#[test]
fn textgrid_alignment_survives_a_recognition_error() {
    // The aligner heard "word" where the script says "world"; the
    // substitution must still carry that interval's timing.
    let grid = words_grid(&[
        (0.0, 0.4, "hello"),
        (0.4, 0.5, ""),
        (0.5, 0.9, "word"),
        (0.9, 1.4, "today"),
    ]);
    let aligned = pipeline()
        .align_textgrid("Hello, world today.", &grid)
        .expect("alignment");

    assert_eq!(aligned.summary.total_tokens, 3);
    assert_eq!(aligned.summary.matched_tokens, 3);
    assert_eq!(aligned.summary.missing_tokens, 0);

    assert_eq!(aligned.entries.len(), 3);
    assert_eq!(aligned.entries[0].text, "Hello,");
    assert_eq!(aligned.entries[0].start, 0.0);
    assert_eq!(aligned.entries[1].text, "world");
    assert_eq!(aligned.entries[1].start, 0.5);
    assert_eq!(aligned.entries[2].text, "today.");
    assert_eq!(aligned.entries[2].end, 1.4);
}

#[test]
fn unheard_script_words_are_counted_missing_and_skipped() {
    let grid = words_grid(&[(0.0, 0.5, "a"), (0.5, 1.0, "c")]);
    let aligned = pipeline()
        .align_textgrid("a b c", &grid)
        .expect("alignment");

    assert_eq!(aligned.summary.matched_tokens, 2);
    assert_eq!(aligned.summary.missing_tokens, 1);

    // The dropped word leaves no hole in the numbering.
    assert_eq!(aligned.entries.len(), 2);
    assert_eq!(aligned.entries[0].ordinal, 1);
    assert_eq!(aligned.entries[0].text, "a");
    assert_eq!(aligned.entries[1].ordinal, 2);
    assert_eq!(aligned.entries[1].text, "c");
}

#[test]
fn rendered_srt_has_timestamps_and_blank_separated_blocks() {
    let grid = words_grid(&[(0.0, 0.5, "hello"), (0.6, 1.0, "world")]);
    let aligned = pipeline()
        .align_textgrid("hello world", &grid)
        .expect("alignment");
    let rendered = srt::render(&aligned.entries);
    assert_eq!(
        rendered,
        "1\n00:00:00,000 --> 00:00:00,500\nhello\n\n2\n00:00:00,600 --> 00:00:01,000\nworld\n"
    );
}

#[test]
fn asr_alignment_path_matches_textgrid_path_semantics() {
    let json = r#"{
        "segments": [
            { "words": [
                { "word": "Hello,", "start": 0.0, "end": 0.4 },
                { "word": "word", "start": 0.5, "end": 0.9 },
                { "word": "today.", "start": 0.9, "end": 1.4 }
            ]}
        ]
    }"#;
    let result: AsrAlignment = serde_json::from_str(json).expect("valid json");
    let aligned = pipeline()
        .align_asr("Hello, world today.", &result)
        .expect("alignment");

    assert_eq!(aligned.summary.matched_tokens, 3);
    assert_eq!(aligned.entries[1].text, "world");
    assert_eq!(aligned.entries[1].start, 0.5);
}

#[test]
fn segmentation_path_regroups_asr_words_into_sentences() {
    // Two clusters of words separated by a long silence; the gap must
    // force a segment boundary regardless of the grouping interval.
    let mut json_words = Vec::new();
    for i in 0..6 {
        let start = i as f64 * 0.4;
        json_words.push(format!(
            r#"{{ "word": "alpha{i}", "start": {start}, "end": {} }}"#,
            start + 0.3
        ));
    }
    for i in 0..6 {
        let start = 6.0 + i as f64 * 0.4;
        json_words.push(format!(
            r#"{{ "word": "omega{i}", "start": {start}, "end": {} }}"#,
            start + 0.3
        ));
    }
    let json = format!(
        r#"{{ "segments": [ {{ "words": [ {} ] }} ] }}"#,
        json_words.join(", ")
    );
    let result: AsrAlignment = serde_json::from_str(&json).expect("valid json");

    let segmented = pipeline().segment_asr(&result);
    assert!(segmented.stats.segment_count >= 2);
    assert_eq!(segmented.segments.len(), segmented.stats.segment_count);

    // No segment straddles the silence between 2.3s and 6.0s.
    for segment in &segmented.segments {
        assert!(segment.end <= 2.3 + 1e-9 || segment.start >= 6.0 - 1e-9);
    }

    // Ids and entry ordinals are dense from 1.
    for (idx, segment) in segmented.segments.iter().enumerate() {
        assert_eq!(segment.id, idx + 1);
        assert_eq!(segmented.entries[idx].ordinal, idx + 1);
        assert_eq!(segmented.entries[idx].text, segment.text);
    }
}

#[test]
fn empty_asr_result_segments_to_nothing() {
    let result: AsrAlignment = serde_json::from_str(r#"{ "segments": [] }"#).expect("valid json");
    let segmented = pipeline().segment_asr(&result);
    assert!(segmented.segments.is_empty());
    assert_eq!(segmented.stats.segment_count, 0);
    assert_eq!(srt::render(&segmented.entries), "\n");
}
