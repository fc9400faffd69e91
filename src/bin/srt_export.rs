use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use subalign_rs::alignment::hypothesis::{load_textgrid, AsrAlignment};
use subalign_rs::{srt, SubtitleConfig, SubtitlePipelineBuilder};

#[derive(Debug, Parser)]
#[command(name = "srt_export")]
#[command(about = "Export word- or sentence-level SRT subtitles from aligner output")]
struct Args {
    /// Forced-aligner TextGrid (word-level alignment path).
    #[arg(long, env = "SRT_EXPORT_TEXTGRID")]
    textgrid: Option<PathBuf>,
    /// ASR word-timestamp JSON (alignment path with --transcript,
    /// segmentation path without).
    #[arg(long, env = "SRT_EXPORT_ASR_JSON")]
    asr_json: Option<PathBuf>,
    /// Clean reference script; required for the alignment paths.
    #[arg(long, env = "SRT_EXPORT_TRANSCRIPT")]
    transcript: Option<PathBuf>,
    /// Destination SRT path.
    #[arg(long, env = "SRT_EXPORT_OUT")]
    out: PathBuf,
    /// Optional pipeline config JSON (tier name, segmenter constraints).
    #[arg(long, env = "SRT_EXPORT_CONFIG")]
    config: Option<PathBuf>,
    /// Where to write the summary metadata JSON.
    #[arg(long, env = "SRT_EXPORT_SUMMARY_OUT")]
    summary_out: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("srt_export: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => SubtitleConfig::load(path).map_err(|err| err.to_string())?,
        None => SubtitleConfig::default(),
    };
    let pipeline = SubtitlePipelineBuilder::new(config).build();

    let (srt_text, metadata) = if let Some(textgrid_path) = &args.textgrid {
        let transcript = read_transcript(&args)?;
        let grid = load_textgrid(textgrid_path).map_err(|err| err.to_string())?;
        let aligned = pipeline
            .align_textgrid(&transcript, &grid)
            .map_err(|err| err.to_string())?;
        println!(
            "Aligned {} of {} script words ({} missing).",
            aligned.summary.matched_tokens,
            aligned.summary.total_tokens,
            aligned.summary.missing_tokens
        );
        (
            srt::render(&aligned.entries),
            summary_metadata("textgrid", &args.out, Some(aligned.summary)),
        )
    } else if let Some(asr_path) = &args.asr_json {
        let result = AsrAlignment::load(asr_path).map_err(|err| err.to_string())?;
        if args.transcript.is_some() {
            let transcript = read_transcript(&args)?;
            let aligned = pipeline
                .align_asr(&transcript, &result)
                .map_err(|err| err.to_string())?;
            println!(
                "Aligned {} of {} script words ({} missing).",
                aligned.summary.matched_tokens,
                aligned.summary.total_tokens,
                aligned.summary.missing_tokens
            );
            (
                srt::render(&aligned.entries),
                summary_metadata("asr", &args.out, Some(aligned.summary)),
            )
        } else {
            let segmented = pipeline.segment_asr(&result);
            println!(
                "Built {} segments (avg {:.1} chars, interval {:.3}s).",
                segmented.stats.segment_count, segmented.stats.avg_chars, segmented.stats.interval
            );
            (
                srt::render(&segmented.entries),
                summary_metadata("segmentation", &args.out, None),
            )
        }
    } else {
        return Err("one of --textgrid or --asr-json is required".to_string());
    };

    fs::write(&args.out, srt_text)
        .map_err(|err| format!("failed to write SRT '{}': {err}", args.out.display()))?;
    println!("Wrote {}", args.out.display());

    if let Some(summary_path) = &args.summary_out {
        let rendered = serde_json::to_string_pretty(&metadata)
            .map_err(|err| format!("failed to serialize summary: {err}"))?;
        fs::write(summary_path, rendered).map_err(|err| {
            format!(
                "failed to write summary '{}': {err}",
                summary_path.display()
            )
        })?;
        println!("Wrote {}", summary_path.display());
    }

    Ok(())
}

fn read_transcript(args: &Args) -> Result<String, String> {
    let path = args
        .transcript
        .as_ref()
        .ok_or_else(|| "--transcript is required for the alignment paths".to_string())?;
    fs::read_to_string(path)
        .map_err(|err| format!("failed to read transcript '{}': {err}", path.display()))
}

fn summary_metadata(
    mode: &str,
    srt_path: &std::path::Path,
    summary: Option<subalign_rs::AlignmentSummary>,
) -> serde_json::Value {
    let mut metadata = serde_json::json!({
        "alignment_mode": mode,
        "alignment_srt": srt_path.display().to_string(),
        "generated_at": Utc::now().to_rfc3339(),
    });
    if let Some(summary) = summary {
        metadata["alignment_matched"] = summary.matched_tokens.into();
        metadata["alignment_missing"] = summary.missing_tokens.into();
        metadata["alignment_total_tokens"] = summary.total_tokens.into();
    }
    metadata
}
