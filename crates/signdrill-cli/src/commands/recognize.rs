//! The `signdrill recognize` command.
//!
//! Classification is strictly per frame; the run-length debounce that turns
//! a stream of per-frame verdicts into "the sign was performed" lives here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use signdrill_core::{recognize, Frame, GestureResult, Sign};
use signdrill_store::load_config_from;

#[derive(Debug, Serialize)]
struct FrameVerdict {
    frame: usize,
    hands: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<GestureResult>,
}

#[derive(Debug, Serialize)]
struct RecognitionReport {
    sign: String,
    stable_frames: usize,
    /// Index of the frame that completed the first stable run.
    stable_at: Option<usize>,
    longest_run: usize,
    frames: Vec<FrameVerdict>,
}

/// Counts consecutive matching frames.
#[derive(Debug)]
struct StableRun {
    required: usize,
    current: usize,
    longest: usize,
    stable_at: Option<usize>,
}

impl StableRun {
    fn new(required: usize) -> Self {
        Self {
            required,
            current: 0,
            longest: 0,
            stable_at: None,
        }
    }

    fn observe(&mut self, frame: usize, matched: bool) {
        self.current = if matched { self.current + 1 } else { 0 };
        self.longest = self.longest.max(self.current);
        if self.stable_at.is_none() && self.current >= self.required {
            self.stable_at = Some(frame);
        }
    }
}

/// Read a single JSON frame, or JSON Lines with one frame per line.
fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read frames from {}", path.display()))?;

    if let Ok(frame) = serde_json::from_str::<Frame>(&content) {
        return Ok(vec![frame]);
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Frame>(line)
                .with_context(|| format!("invalid frame on line {} of {}", i + 1, path.display()))
        })
        .collect()
}

pub fn execute(
    sign: String,
    frames_path: PathBuf,
    stable_frames: Option<usize>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let required = match stable_frames {
        Some(n) => n,
        None => load_config_from(config_path.as_deref())?.stable_frames,
    };
    anyhow::ensure!(required >= 1, "stable-frames must be at least 1");

    if sign.parse::<Sign>().is_err() {
        tracing::warn!("no recognizer for {sign:?}; every frame will be reported as no match");
    }

    let frames = load_frames(&frames_path)?;
    let mut run = StableRun::new(required);
    let verdicts: Vec<FrameVerdict> = frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let result = recognize(&sign, frame);
            run.observe(i, result.is_some());
            FrameVerdict {
                frame: i,
                hands: frame.len(),
                result,
            }
        })
        .collect();

    let report = RecognitionReport {
        sign,
        stable_frames: required,
        stable_at: run.stable_at,
        longest_run: run.longest,
        frames: verdicts,
    };

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &RecognitionReport) {
    for v in &report.frames {
        match &v.result {
            Some(r) => println!(
                "  frame {}: {} ({:.0}%)",
                v.frame,
                r.label,
                r.confidence * 100.0
            ),
            None => println!("  frame {}: no match ({} hand(s))", v.frame, v.hands),
        }
    }

    match report.stable_at {
        Some(i) => println!(
            "\n{} detected: {} consecutive frame(s) matched by frame {i}",
            report.sign, report.stable_frames
        ),
        None => println!(
            "\n{} not detected: longest run {} of {} frame(s) required",
            report.sign, report.longest_run, report.stable_frames
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_run_requires_consecutive_matches() {
        let mut run = StableRun::new(3);
        for (i, matched) in [true, true, false, true, true, true, true].into_iter().enumerate() {
            run.observe(i, matched);
        }
        assert_eq!(run.stable_at, Some(5));
        assert_eq!(run.longest, 4);
    }

    #[test]
    fn stable_run_never_reached() {
        let mut run = StableRun::new(2);
        for (i, matched) in [true, false, true, false].into_iter().enumerate() {
            run.observe(i, matched);
        }
        assert_eq!(run.stable_at, None);
        assert_eq!(run.longest, 1);
    }

    #[test]
    fn load_frames_accepts_single_frame_and_lines() {
        let dir = tempfile::tempdir().unwrap();

        let single = dir.path().join("single.json");
        std::fs::write(&single, "[\n  {\"keypoints\": []}\n]\n").unwrap();
        assert_eq!(load_frames(&single).unwrap().len(), 1);

        let lines = dir.path().join("frames.jsonl");
        std::fs::write(&lines, "[]\n\n[{\"keypoints\": [null]}]\n[]\n").unwrap();
        assert_eq!(load_frames(&lines).unwrap().len(), 3);

        let bad = dir.path().join("bad.jsonl");
        std::fs::write(&bad, "[]\n{oops}\n").unwrap();
        let err = load_frames(&bad).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
