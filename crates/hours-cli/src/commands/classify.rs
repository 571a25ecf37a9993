//! Classify command for previewing how an interval is split.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use hours_core::{BusinessWindow, Classification, TimeInterval, classify_interval};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Start time (HH:MM, 24-hour).
    pub start: String,
    /// End time (HH:MM, 24-hour). Earlier than start means the next day.
    pub end: String,
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct JsonClassification {
    start: String,
    end: String,
    overnight: bool,
    window: BusinessWindow,
    #[serde(flatten)]
    classification: Classification,
}

pub fn run<W: Write>(writer: &mut W, args: &ClassifyArgs, window: &BusinessWindow) -> Result<()> {
    let interval = TimeInterval::parse(&args.start, &args.end)?;
    let classification = classify_interval(interval, window);

    if args.json {
        let output = JsonClassification {
            start: interval.start.to_string(),
            end: interval.end.to_string(),
            overnight: interval.is_overnight(),
            window: *window,
            classification,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    let overnight = if interval.is_overnight() {
        " (overnight)"
    } else {
        ""
    };
    writeln!(
        writer,
        "Interval: {}-{}{overnight}",
        interval.start, interval.end
    )?;
    writeln!(writer, "Window:   {window}")?;
    writeln!(writer, "Duration: {}h", classification.duration)?;
    writeln!(writer, "Business: {}h", classification.business)?;
    writeln!(writer, "Overtime: {}h", classification.overtime)?;
    Ok(())
}
