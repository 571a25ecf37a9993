//! Reclassify stored records with the configured business window.
//!
//! Used after the window changes. Only records whose figures differ are
//! rewritten, all in one transaction.

use std::io::Write;

use anyhow::{Context, Result};
use hours_core::{BusinessWindow, TimeInterval, classify_all};
use hours_db::Database;

pub fn run<W: Write>(writer: &mut W, db: &mut Database, window: &BusinessWindow) -> Result<()> {
    let records = db
        .list_all_time_records()
        .context("failed to load time records")?;

    if records.is_empty() {
        writeln!(writer, "No records to reclassify.")?;
        return Ok(());
    }

    let intervals: Vec<TimeInterval> = records.iter().map(|r| r.interval()).collect();
    let classifications = classify_all(&intervals, window);

    let changed: Vec<_> = records
        .iter()
        .zip(classifications)
        .filter(|(record, classification)| record.classification != *classification)
        .map(|(record, classification)| (record.id, classification))
        .collect();
    tracing::debug!(
        total = records.len(),
        changed = changed.len(),
        "classified stored records"
    );

    let updated = db
        .update_classifications(&changed)
        .context("failed to store reclassified records")?;
    tracing::info!(%window, total = records.len(), updated, "recomputed classifications");

    writeln!(
        writer,
        "Reclassified {} records with window {window} ({updated} changed)",
        records.len()
    )?;
    Ok(())
}
