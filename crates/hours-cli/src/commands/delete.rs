//! Delete command for removing a time record.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;
use hours_db::Database;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Record ID.
    pub id: i64,
}

pub fn run<W: Write>(writer: &mut W, db: &mut Database, args: &DeleteArgs) -> Result<()> {
    if !db.delete_time_record(args.id)? {
        bail!("record not found: {}", args.id);
    }
    tracing::info!(id = args.id, "deleted time record");
    writeln!(writer, "Deleted record {}", args.id)?;
    Ok(())
}
