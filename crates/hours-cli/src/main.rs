use std::io::Write;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hours_cli::commands::{classify, delete, edit, employee, log, recompute, records, report};
use hours_cli::{Cli, Commands, Config, EmployeeAction, ReportAction};

/// Open the configured database, ensuring the parent directory exists.
fn open_database(config: &Config) -> Result<hours_db::Database> {
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    hours_db::Database::open(&config.database_path).context("failed to open database")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let window = config.business_window;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Classify(args) => {
            // Preview only, no database needed
            classify::run(&mut out, args, &window)?;
        }
        Commands::Employee(action) => {
            let mut db = open_database(&config)?;
            match action {
                EmployeeAction::Add(args) => employee::add(&mut out, &mut db, args)?,
                EmployeeAction::List { json } => employee::list(&mut out, &db, *json)?,
            }
        }
        Commands::Log(args) => {
            let mut db = open_database(&config)?;
            log::run(&mut out, &mut db, args, &window)?;
        }
        Commands::Edit(args) => {
            let mut db = open_database(&config)?;
            edit::run(&mut out, &mut db, args, &window)?;
        }
        Commands::Delete(args) => {
            let mut db = open_database(&config)?;
            delete::run(&mut out, &mut db, args)?;
        }
        Commands::Records(args) => {
            let db = open_database(&config)?;
            records::run(&mut out, &db, args)?;
        }
        Commands::Report(action) => {
            let mut db = open_database(&config)?;
            match action {
                ReportAction::Monthly(args) => {
                    report::monthly(&mut out, &mut db, args, Utc::now())?;
                }
                ReportAction::Yearly(args) => report::yearly(&mut out, &db, args)?,
                ReportAction::Team(args) => report::team(&mut out, &db, args)?,
            }
        }
        Commands::Recompute => {
            let mut db = open_database(&config)?;
            recompute::run(&mut out, &mut db, &window)?;
        }
    }

    out.flush()?;
    Ok(())
}
