//! Employee commands for registering and listing staff.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Args;
use hours_db::{Database, NewEmployee};

use super::util::non_blank;

#[derive(Debug, Args)]
pub struct AddEmployeeArgs {
    /// Company employee ID (e.g. E-001).
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
}

pub fn add<W: Write>(writer: &mut W, db: &mut Database, args: &AddEmployeeArgs) -> Result<()> {
    let code = args.code.trim();
    if code.is_empty() {
        bail!("employee code cannot be empty");
    }
    let email = args.email.trim();
    if !email.contains('@') {
        bail!("invalid email: {email}");
    }

    let employee = db
        .insert_employee(&NewEmployee {
            code: code.to_string(),
            email: email.to_string(),
            first_name: args.first_name.trim().to_string(),
            last_name: args.last_name.trim().to_string(),
            department: non_blank(args.department.as_ref()),
            position: non_blank(args.position.as_ref()),
        })
        .with_context(|| format!("failed to add employee {code} (code and email must be unique)"))?;

    writeln!(
        writer,
        "Added employee {} ({})",
        employee.code,
        employee.full_name()
    )?;
    Ok(())
}

pub fn list<W: Write>(writer: &mut W, db: &Database, json: bool) -> Result<()> {
    let employees = db.list_employees()?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&employees)?)?;
        return Ok(());
    }

    if employees.is_empty() {
        writeln!(writer, "No employees registered.")?;
        writeln!(writer)?;
        writeln!(writer, "Hint: Run 'hours employee add' to register one.")?;
        return Ok(());
    }

    for employee in &employees {
        let department = employee.department.as_deref().unwrap_or("-");
        writeln!(
            writer,
            "{:<10} {:<24} {:<28} {department}",
            employee.code,
            employee.full_name(),
            employee.email
        )?;
    }
    Ok(())
}
