//! Check command - reconcile an export against a roster.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use rollcall::{CheckReport, ReconciliationResult, Rollcall, Roster};

/// Arguments for `rollcall check`.
pub struct CheckArgs {
    pub file: Option<PathBuf>,
    pub url: Option<String>,
    pub roster: Option<PathBuf>,
    pub name_column: Option<String>,
    pub config: Option<PathBuf>,
    pub preview: usize,
    pub json: bool,
    pub output: Option<PathBuf>,
}

pub fn run(args: CheckArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config(args.config, args.name_column)?;
    config.preview_rows = args.preview;
    let rollcall = Rollcall::with_config(config);

    let roster = match &args.roster {
        Some(path) => {
            if !path.exists() {
                return Err(format!("Roster not found: {}", path.display()).into());
            }
            Some(Roster::from_file(path)?)
        }
        None => None,
    };

    let report = match (&args.file, &args.url) {
        (Some(file), None) => {
            if !file.exists() {
                return Err(format!("File not found: {}", file.display()).into());
            }
            if !args.json {
                println!(
                    "{} {}",
                    "Checking".cyan().bold(),
                    file.display().to_string().white()
                );
            }
            rollcall.check_file(file, roster.as_ref())?
        }
        (None, Some(url)) => {
            if !args.json {
                println!("{} {}", "Downloading".cyan().bold(), url.white());
            }
            rollcall.check_url(url, roster.as_ref())?
        }
        _ => return Err("Provide either a FILE or --url".into()),
    };

    if let Some(output) = &args.output {
        fs::write(output, serde_json::to_string_pretty(&report.result)?)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.result)?);
        return Ok(());
    }

    print_report(&report, roster.is_some(), verbose);

    if let Some(output) = &args.output {
        println!();
        println!("Saved result to {}", output.display().to_string().white());
    }

    Ok(())
}

fn print_report(report: &CheckReport, with_roster: bool, verbose: bool) {
    let result = &report.result;

    println!(
        "  {} rows, {} columns ({})",
        report.source.row_count, report.source.column_count, report.source.format
    );
    println!();

    if let Some(info) = &result.debug_info {
        println!("{}", "Detection:".yellow().bold());
        for line in info.summary_lines() {
            println!("  {}", line);
        }
        println!();

        if verbose && !info.preview_rows.is_empty() {
            println!("{}", "Preview:".yellow().bold());
            for row in &info.preview_rows {
                println!(
                    "  row {:<4} {:24} {:14} {}/{}",
                    row.row + 1,
                    row.name,
                    row.status,
                    row.answers_found,
                    row.total_required
                );
            }
            println!();
        }
    }

    print_summary(result, with_roster);
}

fn print_summary(result: &ReconciliationResult, with_roster: bool) {
    println!(
        "{} {}/{}",
        "Responded:".green().bold(),
        result.responded_count.to_string().white().bold(),
        result.total_students
    );

    if !result.not_responded_list.is_empty() {
        println!();
        println!(
            "{} ({})",
            "Incomplete:".yellow().bold(),
            result.not_responded_count
        );
        for entry in &result.not_responded_list {
            println!(
                "  {} {}",
                entry.name.white(),
                format!("missing: {}", entry.missing.join(", ")).dimmed()
            );
        }
    }

    if with_roster && !result.missing_from_master.is_empty() {
        println!();
        println!(
            "{} ({})",
            "No submission:".red().bold(),
            result.missing_from_master.len()
        );
        for name in &result.missing_from_master {
            println!("  {}", name.white());
        }
    }

    if result.not_responded_list.is_empty() && result.missing_from_master.is_empty() {
        println!();
        println!("{}", "Everyone has responded.".green());
    }
}
