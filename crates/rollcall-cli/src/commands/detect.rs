//! Detect command - show the column roles for a file.

use std::path::PathBuf;

use colored::Colorize;
use rollcall::{explain, Parser, Rollcall};

pub fn run(
    file: PathBuf,
    name_column: Option<String>,
    config: Option<PathBuf>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = super::load_config(config, name_column)?;
    let preview_rows = config.preview_rows;
    let parser = Parser::with_config(config.parser.clone());
    let rollcall = Rollcall::with_config(config);

    let (table, source) = parser.parse_file(&file)?;
    let roles = rollcall.detect(&table)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&roles)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Columns in".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "  {} rows, {} columns ({})",
        source.row_count, source.column_count, source.format
    );
    println!();

    let info = explain(&table, &roles, preview_rows);
    for line in info.summary_lines() {
        println!("  {}", line);
    }

    if verbose {
        println!();
        println!("{}", "All columns:".yellow().bold());
        for (index, header) in table.headers.iter().enumerate() {
            let role = if index == roles.identity.index {
                "name".green()
            } else if roles.required.iter().any(|c| c.index == index) {
                "required".white()
            } else {
                "ignored".dimmed()
            };
            println!("  {:>3}  {:30} {}", index + 1, header, role);
        }
    }

    Ok(())
}
