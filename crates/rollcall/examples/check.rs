//! Example: Check a form export against a class list.
//!
//! Usage:
//!   cargo run --example check -- <responses.csv> [roster.txt]

use std::env;
use std::path::Path;

use rollcall::{Rollcall, Roster};

fn main() -> rollcall::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example check -- <responses.csv> [roster.txt]");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let roster = match args.get(2) {
        Some(roster_path) => Some(Roster::from_file(roster_path)?),
        None => None,
    };

    let report = Rollcall::new().check_file(path, roster.as_ref())?;
    let result = &report.result;

    println!("Checked {} ({} rows)", report.source.origin, report.source.row_count);
    if let Some(info) = &result.debug_info {
        for line in info.summary_lines() {
            println!("  {}", line);
        }
    }
    println!();

    println!(
        "{} of {} responded",
        result.responded_count, result.total_students
    );
    for entry in &result.not_responded_list {
        println!("  incomplete: {} (missing {})", entry.name, entry.missing.join(", "));
    }
    for name in &result.missing_from_master {
        println!("  no submission: {}", name);
    }

    Ok(())
}
