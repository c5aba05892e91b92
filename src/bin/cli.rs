use std::io::{self, Write};
use std::process;

use chrono::NaiveDate;
use roster_tool::roster::RosterEntry;
use roster_tool::{Roster, save_roster_to_xlsx};

const OUTPUT_FILE: &str = "duty_roster.xlsx";

fn render_roster_table(entries: &[RosterEntry]) -> String {
    let headers = ["date", "day"];
    let rows: Vec<[String; 2]> = entries
        .iter()
        .map(|entry| {
            [
                entry.date.format("%Y-%m-%d").to_string(),
                entry.duty.as_str().to_string(),
            ]
        })
        .collect();

    // Compute column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (ci, value) in row.iter().enumerate() {
            if value.len() > widths[ci] {
                widths[ci] = value.len();
            }
        }
    }

    // Build horizontal separator
    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    // Build output
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    // Header
    out.push('|');
    for (i, name) in headers.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    // Rows
    for row in &rows {
        out.push('|');
        for (ci, value) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(value);
            let pad = widths[ci].saturating_sub(value.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn main() {
    print!("Enter first work day (YYYY-MM-DD): ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        eprintln!("Failed to read input");
        process::exit(1);
    }
    let input = line.trim();

    let start = match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => date,
        Err(err) => {
            eprintln!("Invalid date '{input}' (expected YYYY-MM-DD): {err}");
            process::exit(1);
        }
    };

    let roster = match Roster::for_month(start) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let entries = match roster.entries() {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };
    println!("{}", render_roster_table(&entries));

    let summary = match roster.summary() {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    match save_roster_to_xlsx(&roster, OUTPUT_FILE) {
        Ok(()) => println!(
            "Duty roster saved to {} ({})",
            OUTPUT_FILE,
            summary.to_cli_summary()
        ),
        Err(err) => {
            eprintln!("Failed to write {OUTPUT_FILE}: {err}");
            process::exit(1);
        }
    }
}
