//! Command-line interface for skillplan
//! This binary is used to check and inspect skill allocation pattern strings.
//!
//! Usage:
//!   skillplan check `<pattern>`                      - Validate a pattern and print diagnostics
//!   skillplan parse `<pattern>` [--format `<format>`]  - Parse a pattern and print the sequence

use clap::{Arg, Command};
use skillplan::pattern::parser::parse;
use skillplan::pattern::validation::validate;
use skillplan::ParsedLevel;

fn main() {
    let matches = Command::new("skillplan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking and inspecting skill allocation patterns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Validate a pattern and print its diagnostics")
                .arg(
                    Arg::new("pattern")
                        .help("The pattern string to validate")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a pattern and print its leveling sequence")
                .arg(
                    Arg::new("pattern")
                        .help("The pattern string to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("check", check_matches)) => {
            let pattern = check_matches.get_one::<String>("pattern").unwrap();
            handle_check_command(pattern);
        }
        Some(("parse", parse_matches)) => {
            let pattern = parse_matches.get_one::<String>("pattern").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(pattern, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the check command
fn handle_check_command(pattern: &str) {
    let report = validate(pattern);

    for warning in &report.warnings {
        println!("{}", warning);
    }
    for error in &report.errors {
        println!("{}", error);
    }

    if report.is_valid {
        println!("pattern is valid");
    } else {
        std::process::exit(1);
    }
}

/// Handle the parse command
fn handle_parse_command(pattern: &str, format: &str) {
    let levels = parse(pattern).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match format {
        "simple" => print_simple(&levels),
        "json" => {
            let output = serde_json::to_string_pretty(&levels).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Error: unknown format '{}' (expected 'simple' or 'json')", other);
            std::process::exit(1);
        }
    }
}

/// Print one line per level: position, slot digit, and flags
fn print_simple(levels: &[ParsedLevel]) {
    for (index, level) in levels.iter().enumerate() {
        let mut line = format!("{:>3}  slot {}", index + 1, level.slot);
        if level.is_delayed {
            line.push_str("  delayed");
        }
        if level.has_negative_effect {
            line.push_str("  negative");
        }
        if let (Some((first, second)), Some(group_id)) = (level.paired_options, level.group_id) {
            line.push_str(&format!("  paired {}/{} (group {})", first, second, group_id));
        }
        println!("{}", line);
    }
}
