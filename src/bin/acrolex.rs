//! Command-line interface for acrolex
//! This binary extracts parenthetical acronym definitions from article text
//! and can annotate later mentions with the recovered long form.
//!
//! Usage:
//!   acrolex tokens <path> [--format <format>]                   - Dump the classified token stream
//!   acrolex extract <path> [--format <format>] [--budget <n>]   - Extract acronym definitions
//!   acrolex annotate <path> --acronym <a> --definition <d>      - Annotate the first mention

use clap::{Arg, ArgAction, Command};

use acrolex::acrolex::processor::{
    available_formats, process_annotation_file, process_definitions_file, process_document_file,
    process_tokens_file, OutputFormat,
};

fn build_cli() -> Command {
    Command::new("acrolex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for extracting acronym definitions from article text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Dump the classified token stream for a text file")
                .arg(
                    Arg::new("path")
                        .help("Path to the text file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract acronym definitions")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                )
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .short('b')
                        .help("Maximum acronym letters justified from inside preceding words")
                        .value_parser(clap::value_parser!(usize))
                        // must equal DEFAULT_MAX_INTRA_WORD_LETTERS
                        .default_value("2"),
                )
                .arg(
                    Arg::new("document")
                        .long("document")
                        .short('d')
                        .help("Treat the input as a passages JSON document (uses the default budget)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("annotate")
                .about("Annotate the first mention of an acronym with its definition")
                .arg(
                    Arg::new("path")
                        .help("Path to the text file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("acronym")
                        .long("acronym")
                        .short('a')
                        .help("Acronym to look for")
                        .required(true),
                )
                .arg(
                    Arg::new("definition")
                        .long("definition")
                        .short('d')
                        .help("Definition to insert after the first mention")
                        .required(true),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format);
        }
        Some(("extract", extract_matches)) => {
            let path = extract_matches.get_one::<String>("path").unwrap();
            let format = extract_matches.get_one::<String>("format").unwrap();
            let budget = *extract_matches.get_one::<usize>("budget").unwrap();
            let document = extract_matches.get_flag("document");
            handle_extract_command(path, format, budget, document);
        }
        Some(("annotate", annotate_matches)) => {
            let path = annotate_matches.get_one::<String>("path").unwrap();
            let acronym = annotate_matches.get_one::<String>("acronym").unwrap();
            let definition = annotate_matches.get_one::<String>("definition").unwrap();
            handle_annotate_command(path, acronym, definition);
        }
        _ => unreachable!(),
    }
}

/// Parse the output format or exit with the available choices
fn parse_format(format_str: &str) -> OutputFormat {
    OutputFormat::from_string(format_str).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", available_formats().join(", "));
        std::process::exit(1);
    })
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str) {
    let format = parse_format(format);
    let output = process_tokens_file(path, &format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}

/// Handle the extract command
fn handle_extract_command(path: &str, format: &str, budget: usize, document: bool) {
    let format = parse_format(format);
    let result = if document {
        process_document_file(path, &format)
    } else {
        process_definitions_file(path, &format, budget)
    };
    let output = result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}

/// Handle the annotate command
fn handle_annotate_command(path: &str, acronym: &str, definition: &str) {
    let output = process_annotation_file(path, acronym, definition).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}

#[cfg(test)]
mod tests {
    use super::*;
    use acrolex::acrolex::align::DEFAULT_MAX_INTRA_WORD_LETTERS;

    #[test]
    fn test_extract_budget_defaults_to_engine_constant() {
        let matches = build_cli()
            .try_get_matches_from(["acrolex", "extract", "input.txt"])
            .unwrap();
        let extract = matches.subcommand_matches("extract").unwrap();
        assert_eq!(
            extract.get_one::<usize>("budget").copied(),
            Some(DEFAULT_MAX_INTRA_WORD_LETTERS)
        );
    }

    #[test]
    fn test_extract_budget_flag_overrides_default() {
        let matches = build_cli()
            .try_get_matches_from(["acrolex", "extract", "input.txt", "--budget", "5"])
            .unwrap();
        let extract = matches.subcommand_matches("extract").unwrap();
        assert_eq!(extract.get_one::<usize>("budget").copied(), Some(5));
    }

    #[test]
    fn test_extract_rejects_non_numeric_budget() {
        let result = build_cli().try_get_matches_from([
            "acrolex", "extract", "input.txt", "--budget", "two",
        ]);
        assert!(result.is_err());
    }
}
