use agcsv_translator::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Agronomic CSV Translator");
    println!("========================");
    println!();
    println!("Translate agronomic trial data from multi-section CSV dialects into");
    println!("normalized experiment, weather and soil records.");
    println!();
    println!("USAGE:");
    println!("    agcsv-translator <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    translate   Translate CSV files or ZIP bundles into domain records");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Translate a single trial file to stdout:");
    println!("    agcsv-translator translate trial.csv");
    println!();
    println!("    # Translate a ZIP bundle into a pretty-printed JSON file:");
    println!("    agcsv-translator translate trials.zip -o trials.json --pretty");
    println!();
    println!("For detailed help on any command, use:");
    println!("    agcsv-translator translate --help");
}
