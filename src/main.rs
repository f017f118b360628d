use clap::Parser;
use std::process;
use uld_manifest::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(outcome) if outcome.source_complete => {
            // Success - report has already been printed by the command
            process::exit(0);
        }
        Ok(_) => {
            // Manifest could not be read to the end; partial report was printed
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
