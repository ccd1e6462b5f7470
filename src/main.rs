use case_indexer::cli::{Args, run};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(_summary) => {
            // Summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(error.exit_code());
        }
    }
}
