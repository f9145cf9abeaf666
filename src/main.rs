use clap::Parser;
use establishment_loader::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    commands::setup_logging(&args);

    match commands::run(&args) {
        Ok(count) => {
            if args.quiet {
                println!("{}", count);
            }
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
