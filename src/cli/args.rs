//! Command-line argument definitions for the establishment loader
//!
//! This module defines the CLI interface using the clap derive API. The
//! binary is the external caller of the loading core: it supplies the source
//! path and renders the resulting records.

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the establishment loader
///
/// Loads a delimited text file of establishment records, validates every
/// row, and prints each record's field mapping.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "establishment-loader",
    version,
    about = "Load and validate establishment records from a delimited text file"
)]
pub struct Args {
    /// Path to the establishments file
    ///
    /// First line must be a header; each subsequent line is one record with
    /// fields: id, district, county, parish, address, latitude, longitude,
    /// inspection_utility, inspection_time, opening_hours.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, value_name = "CHAR", default_value = ",")]
    pub delimiter: char,

    /// Suppress per-record output, printing only the record count
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Map the verbosity flag count to a tracing filter level
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["establishment-loader", "establishments.csv"]);

        assert_eq!(args.input, PathBuf::from("establishments.csv"));
        assert_eq!(args.delimiter, ',');
        assert!(!args.quiet);
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn test_verbosity_levels() {
        let debug = Args::parse_from(["establishment-loader", "-v", "f.csv"]);
        assert_eq!(debug.log_level(), "debug");

        let trace = Args::parse_from(["establishment-loader", "-vv", "f.csv"]);
        assert_eq!(trace.log_level(), "trace");
    }

    #[test]
    fn test_custom_delimiter() {
        let args = Args::parse_from(["establishment-loader", "--delimiter", ";", "f.csv"]);
        assert_eq!(args.delimiter, ';');
    }
}
