//! Command execution for the establishment loader CLI
//!
//! The command layer wires the argument surface to the loading core: it
//! configures the loader, runs one load, and renders the results. All error
//! reporting and exit-code decisions stay in the binary.

use tracing::info;

use crate::cli::args::Args;
use crate::loader::CsvLoader;
use crate::models::Establishment;
use crate::render::FieldMap;
use crate::{Error, Result};

/// Load the establishments file and print each record's rendering
///
/// Returns the number of records loaded. Printing is suppressed in quiet
/// mode; failures propagate to the caller unreported.
pub fn run(args: &Args) -> Result<usize> {
    if !args.delimiter.is_ascii() {
        return Err(Error::configuration(format!(
            "Delimiter '{}' must be a single ASCII character",
            args.delimiter
        )));
    }
    let delimiter = args.delimiter as u8;

    let loader = CsvLoader::new().with_delimiter(delimiter);
    let establishments: Vec<Establishment> = loader.load(&args.input)?;

    info!(
        "Loaded {} establishments from {}",
        establishments.len(),
        args.input.display()
    );

    if !args.quiet {
        for establishment in &establishments {
            println!("{}", establishment.render());
        }
    }

    Ok(establishments.len())
}

/// Set up structured logging from the CLI verbosity flags
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("establishment_loader={}", args.log_level()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
