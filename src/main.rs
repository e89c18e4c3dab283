// src/main.rs

use anyhow::Result;
use ccdoc::cli::Cli;
use ccdoc::config::ConfigBuilder;
use ccdoc::errors::Error;
use ccdoc::output::dry_run::{write_dry_run_output, write_extension_list};
#[cfg(feature = "progress")]
use ccdoc::progress::IndicatifProgress;
use ccdoc::progress::ProgressReporter;
use ccdoc::signal::setup_signal_handler;
use ccdoc::{discover, run, scan_extensions, CancellationToken};
use clap::Parser;
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_directive = if verbose || cfg!(debug_assertions) {
        "ccdoc=debug"
    } else {
        "ccdoc=info"
    };
    // RUST_LOG wins when set; the default only applies otherwise.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn progress_reporter() -> Option<Arc<dyn ProgressReporter>> {
    #[cfg(feature = "progress")]
    {
        if atty::is(atty::Stream::Stderr) {
            return Some(Arc::new(IndicatifProgress::new()));
        }
    }
    None
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Starting ccdoc v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let dry_run = cli.dry_run;
    let list_extensions = cli.list_extensions;

    let result = ConfigBuilder::from_cli(cli).build().and_then(|config| {
        log::debug!("Configuration built successfully.");
        let token = setup_signal_handler().unwrap_or_else(|e| {
            log::warn!("{:#}", e);
            CancellationToken::new()
        });

        if list_extensions {
            let extensions = scan_extensions(&config, &token)?;
            write_extension_list(&mut io::stdout().lock(), &extensions)
                .map_err(|e| ccdoc::errors::io_error_with_path(e, "<stdout>"))?;
        } else if dry_run {
            let files = discover(&config, &token)?;
            write_dry_run_output(&mut io::stdout().lock(), &files)
                .map_err(|e| ccdoc::errors::io_error_with_path(e, "<stdout>"))?;
        } else {
            let summary = run(&config, &token, progress_reporter())?;
            println!(
                "Wrote {} source files to {}",
                summary.file_count,
                summary.outfile.display()
            );
        }
        Ok(())
    });

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::Interrupted => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
