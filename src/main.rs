// src/main.rs

use anyhow::Result;
use clap::Parser;
use repo2ai::cli::Cli;
use repo2ai::config::ConfigBuilder;
#[cfg(feature = "progress")]
use repo2ai::progress::IndicatifProgress;
use repo2ai::progress::ProgressReporter;
use repo2ai::run;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    let default_directive = if cfg!(debug_assertions) {
        "repo2ai=debug"
    } else {
        "repo2ai=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse()?),
        )
        .init();

    log::info!("Starting repo2ai v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    // Show a progress bar only when stderr is a TTY.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    let result = ConfigBuilder::from_cli(cli)
        .build()
        .and_then(|config| run(&config, progress_reporter));

    match result {
        Ok(output_path) => {
            log::info!("Done. Output written to {}", output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
