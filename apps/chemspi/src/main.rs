//! chemspi binary.
//!
//! Usage:
//!   chemspi --records ./records show 682
//!   chemspi field 682 molecular_weight
//!   chemspi mol 682 --three-d
//!   chemspi image 682 --out ethanol.png
//!
//! # Environment Variables
//!
//! - `CHEMSPI_RECORDS` - record directory (default: current directory)
//! - `CHEMSPI_IMAGE_HOST` - host for image URLs (default: www.chemspider.com)
//! - `RUST_LOG` - log filter (default: warn,chemspi=info)

use chemspi::cli::{Cli, run};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,chemspi=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = run(&cli, &mut out).and_then(|()| out.flush().map_err(Into::into));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
