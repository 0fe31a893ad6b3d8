//! ormgen - generate C++ data-access classes from CREATE TABLE sources.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ormgen::Generator;
use ormgen_cli::Args;

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ormgen=info,ormgen_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let generator = Generator::new(args.into_config());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ormgen");

    match generator.run() {
        Ok(summary) => {
            tracing::info!(
                files = summary.files,
                tables = summary.tables,
                units = summary.units.len(),
                "done"
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(context) = e.context() {
                eprintln!("{}", context);
            }
            std::process::exit(1);
        }
    }
}
