use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixtally::models::AppConfig;
use pixtally::services::{ReportWriter, Scanner};

#[derive(Parser)]
#[command(name = "pixtally")]
#[command(about = "Tally image pixels into color buckets and write the shares as CSV")]
struct Cli {
    /// Color bucket configuration (TOML)
    #[arg(short, long, env = "PIXTALLY_CONFIG", default_value = "colors.toml")]
    config: PathBuf,

    /// Report file; truncated if it exists
    #[arg(short, long, env = "PIXTALLY_OUTPUT", default_value = "output.csv")]
    output: PathBuf,

    /// Directory searched recursively for .jpg files
    #[arg(short, long, env = "PIXTALLY_PATH", default_value = "./")]
    path: PathBuf,

    /// Print the effective configuration as TOML before scanning
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixtally=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(&cli.config);

    if cli.print_config {
        match config.to_toml() {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => tracing::warn!(%e, "Failed to render configuration"),
        }
    }

    let scanner = Scanner::new(config.buckets());

    let mut report = ReportWriter::create(&cli.output, scanner.buckets())
        .context("Cannot set up report output")?;

    let outcome = scanner
        .run(&cli.path, &mut report)
        .context("Report output failed")?;
    report.finish().context("Report output failed")?;

    tracing::info!(
        output = %cli.output.display(),
        processed = outcome.processed.len(),
        skipped = outcome.skipped.len(),
        "Scan complete"
    );

    Ok(())
}
