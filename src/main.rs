use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use rentcast::batch;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Appends a 12-month rent forecast to every CSV in a directory"
)]
struct Args {
    /// Directory containing the input CSV files.
    #[arg(long, default_value = "data")]
    input: PathBuf,
    /// Directory the predictions_* files are written to.
    #[arg(long, default_value = "results")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();
    info!(
        "startup: {} -> {}",
        args.input.display(),
        args.output.display()
    );

    batch::run(&args.input, &args.output)?;
    Ok(())
}
