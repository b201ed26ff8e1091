//! Batch driver: walk the input directory and forecast every CSV in it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use glob::glob;
use tracing::{error, info};

use crate::process;

/// Prefix applied to every output file name.
pub const OUTPUT_PREFIX: &str = "predictions_";

/// Outcome of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Forecast every `*.csv` directly inside `input_dir`, writing
/// `predictions_<name>` files into `output_dir` (created if absent).
///
/// Inputs run independently and in sorted order, so reruns over unchanged
/// data produce identical outputs. A fatal error in one file is logged and
/// counted; the remaining files still run.
pub fn run(input_dir: &Path, output_dir: &Path) -> Result<BatchSummary> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let pattern = input_dir.join("*.csv");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| anyhow!("input directory is not valid UTF-8: {}", input_dir.display()))?;
    let mut inputs: Vec<PathBuf> = glob(pattern)
        .context("listing input files")?
        .filter_map(|entry| entry.ok())
        .collect();
    inputs.sort();

    let mut summary = BatchSummary::default();
    for input in &inputs {
        let Some(name) = input.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let output = output_dir.join(format!("{OUTPUT_PREFIX}{name}"));
        match process::process_csv(input, &output) {
            Ok(_) => summary.processed += 1,
            Err(err) => {
                error!("{} failed: {:#}", input.display(), err);
                summary.failed += 1;
            }
        }
    }

    info!(
        "all files processed: {} ok, {} failed; results in {}",
        summary.processed,
        summary.failed,
        output_dir.display()
    );
    Ok(summary)
}
