//! Per-file processing: read one CSV, forecast every row, write the
//! augmented CSV.

pub mod dates;
pub mod reshape;

use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{info, warn};

use crate::error::PipelineError;
use crate::model;
use crate::process::dates::{parse_month, prediction_labels};

/// Leading columns that identify the entity and pass through untouched.
pub const METADATA_COLS: usize = 3;

/// Number of future months appended to every row.
pub const HORIZON: usize = 12;

/// Process one CSV: append `HORIZON` forecast columns, preserving row count
/// and order, and write the result to `output`. Returns the number of data
/// rows written.
///
/// The whole table is assembled before anything is written, so a fatal error
/// (unparseable last header, malformed CSV) leaves no output file behind.
/// Row-level model failures are logged and become empty cells instead.
pub fn process_csv(input: &Path, output: &Path) -> Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(input)
        .with_context(|| format!("opening {}", input.display()))?;

    let headers: Vec<String> = rdr
        .headers()
        .context("reading header row")?
        .iter()
        .map(str::to_string)
        .collect();
    let date_headers = headers.get(METADATA_COLS..).unwrap_or_default();
    let last_header = date_headers.last().ok_or(PipelineError::NoDateColumns)?;
    let labels = prediction_labels(last_header, HORIZON)?;

    // Parsed once; every row reuses the same month axis.
    let months: Vec<_> = date_headers.iter().map(|h| parse_month(h)).collect();

    let mut out_rows: Vec<StringRecord> = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record
            .with_context(|| format!("csv parse error in {} at row {}", input.display(), idx))?;

        let series = reshape::row_series(record.iter().skip(METADATA_COLS), &months);
        let cells = match model::forecast_months(&series, HORIZON) {
            Ok(cells) => cells,
            Err(err) => {
                let entity = record.get(0).unwrap_or("");
                warn!(row = idx, entity, %err, "forecast failed; writing empty predictions");
                vec![None; HORIZON]
            }
        };

        let mut out = record;
        for cell in cells {
            out.push_field(&cell.map(|v| v.to_string()).unwrap_or_default());
        }
        out_rows.push(out);
    }

    let mut wtr = WriterBuilder::new()
        .from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    wtr.write_record(headers.iter().map(String::as_str).chain(labels.iter().map(String::as_str)))
        .context("writing header row")?;
    for row in &out_rows {
        wtr.write_record(row).context("writing data row")?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", output.display()))?;

    info!("processed: {} -> {}", input.display(), output.display());
    Ok(out_rows.len())
}
