use chrono::{Months, NaiveDate};

use crate::error::PipelineError;

/// Strict parse of a `"YYYY-MM"` header into the first day of that month.
/// Returns `None` on anything else.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() != 7 || s.as_bytes()[4] != b'-' {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// The `horizon` month labels strictly after `last_header`, as `YYYY-MM`.
///
/// Labels are shared by every row of a table, so an unparseable last header
/// is fatal for the file rather than recoverable per row.
pub fn prediction_labels(last_header: &str, horizon: usize) -> Result<Vec<String>, PipelineError> {
    let last = parse_month(last_header)
        .ok_or_else(|| PipelineError::InvalidDateFormat(last_header.to_string()))?;

    let mut labels = Vec::with_capacity(horizon);
    let mut month = last;
    for _ in 0..horizon {
        month = month
            .checked_add_months(Months::new(1))
            .ok_or_else(|| PipelineError::InvalidDateFormat(last_header.to_string()))?;
        labels.push(month.format("%Y-%m").to_string());
    }
    Ok(labels)
}
