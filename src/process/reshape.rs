use chrono::NaiveDate;

use crate::model::MonthlySeries;

/// Pair one row's historical cells with the pre-parsed month headers,
/// producing the long series the model consumes.
///
/// Cells under an unparseable header are discarded, as are empty,
/// non-numeric, and non-finite values. An empty result is a valid
/// "nothing to forecast" signal, not an error.
pub fn row_series<'a, I>(cells: I, months: &[Option<NaiveDate>]) -> MonthlySeries
where
    I: IntoIterator<Item = &'a str>,
{
    let mut series = MonthlySeries::new();
    for (cell, month) in cells.into_iter().zip(months) {
        let Some(month) = month else { continue };
        if let Ok(value) = cell.trim().parse::<f64>() {
            if value.is_finite() {
                series.push(*month, value);
            }
        }
    }
    series
}
