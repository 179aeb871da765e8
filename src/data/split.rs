use tracing::debug;

use crate::data::table::{DataError, DataTable};

/// Order-preserving partition of a table; `train` rows followed by `test`
/// rows reconstruct the original table.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: DataTable,
    pub test: DataTable,
}

/// Positional split: the first `round(N * train_fraction)` rows become the
/// training set, the remainder the test set. No shuffling is performed —
/// the caller is responsible for ensuring the input rows carry no residual
/// ordering (the reference dataset ships pre-shuffled).
pub fn split_at_fraction(table: &DataTable, train_fraction: f64) -> Result<Split, DataError> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(DataError::BadFraction(train_fraction));
    }

    let n = table.len();
    let cut = (n as f64 * train_fraction).round() as usize;

    debug!(rows = n, train = cut, test = n - cut, "positional train/test split");

    Ok(Split {
        train: table.slice(0, cut),
        test: table.slice(cut, n),
    })
}
