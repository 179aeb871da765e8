use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::data::table::{DataError, DataTable};

/// Min-max parameters of one column, captured once over the full table and
/// immutable afterwards.
///
/// A degenerate column (`max == min`) normalizes to all zeros rather than
/// dividing by zero; the inverse then maps 0 back to `min`, so the
/// round-trip law holds even in the degenerate case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnScale {
    pub min: f64,
    pub max: f64,
}

impl ColumnScale {
    pub fn fit(values: &[f64]) -> Result<ColumnScale, DataError> {
        if values.is_empty() {
            return Err(DataError::Empty);
        }
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Ok(ColumnScale { min, max })
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Maps `x` into [0, 1]; degenerate columns map to 0.
    pub fn normalize(&self, x: f64) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            (x - self.min) / (self.max - self.min)
        }
    }

    /// Inverse of `normalize` for the captured (min, max).
    pub fn denormalize(&self, v: f64) -> f64 {
        v * (self.max - self.min) + self.min
    }
}

/// One `ColumnScale` per table column. Fit once on the full table before
/// splitting; the target column's scale is the only valid source for
/// denormalizing predictions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableScaler {
    pub scales: Vec<ColumnScale>,
}

impl TableScaler {
    pub fn fit(table: &DataTable) -> Result<TableScaler, DataError> {
        let mut scales = Vec::with_capacity(table.columns.len());
        for (j, name) in table.columns.iter().enumerate() {
            let scale = ColumnScale::fit(&table.column(j))?;
            if scale.is_degenerate() {
                warn!(column = %name, value = scale.min, "degenerate column normalizes to all zeros");
            }
            scales.push(scale);
        }
        Ok(TableScaler { scales })
    }

    /// Returns a new table with every column rescaled to [0, 1].
    pub fn transform(&self, table: &DataTable) -> Result<DataTable, DataError> {
        if table.columns.len() != self.scales.len() {
            return Err(DataError::WidthMismatch {
                expected: self.scales.len(),
                found: table.columns.len(),
            });
        }

        let rows = table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(self.scales.iter())
                    .map(|(&v, scale)| scale.normalize(v))
                    .collect()
            })
            .collect();

        Ok(DataTable {
            columns: table.columns.clone(),
            rows,
            target: table.target,
        })
    }

    /// Scale of the table's target column.
    pub fn target_scale(&self, table: &DataTable) -> ColumnScale {
        self.scales[table.target]
    }

    /// Serializes the captured scales to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes scales from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<TableScaler> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
