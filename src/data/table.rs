use std::io::Read;
use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset has no rows")]
    Empty,
    #[error("target column '{0}' not found in header")]
    MissingTarget(String),
    #[error("row {row}: column '{column}' value '{value}' is not a finite number")]
    BadCell {
        row: usize,
        column: String,
        value: String,
    },
    #[error("row {row}: expected {expected} columns, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} columns, found {found}")]
    WidthMismatch { expected: usize, found: usize },
    #[error("train fraction {0} must be strictly between 0 and 1")]
    BadFraction(f64),
}

/// An ordered table of named numeric columns with one designated target
/// column. Every cell is a finite f64; malformed input aborts the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    /// Index of the target column within `columns`.
    pub target: usize,
}

impl DataTable {
    /// Builds a table from pre-parsed rows, validating widths and finiteness.
    pub fn new(
        columns: Vec<String>,
        rows: Vec<Vec<f64>>,
        target_name: &str,
    ) -> Result<DataTable, DataError> {
        let target = columns
            .iter()
            .position(|c| c == target_name)
            .ok_or_else(|| DataError::MissingTarget(target_name.to_string()))?;

        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DataError::RaggedRow {
                    row: i + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            for (j, &v) in row.iter().enumerate() {
                if !v.is_finite() {
                    return Err(DataError::BadCell {
                        row: i + 1,
                        column: columns[j].clone(),
                        value: v.to_string(),
                    });
                }
            }
        }

        if rows.is_empty() {
            return Err(DataError::Empty);
        }

        Ok(DataTable { columns, rows, target })
    }

    /// Parses a headered CSV stream. The header names the columns; every
    /// data cell must parse as a finite f64.
    pub fn from_reader<R: Read>(reader: R, target_name: &str) -> Result<DataTable, DataError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (i, result) in csv_reader.records().enumerate() {
            let record = result?;
            if record.len() != columns.len() {
                return Err(DataError::RaggedRow {
                    row: i + 1,
                    expected: columns.len(),
                    found: record.len(),
                });
            }

            let mut row = Vec::with_capacity(columns.len());
            for (j, cell) in record.iter().enumerate() {
                let value: f64 = cell.trim().parse().map_err(|_| DataError::BadCell {
                    row: i + 1,
                    column: columns[j].clone(),
                    value: cell.to_string(),
                })?;
                if !value.is_finite() {
                    return Err(DataError::BadCell {
                        row: i + 1,
                        column: columns[j].clone(),
                        value: cell.to_string(),
                    });
                }
                row.push(value);
            }
            rows.push(row);
        }

        DataTable::new(columns, rows, target_name)
    }

    /// Loads a headered CSV file.
    pub fn load_csv<P: AsRef<Path>>(path: P, target_name: &str) -> Result<DataTable, DataError> {
        let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
        DataTable::from_reader(std::io::BufReader::new(file), target_name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.columns.len() - 1
    }

    pub fn target_name(&self) -> &str {
        &self.columns[self.target]
    }

    /// One value per row, in row order, for the column at `index`.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[index]).collect()
    }

    /// Feature rows (target column removed), in row order.
    pub fn feature_rows(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != self.target)
                    .map(|(_, &v)| v)
                    .collect()
            })
            .collect()
    }

    /// Target values, in row order.
    pub fn target_values(&self) -> Vec<f64> {
        self.column(self.target)
    }

    /// Order-preserving sub-table over `start..end` (rows clamped to bounds).
    pub fn slice(&self, start: usize, end: usize) -> DataTable {
        let end = end.min(self.rows.len());
        let start = start.min(end);
        DataTable {
            columns: self.columns.clone(),
            rows: self.rows[start..end].to_vec(),
            target: self.target,
        }
    }
}
