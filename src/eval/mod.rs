pub mod correlation;
pub mod report;

pub use correlation::{pearson, CorrelationError};
pub use report::{TestRow, build_report, render_report};

use crate::train::trainer::Model;

/// Applies a trained model to each feature row, in row order.
/// Forward pass only; no weights are updated.
pub fn predict_all<M: Model>(model: &mut M, rows: &[Vec<f64>]) -> Vec<f64> {
    rows.iter().map(|row| model.predict(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Mean;

    impl Model for Mean {
        fn predict(&mut self, features: &[f64]) -> f64 {
            features.iter().sum::<f64>() / features.len() as f64
        }
    }

    #[test]
    fn predictions_align_with_input_rows() {
        let rows = vec![vec![1.0, 3.0], vec![2.0, 4.0], vec![0.0, 0.0]];
        let preds = predict_all(&mut Mean, &rows);
        assert_eq!(preds, vec![2.0, 3.0, 0.0]);
    }
}
