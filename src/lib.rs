//! Feedforward neural network study of concrete compressive strength.
//!
//! The pipeline is strictly linear: load the table → min-max normalize every
//! column → positional train/test split → fit a network → forward-pass the
//! held-out rows → report Pearson correlation, denormalizing predictions for
//! the per-row error table.

pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod eval;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::topology::Topology;
pub use loss::sse::SseLoss;
pub use optim::sgd::Sgd;
pub use train::{Model, Trainer, NetworkTrainer, TrainConfig, TrainError, TrainReport};
pub use data::{ColumnScale, DataError, DataTable, Split, TableScaler, split_at_fraction};
pub use eval::{CorrelationError, pearson, predict_all};

#[cfg(test)]
mod tests {
    use super::*;

    /// Closed-form stand-in for the network trainer: ordinary least squares
    /// on the first feature. Exercises the `Trainer` seam without SGD.
    struct LeastSquaresTrainer;

    struct LineModel {
        slope: f64,
        intercept: f64,
    }

    impl Model for LineModel {
        fn predict(&mut self, features: &[f64]) -> f64 {
            self.intercept + self.slope * features[0]
        }
    }

    impl Trainer for LeastSquaresTrainer {
        type Model = LineModel;

        fn fit(
            &self,
            features: &[Vec<f64>],
            targets: &[f64],
        ) -> Result<(LineModel, TrainReport), TrainError> {
            let n = features.len() as f64;
            let xs: Vec<f64> = features.iter().map(|f| f[0]).collect();
            let mean_x = xs.iter().sum::<f64>() / n;
            let mean_y = targets.iter().sum::<f64>() / n;

            let cov: f64 = xs.iter().zip(targets).map(|(x, y)| (x - mean_x) * (y - mean_y)).sum();
            let var: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();

            let slope = cov / var;
            let model = LineModel { slope, intercept: mean_y - slope * mean_x };
            let report = TrainReport { epochs_run: 1, final_loss: 0.0, converged: true };
            Ok((model, report))
        }
    }

    fn synthetic_table(n: usize) -> DataTable {
        // Strength tracks the first feature with a deterministic wobble.
        let rows = (0..n)
            .map(|i| {
                let cement = 100.0 + i as f64;
                let water = 150.0 + (i as f64 * 0.7).sin() * 20.0;
                let strength = 10.0 + 0.08 * cement + (i as f64 * 1.3).sin() * 0.2;
                vec![cement, water, strength]
            })
            .collect();
        DataTable::new(
            vec!["cement".into(), "water".into(), "strength".into()],
            rows,
            "strength",
        )
        .unwrap()
    }

    #[test]
    fn pipeline_end_to_end_with_stub_trainer() {
        let table = synthetic_table(100);
        let scaler = TableScaler::fit(&table).unwrap();
        let normalized = scaler.transform(&table).unwrap();
        let split = split_at_fraction(&normalized, 0.75).unwrap();

        let (mut model, report) = LeastSquaresTrainer
            .fit(&split.train.feature_rows(), &split.train.target_values())
            .unwrap();
        assert!(report.converged);

        let predictions = predict_all(&mut model, &split.test.feature_rows());

        // Correlation in normalized space.
        let corr_norm = pearson(&predictions, &split.test.target_values()).unwrap();
        assert!(corr_norm > 0.9, "stub fit too weak: {corr_norm}");

        // Correlation after denormalizing both series is numerically equal:
        // correlation is invariant under affine rescaling.
        let target_scale = scaler.target_scale(&table);
        let denorm_preds: Vec<f64> =
            predictions.iter().map(|&p| target_scale.denormalize(p)).collect();
        let actual_original: Vec<f64> = split_at_fraction(&table, 0.75)
            .unwrap()
            .test
            .target_values();
        let corr_orig = pearson(&denorm_preds, &actual_original).unwrap();

        assert!((corr_norm - corr_orig).abs() < 1e-9);
    }
}
