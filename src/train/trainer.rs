use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, warn};

use crate::activation::activation::ActivationFunction;
use crate::loss::sse::SseLoss;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::network::topology::Topology;
use crate::optim::sgd::Sgd;
use crate::train::config::TrainConfig;
use crate::train::report::TrainReport;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("training set is empty")]
    EmptyTrainingSet,
    #[error("features and targets differ in length: {features} vs {targets}")]
    LengthMismatch { features: usize, targets: usize },
    #[error("row {row}: expected {expected} features, found {found}")]
    RaggedFeatures {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Forward-only regression model: one prediction per feature row.
///
/// `predict` takes `&mut self` because the network caches layer activations
/// during its forward pass; no weights are updated.
pub trait Model {
    fn predict(&mut self, features: &[f64]) -> f64;
}

impl Model for Network {
    fn predict(&mut self, features: &[f64]) -> f64 {
        self.forward(features.to_vec())[0]
    }
}

/// The one external seam of the pipeline: anything that can fit a regression
/// model to (features, targets). Tests substitute a closed-form stand-in.
pub trait Trainer {
    type Model: Model;

    fn fit(&self, features: &[Vec<f64>], targets: &[f64])
        -> Result<(Self::Model, TrainReport), TrainError>;
}

/// Backpropagation trainer for feedforward networks.
///
/// Minimizes sum-of-squared error with seeded mini-batch SGD until the
/// epoch-over-epoch loss improvement drops below `config.tolerance`, or the
/// epoch cap is reached. Hitting the cap is surfaced as a warning, not an
/// error; the partially trained network is still returned.
pub struct NetworkTrainer {
    pub topology: Topology,
    pub activation: ActivationFunction,
    pub config: TrainConfig,
}

impl NetworkTrainer {
    pub fn new(topology: Topology, activation: ActivationFunction, config: TrainConfig) -> Self {
        NetworkTrainer { topology, activation, config }
    }
}

impl Trainer for NetworkTrainer {
    type Model = Network;

    fn fit(
        &self,
        features: &[Vec<f64>],
        targets: &[f64],
    ) -> Result<(Network, TrainReport), TrainError> {
        validate_training_set(features, targets)?;

        let input_size = features[0].len();
        let mut network =
            Network::regression(input_size, &self.topology, self.activation, self.config.seed);
        let optimizer = Sgd::new(self.config.learning_rate);

        // Separate stream from the weight-init RNG so adding layers does not
        // perturb the shuffle order.
        let mut shuffle_rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(1));

        let mut prev_loss = f64::INFINITY;
        let mut last_loss = f64::INFINITY;
        let mut epochs_run = 0;
        let mut converged = false;

        for epoch in 1..=self.config.max_epochs {
            let loss = run_one_epoch(
                &mut network,
                features,
                targets,
                &optimizer,
                self.config.batch_size,
                &mut shuffle_rng,
            );
            epochs_run = epoch;
            last_loss = loss;

            if epoch % 100 == 0 {
                debug!(epoch, loss, "training progress");
            }

            if (prev_loss - loss).abs() < self.config.tolerance {
                converged = true;
                break;
            }
            prev_loss = loss;
        }

        if !converged {
            warn!(
                epochs = epochs_run,
                loss = last_loss,
                "training hit the epoch cap before converging; model is partially trained"
            );
        }

        Ok((
            network,
            TrainReport {
                epochs_run,
                final_loss: last_loss,
                converged,
            },
        ))
    }
}

fn validate_training_set(features: &[Vec<f64>], targets: &[f64]) -> Result<(), TrainError> {
    if features.is_empty() {
        return Err(TrainError::EmptyTrainingSet);
    }
    if features.len() != targets.len() {
        return Err(TrainError::LengthMismatch {
            features: features.len(),
            targets: targets.len(),
        });
    }
    let expected = features[0].len();
    for (i, row) in features.iter().enumerate() {
        if row.len() != expected {
            return Err(TrainError::RaggedFeatures {
                row: i + 1,
                expected,
                found: row.len(),
            });
        }
    }
    Ok(())
}

/// Runs one full epoch of mini-batch SGD over the training data.
/// Returns the mean loss over all samples.
fn run_one_epoch(
    network: &mut Network,
    features: &[Vec<f64>],
    targets: &[f64],
    optimizer: &Sgd,
    batch_size: usize,
    rng: &mut StdRng,
) -> f64 {
    let n = features.len();
    let mut total_loss = 0.0;

    // Shuffle sample order each epoch.
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    for batch_start in (0..n).step_by(batch_size.max(1)) {
        let batch_end = (batch_start + batch_size.max(1)).min(n);

        // Zero-initialize accumulated gradient storage.
        let mut acc_grads: Vec<(Matrix, Matrix)> = network.layers.iter()
            .map(|layer| (
                Matrix::zeros(layer.weights.rows, layer.weights.cols),
                Matrix::zeros(layer.biases.rows, layer.biases.cols),
            ))
            .collect();

        // Accumulate gradients over the mini-batch.
        for &idx in &indices[batch_start..batch_end] {
            let input = &features[idx];
            let expected = [targets[idx]];

            let output = network.forward(input.clone());

            total_loss += SseLoss::loss(&output, &expected);

            let error = SseLoss::derivative(&output, &expected);
            let mut delta = Matrix::from_data(vec![error]);

            // Backward pass.
            for i in (0..network.layers.len()).rev() {
                let input_for_layer = if i == 0 {
                    Matrix::from_data(vec![input.clone()])
                } else {
                    network.layers[i - 1].neurons.clone()
                };

                let (w_grad, b_grad) = network.layers[i].compute_gradients(
                    delta.clone(),
                    &input_for_layer,
                );

                if i > 0 {
                    delta = b_grad.clone() * network.layers[i].weights.transpose();
                }

                acc_grads[i].0 = acc_grads[i].0.clone() + w_grad;
                acc_grads[i].1 = acc_grads[i].1.clone() + b_grad;
            }
        }

        // The optimizer averages the accumulated sums over the batch.
        for (i, (w_acc, b_acc)) in acc_grads.into_iter().enumerate() {
            optimizer.step_batch(&mut network.layers[i], w_acc, b_acc, batch_end - batch_start);
        }
    }

    total_loss / n as f64
}
