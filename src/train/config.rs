use serde::{Serialize, Deserialize};

/// Hyperparameters for one training run.
///
/// # Fields
/// - `max_epochs`    — iteration cap; training stops here even without convergence
/// - `batch_size`    — samples per mini-batch; use `1` for online SGD
/// - `tolerance`     — convergence threshold: training stops once the
///                     epoch-over-epoch improvement in mean loss drops below it
/// - `learning_rate` — SGD step size
/// - `seed`          — seeds weight initialization and per-epoch shuffling;
///                     equal seeds reproduce a run exactly
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainConfig {
    pub max_epochs: usize,
    pub batch_size: usize,
    pub tolerance: f64,
    pub learning_rate: f64,
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            max_epochs: 20_000,
            batch_size: 32,
            tolerance: 1e-8,
            learning_rate: 0.1,
            seed: 1,
        }
    }
}

impl TrainConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }
}
