use serde::{Serialize, Deserialize};

/// Outcome of one training run.
///
/// A run that hits the epoch cap without meeting the convergence tolerance
/// still yields a usable model; `converged` records which way it ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainReport {
    /// Number of completed epochs.
    pub epochs_run: usize,
    /// Mean training loss of the last completed epoch.
    pub final_loss: f64,
    /// Whether the loss-improvement tolerance was met before the epoch cap.
    pub converged: bool,
}
