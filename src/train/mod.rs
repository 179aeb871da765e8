pub mod trainer;
pub mod config;
pub mod report;

pub use trainer::{Model, Trainer, NetworkTrainer, TrainError};
pub use config::TrainConfig;
pub use report::TrainReport;
