//! Trains three feedforward networks of increasing capacity on the concrete
//! compressive strength table and reports held-out Pearson correlation per
//! configuration, plus a per-row error table for the best one.
//!
//! Usage: cargo run -- --data concrete.csv --seed 42

use anyhow::{Context, Result};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use strength_nn::{
    ActivationFunction, NetworkTrainer, TableScaler, Topology, TrainConfig,
    data::{DataTable, split_at_fraction},
    eval::{build_report, pearson, predict_all, render_report},
    train::Trainer,
};

struct StudyConfig {
    name: &'static str,
    topology: Topology,
    activation: ActivationFunction,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut data_path = "concrete.csv".to_string();
    let mut target = "strength".to_string();
    let mut train_fraction = 0.75f64;
    let mut seed = 42u64;
    let mut max_epochs = 20_000usize;
    let mut report_rows = 15usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" | "-d" => {
                data_path = args.get(i + 1).cloned().unwrap_or(data_path);
                i += 2;
            }
            "--target" | "-t" => {
                target = args.get(i + 1).cloned().unwrap_or(target);
                i += 2;
            }
            "--fraction" | "-f" => {
                train_fraction = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(train_fraction);
                i += 2;
            }
            "--seed" | "-s" => {
                seed = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(seed);
                i += 2;
            }
            "--epochs" | "-e" => {
                max_epochs = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(max_epochs);
                i += 2;
            }
            "--rows" | "-r" => {
                report_rows = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(report_rows);
                i += 2;
            }
            "--help" => {
                print_help();
                return Ok(());
            }
            other => {
                warn!(flag = other, "ignoring unrecognized argument");
                i += 1;
            }
        }
    }

    info!(path = %data_path, "loading dataset");
    let table = DataTable::load_csv(&data_path, &target)
        .with_context(|| format!("failed to load {data_path}"))?;
    info!(
        rows = table.len(),
        features = table.n_features(),
        target = table.target_name(),
        "dataset loaded"
    );

    // The split is purely positional; it is only sound if the input rows
    // carry no residual ordering.
    warn!("positional train/test split assumes pre-shuffled input rows");

    let scaler = TableScaler::fit(&table)?;
    let normalized = scaler.transform(&table)?;
    let split = split_at_fraction(&normalized, train_fraction)?;
    info!(train = split.train.len(), test = split.test.len(), "split complete");

    let train_features = split.train.feature_rows();
    let train_targets = split.train.target_values();
    let test_features = split.test.feature_rows();
    let test_targets = split.test.target_values();

    let configs = vec![
        StudyConfig {
            name: "single hidden node, logistic",
            topology: Topology::default(),
            activation: ActivationFunction::Sigmoid,
        },
        StudyConfig {
            name: "one hidden layer of 5, logistic",
            topology: Topology::new(vec![5]).map_err(anyhow::Error::msg)?,
            activation: ActivationFunction::Sigmoid,
        },
        StudyConfig {
            name: "two hidden layers of 5, softplus",
            topology: Topology::new(vec![5, 5]).map_err(anyhow::Error::msg)?,
            activation: ActivationFunction::Softplus,
        },
    ];

    let mut best: Option<(f64, Vec<f64>, &'static str)> = None;

    for config in &configs {
        info!(model = config.name, "training");
        let trainer = NetworkTrainer::new(
            config.topology.clone(),
            config.activation,
            TrainConfig::default().with_seed(seed).with_max_epochs(max_epochs),
        );

        let (mut model, report) = trainer.fit(&train_features, &train_targets)?;
        info!(
            epochs = report.epochs_run,
            loss = report.final_loss,
            converged = report.converged,
            "training finished"
        );

        let predictions = predict_all(&mut model, &test_features);
        let correlation = pearson(&predictions, &test_targets)?;

        println!("{:<35} correlation = {:.4}", config.name, correlation);

        if best.as_ref().map_or(true, |(c, _, _)| correlation > *c) {
            best = Some((correlation, predictions, config.name));
        }
    }

    if let Some((correlation, predictions, name)) = best {
        let target_scale = scaler.target_scale(&table);
        let actual = split_at_fraction(&table, train_fraction)?.test.target_values();
        let rows = build_report(&actual, &predictions, target_scale);

        println!();
        println!("best model: {name} (correlation {correlation:.4})");
        println!("{}", render_report(&rows, report_rows));
    }

    Ok(())
}

fn print_help() {
    println!("Train feedforward networks on a concrete compressive strength table");
    println!();
    println!("USAGE:");
    println!("    cargo run -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -d, --data <PATH>        Input CSV file (default: concrete.csv)");
    println!("    -t, --target <NAME>      Target column name (default: strength)");
    println!("    -f, --fraction <F>       Training fraction (default: 0.75)");
    println!("    -s, --seed <N>           Seed for weight init and shuffling (default: 42)");
    println!("    -e, --epochs <N>         Epoch cap per model (default: 20000)");
    println!("    -r, --rows <N>           Test rows to print in the report (default: 15)");
    println!("        --help               Print help information");
}
