use anyhow::{Context, Result};
use drongo_weight::weighing::WeightEstimator;
use log::info;

const FIELD_WEIGHTS: [f64; 9] = [35.0, 67.0, 23.7, 12.0, 40.0, 40.0, 41.0, 35.0, 41.90];

fn main() -> Result<()> {
    env_logger::init();

    let estimator = WeightEstimator::new();
    info!(
        "estimating from {} readings with the {} filter",
        FIELD_WEIGHTS.len(),
        estimator.filter_mode()
    );

    let estimate = estimator
        .estimate_detailed(&FIELD_WEIGHTS)
        .context("could not determine drongo weight")?;
    info!("{}", serde_json::to_string(&estimate)?);

    println!("Drongo Weight: {}", estimate.weight);
    Ok(())
}
