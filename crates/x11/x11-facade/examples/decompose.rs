//! X-11 decomposition of a synthetic monthly series
//!
//! Run with: RUST_LOG=x11_core=debug cargo run --example decompose -p x11-facade

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use x11_facade::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "x11_core=info".into()),
        )
        .init();

    println!("=== X-11 Decomposition Example ===\n");

    // Eight years of monthly observations, labelled yyyymm
    let pairs: Vec<(i64, Option<f64>)> = (0..96i64)
        .map(|m| {
            let t = m as f64;
            let label = (2016 + m / 12) * 100 + m % 12 + 1;
            let value = (120.0 + 1.5 * t) * (1.0 + 0.12 * (t * std::f64::consts::PI / 6.0).cos());
            (label, Some(value))
        })
        .collect();
    let series = TimeSeries::from_pairs(pairs)?;

    let config = X11Config::builder().error_mode(ErrorMode::Ratio).build();
    println!("Config: {}\n", serde_json::to_string(&config)?);

    let decomposer = config.decomposer();
    println!("Minimum usable length: {}\n", decomposer.min_len());

    let result = decomposer.decompose(&series)?;
    let range = result.defined_range().ok_or("no defined components")?;

    println!("{:>8} {:>10} {:>10} {:>10} {:>10}", "Period", "Original", "Seasonal", "Trend", "Error");
    println!("{}", "-".repeat(52));
    for i in range {
        println!(
            "{:>8} {:>10.3} {:>10.4} {:>10.3} {:>10.4}",
            series.index()[i],
            series.get(i).unwrap_or(f64::NAN),
            result.seasonal.get(i).unwrap_or(f64::NAN),
            result.trend.get(i).unwrap_or(f64::NAN),
            result.error.get(i).unwrap_or(f64::NAN),
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
