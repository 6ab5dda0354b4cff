// Examples are allowed to print
#![allow(clippy::print_stdout)]

//! Launch Drill Example
//!
//! Runs a scripted drill through a launch session and prints the attempt
//! report as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example drill -- demos/drill.toml
//!
//! # More detail (registry writes, per-attempt records)
//! RUST_LOG=debug cargo run --example drill -- demos/drill.toml
//! ```

use launchgate::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/drill.toml".to_string());

    let config = DrillConfig::load(&path)?;
    let drill = Drill::new(config)?;
    let actuator = TracingActuator::new();

    let records = drill.run(&actuator)?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    println!(
        "launches: {} | aborts: {}",
        actuator.count(Action::Launch),
        actuator.count(Action::Disable)
    );
    Ok(())
}
