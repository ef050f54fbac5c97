//! Combat demo binary.
//!
//! # Examples
//!
//! ```bash
//! # All scenarios as text
//! cargo run -p combat-demo
//!
//! # Scenario B only, JSON report, chain-level tracing
//! RUST_LOG=combat::chain=trace cargo run -p combat-demo -- --scenario b --output json
//! ```

use anyhow::Result;
use clap::Parser;
use combat_demo::{DemoConfig, OutputFormat, ScenarioSelection, logging, report, scenarios};

#[derive(Parser, Debug)]
#[command(name = "combat-demo", about = "Resolve scripted attacks through passive effect chains")]
struct Cli {
    /// Scenario to run (overrides DEMO_SCENARIO)
    #[arg(long, value_enum)]
    scenario: Option<ScenarioSelection>,

    /// Report format (overrides DEMO_OUTPUT)
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logging::setup_logging()?;

    let mut config = DemoConfig::from_env();
    if let Some(scenario) = cli.scenario {
        config.scenario = scenario;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    tracing::info!(
        scenario = %config.scenario,
        output = %config.output,
        reflect_ratio = config.combat.reflect_ratio,
        lifesteal_ratio = config.combat.lifesteal_ratio,
        "Starting combat demo"
    );

    let reports = scenarios::run(config.scenario, &config.combat)?;
    report::write_reports(&mut std::io::stdout().lock(), &reports, config.output)
}
