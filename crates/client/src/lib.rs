//! Command-line demo for `combat-core`.
//!
//! Plays a fixed set of attacks against players with different passive
//! effects and prints what the resolver did at each step.
pub mod config;
pub mod logging;
pub mod report;
pub mod scenarios;

pub use config::{DemoConfig, OutputFormat, ScenarioSelection};
pub use scenarios::{Roster, ScenarioReport};
