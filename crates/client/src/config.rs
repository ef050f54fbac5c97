//! Demo configuration structures and loaders.
use std::env;
use std::str::FromStr;

use combat_core::CombatConfig;

/// Which demo scenarios to run.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    clap::ValueEnum,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScenarioSelection {
    A,
    B,
    C,
    #[default]
    All,
}

impl ScenarioSelection {
    /// Returns true if scenario `id` should run under this selection.
    pub fn includes(self, id: ScenarioSelection) -> bool {
        self == Self::All || self == id
    }
}

/// How scenario reports are written to stdout.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for a demo run.
#[derive(Clone, Debug, Default)]
pub struct DemoConfig {
    pub scenario: ScenarioSelection,
    pub output: OutputFormat,
    pub combat: CombatConfig,
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DEMO_SCENARIO` - `a`, `b`, `c` or `all` (default: all)
    /// - `DEMO_OUTPUT` - `text` or `json` (default: text)
    /// - `COMBAT_REFLECT_RATIO` - Default Reflect ratio (default: 0.5)
    /// - `COMBAT_LIFESTEAL_RATIO` - Default Lifesteal ratio (default: 0.4)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(scenario) = read_parsed(&lookup, "DEMO_SCENARIO") {
            config.scenario = scenario;
        }

        if let Some(output) = read_parsed(&lookup, "DEMO_OUTPUT") {
            config.output = output;
        }

        if let Some(ratio) = read_parsed(&lookup, "COMBAT_REFLECT_RATIO") {
            config.combat = config.combat.with_reflect_ratio(ratio);
        }

        if let Some(ratio) = read_parsed(&lookup, "COMBAT_LIFESTEAL_RATIO") {
            config.combat = config.combat.with_lifesteal_ratio(ratio);
        }

        config
    }
}

/// Reads and parses one key, treating missing or malformed values as unset.
fn read_parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key)?.trim().parse().ok()
}
