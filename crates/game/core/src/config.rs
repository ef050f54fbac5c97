/// Combat configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Fraction of incoming damage a default Reflect effect sends back.
    pub reflect_ratio: f64,

    /// Fraction of incoming damage a default Lifesteal effect heals the attacker for.
    pub lifesteal_ratio: f64,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REFLECT_RATIO: f64 = 0.5;
    pub const DEFAULT_LIFESTEAL_RATIO: f64 = 0.4;

    pub const fn new() -> Self {
        Self {
            reflect_ratio: Self::DEFAULT_REFLECT_RATIO,
            lifesteal_ratio: Self::DEFAULT_LIFESTEAL_RATIO,
        }
    }

    /// Builder: override the default Reflect ratio.
    #[must_use]
    pub const fn with_reflect_ratio(mut self, ratio: f64) -> Self {
        self.reflect_ratio = ratio;
        self
    }

    /// Builder: override the default Lifesteal ratio.
    #[must_use]
    pub const fn with_lifesteal_ratio(mut self, ratio: f64) -> Self {
        self.lifesteal_ratio = ratio;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
