//! Lifesteal effect implementation.

use crate::combat::CombatEvent;
use crate::config::CombatConfig;
use crate::observe::{Activation, ActivationSink};

use super::scale_damage;

/// Heal the attacker by a fraction of the incoming damage.
///
/// Reads the event's damage as it stands when this effect runs. Does not
/// change the event's damage or cancel it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifestealEffect {
    pub ratio: f64,
}

impl LifestealEffect {
    pub const fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    /// Lifesteal with the ratio configured in `config`.
    pub const fn from_config(config: &CombatConfig) -> Self {
        Self::new(config.lifesteal_ratio)
    }

    pub fn process(&self, event: &mut CombatEvent<'_>, sink: &mut dyn ActivationSink) {
        let healed = scale_damage(event.damage(), self.ratio);
        let attacker = event.attacker_mut();
        attacker.heal(healed);

        sink.record(Activation::Healed {
            attacker: attacker.name().to_owned(),
            amount: healed,
        });
    }
}

impl Default for LifestealEffect {
    fn default() -> Self {
        Self::new(CombatConfig::DEFAULT_LIFESTEAL_RATIO)
    }
}
