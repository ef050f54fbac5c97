//! Reflect effect implementation.

use crate::combat::CombatEvent;
use crate::config::CombatConfig;
use crate::observe::{Activation, ActivationSink};

use super::scale_damage;

/// Send a fraction of the incoming damage back to the attacker.
///
/// Reads the event's damage as it stands when this effect runs. Does not
/// change the event's damage or cancel it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReflectEffect {
    pub ratio: f64,
}

impl ReflectEffect {
    pub const fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    /// Reflect with the ratio configured in `config`.
    pub const fn from_config(config: &CombatConfig) -> Self {
        Self::new(config.reflect_ratio)
    }

    pub fn process(&self, event: &mut CombatEvent<'_>, sink: &mut dyn ActivationSink) {
        let reflected = scale_damage(event.damage(), self.ratio);
        let attacker = event.attacker_mut();
        attacker.take_damage(reflected);

        sink.record(Activation::Reflected {
            attacker: attacker.name().to_owned(),
            amount: reflected,
        });
    }
}

impl Default for ReflectEffect {
    fn default() -> Self {
        Self::new(CombatConfig::DEFAULT_REFLECT_RATIO)
    }
}
