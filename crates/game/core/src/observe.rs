//! Activation records and the sinks that receive them.
//!
//! The resolver and chain report every step to an [`ActivationSink`]
//! supplied by the caller. For one attack the records arrive in this order:
//!
//! ```text
//! NoEffects | ChainBuilt
//! (Reflected | Healed)? Processed      -- once per effect that ran
//! Halted?                              -- cancelled with links remaining
//! Resolved
//! ```

use tracing::{debug, info};

use crate::combat::ResolveOutcome;
use crate::effect::EffectKind;

/// One observable step of damage resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Activation {
    /// The target had no effects; damage passes through unmodified.
    NoEffects { target: String },

    /// A chain was built from the target's effect list.
    ChainBuilt { target: String, links: usize },

    /// An effect ran.
    Processed {
        index: usize,
        effect: EffectKind,
        damage_before: i32,
        damage_after: i32,
        cancelled: bool,
    },

    /// A Reflect effect damaged the attacker.
    Reflected { attacker: String, amount: i32 },

    /// A Lifesteal effect healed the attacker.
    Healed { attacker: String, amount: i32 },

    /// The event was cancelled before link `index` could run.
    Halted { index: usize },

    /// Final outcome of the attack.
    Resolved {
        target: String,
        outcome: ResolveOutcome,
    },
}

/// Receiver for activation records.
pub trait ActivationSink {
    fn record(&mut self, activation: Activation);
}

/// Discards everything.
impl ActivationSink for () {
    fn record(&mut self, _activation: Activation) {}
}

/// Forwards every record to both sinks.
impl<A: ActivationSink, B: ActivationSink> ActivationSink for (A, B) {
    fn record(&mut self, activation: Activation) {
        self.0.record(activation.clone());
        self.1.record(activation);
    }
}

impl<S: ActivationSink + ?Sized> ActivationSink for &mut S {
    #[inline]
    fn record(&mut self, activation: Activation) {
        (**self).record(activation)
    }
}

/// Collects activations in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActivationLog {
    entries: Vec<Activation>,
}

impl ActivationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activations(&self) -> &[Activation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Kinds of the effects that ran, in order.
    pub fn processed_kinds(&self) -> Vec<EffectKind> {
        self.entries
            .iter()
            .filter_map(|a| match a {
                Activation::Processed { effect, .. } => Some(*effect),
                _ => None,
            })
            .collect()
    }

    /// Sum of all reflected amounts.
    pub fn reflected_total(&self) -> i32 {
        self.entries
            .iter()
            .map(|a| match a {
                Activation::Reflected { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }

    /// Sum of all healed amounts.
    pub fn healed_total(&self) -> i32 {
        self.entries
            .iter()
            .map(|a| match a {
                Activation::Healed { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }

    /// Whether any chain stopped early on a cancelled event.
    pub fn was_halted(&self) -> bool {
        self.entries
            .iter()
            .any(|a| matches!(a, Activation::Halted { .. }))
    }
}

impl ActivationSink for ActivationLog {
    fn record(&mut self, activation: Activation) {
        self.entries.push(activation);
    }
}

impl IntoIterator for ActivationLog {
    type Item = Activation;
    type IntoIter = std::vec::IntoIter<Activation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Emits every activation as a `tracing` event under `combat::effects`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ActivationSink for TracingSink {
    fn record(&mut self, activation: Activation) {
        match activation {
            Activation::NoEffects { target } => {
                info!(target: "combat::effects", defender = %target, "no active effects, damage passes through");
            }
            Activation::ChainBuilt { target, links } => {
                debug!(target: "combat::effects", defender = %target, links, "effect chain built");
            }
            Activation::Processed {
                index,
                effect,
                damage_before,
                damage_after,
                cancelled,
            } => {
                info!(
                    target: "combat::effects",
                    index,
                    %effect,
                    damage_before,
                    damage_after,
                    cancelled,
                    "effect processed"
                );
            }
            Activation::Reflected { attacker, amount } => {
                info!(target: "combat::effects", %attacker, amount, "damage reflected");
            }
            Activation::Healed { attacker, amount } => {
                info!(target: "combat::effects", %attacker, amount, "attacker healed");
            }
            Activation::Halted { index } => {
                info!(target: "combat::effects", index, "chain halted by cancellation");
            }
            Activation::Resolved { target, outcome } => {
                debug!(
                    target: "combat::effects",
                    defender = %target,
                    final_damage = outcome.final_damage,
                    cancelled = outcome.cancelled,
                    "outcome recorded"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_totals() {
        let mut log = ActivationLog::new();
        log.record(Activation::Reflected {
            attacker: "Goblin".into(),
            amount: 10,
        });
        log.record(Activation::Healed {
            attacker: "Goblin".into(),
            amount: 8,
        });
        log.record(Activation::Reflected {
            attacker: "Goblin".into(),
            amount: 3,
        });

        assert_eq!(log.len(), 3);
        assert_eq!(log.reflected_total(), 13);
        assert_eq!(log.healed_total(), 8);
        assert!(!log.was_halted());

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn pair_forwards_to_both() {
        let mut pair = (ActivationLog::new(), ActivationLog::new());
        pair.record(Activation::Halted { index: 2 });

        assert_eq!(pair.0, pair.1);
        assert!(pair.0.was_halted());
    }

    #[test]
    fn borrowed_sinks_can_be_paired() {
        let mut log = ActivationLog::new();
        {
            let mut pair = (&mut log, TracingSink);
            pair.record(Activation::Halted { index: 0 });
        }
        assert_eq!(log.len(), 1);
    }
}
