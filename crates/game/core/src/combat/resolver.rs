//! Orchestration of a single attack.

use tracing::{debug, debug_span, info};

use crate::error::ChainError;
use crate::observe::{Activation, ActivationSink, TracingSink};
use crate::state::Player;

use super::{CombatEvent, EffectChain};

/// Result of resolving one attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolveOutcome {
    /// Damage handed to the target after all effects ran (0 when cancelled).
    pub final_damage: i32,

    /// Whether an effect cancelled the attack.
    pub cancelled: bool,

    /// Number of target effects that ran.
    pub effects_processed: usize,
}

/// Resolves attacks against a target's passive effects.
///
/// # Execution Flow
///
/// 1. Create a [`CombatEvent`] from attacker, target and damage
/// 2. If the target has no effects, skip straight to step 4
/// 3. Build an [`EffectChain`] from the target's current effect list and run it
/// 4. Unless the event was cancelled, apply the event's damage to the target
/// 5. Report the outcome
///
/// Attacker-side changes (reflect, lifesteal) happen during step 3, before
/// the target takes any damage.
#[derive(Clone, Copy, Debug, Default)]
pub struct DamageResolver;

impl DamageResolver {
    pub const fn new() -> Self {
        Self
    }

    /// Resolves one attack, reporting each step to `sink`.
    ///
    /// # Errors
    ///
    /// Returns a [`ChainError`] if the chain walk hits a malformed link. Effects
    /// that ran before the bad link may already have changed the attacker; the
    /// target's health is never touched on error.
    pub fn resolve(
        &self,
        attacker: &mut Player,
        target: &mut Player,
        damage: i32,
        sink: &mut dyn ActivationSink,
    ) -> Result<ResolveOutcome, ChainError> {
        let span = debug_span!(
            target: "combat::resolver",
            "resolve",
            attacker = attacker.name(),
            defender = target.name(),
            damage
        );
        let _enter = span.enter();

        let defender: &Player = target;
        let mut event = CombatEvent::new(attacker, defender, damage);

        let effects_processed = if defender.has_effects() {
            let chain = EffectChain::build(defender.effects());
            sink.record(Activation::ChainBuilt {
                target: defender.name().to_owned(),
                links: chain.len(),
            });
            chain.run(&mut event, sink)?.processed
        } else {
            debug!(target: "combat::resolver", "no active effects");
            sink.record(Activation::NoEffects {
                target: defender.name().to_owned(),
            });
            0
        };

        let cancelled = event.is_cancelled();
        let remaining = event.damage();

        let final_damage = if cancelled {
            0
        } else {
            target.take_damage(remaining);
            remaining
        };

        let outcome = ResolveOutcome {
            final_damage,
            cancelled,
            effects_processed,
        };

        info!(
            target: "combat::resolver",
            final_damage,
            cancelled,
            effects_processed,
            target_health = target.health(),
            "attack resolved"
        );
        sink.record(Activation::Resolved {
            target: target.name().to_owned(),
            outcome,
        });

        Ok(outcome)
    }
}

/// Resolves one attack, logging every activation through `tracing`.
pub fn resolve_attack(
    attacker: &mut Player,
    target: &mut Player,
    damage: i32,
) -> Result<ResolveOutcome, ChainError> {
    DamageResolver::new().resolve(attacker, target, damage, &mut TracingSink)
}
