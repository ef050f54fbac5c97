//! Extension point for effects defined outside this crate.

use crate::combat::CombatEvent;
use crate::observe::ActivationSink;

/// Behavior plugged into an effect chain through [`Effect::Custom`](super::Effect::Custom).
///
/// Handlers follow the same contract as the built-in effects: one state
/// transition per call, no per-attack state kept on `self`. The chain checks
/// cancellation before calling `process`, so a handler never sees a
/// cancelled event.
pub trait EffectHandler: Send + Sync + core::fmt::Debug {
    /// Returns a short name for this handler (used in logging).
    fn name(&self) -> &'static str;

    /// Applies this handler to the in-flight event.
    fn process(&self, event: &mut CombatEvent<'_>, sink: &mut dyn ActivationSink);
}
