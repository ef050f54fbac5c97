//! Effect enum and dispatcher.

use std::sync::Arc;

use crate::combat::CombatEvent;
use crate::config::CombatConfig;
use crate::observe::ActivationSink;

use super::block::BlockEffect;
use super::custom::EffectHandler;
use super::lifesteal::LifestealEffect;
use super::reflect::ReflectEffect;

/// A passive effect equipped on a player.
///
/// Each variant delegates to its corresponding struct implementation.
#[derive(Clone, Debug)]
pub enum Effect {
    /// Zero the damage and cancel the event.
    Block(BlockEffect),

    /// Damage the attacker by a fraction of the current damage.
    Reflect(ReflectEffect),

    /// Heal the attacker by a fraction of the current damage.
    Lifesteal(LifestealEffect),

    /// Externally defined behavior.
    Custom(Arc<dyn EffectHandler>),
}

/// Variant tag of an [`Effect`], used for logging and activation records.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectKind {
    Block,
    Reflect,
    Lifesteal,
    Custom,
}

impl Effect {
    pub const fn block() -> Self {
        Self::Block(BlockEffect)
    }

    pub const fn reflect(ratio: f64) -> Self {
        Self::Reflect(ReflectEffect::new(ratio))
    }

    pub const fn lifesteal(ratio: f64) -> Self {
        Self::Lifesteal(LifestealEffect::new(ratio))
    }

    /// Alias for [`Effect::lifesteal`].
    pub const fn vampirism(ratio: f64) -> Self {
        Self::lifesteal(ratio)
    }

    /// Reflect using the configured default ratio.
    pub const fn reflect_default(config: &CombatConfig) -> Self {
        Self::Reflect(ReflectEffect::from_config(config))
    }

    /// Lifesteal using the configured default ratio.
    pub const fn lifesteal_default(config: &CombatConfig) -> Self {
        Self::Lifesteal(LifestealEffect::from_config(config))
    }

    pub fn custom(handler: impl EffectHandler + 'static) -> Self {
        Self::Custom(Arc::new(handler))
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Block(_) => EffectKind::Block,
            Self::Reflect(_) => EffectKind::Reflect,
            Self::Lifesteal(_) => EffectKind::Lifesteal,
            Self::Custom(_) => EffectKind::Custom,
        }
    }

    /// Name for logs: the kind for built-ins, the handler's name for custom effects.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Custom(handler) => handler.name(),
            other => other.kind().into(),
        }
    }

    /// Applies this effect's state transition to the event.
    ///
    /// Does not check cancellation; that is the chain's job.
    pub fn process(&self, event: &mut CombatEvent<'_>, sink: &mut dyn ActivationSink) {
        match self {
            Self::Block(e) => e.process(event),
            Self::Reflect(e) => e.process(event, sink),
            Self::Lifesteal(e) => e.process(event, sink),
            Self::Custom(handler) => handler.process(event, sink),
        }
    }
}
