//! Passive effects that intercept incoming attacks.
//!
//! An effect inspects a [`CombatEvent`](crate::combat::CombatEvent) and performs
//! exactly one state transition on it. Effects never decide what runs next;
//! propagation and cancellation are owned by [`EffectChain`](crate::combat::EffectChain).
//!
//! # Architecture
//!
//! This module uses an **Enum + Struct hybrid** approach:
//! - Individual effect types are structs (`BlockEffect`, `ReflectEffect`, ...)
//! - The [`Effect`] enum wraps them and dispatches with a static `match`
//! - [`Effect::Custom`] carries an [`EffectHandler`] trait object for
//!   behavior defined outside this crate
//!
//! Effects are immutable configuration. They hold no per-attack state, so a
//! single instance can be cloned onto many players and reused across attacks.

mod block;
mod custom;
mod kinds;
mod lifesteal;
mod reflect;

pub use block::BlockEffect;
pub use custom::EffectHandler;
pub use kinds::{Effect, EffectKind};
pub use lifesteal::LifestealEffect;
pub use reflect::ReflectEffect;

/// Scales a damage value by `ratio`, truncating toward zero.
///
/// `floor(20 * 0.5) = 10`, `floor(25 * 0.2) = 5`. Out-of-range products
/// saturate at the `i32` limits.
pub(crate) fn scale_damage(damage: i32, ratio: f64) -> i32 {
    (f64::from(damage) * ratio) as i32
}
