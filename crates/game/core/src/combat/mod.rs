//! Damage resolution pipeline.
//!
//! One attack flows through three stages:
//!
//! ```text
//! DamageResolver::resolve
//!   → CombatEvent::new(attacker, target, damage)
//!   → EffectChain::build(target.effects())      (skipped when the list is empty)
//!   → EffectChain::run(&mut event)              (Block / Reflect / Lifesteal / Custom)
//!   → target.take_damage(event.damage())        (skipped when cancelled)
//! ```
//!
//! # Ordering
//!
//! - Effects run in the target's list order, each exactly once
//! - Cancellation is checked before every effect, including the first
//! - Attacker side effects (reflect, lifesteal) land before the target is damaged,
//!   and each reads the damage value as it stands when that effect runs
//!
//! The event and the chain are owned by a single `resolve` call and never
//! outlive it. Attacks must be resolved one at a time.

mod chain;
mod event;
mod resolver;

pub use chain::{ChainReport, EffectChain};
pub use event::CombatEvent;
pub use resolver::{DamageResolver, ResolveOutcome, resolve_attack};
