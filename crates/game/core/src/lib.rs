//! Deterministic damage resolution for turn-based combat.
//!
//! `combat-core` decides what happens when an attacker hits a defender whose
//! passive effects (block, reflect, lifesteal, or custom handlers) may
//! intercept, modify, or cancel the incoming damage. All health mutation for
//! an attack flows through [`combat::DamageResolver`]; callers observe each
//! step through an [`observe::ActivationSink`].
pub mod combat;
pub mod config;
pub mod effect;
pub mod error;
pub mod observe;
pub mod state;

pub use combat::{
    ChainReport, CombatEvent, DamageResolver, EffectChain, ResolveOutcome, resolve_attack,
};
pub use config::CombatConfig;
pub use effect::{
    BlockEffect, Effect, EffectHandler, EffectKind, LifestealEffect, ReflectEffect,
};
pub use error::ChainError;
pub use observe::{Activation, ActivationLog, ActivationSink, TracingSink};
pub use state::Player;
