//! Block effect implementation.

use crate::combat::CombatEvent;

/// Absorb the attack entirely.
///
/// Sets damage to zero and cancels the event, so nothing after it in the
/// chain runs and the target takes no damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockEffect;

impl BlockEffect {
    pub fn process(&self, event: &mut CombatEvent<'_>) {
        event.set_damage(0);
        event.cancel();
    }
}
