//! Player health bookkeeping and equipped effect list.

use crate::effect::{Effect, EffectKind};

/// A combatant with unbounded health and an ordered list of passive effects.
///
/// Health is a plain signed counter: it may go negative and has no ceiling.
/// Defeat handling is left to the caller.
///
/// The effect list order is the order effects intercept incoming attacks.
/// Duplicates are allowed and the list can be edited freely between attacks;
/// each attack rebuilds its chain from whatever the list holds at that moment.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    health: i32,
    effects: Vec<Effect>,
}

impl Player {
    /// Creates a player with no equipped effects.
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health,
            effects: Vec::new(),
        }
    }

    /// Builder: append an effect to the end of the list.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Subtracts `amount` from health. Non-positive amounts are ignored.
    pub fn take_damage(&mut self, amount: i32) {
        if amount > 0 {
            self.health = self.health.saturating_sub(amount);
        }
    }

    /// Adds `amount` to health. Non-positive amounts are ignored.
    pub fn heal(&mut self, amount: i32) {
        if amount > 0 {
            self.health = self.health.saturating_add(amount);
        }
    }

    // ========================================================================
    // Effect list
    // ========================================================================

    /// Equipped effects in interception order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Direct mutable access for arbitrary reordering.
    pub fn effects_mut(&mut self) -> &mut Vec<Effect> {
        &mut self.effects
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Appends an effect to the end of the list.
    pub fn equip(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Inserts an effect at `index`, clamped to the end of the list.
    pub fn insert_effect(&mut self, index: usize, effect: Effect) {
        let index = index.min(self.effects.len());
        self.effects.insert(index, effect);
    }

    /// Removes the effect at `index`, if any.
    pub fn unequip(&mut self, index: usize) -> Option<Effect> {
        (index < self.effects.len()).then(|| self.effects.remove(index))
    }

    /// Removes every effect of the given kind and returns how many were removed.
    pub fn unequip_kind(&mut self, kind: EffectKind) -> usize {
        let before = self.effects.len();
        self.effects.retain(|effect| effect.kind() != kind);
        before - self.effects.len()
    }

    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_amounts_are_ignored() {
        let mut player = Player::new("Knight", 100);

        player.take_damage(0);
        player.take_damage(-15);
        player.heal(0);
        player.heal(-7);

        assert_eq!(player.health(), 100);
    }

    #[test]
    fn health_is_not_clamped() {
        let mut player = Player::new("Knight", 10);

        player.take_damage(25);
        assert_eq!(player.health(), -15);

        player.heal(200);
        assert_eq!(player.health(), 185);
    }

    #[test]
    fn health_saturates_at_integer_limits() {
        let mut player = Player::new("Lich", i32::MIN + 5);
        player.take_damage(10);
        assert_eq!(player.health(), i32::MIN);
    }

    #[test]
    fn effect_list_editing_preserves_order() {
        let mut player = Player::new("Paladin", 100)
            .with_effect(Effect::block())
            .with_effect(Effect::lifesteal(1.0));

        player.insert_effect(1, Effect::reflect(0.2));
        assert_eq!(
            player.effects().iter().map(Effect::kind).collect::<Vec<_>>(),
            vec![EffectKind::Block, EffectKind::Reflect, EffectKind::Lifesteal]
        );

        let removed = player.unequip(0);
        assert_eq!(removed.map(|e| e.kind()), Some(EffectKind::Block));
        assert!(player.unequip(10).is_none());

        player.insert_effect(99, Effect::block());
        assert_eq!(player.effects().last().map(Effect::kind), Some(EffectKind::Block));
    }

    #[test]
    fn unequip_kind_removes_duplicates() {
        let mut player = Player::new("Paladin", 100)
            .with_effect(Effect::block())
            .with_effect(Effect::reflect(0.5))
            .with_effect(Effect::block());

        assert_eq!(player.unequip_kind(EffectKind::Block), 2);
        assert_eq!(player.effects().len(), 1);
        assert_eq!(player.unequip_kind(EffectKind::Block), 0);

        player.clear_effects();
        assert!(!player.has_effects());
    }
}
