//! The in-flight record of one attack.

use crate::state::Player;

/// Mutable state of a single attack as it travels through the target's effects.
///
/// Created once per attack by the resolver, passed by exclusive reference to
/// each effect, and dropped before the target's health is touched. The
/// attacker and target bindings are fixed for the event's lifetime; effects
/// reach the attacker through [`CombatEvent::attacker_mut`].
///
/// No validation happens on construction: zero or negative damage is carried
/// as-is and simply has no effect on health downstream.
#[derive(Debug)]
pub struct CombatEvent<'a> {
    attacker: &'a mut Player,
    target: &'a Player,
    damage: i32,
    cancelled: bool,
}

impl<'a> CombatEvent<'a> {
    pub fn new(attacker: &'a mut Player, target: &'a Player, damage: i32) -> Self {
        Self {
            attacker,
            target,
            damage,
            cancelled: false,
        }
    }

    pub fn attacker(&self) -> &Player {
        &*self.attacker
    }

    /// Mutable access to the attacker for side effects such as reflect and lifesteal.
    pub fn attacker_mut(&mut self) -> &mut Player {
        &mut *self.attacker
    }

    pub fn target(&self) -> &Player {
        self.target
    }

    /// Current damage value, including changes made by earlier effects.
    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn set_damage(&mut self, damage: i32) {
        self.damage = damage;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Cancels the event. There is no way to undo this.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}
