//! Per-attack effect chain.
//!
//! The chain is a transient, singly-linked view over a target's effect list.
//! Links live in the chain itself, never on the effects, so the same effect
//! instance can sit in any number of chains without its neighbors leaking
//! between attacks or players.

use tracing::{debug, trace};

use crate::effect::{Effect, EffectKind};
use crate::error::ChainError;
use crate::observe::{Activation, ActivationSink};

use super::CombatEvent;

#[derive(Clone, Copy, Debug)]
struct Link<'a> {
    effect: &'a Effect,
    next: Option<usize>,
}

/// Ordered invocation sequence built from one effect list for one attack.
///
/// # Semantics
///
/// Starting at the head, each step:
/// - Stops if the event is already cancelled (checked before every effect,
///   including the first)
/// - Otherwise runs the current effect, which may cancel the event
/// - Moves to the next link, or stops at the tail
///
/// This is a short-circuited walk: at most one pass, no branching, no
/// revisits. Traversal is bounded by the number of links, so a malformed
/// chain reports [`ChainError::Cycle`] instead of looping.
#[derive(Debug)]
pub struct EffectChain<'a> {
    links: Vec<Link<'a>>,
}

/// Summary of one chain walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainReport {
    /// Number of effects that ran.
    pub processed: usize,

    /// Index of the first link skipped because the event was cancelled.
    pub halted_at: Option<usize>,
}

impl<'a> EffectChain<'a> {
    /// Links `effects` in list order. The last link is terminal.
    ///
    /// Any list length is accepted, including empty lists and duplicates.
    pub fn build(effects: &'a [Effect]) -> Self {
        let links = effects
            .iter()
            .enumerate()
            .map(|(index, effect)| Link {
                effect,
                next: (index + 1 < effects.len()).then_some(index + 1),
            })
            .collect();

        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Effect kinds in invocation order.
    pub fn kinds(&self) -> impl Iterator<Item = EffectKind> + '_ {
        self.links.iter().map(|link| link.effect.kind())
    }

    /// Drives `event` through the chain from the head.
    ///
    /// The chain holds no state between calls; running it again on a fresh
    /// event gives the same result.
    pub fn run(
        &self,
        event: &mut CombatEvent<'_>,
        sink: &mut dyn ActivationSink,
    ) -> Result<ChainReport, ChainError> {
        let len = self.links.len();
        let mut report = ChainReport::default();
        let mut cursor = (len > 0).then_some(0);
        let mut steps = 0;

        while let Some(index) = cursor {
            if steps == len {
                return Err(ChainError::Cycle { index, steps });
            }
            steps += 1;

            if event.is_cancelled() {
                debug!(
                    target: "combat::chain",
                    index,
                    remaining = len - index,
                    "event cancelled, halting chain"
                );
                sink.record(Activation::Halted { index });
                report.halted_at = Some(index);
                break;
            }

            let link = &self.links[index];
            let damage_before = event.damage();
            link.effect.process(event, sink);
            report.processed += 1;

            trace!(
                target: "combat::chain",
                index,
                effect = link.effect.name(),
                damage_before,
                damage_after = event.damage(),
                cancelled = event.is_cancelled(),
                "effect processed"
            );
            sink.record(Activation::Processed {
                index,
                effect: link.effect.kind(),
                damage_before,
                damage_after: event.damage(),
                cancelled: event.is_cancelled(),
            });

            cursor = match link.next {
                Some(next) if next >= len => {
                    return Err(ChainError::DanglingLink { index, next, len });
                }
                next => next,
            };
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EffectHandler;
    use crate::observe::ActivationLog;
    use crate::state::Player;

    #[derive(Debug)]
    struct Halve;

    impl EffectHandler for Halve {
        fn name(&self) -> &'static str {
            "halve"
        }

        fn process(&self, event: &mut CombatEvent<'_>, _sink: &mut dyn ActivationSink) {
            event.set_damage(event.damage() / 2);
        }
    }

    fn goblin() -> Player {
        Player::new("Goblin", 50)
    }

    fn knight() -> Player {
        Player::new("Knight", 100)
    }

    #[test]
    fn links_follow_list_order() {
        let effects = [Effect::reflect(0.5), Effect::block(), Effect::lifesteal(0.4)];
        let chain = EffectChain::build(&effects);

        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.kinds().collect::<Vec<_>>(),
            vec![EffectKind::Reflect, EffectKind::Block, EffectKind::Lifesteal]
        );
        assert_eq!(chain.links[0].next, Some(1));
        assert_eq!(chain.links[1].next, Some(2));
        assert_eq!(chain.links[2].next, None);
    }

    #[test]
    fn empty_chain_processes_nothing() {
        let chain = EffectChain::build(&[]);
        let (mut attacker, target) = (goblin(), knight());
        let mut event = CombatEvent::new(&mut attacker, &target, 20);
        let mut log = ActivationLog::new();

        let report = chain.run(&mut event, &mut log).unwrap();

        assert!(chain.is_empty());
        assert_eq!(report, ChainReport::default());
        assert_eq!(event.damage(), 20);
        assert!(log.is_empty());
    }

    #[test]
    fn block_short_circuits_remaining_links() {
        let effects = [Effect::block(), Effect::reflect(0.5), Effect::lifesteal(1.0)];
        let chain = EffectChain::build(&effects);
        let (mut attacker, target) = (goblin(), knight());
        let mut log = ActivationLog::new();

        let mut event = CombatEvent::new(&mut attacker, &target, 30);
        let report = chain.run(&mut event, &mut log).unwrap();
        assert!(event.is_cancelled());
        assert_eq!(event.damage(), 0);

        assert_eq!(
            report,
            ChainReport {
                processed: 1,
                halted_at: Some(1)
            }
        );
        assert_eq!(log.processed_kinds(), vec![EffectKind::Block]);
        assert_eq!(log.activations().last(), Some(&Activation::Halted { index: 1 }));
        assert_eq!(attacker.health(), 50);
    }

    #[test]
    fn cancelled_event_skips_the_head() {
        let effects = [Effect::reflect(0.5)];
        let chain = EffectChain::build(&effects);
        let (mut attacker, target) = (goblin(), knight());
        let mut log = ActivationLog::new();

        let mut event = CombatEvent::new(&mut attacker, &target, 20);
        event.cancel();
        let report = chain.run(&mut event, &mut log).unwrap();

        assert_eq!(report.processed, 0);
        assert_eq!(report.halted_at, Some(0));
        assert_eq!(attacker.health(), 50);
    }

    #[test]
    fn later_effects_see_earlier_damage_changes() {
        let halve_first = [Effect::custom(Halve), Effect::reflect(1.0)];
        let reflect_first = [Effect::reflect(1.0), Effect::custom(Halve)];

        let mut attacker = goblin();
        let target = knight();
        let chain = EffectChain::build(&halve_first);
        let mut event = CombatEvent::new(&mut attacker, &target, 20);
        chain.run(&mut event, &mut ()).unwrap();
        assert_eq!(event.damage(), 10);
        assert_eq!(attacker.health(), 40);

        let mut attacker = goblin();
        let chain = EffectChain::build(&reflect_first);
        let mut event = CombatEvent::new(&mut attacker, &target, 20);
        chain.run(&mut event, &mut ()).unwrap();
        assert_eq!(event.damage(), 10);
        assert_eq!(attacker.health(), 30);
    }

    #[test]
    fn chain_is_reusable_across_events() {
        let effects = [Effect::reflect(0.5), Effect::lifesteal(0.4)];
        let chain = EffectChain::build(&effects);
        let target = knight();

        let outcomes: Vec<_> = (0..2)
            .map(|_| {
                let mut attacker = goblin();
                let mut log = ActivationLog::new();
                let mut event = CombatEvent::new(&mut attacker, &target, 20);
                let report = chain.run(&mut event, &mut log).unwrap();
                let damage = event.damage();
                (report, damage, attacker.health(), log)
            })
            .collect();

        assert_eq!(outcomes[0], outcomes[1]);
        assert_eq!(outcomes[0].2, 48);
    }

    #[test]
    fn long_lists_link_and_run_every_effect() {
        let effects = vec![Effect::lifesteal(0.0); 100];
        let chain = EffectChain::build(&effects);
        let (mut attacker, target) = (goblin(), knight());
        let mut event = CombatEvent::new(&mut attacker, &target, 10);

        let report = chain.run(&mut event, &mut ()).unwrap();

        assert_eq!(chain.len(), 100);
        assert_eq!(report.processed, 100);
        assert_eq!(report.halted_at, None);
        assert_eq!(event.damage(), 10);
    }

    #[test]
    fn self_referential_links_are_detected() {
        let effects = [Effect::reflect(0.1), Effect::lifesteal(0.1)];
        let mut chain = EffectChain::build(&effects);
        chain.links[1].next = Some(0);

        let (mut attacker, target) = (goblin(), knight());
        let mut event = CombatEvent::new(&mut attacker, &target, 10);

        let err = chain.run(&mut event, &mut ()).unwrap_err();
        assert_eq!(err, ChainError::Cycle { index: 0, steps: 2 });
    }

    #[test]
    fn dangling_links_are_detected() {
        let effects = [Effect::reflect(0.1)];
        let mut chain = EffectChain::build(&effects);
        chain.links[0].next = Some(5);

        let (mut attacker, target) = (goblin(), knight());
        let mut event = CombatEvent::new(&mut attacker, &target, 10);

        let err = chain.run(&mut event, &mut ()).unwrap_err();
        assert_eq!(
            err,
            ChainError::DanglingLink {
                index: 0,
                next: 5,
                len: 1
            }
        );
        // The effect before the bad link already ran.
        assert_eq!(attacker.health(), 49);
    }
}
