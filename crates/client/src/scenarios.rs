//! Scripted attacks that exercise the effect pipeline.
use combat_core::{
    ActivationLog, CombatConfig, DamageResolver, Effect, EffectKind, Player, ResolveOutcome,
    TracingSink,
};
use serde::Serialize;

use crate::config::ScenarioSelection;

/// Name and health of one participant around a single attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Combatant {
    pub name: String,
    pub health_before: i32,
    pub health_after: i32,
}

/// Everything observed while running one scenario.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub scenario: ScenarioSelection,
    pub title: &'static str,
    pub damage: i32,
    pub effects: Vec<EffectKind>,
    pub attacker: Combatant,
    pub target: Combatant,
    pub outcome: ResolveOutcome,
    pub activations: ActivationLog,
}

/// Players shared by every scenario in one run.
///
/// State carries over: the Goblin's health after scenario A is its health
/// going into B, and C reuses B's Paladin.
#[derive(Debug)]
pub struct Roster {
    pub goblin: Player,
    pub knight: Player,
    pub paladin: Player,
}

impl Roster {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            goblin: Player::new("Goblin", 50),
            knight: Player::new("Knight", 100)
                .with_effect(Effect::reflect_default(config))
                .with_effect(Effect::lifesteal_default(config)),
            paladin: Player::new("Paladin", 120)
                .with_effect(Effect::block())
                .with_effect(Effect::lifesteal(1.0)),
        }
    }
}

/// Runs every scenario included in `selection`, in order.
pub fn run(
    selection: ScenarioSelection,
    config: &CombatConfig,
) -> anyhow::Result<Vec<ScenarioReport>> {
    let mut roster = Roster::new(config);
    let mut reports = Vec::new();

    if selection.includes(ScenarioSelection::A) {
        reports.push(scenario_a(&mut roster)?);
    }
    if selection.includes(ScenarioSelection::B) {
        reports.push(scenario_b(&mut roster)?);
    }
    if selection.includes(ScenarioSelection::C) {
        reports.push(scenario_c(&mut roster)?);
    }

    Ok(reports)
}

/// Goblin hits Knight [Reflect, Lifesteal] at the configured ratios.
pub fn scenario_a(roster: &mut Roster) -> anyhow::Result<ScenarioReport> {
    attack(
        ScenarioSelection::A,
        "Goblin attacks Knight (reflect, lifesteal)",
        &mut roster.goblin,
        &mut roster.knight,
        20,
    )
}

/// Goblin hits Paladin [Block, Lifesteal(1.0)]; Block stops the chain.
pub fn scenario_b(roster: &mut Roster) -> anyhow::Result<ScenarioReport> {
    attack(
        ScenarioSelection::B,
        "Goblin attacks Paladin (block, lifesteal)",
        &mut roster.goblin,
        &mut roster.paladin,
        30,
    )
}

/// Paladin swaps its list for [Reflect(0.2), Vampirism(1.0)], dropping Block.
pub fn scenario_c(roster: &mut Roster) -> anyhow::Result<ScenarioReport> {
    let paladin = &mut roster.paladin;
    let removed = paladin.effects().len();
    paladin.clear_effects();
    paladin.equip(Effect::reflect(0.2));
    paladin.equip(Effect::vampirism(1.0));
    tracing::info!(
        target: "combat::demo",
        player = paladin.name(),
        removed,
        effects = paladin.effects().len(),
        "effect list replaced"
    );

    attack(
        ScenarioSelection::C,
        "Goblin attacks Paladin (reflect, vampirism)",
        &mut roster.goblin,
        paladin,
        25,
    )
}

fn attack(
    scenario: ScenarioSelection,
    title: &'static str,
    attacker: &mut Player,
    target: &mut Player,
    damage: i32,
) -> anyhow::Result<ScenarioReport> {
    tracing::info!(target: "combat::demo", %scenario, title, "running scenario");

    let attacker_before = attacker.health();
    let target_before = target.health();
    let effects = target.effects().iter().map(Effect::kind).collect();

    let mut sinks = (ActivationLog::new(), TracingSink);
    let outcome = DamageResolver::new().resolve(attacker, target, damage, &mut sinks)?;

    Ok(ScenarioReport {
        scenario,
        title,
        damage,
        effects,
        attacker: Combatant {
            name: attacker.name().to_owned(),
            health_before: attacker_before,
            health_after: attacker.health(),
        },
        target: Combatant {
            name: target.name().to_owned(),
            health_before: target_before,
            health_after: target.health(),
        },
        outcome,
        activations: sinks.0,
    })
}
