//! Report rendering.
use std::io::Write;

use combat_core::Activation;

use crate::config::OutputFormat;
use crate::scenarios::ScenarioReport;

/// Writes `reports` to `out` in the requested format.
pub fn write_reports(
    out: &mut impl Write,
    reports: &[ScenarioReport],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for report in reports {
                write_text(out, report)?;
            }
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, report: &ScenarioReport) -> anyhow::Result<()> {
    writeln!(out, "=== Scenario {}: {} ===", report.scenario, report.title)?;
    writeln!(out, "damage: {}", report.damage)?;
    let effects: Vec<&'static str> = report
        .effects
        .iter()
        .map(|kind| <&'static str>::from(*kind))
        .collect();
    writeln!(out, "target effects: [{}]", effects.join(", "))?;

    for activation in report.activations.activations() {
        if let Some(line) = describe(activation) {
            writeln!(out, "  {line}")?;
        }
    }

    for who in [&report.attacker, &report.target] {
        writeln!(
            out,
            "{}: {} -> {}",
            who.name, who.health_before, who.health_after
        )?;
    }
    writeln!(
        out,
        "final damage {} (cancelled: {}, effects run: {})",
        report.outcome.final_damage, report.outcome.cancelled, report.outcome.effects_processed
    )?;
    writeln!(out)?;
    Ok(())
}

fn describe(activation: &Activation) -> Option<String> {
    let line = match activation {
        Activation::NoEffects { target } => format!("{target} has no effects"),
        Activation::ChainBuilt { target, links } => {
            format!("{target}: chain of {links} effect(s)")
        }
        Activation::Processed {
            index,
            effect,
            damage_before,
            damage_after,
            cancelled,
        } => format!(
            "[{index}] {effect}: damage {damage_before} -> {damage_after}{}",
            if *cancelled { " (cancelled)" } else { "" }
        ),
        Activation::Reflected { attacker, amount } => format!("{attacker} takes {amount} reflected"),
        Activation::Healed { attacker, amount } => format!("{attacker} heals {amount}"),
        Activation::Halted { index } => format!("chain halted before [{index}]"),
        Activation::Resolved { .. } => return None,
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioSelection;
    use crate::scenarios;
    use combat_core::CombatConfig;

    fn render(format: OutputFormat) -> String {
        let reports = scenarios::run(ScenarioSelection::All, &CombatConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_reports(&mut buf, &reports, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_report_lists_each_scenario() {
        let text = render(OutputFormat::Text);

        assert!(text.contains("=== Scenario a:"));
        assert!(text.contains("=== Scenario c:"));
        assert!(text.contains("target effects: [block, lifesteal]"));
        assert!(text.contains("chain halted before [1]"));
        assert!(text.contains("Knight: 100 -> 80"));
    }

    #[test]
    fn json_report_is_an_array_of_scenarios() {
        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        let reports = json.as_array().unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0]["scenario"], "a");
        assert_eq!(reports[1]["outcome"]["cancelled"], true);
        assert_eq!(reports[2]["target"]["health_after"], 95);
        assert_eq!(reports[2]["activations"][0]["kind"], "chain_built");
    }
}
