//! Lineup CLI library
//!
//! File loading and text rendering behind the `lineup` binary.

use anyhow::{Context, Result};
use lineup_core::api::{resolve_roster, RosterEntry};
use lineup_core::suitability::{recommend_positions, Recommendation};
use lineup_core::{
    assign_with_config, AssignerConfig, Assignment, AttributeVector, FormationKind,
    WeightedProfileProvider,
};
use std::fs;
use std::path::Path;

/// Load a YAML/JSON config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AssignerConfig> {
    match path {
        Some(path) => AssignerConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(AssignerConfig::default()),
    }
}

/// Roster file: a JSON array of roster entries.
pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    serde_json::from_str(&text).context("Failed to parse roster JSON")
}

pub fn run_assign(roster: &Path, formation: &str, config: &AssignerConfig) -> Result<Assignment> {
    let entries = load_roster(roster)?;
    let provider = WeightedProfileProvider::new(config.softmax_temperature);
    let players = resolve_roster(&entries, &provider, config).context("Invalid roster")?;
    tracing::info!(players = players.len(), formation, "assigning roster");
    Ok(assign_with_config(formation, &players, config))
}

pub fn run_recommend(
    attributes: &Path,
    formation: &str,
    config: &AssignerConfig,
) -> Result<Option<Recommendation>> {
    let text = fs::read_to_string(attributes)
        .with_context(|| format!("Failed to read attributes file: {}", attributes.display()))?;
    let attrs: AttributeVector =
        serde_json::from_str(&text).context("Failed to parse attributes JSON")?;
    let provider = WeightedProfileProvider::new(config.softmax_temperature);
    Ok(recommend_positions(&provider, &attrs, FormationKind::resolve(formation), config))
}

pub fn render_assignment(assignment: &Assignment) -> String {
    let mut lines = vec![format!("Formation {}", assignment.formation)];
    lines.extend(assignment.slots.iter().map(|slot| match (&slot.player_id, slot.score) {
        (Some(player), Some(score)) => {
            format!("  {:<5} {:<4} {:<20} {:.3}", slot.slot_id, slot.label, player, score)
        }
        _ => format!("  {:<5} {:<4} -", slot.slot_id, slot.label),
    }));
    lines.push(format!("Total score: {:.3}", assignment.total_score));
    if !assignment.unassigned_players.is_empty() {
        lines.push(format!("Bench: {}", assignment.unassigned_players.join(", ")));
    }
    to_text(lines)
}

pub fn render_recommendation(recommendation: &Recommendation) -> String {
    let mut lines = vec![format!("Formation {}", recommendation.formation)];
    lines.extend(recommendation.ranked.iter().enumerate().map(|(rank, position)| {
        format!(
            "  {}. {:<4} {:<22} {:.1}%",
            rank + 1,
            position.code,
            position.label,
            position.probability * 100.0
        )
    }));
    lines.push(format!(
        "Recommended: {} ({:.1}%), highlight slot {}",
        recommendation.best,
        recommendation.best_probability * 100.0,
        recommendation.highlight_code
    ));
    to_text(lines)
}

pub fn render_formations() -> String {
    to_text(FormationKind::ALL.iter().map(|kind| {
        let slots: Vec<String> = kind
            .slots()
            .iter()
            .map(|s| format!("{}:{}", s.slot_id, s.required_code))
            .collect();
        format!("{:<14} {}", kind.code(), slots.join(" "))
    }))
}

/// Newline-terminated lines.
fn to_text(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
