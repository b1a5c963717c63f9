//! Squad-to-formation assignment
//!
//! Glues slot scoring and the Kuhn–Munkres solver together: the goalkeeper
//! slot is set aside, every (outfield slot, player) pair is scored, the
//! matrix is solved, and the result is laid back onto the formation in its
//! display order.

pub mod hungarian;

pub use hungarian::{optimal_assignment, ScoreMatrix};

use crate::config::AssignerConfig;
use crate::models::{Formation, PlayerSuitability, PositionCode};
use crate::scoring::SlotScorer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One slot of the final lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub slot_id: String,
    pub required_code: PositionCode,
    pub label: String,
    /// `None` when the slot stays empty
    pub player_id: Option<String>,
    /// Slot score of the assigned player
    pub score: Option<f64>,
}

/// Slot → player mapping covering every slot of the formation exactly once,
/// in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub formation: String,
    pub slots: Vec<SlotAssignment>,
    pub total_score: f64,
    /// Players that did not get an outfield slot
    pub unassigned_players: Vec<String>,
}

impl Assignment {
    pub fn get(&self, slot_id: &str) -> Option<&SlotAssignment> {
        self.slots.iter().find(|s| s.slot_id == slot_id)
    }

    /// Player in `slot_id`, `None` for an empty or unknown slot.
    pub fn player_for(&self, slot_id: &str) -> Option<&str> {
        self.get(slot_id).and_then(|s| s.player_id.as_deref())
    }

    /// Slot holding `player_id`, if any.
    pub fn slot_of(&self, player_id: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|s| s.player_id.as_deref() == Some(player_id))
            .map(|s| s.slot_id.as_str())
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.player_id.is_some()).count()
    }

    pub fn empty_slots(&self) -> impl Iterator<Item = &SlotAssignment> {
        self.slots.iter().filter(|s| s.player_id.is_none())
    }
}

/// Score matrix for `formation`'s outfield slots (rows, display order)
/// against `players` (columns, input order).
pub fn build_score_matrix(
    formation: &Formation<'_>,
    players: &[PlayerSuitability],
    scorer: &SlotScorer,
) -> ScoreMatrix {
    let outfield: Vec<PositionCode> = formation.outfield_slots().map(|s| s.required_code).collect();
    ScoreMatrix::from_fn(outfield.len(), players.len(), |row, col| {
        scorer.score(outfield[row], &players[col])
    })
}

/// `None` when every id is unique, otherwise the roster with repeats dropped.
fn dedup_players(players: &[PlayerSuitability]) -> Option<Vec<PlayerSuitability>> {
    let mut seen = HashSet::with_capacity(players.len());
    if players.iter().all(|p| seen.insert(p.player_id.as_str())) {
        return None;
    }

    seen.clear();
    let unique = players
        .iter()
        .filter(|p| {
            let first = seen.insert(p.player_id.as_str());
            if !first {
                tracing::warn!(player = %p.player_id, "duplicate player id ignored");
            }
            first
        })
        .cloned()
        .collect();
    Some(unique)
}

/// Optimal assignment of `players` onto `formation`.
///
/// The goalkeeper slot is never filled here. When there are fewer players
/// than outfield slots the remaining slots stay empty; when there are more,
/// the surplus is reported in `unassigned_players`. A repeated `player_id`
/// is ignored after its first occurrence.
pub fn assign_formation(
    formation: &Formation<'_>,
    players: &[PlayerSuitability],
    config: &AssignerConfig,
) -> Assignment {
    let deduped = dedup_players(players);
    let players: &[PlayerSuitability] = deduped.as_deref().unwrap_or(players);

    let scorer = SlotScorer::from_config(config);
    let scores = build_score_matrix(formation, players, &scorer);
    let rows = optimal_assignment(&scores, config.padding);

    let mut taken = vec![false; players.len()];
    let mut outfield_rows = rows.iter().copied().enumerate();
    let mut total_score = 0.0;

    let slots: Vec<SlotAssignment> = formation
        .slots
        .iter()
        .map(|slot| {
            let (player_id, score) = if slot.is_goalkeeper() {
                (None, None)
            } else {
                match outfield_rows.next() {
                    Some((row, Some(col))) => {
                        let score = scores.get(row, col);
                        taken[col] = true;
                        total_score += score;
                        (Some(players[col].player_id.clone()), Some(score))
                    }
                    _ => (None, None),
                }
            };
            SlotAssignment {
                slot_id: slot.slot_id.to_string(),
                required_code: slot.required_code,
                label: slot.label.to_string(),
                player_id,
                score,
            }
        })
        .collect();

    let unassigned_players = players
        .iter()
        .zip(&taken)
        .filter(|(_, taken)| !**taken)
        .map(|(p, _)| p.player_id.clone())
        .collect();

    tracing::debug!(
        formation = formation.name,
        players = players.len(),
        total_score,
        "formation assignment complete"
    );

    Assignment { formation: formation.name.to_string(), slots, total_score, unassigned_players }
}
