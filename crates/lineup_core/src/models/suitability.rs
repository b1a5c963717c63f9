use super::position::PositionCode;
use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Per-position suitability for one player.
///
/// Scores are probability-like values in [0,1]. The map need not cover
/// every position code. Ordered so that every scan over it is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSuitability {
    pub player_id: String,
    pub scores: BTreeMap<PositionCode, f64>,
}

impl PlayerSuitability {
    pub fn new(player_id: impl Into<String>, scores: BTreeMap<PositionCode, f64>) -> Self {
        Self { player_id: player_id.into(), scores }
    }

    /// Build from typed pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs(
        player_id: impl Into<String>,
        pairs: impl IntoIterator<Item = (PositionCode, f64)>,
    ) -> Self {
        Self::new(player_id, pairs.into_iter().collect())
    }

    /// Decode classifier output labels (e.g. `{"ST": 0.78, "CF": 0.10}`).
    ///
    /// Unknown labels, scores outside [0,1] (or non-finite) and two labels
    /// naming the same code (`"ST"` and `"st"`) are rejected. Labels are
    /// checked in sorted order so the reported error does not depend on map
    /// iteration order.
    pub fn from_labels(player_id: impl Into<String>, labels: &HashMap<String, f64>) -> Result<Self> {
        let player_id = player_id.into();
        let mut sorted: Vec<(&String, f64)> = labels.iter().map(|(k, &v)| (k, v)).collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut scores = BTreeMap::new();
        for (label, score) in sorted {
            let code: PositionCode = label.parse()?;
            if !score.is_finite() || !(0.0..=1.0).contains(&score) {
                return Err(LineupError::InvalidScore {
                    player_id,
                    position: label.clone(),
                    score,
                });
            }
            if scores.insert(code, score).is_some() {
                return Err(LineupError::DuplicatePosition {
                    player_id,
                    position: code.to_string(),
                });
            }
        }
        Ok(Self { player_id, scores })
    }

    pub fn get(&self, code: PositionCode) -> Option<f64> {
        self.scores.get(&code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Highest score across all positions, `None` for an empty table.
    pub fn max_score(&self) -> Option<f64> {
        self.scores.values().copied().reduce(f64::max)
    }

    /// Position with the highest score. Ties go to the earlier code.
    pub fn best(&self) -> Option<(PositionCode, f64)> {
        self.scores
            .iter()
            .fold(None, |best: Option<(PositionCode, f64)>, (&code, &score)| match best {
                Some((_, s)) if s >= score => best,
                _ => Some((code, score)),
            })
    }
}
