//! Position recommendation for a single player
//!
//! Ranks a player's sharpened distribution, then picks the best-ranked
//! position the chosen formation actually plays (falling back to the overall
//! favourite).

use super::{sharpen, top_positions, AttributeVector, SuitabilityProvider};
use crate::config::AssignerConfig;
use crate::models::{FormationKind, PositionCode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPosition {
    pub code: PositionCode,
    pub probability: f64,
    /// Formation-aware display label
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub formation: FormationKind,
    pub ranked: Vec<RankedPosition>,
    pub best: PositionCode,
    pub best_probability: f64,
    /// Slot code to highlight on the formation diagram
    pub highlight_code: PositionCode,
}

/// Map a classifier label onto the slot code used by the pitch diagram.
pub fn highlight_code(code: PositionCode) -> PositionCode {
    match code {
        PositionCode::LW => PositionCode::LM,
        PositionCode::RW => PositionCode::RM,
        PositionCode::CF => PositionCode::ST,
        other => other,
    }
}

/// Pick from `ranked` (highest first). `None` when `ranked` is empty.
pub fn recommend_for_formation(
    ranked: &[(PositionCode, f64)],
    formation: FormationKind,
) -> Option<Recommendation> {
    let allowed = formation.allowed();
    let &(best, best_probability) =
        ranked.iter().find(|(code, _)| allowed.contains(code)).or_else(|| ranked.first())?;

    Some(Recommendation {
        formation,
        ranked: ranked
            .iter()
            .map(|&(code, probability)| RankedPosition {
                code,
                probability,
                label: formation.position_label(code),
            })
            .collect(),
        best,
        best_probability,
        highlight_code: highlight_code(best),
    })
}

/// Provider → sharpen → top-N → formation pick.
pub fn recommend_positions<P: SuitabilityProvider + ?Sized>(
    provider: &P,
    attributes: &AttributeVector,
    formation: FormationKind,
    config: &AssignerConfig,
) -> Option<Recommendation> {
    let distribution = sharpen(&provider.suitability(attributes), config.sharpen_gamma);
    let ranked = top_positions(&distribution, config.top_n);
    let recommendation = recommend_for_formation(&ranked, formation);
    if let Some(rec) = &recommendation {
        tracing::debug!(
            formation = %formation,
            best = %rec.best,
            probability = rec.best_probability,
            "position recommendation"
        );
    }
    recommendation
}
