//! Slot suitability scoring
//!
//! Collapses a player's per-position suitability table into one score for a
//! slot's required code. Classifier labels and formation slot labels do not
//! line up one to one (a classifier may never emit `LWB`), so scoring walks
//! a fallback chain instead of returning zero on a label miss:
//!
//! 1. exact code
//! 2. first present code from [`similar_positions`]
//! 3. `ST` for striker aliases (`CF`, `LF`, `RF`, `LS`, `RS`)
//! 4. best score of the player, damped

pub mod similarity;

pub use similarity::similar_positions;

use crate::config::AssignerConfig;
use crate::models::{PlayerSuitability, PositionCode};

/// Which rule of the fallback chain produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    Exact,
    Similar(PositionCode),
    StrikerAlias,
    Damped,
    Empty,
}

#[derive(Debug, Clone, Copy)]
pub struct SlotScorer {
    damping_factor: f64,
}

impl Default for SlotScorer {
    fn default() -> Self {
        Self::from_config(&AssignerConfig::default())
    }
}

impl SlotScorer {
    pub fn new(damping_factor: f64) -> Self {
        Self { damping_factor }
    }

    pub fn from_config(config: &AssignerConfig) -> Self {
        Self::new(config.damping_factor)
    }

    pub fn damping_factor(&self) -> f64 {
        self.damping_factor
    }

    /// Score `suitability` against a slot requiring `required`.
    pub fn score(&self, required: PositionCode, suitability: &PlayerSuitability) -> f64 {
        self.score_with_source(required, suitability).0
    }

    pub fn score_with_source(
        &self,
        required: PositionCode,
        suitability: &PlayerSuitability,
    ) -> (f64, ScoreSource) {
        if let Some(score) = suitability.get(required) {
            return (score, ScoreSource::Exact);
        }

        // Entry 0 is the code itself, already handled above
        for &candidate in similar_positions(required).iter().skip(1) {
            if let Some(score) = suitability.get(candidate) {
                return (score, ScoreSource::Similar(candidate));
            }
        }

        if required.is_striker_alias() {
            if let Some(score) = suitability.get(PositionCode::ST) {
                return (score, ScoreSource::StrikerAlias);
            }
        }

        match suitability.max_score() {
            Some(best) => {
                tracing::trace!(
                    player = %suitability.player_id,
                    slot = %required,
                    best,
                    "no position match, using damped fallback"
                );
                (best * self.damping_factor, ScoreSource::Damped)
            }
            None => (0.0, ScoreSource::Empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PositionCode::*;

    fn player(pairs: &[(PositionCode, f64)]) -> PlayerSuitability {
        PlayerSuitability::from_pairs("p", pairs.iter().copied())
    }

    #[test]
    fn test_exact_code_wins() {
        let p = player(&[(CM, 0.3), (CDM, 0.5)]);
        assert_eq!(SlotScorer::default().score_with_source(CDM, &p), (0.5, ScoreSource::Exact));
    }

    #[test]
    fn test_fallback_respects_table_order() {
        // CDM -> [CDM, CM, CB]: CM comes first even though CB scores higher
        let p = player(&[(CM, 0.2), (CB, 0.7)]);
        assert_eq!(
            SlotScorer::default().score_with_source(CDM, &p),
            (0.2, ScoreSource::Similar(CM))
        );

        let p = player(&[(CM, 0.6), (CB, 0.3)]);
        assert_eq!(SlotScorer::default().score(CDM, &p), 0.6);

        let p = player(&[(CB, 0.3), (ST, 0.9)]);
        assert_eq!(SlotScorer::default().score(CDM, &p), 0.3);
    }

    #[test]
    fn test_striker_alias_uses_st() {
        let p = player(&[(ST, 0.6)]);
        // CF reaches ST through the similarity table already
        assert_eq!(SlotScorer::default().score(CF, &p), 0.6);
        // LF has no ST entry in the table, only the alias rule covers it
        assert_eq!(
            SlotScorer::default().score_with_source(LF, &p),
            (0.6, ScoreSource::StrikerAlias)
        );
    }

    #[test]
    fn test_damped_fallback() {
        let p = player(&[(ST, 0.8)]);
        let (score, source) = SlotScorer::default().score_with_source(GK, &p);
        assert!((score - 0.2).abs() < 1e-12);
        assert_eq!(source, ScoreSource::Damped);

        let p = player(&[(ST, 0.8), (LW, 0.1)]);
        assert!((SlotScorer::default().score(LWB, &p) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_damping_factor_is_configurable() {
        let p = player(&[(ST, 0.8)]);
        assert_eq!(SlotScorer::from_config(&AssignerConfig::strict()).score(CB, &p), 0.0);
        assert!((SlotScorer::new(0.5).score(CB, &p) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty_suitability_scores_zero() {
        let p = player(&[]);
        assert_eq!(SlotScorer::default().score_with_source(ST, &p), (0.0, ScoreSource::Empty));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let p = player(&[(CM, 0.4), (CAM, 0.4), (CB, 0.2)]);
        let scorer = SlotScorer::default();
        for code in PositionCode::ALL {
            assert_eq!(scorer.score(code, &p), scorer.score(code, &p.clone()));
        }
    }
}
