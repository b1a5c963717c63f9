//! Built-in weighted-profile suitability provider
//!
//! Each classifier label has an attribute weight profile:
//! - Defenders: tackling, strength and awareness 3x
//! - Midfielders: passing and ball control up to 3x
//! - Wingers: sprint speed and dribbling 3x
//! - Strikers: finishing and shot power 3x
//!
//! A player's fit for a label is the weighted mean of their ratings; the
//! fits are turned into a distribution with a temperature softmax.

use super::attributes::{AttributeVector, ATTRIBUTE_COUNT};
use super::SuitabilityProvider;
use crate::models::PositionCode;
use std::collections::BTreeMap;

/// Labels the provider emits, matching the classifier's label set
pub const PROFILE_LABELS: [PositionCode; 12] = [
    PositionCode::CB,
    PositionCode::LB,
    PositionCode::RB,
    PositionCode::CDM,
    PositionCode::CM,
    PositionCode::CAM,
    PositionCode::LM,
    PositionCode::RM,
    PositionCode::LW,
    PositionCode::RW,
    PositionCode::CF,
    PositionCode::ST,
];

type Weights = [f64; ATTRIBUTE_COUNT];

// sprint, stamina, strength, awareness, control, dribbling, finishing,
// long pass, short pass, shot power, tackling
const CENTRE_BACK: Weights = [1.0, 1.0, 3.0, 3.0, 1.0, 0.5, 0.5, 1.5, 1.0, 0.5, 3.0];
const FULL_BACK: Weights = [2.5, 2.5, 1.5, 2.0, 1.0, 1.0, 0.5, 1.0, 1.5, 0.5, 2.5];
const HOLDING_MID: Weights = [1.0, 2.0, 2.0, 3.0, 1.5, 1.0, 0.5, 2.0, 2.0, 0.5, 3.0];
const CENTRAL_MID: Weights = [1.0, 2.5, 1.0, 2.5, 2.5, 1.5, 1.0, 2.5, 3.0, 1.0, 1.5];
const ATTACKING_MID: Weights = [1.5, 1.5, 0.5, 2.0, 3.0, 3.0, 2.0, 1.5, 2.5, 2.0, 0.5];
const WIDE_MID: Weights = [2.5, 3.0, 1.0, 1.5, 2.0, 2.0, 1.0, 2.0, 2.0, 1.0, 1.0];
const WINGER: Weights = [3.0, 2.0, 0.5, 1.0, 2.5, 3.0, 2.0, 1.0, 1.5, 1.5, 0.5];
const SECOND_STRIKER: Weights = [1.5, 1.5, 1.0, 1.5, 3.0, 2.5, 2.5, 1.0, 2.0, 2.0, 0.5];
const STRIKER: Weights = [2.0, 1.5, 2.5, 1.0, 2.0, 1.5, 3.0, 0.5, 1.0, 3.0, 0.5];

fn profile_for(code: PositionCode) -> &'static Weights {
    match code {
        PositionCode::CB => &CENTRE_BACK,
        PositionCode::LB | PositionCode::RB | PositionCode::LWB | PositionCode::RWB => &FULL_BACK,
        PositionCode::CDM => &HOLDING_MID,
        PositionCode::CM => &CENTRAL_MID,
        PositionCode::CAM => &ATTACKING_MID,
        PositionCode::LM | PositionCode::RM => &WIDE_MID,
        PositionCode::LW | PositionCode::RW | PositionCode::LF | PositionCode::RF => &WINGER,
        PositionCode::CF => &SECOND_STRIKER,
        PositionCode::ST | PositionCode::LS | PositionCode::RS => &STRIKER,
        // Goalkeeping is not rated by the attribute vector
        PositionCode::GK => &CENTRE_BACK,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedProfileProvider {
    temperature: f64,
}

impl Default for WeightedProfileProvider {
    fn default() -> Self {
        Self { temperature: 1.0 }
    }
}

impl WeightedProfileProvider {
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }

    /// Weighted mean rating for `code`, on the 1–10 scale.
    pub fn fit(&self, code: PositionCode, attributes: &AttributeVector) -> f64 {
        let weights = profile_for(code);
        let weighted: f64 = weights.iter().zip(attributes.values()).map(|(w, v)| w * v).sum();
        weighted / weights.iter().sum::<f64>()
    }
}

impl SuitabilityProvider for WeightedProfileProvider {
    fn suitability(&self, attributes: &AttributeVector) -> BTreeMap<PositionCode, f64> {
        let fits: Vec<f64> = PROFILE_LABELS.iter().map(|&c| self.fit(c, attributes)).collect();
        let peak = fits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = fits.iter().map(|f| ((f - peak) / self.temperature).exp()).collect();
        let total: f64 = exps.iter().sum();
        PROFILE_LABELS.iter().copied().zip(exps.into_iter().map(|e| e / total)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suitability::attributes::Attribute;
    use crate::suitability::top_positions;

    fn striker() -> AttributeVector {
        AttributeVector::uniform(3.0)
            .with(Attribute::Finishing, 10.0)
            .with(Attribute::ShotPower, 10.0)
            .with(Attribute::Strength, 8.0)
            .with(Attribute::SprintSpeed, 8.0)
    }

    fn centre_back() -> AttributeVector {
        AttributeVector::uniform(3.0)
            .with(Attribute::Tackling, 10.0)
            .with(Attribute::Strength, 10.0)
            .with(Attribute::TacticalAwareness, 9.0)
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let provider = WeightedProfileProvider::default();
        for attrs in [striker(), centre_back(), AttributeVector::uniform(7.0)] {
            let dist = provider.suitability(&attrs);
            assert_eq!(dist.len(), PROFILE_LABELS.len());
            let total: f64 = dist.values().sum();
            assert!((total - 1.0).abs() < 1e-9);
            assert!(dist.values().all(|p| (0.0..=1.0).contains(p)));
        }
    }

    #[test]
    fn test_uniform_player_is_uniform() {
        let dist = WeightedProfileProvider::default().suitability(&AttributeVector::uniform(5.0));
        for p in dist.values() {
            assert!((p - 1.0 / 12.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_profiles_pick_the_obvious_position() {
        let provider = WeightedProfileProvider::default();
        let top = top_positions(&provider.suitability(&striker()), 1);
        assert_eq!(top[0].0, PositionCode::ST);

        let top = top_positions(&provider.suitability(&centre_back()), 1);
        assert_eq!(top[0].0, PositionCode::CB);
    }

    #[test]
    fn test_lower_temperature_sharpens() {
        let warm = WeightedProfileProvider::new(2.0).suitability(&striker());
        let cold = WeightedProfileProvider::new(0.5).suitability(&striker());
        assert!(cold[&PositionCode::ST] > warm[&PositionCode::ST]);
    }
}
