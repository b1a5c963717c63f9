//! Suitability providers
//!
//! The assigner consumes a `{position → score}` table per player and does
//! not care where it comes from. This module holds the seam for whatever
//! produces those tables (an external classifier, or the built-in weighted
//! profile provider), plus the post-processing applied to a raw
//! distribution before it is ranked or assigned.

pub mod attributes;
pub mod profile;
pub mod recommend;

pub use attributes::{Attribute, AttributeVector, ATTRIBUTE_MAX, ATTRIBUTE_MIN};
pub use profile::WeightedProfileProvider;
pub use recommend::{highlight_code, recommend_for_formation, recommend_positions, Recommendation};

use crate::config::AssignerConfig;
use crate::models::{PlayerSuitability, PositionCode};
use std::collections::BTreeMap;

/// Produces a suitability distribution from a player's ratings.
pub trait SuitabilityProvider {
    fn suitability(&self, attributes: &AttributeVector) -> BTreeMap<PositionCode, f64>;
}

impl<F> SuitabilityProvider for F
where
    F: Fn(&AttributeVector) -> BTreeMap<PositionCode, f64>,
{
    fn suitability(&self, attributes: &AttributeVector) -> BTreeMap<PositionCode, f64> {
        self(attributes)
    }
}

/// Raise every probability to `gamma` and renormalize.
///
/// `gamma > 1` makes the leading positions more dominant without changing
/// the ranking. A distribution summing to zero is returned unchanged.
pub fn sharpen(
    probabilities: &BTreeMap<PositionCode, f64>,
    gamma: f64,
) -> BTreeMap<PositionCode, f64> {
    let powered: BTreeMap<PositionCode, f64> =
        probabilities.iter().map(|(&code, &p)| (code, p.powf(gamma))).collect();
    let total: f64 = powered.values().sum();
    if total > 0.0 {
        powered.into_iter().map(|(code, p)| (code, p / total)).collect()
    } else {
        powered
    }
}

/// Positions ranked by score, highest first; ties keep code order.
pub fn top_positions(scores: &BTreeMap<PositionCode, f64>, n: usize) -> Vec<(PositionCode, f64)> {
    let mut ranked: Vec<(PositionCode, f64)> = scores.iter().map(|(&c, &s)| (c, s)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

/// Run `provider` for one player and sharpen the result with the
/// configured gamma.
pub fn player_suitability<P: SuitabilityProvider + ?Sized>(
    provider: &P,
    player_id: impl Into<String>,
    attributes: &AttributeVector,
    config: &AssignerConfig,
) -> PlayerSuitability {
    let raw = provider.suitability(attributes);
    PlayerSuitability::new(player_id, sharpen(&raw, config.sharpen_gamma))
}
