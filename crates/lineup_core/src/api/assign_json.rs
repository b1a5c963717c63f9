//! JSON API for lineup assignment
//!
//! Boundary layer: position labels arrive as strings and are decoded here,
//! formation names are resolved (unknown → 4-3-3), and roster entries given
//! as raw ratings are converted through a suitability provider.

use crate::assignment::{assign_formation, Assignment};
use crate::config::AssignerConfig;
use crate::error::{LineupError, Result};
use crate::models::{FormationKind, PlayerSuitability};
use crate::suitability::{
    player_suitability, recommend_positions, AttributeVector, Recommendation, SuitabilityProvider,
    WeightedProfileProvider,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Schema version accepted and emitted by the JSON API
pub const SCHEMA_VERSION: u8 = 1;

/// Assign `players` to the formation called `formation_name`.
///
/// Unrecognized names fall back to 4-3-3.
pub fn assign(formation_name: &str, players: &[PlayerSuitability]) -> Assignment {
    assign_with_config(formation_name, players, &AssignerConfig::default())
}

pub fn assign_with_config(
    formation_name: &str,
    players: &[PlayerSuitability],
    config: &AssignerConfig,
) -> Assignment {
    let kind = FormationKind::resolve(formation_name);
    assign_formation(&kind.formation(), players, config)
}

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub schema_version: u8,
    /// Defaults to 4-3-3 when absent
    #[serde(default)]
    pub formation: Option<String>,
    pub players: Vec<RosterEntry>,
    #[serde(default)]
    pub config: Option<AssignerConfig>,
}

/// Roster entry: either a ready suitability table or raw ratings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RosterEntry {
    /// Classifier output keyed by position label (e.g. `{"ST": 0.78}`)
    Suitability { player_id: String, suitability: HashMap<String, f64> },
    /// Ratings converted through the suitability provider
    Attributes { player_id: String, attributes: AttributeVector },
}

impl RosterEntry {
    pub fn player_id(&self) -> &str {
        match self {
            RosterEntry::Suitability { player_id, .. } | RosterEntry::Attributes { player_id, .. } => {
                player_id
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub assignment: Assignment,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub formation: Option<String>,
    pub attributes: AttributeVector,
    #[serde(default)]
    pub config: Option<AssignerConfig>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub schema_version: u8,
    pub recommendation: Option<Recommendation>,
}

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(LineupError::UnsupportedSchema { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

/// Decode roster entries into suitability tables, rejecting duplicate ids.
pub fn resolve_roster<P: SuitabilityProvider + ?Sized>(
    entries: &[RosterEntry],
    provider: &P,
    config: &AssignerConfig,
) -> Result<Vec<PlayerSuitability>> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .map(|entry| {
            if !seen.insert(entry.player_id()) {
                return Err(LineupError::DuplicatePlayer(entry.player_id().to_string()));
            }
            match entry {
                RosterEntry::Suitability { player_id, suitability } => {
                    PlayerSuitability::from_labels(player_id.clone(), suitability)
                }
                RosterEntry::Attributes { player_id, attributes } => {
                    Ok(player_suitability(provider, player_id.clone(), attributes, config))
                }
            }
        })
        .collect()
}

/// Parse and check an assign request, returning it with its validated config.
fn parse_assign_request(request_json: &str) -> Result<(AssignRequest, AssignerConfig)> {
    let mut request: AssignRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let config = request.config.take().unwrap_or_default();
    config.validate()?;
    Ok((request, config))
}

fn run_assign_request<P: SuitabilityProvider + ?Sized>(
    request: &AssignRequest,
    config: &AssignerConfig,
    provider: &P,
) -> Result<String> {
    let players = resolve_roster(&request.players, provider, config)?;
    let formation = request.formation.as_deref().unwrap_or(FormationKind::default().code());
    let assignment = assign_with_config(formation, &players, config);

    let response = AssignResponse { schema_version: SCHEMA_VERSION, assignment };
    Ok(serde_json::to_string(&response)?)
}

/// `assign_json` with a caller-supplied provider for attribute entries.
pub fn assign_json_with_provider<P: SuitabilityProvider + ?Sized>(
    request_json: &str,
    provider: &P,
) -> Result<String> {
    let (request, config) = parse_assign_request(request_json)?;
    run_assign_request(&request, &config, provider)
}

/// Assign a roster from a JSON request, using the built-in profile
/// provider for entries given as ratings.
pub fn assign_json(request_json: &str) -> Result<String> {
    let (request, config) = parse_assign_request(request_json)?;
    let provider = WeightedProfileProvider::new(config.softmax_temperature);
    run_assign_request(&request, &config, &provider)
}

/// Top-N position recommendation for one player's ratings.
pub fn recommend_json(request_json: &str) -> Result<String> {
    let request: RecommendRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let config = request.config.unwrap_or_default();
    config.validate()?;

    let formation =
        request.formation.as_deref().map_or(FormationKind::default(), FormationKind::resolve);
    let provider = WeightedProfileProvider::new(config.softmax_temperature);
    let recommendation = recommend_positions(&provider, &request.attributes, formation, &config);

    let response = RecommendResponse { schema_version: SCHEMA_VERSION, recommendation };
    Ok(serde_json::to_string(&response)?)
}
