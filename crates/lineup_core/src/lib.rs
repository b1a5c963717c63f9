//! # lineup_core - Optimal Squad-to-Formation Assignment
//!
//! Places a roster onto a tactical formation so that the summed
//! player/slot suitability is maximal.
//!
//! ## Features
//! - Exact weighted bipartite matching (Kuhn–Munkres)
//! - Position fallback chain for slot codes the classifier never emits
//! - Static, compiled-in formation and similarity tables
//! - Pluggable suitability providers with a built-in weighted profile model
//! - JSON API for the web layer

pub mod api;
pub mod assignment;
pub mod config;
pub mod error;
pub mod models;
pub mod scoring;
pub mod suitability;

// Re-export main API functions
pub use api::{assign, assign_json, assign_with_config, recommend_json, SCHEMA_VERSION};
pub use assignment::{assign_formation, Assignment, SlotAssignment};
pub use config::{AssignerConfig, PaddingFill};
pub use error::{LineupError, Result};
pub use models::{Formation, FormationKind, FormationSlot, PlayerSuitability, PositionCode};
pub use scoring::SlotScorer;
pub use suitability::{AttributeVector, SuitabilityProvider, WeightedProfileProvider};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
