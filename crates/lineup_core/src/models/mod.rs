pub mod formation;
pub mod position;
pub mod suitability;

pub use formation::{Formation, FormationKind, FormationSlot};
pub use position::PositionCode;
pub use suitability::PlayerSuitability;
