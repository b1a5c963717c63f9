//! Formation tables
//!
//! Static slot layouts for the recognized tactical formations. Every table
//! is compiled in and read-only; callers borrow a [`Formation`] view of it.

use super::position::PositionCode;
use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use PositionCode::*;

/// One position to fill within a formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormationSlot {
    /// Unique within its formation (e.g. `"lcb"`)
    pub slot_id: &'static str,
    pub required_code: PositionCode,
    /// Short pitch label
    pub label: &'static str,
}

impl FormationSlot {
    pub const fn new(slot_id: &'static str, required_code: PositionCode, label: &'static str) -> Self {
        Self { slot_id, required_code, label }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.required_code.is_goalkeeper()
    }
}

const fn slot(slot_id: &'static str, code: PositionCode) -> FormationSlot {
    FormationSlot::new(slot_id, code, code_label(code))
}

const fn code_label(code: PositionCode) -> &'static str {
    match code {
        GK => "GK",
        LB => "LB",
        CB => "CB",
        RB => "RB",
        LWB => "LWB",
        RWB => "RWB",
        CDM => "CDM",
        CM => "CM",
        CAM => "CAM",
        LM => "LM",
        RM => "RM",
        LW => "LW",
        RW => "RW",
        CF => "CF",
        ST => "ST",
        LF => "LF",
        RF => "RF",
        LS => "LS",
        RS => "RS",
    }
}

/// A formation view: ordered slots (display order only) plus the set of
/// position codes that suit the tactical system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Formation<'a> {
    pub name: &'a str,
    pub slots: &'a [FormationSlot],
    /// Used by recommendation filtering, never by the assigner
    pub allowed: &'a [PositionCode],
}

impl<'a> Formation<'a> {
    pub fn new(name: &'a str, slots: &'a [FormationSlot], allowed: &'a [PositionCode]) -> Self {
        Self { name, slots, allowed }
    }

    /// Check the slot-id uniqueness invariant.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.slots.len());
        for slot in self.slots {
            if !seen.insert(slot.slot_id) {
                return Err(LineupError::InvalidFormation(format!(
                    "{}: duplicate slot id '{}'",
                    self.name, slot.slot_id
                )));
            }
        }
        Ok(())
    }

    pub fn slot(&self, slot_id: &str) -> Option<&'a FormationSlot> {
        self.slots.iter().find(|s| s.slot_id == slot_id)
    }

    pub fn goalkeeper_slot(&self) -> Option<&'a FormationSlot> {
        self.slots.iter().find(|s| s.is_goalkeeper())
    }

    pub fn outfield_slots(&self) -> impl Iterator<Item = &'a FormationSlot> + 'a {
        self.slots.iter().filter(|s| !s.is_goalkeeper())
    }

    pub fn allows(&self, code: PositionCode) -> bool {
        self.allowed.contains(&code)
    }
}

// ============================================================================
// Recognized formations
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FormationKind {
    #[default]
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-4-2-diamond")]
    F442Diamond,
    #[serde(rename = "4-1-4-1")]
    F4141,
    #[serde(rename = "4-3-1-2")]
    F4312,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "3-4-3")]
    F343,
}

impl FormationKind {
    pub const ALL: [FormationKind; 8] = [
        FormationKind::F433,
        FormationKind::F4231,
        FormationKind::F442,
        FormationKind::F442Diamond,
        FormationKind::F4141,
        FormationKind::F4312,
        FormationKind::F352,
        FormationKind::F343,
    ];

    /// Canonical formation code string (e.g., "4-3-3").
    pub fn code(&self) -> &'static str {
        match self {
            FormationKind::F433 => "4-3-3",
            FormationKind::F4231 => "4-2-3-1",
            FormationKind::F442 => "4-4-2",
            FormationKind::F442Diamond => "4-4-2-diamond",
            FormationKind::F4141 => "4-1-4-1",
            FormationKind::F4312 => "4-3-1-2",
            FormationKind::F352 => "3-5-2",
            FormationKind::F343 => "3-4-3",
        }
    }

    /// Resolve a caller-supplied name, falling back to 4-3-3 for anything
    /// unrecognized.
    pub fn resolve(name: &str) -> FormationKind {
        match name.parse::<FormationKind>() {
            Ok(kind) => kind,
            Err(_) => {
                tracing::warn!(formation = name, "unknown formation, falling back to 4-3-3");
                FormationKind::default()
            }
        }
    }

    pub fn slots(&self) -> &'static [FormationSlot] {
        match self {
            FormationKind::F433 => &SLOTS_433,
            FormationKind::F4231 => &SLOTS_4231,
            FormationKind::F442 => &SLOTS_442,
            FormationKind::F442Diamond => &SLOTS_442_DIAMOND,
            FormationKind::F4141 => &SLOTS_4141,
            FormationKind::F4312 => &SLOTS_4312,
            FormationKind::F352 => &SLOTS_352,
            FormationKind::F343 => &SLOTS_343,
        }
    }

    pub fn allowed(&self) -> &'static [PositionCode] {
        match self {
            FormationKind::F433 => &[
                LB, CB, RB, LWB, RWB, CDM, CM, CAM, LM, LW, RM, RW, CF, ST, LF, RF, LS, RS,
            ],
            FormationKind::F4231 => &[LB, CB, RB, CDM, CM, CAM, LM, LW, RM, RW, CF, ST],
            FormationKind::F442 => &[LB, CB, RB, LM, RM, CM, CDM, CAM, CF, ST, LS, RS],
            FormationKind::F442Diamond => &[LB, CB, RB, CDM, CM, CAM, CF, ST, LS, RS],
            FormationKind::F4141 => &[LB, CB, RB, CDM, CM, CAM, LM, RM, LW, RW, CF, ST],
            FormationKind::F4312 => &[LB, CB, RB, CM, CAM, CF, ST, LS, RS],
            FormationKind::F352 => &[CB, LWB, RWB, CM, CDM, CAM, LM, RM, CF, ST, LS, RS],
            FormationKind::F343 => &[CB, LWB, RWB, CM, LM, RM, LW, RW, CF, ST, LF, RF],
        }
    }

    pub fn formation(&self) -> Formation<'static> {
        Formation::new(self.code(), self.slots(), self.allowed())
    }

    /// Formation-aware display label for a position code.
    pub fn position_label(&self, code: PositionCode) -> &'static str {
        match (self, code) {
            (FormationKind::F433, ST) => "Striker",
            (FormationKind::F433, LM | LW) => "Left Winger",
            (FormationKind::F433, RM | RW) => "Right Winger",
            (FormationKind::F433, CF) => "Centre Striker",

            (FormationKind::F4231, LM | LW) => "Left Wing",
            (FormationKind::F4231, RM | RW) => "Right Wing",
            (FormationKind::F4231, CAM) => "Number Ten",
            (FormationKind::F4231, CDM) => "Holding Midfielder",

            (FormationKind::F442, ST) => "Forward",
            (FormationKind::F442, LM | LW) => "Left Midfielder",
            (FormationKind::F442, RM | RW) => "Right Midfielder",

            _ => code.display_name(),
        }
    }
}

impl fmt::Display for FormationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FormationKind {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        FormationKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.code().eq_ignore_ascii_case(name))
            .ok_or_else(|| LineupError::InvalidFormation(s.to_string()))
    }
}

const SLOTS_433: [FormationSlot; 11] = [
    slot("gk", GK),
    slot("lb", LB),
    slot("lcb", CB),
    slot("rcb", CB),
    slot("rb", RB),
    slot("lcm", CM),
    slot("cm", CM),
    slot("rcm", CM),
    slot("lw", LW),
    slot("st", ST),
    slot("rw", RW),
];

const SLOTS_4231: [FormationSlot; 11] = [
    slot("gk", GK),
    slot("lb", LB),
    slot("lcb", CB),
    slot("rcb", CB),
    slot("rb", RB),
    FormationSlot::new("ldm", CDM, "DM"),
    FormationSlot::new("rdm", CDM, "DM"),
    FormationSlot::new("lam", LM, "LW"),
    slot("cam", CAM),
    FormationSlot::new("ram", RM, "RW"),
    slot("st", ST),
];

const SLOTS_442: [FormationSlot; 11] = [
    slot("gk", GK),
    slot("lb", LB),
    slot("lcb", CB),
    slot("rcb", CB),
    slot("rb", RB),
    slot("lm", LM),
    slot("lcm", CM),
    slot("rcm", CM),
    slot("rm", RM),
    slot("lst", ST),
    slot("rst", ST),
];

const SLOTS_442_DIAMOND: [FormationSlot; 11] = [
    slot("gk", GK),
    slot("lb", LB),
    slot("lcb", CB),
    slot("rcb", CB),
    slot("rb", RB),
    slot("cdm", CDM),
    slot("lcm", CM),
    slot("rcm", CM),
    slot("cam", CAM),
    slot("lst", ST),
    slot("rst", ST),
];

const SLOTS_4141: [FormationSlot; 11] = [
    slot("gk", GK),
    slot("lb", LB),
    slot("lcb", CB),
    slot("rcb", CB),
    slot("rb", RB),
    slot("cdm", CDM),
    slot("lam", LM),
    slot("lcm", CM),
    slot("rcm", CM),
    slot("ram", RM),
    slot("st", ST),
];

const SLOTS_4312: [FormationSlot; 11] = [
    slot("gk", GK),
    slot("lb", LB),
    slot("lcb", CB),
    slot("rcb", CB),
    slot("rb", RB),
    slot("lcm", CM),
    slot("cm", CM),
    slot("rcm", CM),
    slot("cam", CAM),
    slot("lst", ST),
    slot("rst", ST),
];

const SLOTS_352: [FormationSlot; 11] = [
    slot("gk", GK),
    slot("lcb", CB),
    slot("cb", CB),
    slot("rcb", CB),
    slot("lwb", LWB),
    slot("lcm", CM),
    slot("cm", CM),
    slot("rcm", CM),
    slot("rwb", RWB),
    slot("lst", ST),
    slot("rst", ST),
];

const SLOTS_343: [FormationSlot; 11] = [
    slot("gk", GK),
    slot("lcb", CB),
    slot("cb", CB),
    slot("rcb", CB),
    slot("lm", LM),
    slot("lcm", CM),
    slot("rcm", CM),
    slot("rm", RM),
    slot("lw", LW),
    slot("st", ST),
    slot("rw", RW),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_formation_has_eleven_unique_slots_and_one_gk() {
        for kind in FormationKind::ALL {
            let formation = kind.formation();
            assert_eq!(formation.slots.len(), 11, "{kind}");
            formation.validate().unwrap();
            let gk = formation.slots.iter().filter(|s| s.is_goalkeeper()).count();
            assert_eq!(gk, 1, "{kind} must have exactly one goalkeeper slot");
            assert_eq!(formation.outfield_slots().count(), 10);
        }
    }

    #[test]
    fn test_resolve_falls_back_to_433() {
        assert_eq!(FormationKind::resolve("3-5-2"), FormationKind::F352);
        assert_eq!(FormationKind::resolve("4-4-2-Diamond"), FormationKind::F442Diamond);
        assert_eq!(FormationKind::resolve("5-4-1"), FormationKind::F433);
        assert_eq!(FormationKind::resolve(""), FormationKind::F433);
    }

    #[test]
    fn test_code_round_trip() {
        for kind in FormationKind::ALL {
            assert_eq!(kind.code().parse::<FormationKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_slot_ids() {
        let slots = [slot("cb", CB), slot("cb", CB)];
        let formation = Formation::new("broken", &slots, &[]);
        assert!(matches!(formation.validate(), Err(LineupError::InvalidFormation(_))));
    }

    #[test]
    fn test_lookup_helpers() {
        let formation = FormationKind::F352.formation();
        assert_eq!(formation.slot("lwb").unwrap().required_code, LWB);
        assert!(formation.slot("lw").is_none());
        assert_eq!(formation.goalkeeper_slot().unwrap().slot_id, "gk");
        assert!(formation.allows(LWB));
        assert!(!formation.allows(LB));
    }

    #[test]
    fn test_position_labels_depend_on_formation() {
        assert_eq!(FormationKind::F433.position_label(LM), "Left Winger");
        assert_eq!(FormationKind::F442.position_label(LM), "Left Midfielder");
        assert_eq!(FormationKind::F4231.position_label(CAM), "Number Ten");
        assert_eq!(FormationKind::F352.position_label(CB), "Centre Back");
    }
}
