use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playing position code.
///
/// Closed set covering both the classifier's output labels and every slot
/// label used by the formation tables. Strings only appear at the I/O
/// boundary (`FromStr` / serde).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionCode {
    GK,
    LB,
    CB,
    RB,
    LWB,
    RWB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    CF,
    ST,
    // Split-striker / inside-forward labels used by some formations
    LF,
    RF,
    LS,
    RS,
}

impl PositionCode {
    pub const ALL: [PositionCode; 19] = [
        PositionCode::GK,
        PositionCode::LB,
        PositionCode::CB,
        PositionCode::RB,
        PositionCode::LWB,
        PositionCode::RWB,
        PositionCode::CDM,
        PositionCode::CM,
        PositionCode::CAM,
        PositionCode::LM,
        PositionCode::RM,
        PositionCode::LW,
        PositionCode::RW,
        PositionCode::CF,
        PositionCode::ST,
        PositionCode::LF,
        PositionCode::RF,
        PositionCode::LS,
        PositionCode::RS,
    ];

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PositionCode::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self,
            PositionCode::LB
                | PositionCode::CB
                | PositionCode::RB
                | PositionCode::LWB
                | PositionCode::RWB
        )
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            PositionCode::CDM
                | PositionCode::CM
                | PositionCode::CAM
                | PositionCode::LM
                | PositionCode::RM
        )
    }

    pub fn is_forward(&self) -> bool {
        matches!(
            self,
            PositionCode::LW
                | PositionCode::RW
                | PositionCode::CF
                | PositionCode::ST
                | PositionCode::LF
                | PositionCode::RF
                | PositionCode::LS
                | PositionCode::RS
        )
    }

    /// Codes that stand in for a centre striker when the player has no
    /// direct or similar-position score.
    pub fn is_striker_alias(&self) -> bool {
        matches!(
            self,
            PositionCode::CF
                | PositionCode::LF
                | PositionCode::RF
                | PositionCode::LS
                | PositionCode::RS
        )
    }

    /// Get position display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PositionCode::GK => "Goalkeeper",
            PositionCode::LB => "Left Back",
            PositionCode::CB => "Centre Back",
            PositionCode::RB => "Right Back",
            PositionCode::LWB => "Left Wing Back",
            PositionCode::RWB => "Right Wing Back",
            PositionCode::CDM => "Defensive Midfielder",
            PositionCode::CM => "Central Midfielder",
            PositionCode::CAM => "Attacking Midfielder",
            PositionCode::LM => "Left Midfielder",
            PositionCode::RM => "Right Midfielder",
            PositionCode::LW => "Left Winger",
            PositionCode::RW => "Right Winger",
            PositionCode::CF => "Second Striker",
            PositionCode::ST => "Centre Forward",
            PositionCode::LF => "Left Forward",
            PositionCode::RF => "Right Forward",
            PositionCode::LS => "Left Striker",
            PositionCode::RS => "Right Striker",
        }
    }

    /// Get position abbreviation for compact display
    pub fn abbreviation(&self) -> &'static str {
        match self {
            PositionCode::GK => "GK",
            PositionCode::LB => "LB",
            PositionCode::CB => "CB",
            PositionCode::RB => "RB",
            PositionCode::LWB => "LWB",
            PositionCode::RWB => "RWB",
            PositionCode::CDM => "CDM",
            PositionCode::CM => "CM",
            PositionCode::CAM => "CAM",
            PositionCode::LM => "LM",
            PositionCode::RM => "RM",
            PositionCode::LW => "LW",
            PositionCode::RW => "RW",
            PositionCode::CF => "CF",
            PositionCode::ST => "ST",
            PositionCode::LF => "LF",
            PositionCode::RF => "RF",
            PositionCode::LS => "LS",
            PositionCode::RS => "RS",
        }
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for PositionCode {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        PositionCode::ALL
            .iter()
            .copied()
            .find(|code| code.abbreviation().eq_ignore_ascii_case(label))
            .ok_or_else(|| LineupError::InvalidPosition(s.to_string()))
    }
}
