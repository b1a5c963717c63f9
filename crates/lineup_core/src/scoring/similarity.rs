//! Position similarity table
//!
//! Ordered fallback candidates for a slot code that is missing from a
//! player's suitability table. First present candidate wins.

use crate::models::PositionCode;
use crate::models::PositionCode::*;

/// Ordered fallback codes for `code`. Empty when the code has no entry.
pub fn similar_positions(code: PositionCode) -> &'static [PositionCode] {
    match code {
        CM => &[CM, CDM, CAM],
        CDM => &[CDM, CM, CB],
        CAM => &[CAM, CF, CM],

        LM => &[LM, LW],
        RM => &[RM, RW],
        LW => &[LW, LM],
        RW => &[RW, RM],

        CF => &[CF, ST, CAM],
        ST => &[ST, CF, LS, RS],
        LS => &[LS, ST, CF],
        RS => &[RS, ST, CF],
        LF => &[LF, LW, CF],
        RF => &[RF, RW, CF],

        GK | LB | CB | RB | LWB | RWB => &[],
    }
}
