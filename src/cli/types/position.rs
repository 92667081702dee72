//! Fantasy Premier League positions and their scoring constants.

use crate::error::{Result, XptsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points for an assist. Unlike goals, this does not depend on position.
pub const ASSIST_POINTS: i32 = 3;

/// Minutes a player must be on the pitch for a clean sheet to count.
pub const CLEAN_SHEET_MIN_MINUTES: u32 = 60;

/// Fantasy Premier League player positions.
///
/// FPL reports a player's position as a numeric `element_type`
/// (1 = GK, 2 = DEF, 3 = MID, 4 = FWD). The position is the only place
/// position-dependent scoring constants live.
///
/// # Examples
///
/// ```rust
/// use fpl_xpts::Position;
///
/// let fwd = Position::from_element_type(4).unwrap();
/// assert_eq!(fwd, Position::Forward);
/// assert_eq!(fwd.goal_points(), 4);
/// assert_eq!(fwd.to_string(), "FWD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Resolve an FPL `element_type` code.
    ///
    /// Any code outside 1..=4 fails with [`XptsError::InvalidPositionCode`]
    /// carrying the offending value.
    pub fn from_element_type(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            _ => Err(XptsError::InvalidPositionCode { code }),
        }
    }

    /// The FPL `element_type` code for this position.
    pub fn element_type(&self) -> i64 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }

    /// Points awarded per goal scored.
    pub fn goal_points(&self) -> i32 {
        match self {
            Position::Goalkeeper | Position::Defender => 6,
            Position::Midfielder => 5,
            Position::Forward => 4,
        }
    }

    /// Points awarded per qualifying clean sheet.
    pub fn clean_sheet_points(&self) -> i32 {
        match self {
            Position::Goalkeeper | Position::Defender => 4,
            Position::Midfielder => 1,
            Position::Forward => 0,
        }
    }

    /// Short name as used by the FPL site (GK, DEF, MID, FWD).
    pub fn short_name(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for Position {
    type Err = XptsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GKP" | "GOALKEEPER" => Ok(Position::Goalkeeper),
            "DEF" | "DEFENDER" => Ok(Position::Defender),
            "MID" | "MIDFIELDER" => Ok(Position::Midfielder),
            "FWD" | "FW" | "FORWARD" => Ok(Position::Forward),
            _ => Err(XptsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
