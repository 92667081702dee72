//! Gameweek identifiers and the season/gameweek scope selector.

use crate::error::{Result, XptsError};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for gameweek (FPL "event") numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameweekId(pub u16);

impl GameweekId {
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for GameweekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameweekId {
    type Err = XptsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Which slice of a player's record to report on.
///
/// Parses from `"season"` (case-insensitive) or a gameweek number and
/// serializes back to the same shape: the string `"season"` or the bare
/// number.
///
/// # Examples
///
/// ```rust
/// use fpl_xpts::{GameweekId, GameweekSelection};
///
/// let season: GameweekSelection = "season".parse().unwrap();
/// assert_eq!(season, GameweekSelection::Season);
///
/// let gw: GameweekSelection = "7".parse().unwrap();
/// assert_eq!(gw, GameweekSelection::Gameweek(GameweekId::new(7)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameweekSelection {
    /// Season-to-date totals from `bootstrap-static`.
    #[default]
    Season,
    /// A single gameweek from `event/{id}/live`.
    Gameweek(GameweekId),
}

impl fmt::Display for GameweekSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameweekSelection::Season => write!(f, "season"),
            GameweekSelection::Gameweek(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for GameweekSelection {
    type Err = XptsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("season") || trimmed.is_empty() {
            return Ok(GameweekSelection::Season);
        }
        match trimmed.parse::<u16>() {
            Ok(0) | Err(_) => Err(XptsError::InvalidGameweek {
                value: s.to_string(),
            }),
            Ok(n) => Ok(GameweekSelection::Gameweek(GameweekId::new(n))),
        }
    }
}

impl Serialize for GameweekSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            GameweekSelection::Season => serializer.serialize_str("season"),
            GameweekSelection::Gameweek(id) => serializer.serialize_u16(id.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gameweek_id_from_str() {
        let gw: GameweekId = "12".parse().unwrap();
        assert_eq!(gw.as_u16(), 12);
        assert!("twelve".parse::<GameweekId>().is_err());
    }

    #[test]
    fn test_selection_parses_season_case_insensitive() {
        assert_eq!(
            "Season".parse::<GameweekSelection>().unwrap(),
            GameweekSelection::Season
        );
        assert_eq!(
            "SEASON".parse::<GameweekSelection>().unwrap(),
            GameweekSelection::Season
        );
    }

    #[test]
    fn test_selection_empty_means_season() {
        assert_eq!(
            "".parse::<GameweekSelection>().unwrap(),
            GameweekSelection::Season
        );
    }

    #[test]
    fn test_selection_parses_gameweek_number() {
        assert_eq!(
            "38".parse::<GameweekSelection>().unwrap(),
            GameweekSelection::Gameweek(GameweekId::new(38))
        );
    }

    #[test]
    fn test_selection_rejects_zero_and_garbage() {
        assert!(matches!(
            "0".parse::<GameweekSelection>(),
            Err(XptsError::InvalidGameweek { .. })
        ));
        assert!(matches!(
            "next".parse::<GameweekSelection>(),
            Err(XptsError::InvalidGameweek { .. })
        ));
    }

    #[test]
    fn test_selection_default_is_season() {
        assert_eq!(GameweekSelection::default(), GameweekSelection::Season);
    }

    #[test]
    fn test_selection_serializes_like_the_gameweeks_listing() {
        let season = serde_json::to_value(GameweekSelection::Season).unwrap();
        assert_eq!(season, serde_json::json!("season"));

        let gw = serde_json::to_value(GameweekSelection::Gameweek(GameweekId::new(4))).unwrap();
        assert_eq!(gw, serde_json::json!(4));
    }

    #[test]
    fn test_selection_display_roundtrips_through_from_str() {
        for sel in [
            GameweekSelection::Season,
            GameweekSelection::Gameweek(GameweekId::new(21)),
        ] {
            assert_eq!(sel.to_string().parse::<GameweekSelection>().unwrap(), sel);
        }
    }
}
