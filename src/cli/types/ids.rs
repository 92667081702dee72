//! ID types for Fantasy Premier League.

use crate::error::{Result, XptsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for FPL player (element) IDs.
///
/// FPL calls players "elements"; the id is stable for a season and keys
/// both the `bootstrap-static` element list and the gameweek live data.
///
/// # Examples
///
/// ```rust
/// use fpl_xpts::PlayerId;
///
/// let id = PlayerId::new(351);
/// assert_eq!(id.as_u32(), 351);
/// assert_eq!(id.to_string(), "351");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new PlayerId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = XptsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for team IDs (1..=20 in a Premier League season)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u16);

impl TeamId {
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_new() {
        let id = PlayerId::new(351);
        assert_eq!(id.as_u32(), 351);
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::new(12)), "12");
    }

    #[test]
    fn test_player_id_from_str_valid() {
        let id: PlayerId = "427".parse().unwrap();
        assert_eq!(id.as_u32(), 427);

        let padded: PlayerId = " 8 ".parse().unwrap();
        assert_eq!(padded.as_u32(), 8);
    }

    #[test]
    fn test_player_id_from_str_invalid() {
        assert!("salah".parse::<PlayerId>().is_err());
        assert!("-1".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_player_id_serde_is_transparent() {
        let id = PlayerId::new(351);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "351");

        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_player_id_ordering() {
        let mut ids = vec![PlayerId::new(30), PlayerId::new(4), PlayerId::new(17)];
        ids.sort();
        assert_eq!(ids, vec![PlayerId::new(4), PlayerId::new(17), PlayerId::new(30)]);
    }

    #[test]
    fn test_team_id_display() {
        let team = TeamId::new(14);
        assert_eq!(team.as_u16(), 14);
        assert_eq!(team.to_string(), "14");
    }
}
