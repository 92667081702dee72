use crate::cli::types::{GameweekId, PlayerId, TeamId};
use crate::error::{Result, XptsError};
use serde::{Deserialize, Serialize};


/// A decimal the FPL API sends either as a JSON string (`"0.83"`) or a
/// number. Values are kept raw and parsed on use so a malformed value can
/// be reported and recovered from by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawDecimal {
    Number(f64),
    Text(String),
}

impl RawDecimal {
    /// Parse as a finite, non-negative decimal.
    pub fn parse(&self, field: &'static str) -> Result<f64> {
        let value = match self {
            RawDecimal::Number(n) => *n,
            RawDecimal::Text(s) => {
                s.trim()
                    .parse::<f64>()
                    .map_err(|_| XptsError::MalformedNumericField {
                        field,
                        value: s.clone(),
                    })?
            }
        };
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(XptsError::MalformedNumericField {
                field,
                value: value.to_string(),
            })
        }
    }
}

impl From<f64> for RawDecimal {
    fn from(n: f64) -> Self {
        RawDecimal::Number(n)
    }
}

impl From<&str> for RawDecimal {
    fn from(s: &str) -> Self {
        RawDecimal::Text(s.to_string())
    }
}

/// Parse an optional raw decimal; an absent value is `0.0`.
pub fn parse_decimal(field: &'static str, raw: Option<&RawDecimal>) -> Result<f64> {
    match raw {
        Some(r) => r.parse(field),
        None => Ok(0.0),
    }
}

/// One player's scoring statistics, either season-to-date (from
/// `bootstrap-static`) or for a single gameweek (from `event/{id}/live`).
/// Both payloads use the same field names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawPlayerStats {
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub goals_scored: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    /// Upstream total, including bonus and deductions. May be negative.
    #[serde(default)]
    pub total_points: i32,
    #[serde(default)]
    pub expected_goals: Option<RawDecimal>,
    #[serde(default)]
    pub expected_assists: Option<RawDecimal>,
}

/// A player entry in `bootstrap-static.elements`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: PlayerId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    #[serde(default)]
    pub web_name: String,
    pub team: TeamId,
    /// Raw position code; resolved with `Position::from_element_type`.
    pub element_type: i64,
    #[serde(default)]
    pub code: u32,
    /// Price in tenths of a million (e.g. 130 = £13.0m).
    #[serde(default)]
    pub now_cost: u32,
    #[serde(default)]
    pub selected_by_percent: Option<RawDecimal>,
    #[serde(default)]
    pub form: Option<RawDecimal>,
    #[serde(flatten)]
    pub stats: RawPlayerStats,
}

impl Element {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }

    pub fn photo_url(&self) -> String {
        format!("{PHOTO_BASE_URL}/p{}.png", self.code)
    }

    pub fn cost_millions(&self) -> f64 {
        f64::from(self.now_cost) / 10.0
    }
}

pub const PHOTO_BASE_URL: &str =
    "https://resources.premierleague.com/premierleague/photos/players/110x140";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

/// A gameweek in `bootstrap-static.events`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: GameweekId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub average_entry_score: i32,
    /// Null until the gameweek has been played.
    #[serde(default)]
    pub highest_score: Option<i32>,
}

/// Root of `GET /bootstrap-static/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BootstrapStatic {
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl BootstrapStatic {
    pub fn element(&self, id: PlayerId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn team_name(&self, id: TeamId) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.as_str())
    }

    /// Events whose fixtures have all been played, in calendar order.
    pub fn finished_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.finished)
    }
}

/// A player entry in `event/{id}/live.elements`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveElement {
    pub id: PlayerId,
    pub stats: RawPlayerStats,
}

/// Root of `GET /event/{id}/live/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameweekLive {
    #[serde(default)]
    pub elements: Vec<LiveElement>,
}

impl GameweekLive {
    pub fn stats_for(&self, id: PlayerId) -> Option<&RawPlayerStats> {
        self.elements.iter().find(|e| e.id == id).map(|e| &e.stats)
    }
}
