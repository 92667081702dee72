//! Actual-vs-expected reports for a season or a single gameweek.
//!
//! Both scopes run the same [`compute`](crate::fpl::compute) pipeline; only
//! the source of [`RawPlayerStats`] differs.

use serde::{Deserialize, Serialize};

use crate::fpl::compute::{
    calculate_expected_points_breakdown, calculate_points_breakdown, expected_assists,
    expected_goals, round_expected, PointsBreakdown,
};
use crate::fpl::types::{Element, GameweekLive, RawPlayerStats};
use crate::{PlayerId, Position, Result};

/// Counting stats as recorded upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualStats {
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub minutes: u32,
}

/// Raw xG/xA alongside the rounded values used for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedStats {
    pub raw_xg: f64,
    pub raw_xa: f64,
    pub expected_goals: i32,
    pub expected_assists: i32,
    pub clean_sheets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualSide {
    pub stats: ActualStats,
    pub points: PointsBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedSide {
    pub stats: ExpectedStats,
    pub points: PointsBreakdown,
}

/// `{actual: {stats, points}, expected: {stats, points}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub actual: ActualSide,
    pub expected: ExpectedSide,
}

impl StatsReport {
    /// Expected points total (xPts).
    pub fn xpts(&self) -> i32 {
        self.expected.points.total
    }
}

/// Build the full report for one player record.
pub fn build_stats_report(stats: &RawPlayerStats, position: Position) -> StatsReport {
    let actual_stats = ActualStats {
        goals: stats.goals_scored,
        assists: stats.assists,
        clean_sheets: stats.clean_sheets,
        minutes: stats.minutes,
    };
    let actual_points = calculate_points_breakdown(stats.total_points, stats, position);

    let raw_xg = expected_goals(stats);
    let raw_xa = expected_assists(stats);
    let expected_stats = ExpectedStats {
        raw_xg,
        raw_xa,
        expected_goals: round_expected(raw_xg),
        expected_assists: round_expected(raw_xa),
        clean_sheets: actual_stats.clean_sheets,
    };
    let expected_points = calculate_expected_points_breakdown(stats, position, &actual_points);

    StatsReport {
        actual: ActualSide {
            stats: actual_stats,
            points: actual_points,
        },
        expected: ExpectedSide {
            stats: expected_stats,
            points: expected_points,
        },
    }
}

/// Season-to-date report from a `bootstrap-static` element.
///
/// Fails with `InvalidPositionCode` if the element's `element_type` is
/// not 1..=4.
pub fn player_season_stats(element: &Element) -> Result<StatsReport> {
    let position = Position::from_element_type(element.element_type)?;
    Ok(build_stats_report(&element.stats, position))
}

/// Single-gameweek report. `None` when the player has no entry in that
/// gameweek's live data, which is normal for players who did not feature.
pub fn player_gameweek_stats(
    live: &GameweekLive,
    player_id: PlayerId,
    position: Position,
) -> Option<StatsReport> {
    live.stats_for(player_id)
        .map(|stats| build_stats_report(stats, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::types::{LiveElement, RawDecimal};
    use crate::{TeamId, XptsError};
    use serde_json::json;

    fn raw(minutes: u32, goals: u32, assists: u32, cs: u32, total: i32) -> RawPlayerStats {
        RawPlayerStats {
            minutes,
            goals_scored: goals,
            assists,
            clean_sheets: cs,
            total_points: total,
            expected_goals: None,
            expected_assists: None,
        }
    }

    fn element(element_type: i64, stats: RawPlayerStats) -> Element {
        Element {
            id: PlayerId::new(7),
            first_name: "Test".to_string(),
            second_name: "Player".to_string(),
            web_name: "Player".to_string(),
            team: TeamId::new(1),
            element_type,
            code: 1,
            now_cost: 55,
            selected_by_percent: None,
            form: None,
            stats,
        }
    }

    #[test]
    fn test_report_copies_counting_stats() {
        let mut s = raw(90, 2, 1, 0, 11);
        s.expected_goals = Some(RawDecimal::from("1.7"));
        s.expected_assists = Some(RawDecimal::from("0.6"));

        let report = build_stats_report(&s, Position::Forward);

        assert_eq!(
            report.actual.stats,
            ActualStats {
                goals: 2,
                assists: 1,
                clean_sheets: 0,
                minutes: 90
            }
        );
        assert_eq!(report.expected.stats.raw_xg, 1.7);
        assert_eq!(report.expected.stats.raw_xa, 0.6);
        assert_eq!(report.expected.stats.expected_goals, 2);
        assert_eq!(report.expected.stats.expected_assists, 1);
        assert_eq!(report.expected.points.goals, 8);
        assert_eq!(report.expected.points.assists, 3);
        assert_eq!(report.xpts(), 11);
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_stats_report(&raw(45, 0, 0, 1, 2), Position::Goalkeeper);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value,
            json!({
                "actual": {
                    "stats": {"goals": 0, "assists": 0, "clean_sheets": 1, "minutes": 45},
                    "points": {"goals": 0, "assists": 0, "clean_sheets": 0, "other": 2, "total": 2}
                },
                "expected": {
                    "stats": {
                        "raw_xg": 0.0, "raw_xa": 0.0,
                        "expected_goals": 0, "expected_assists": 0,
                        "clean_sheets": 1
                    },
                    "points": {"goals": 0, "assists": 0, "clean_sheets": 0, "other": 2, "total": 2}
                }
            })
        );
    }

    #[test]
    fn test_season_stats_resolves_position() {
        let report = player_season_stats(&element(2, raw(900, 1, 0, 5, 60))).unwrap();

        assert_eq!(report.actual.points.goals, 6);
        assert_eq!(report.actual.points.clean_sheets, 20);
        assert_eq!(report.actual.points.other, 34);
    }

    #[test]
    fn test_season_stats_invalid_element_type() {
        let result = player_season_stats(&element(5, raw(90, 0, 0, 0, 2)));
        assert!(matches!(
            result,
            Err(XptsError::InvalidPositionCode { code: 5 })
        ));
    }

    #[test]
    fn test_gameweek_stats_found() {
        let live = GameweekLive {
            elements: vec![LiveElement {
                id: PlayerId::new(7),
                stats: raw(90, 1, 0, 1, 12),
            }],
        };

        let report = player_gameweek_stats(&live, PlayerId::new(7), Position::Defender).unwrap();
        assert_eq!(report.actual.points.goals, 6);
        assert_eq!(report.actual.points.clean_sheets, 4);
        assert_eq!(report.actual.points.other, 2);
    }

    #[test]
    fn test_gameweek_stats_missing_player_is_none() {
        let live = GameweekLive::default();
        assert!(player_gameweek_stats(&live, PlayerId::new(7), Position::Forward).is_none());
    }

    #[test]
    fn test_season_and_gameweek_share_pipeline() {
        let s = raw(90, 1, 1, 1, 12);
        let live = GameweekLive {
            elements: vec![LiveElement {
                id: PlayerId::new(7),
                stats: s.clone(),
            }],
        };

        let season = player_season_stats(&element(3, s)).unwrap();
        let gameweek =
            player_gameweek_stats(&live, PlayerId::new(7), Position::Midfielder).unwrap();
        assert_eq!(season, gameweek);
    }
}
