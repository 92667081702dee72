//! Actual and expected points breakdowns for a single player.
//!
//! Everything here is pure arithmetic over [`RawPlayerStats`] and a
//! [`Position`]. The upstream `total_points` is authoritative: goal, assist
//! and clean-sheet points are derived from the counting stats, and
//! whatever is left over (appearance points, bonus, cards, own goals,
//! penalty misses) is carried as a single `other` residual.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::types::position::{ASSIST_POINTS, CLEAN_SHEET_MIN_MINUTES};
use crate::fpl::types::{parse_decimal, RawDecimal, RawPlayerStats};
use crate::Position;


/// Points attributable to the itemised scoring events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePoints {
    pub goals: i32,
    pub assists: i32,
    pub clean_sheets: i32,
}

impl BasePoints {
    pub fn sum(&self) -> i32 {
        self.goals
            .saturating_add(self.assists)
            .saturating_add(self.clean_sheets)
    }
}

/// Full points breakdown; `goals + assists + clean_sheets + other == total`.
///
/// All arithmetic saturates at the `i32` bounds, so the identity only holds
/// for inputs that stay in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub goals: i32,
    pub assists: i32,
    pub clean_sheets: i32,
    pub other: i32,
    pub total: i32,
}

pub fn calculate_base_points(stats: &RawPlayerStats, position: Position) -> BasePoints {
    let clean_sheets = if stats.minutes >= CLEAN_SHEET_MIN_MINUTES {
        count(stats.clean_sheets).saturating_mul(position.clean_sheet_points())
    } else {
        0
    };

    BasePoints {
        goals: count(stats.goals_scored).saturating_mul(position.goal_points()),
        assists: count(stats.assists).saturating_mul(ASSIST_POINTS),
        clean_sheets,
    }
}

/// Residual after the itemised events; may be negative and is never clamped.
pub fn calculate_other_points(total_points: i32, base: &BasePoints) -> i32 {
    total_points.saturating_sub(base.sum())
}

pub fn calculate_points_breakdown(
    total_points: i32,
    stats: &RawPlayerStats,
    position: Position,
) -> PointsBreakdown {
    let base = calculate_base_points(stats, position);
    let other = calculate_other_points(total_points, &base);

    PointsBreakdown {
        goals: base.goals,
        assists: base.assists,
        clean_sheets: base.clean_sheets,
        other,
        total: total_points,
    }
}

/// Swap actual goals/assists for rounded xG/xA, holding clean-sheet and
/// residual points at their actual values.
pub fn calculate_expected_points_breakdown(
    stats: &RawPlayerStats,
    position: Position,
    actual: &PointsBreakdown,
) -> PointsBreakdown {
    let goals = round_expected(expected_goals(stats)).saturating_mul(position.goal_points());
    let assists = round_expected(expected_assists(stats)).saturating_mul(ASSIST_POINTS);
    let clean_sheets = actual.clean_sheets;
    let other = actual.other;

    PointsBreakdown {
        goals,
        assists,
        clean_sheets,
        other,
        total: goals
            .saturating_add(assists)
            .saturating_add(clean_sheets)
            .saturating_add(other),
    }
}

/// Raw xG; absent or malformed values count as zero.
pub fn expected_goals(stats: &RawPlayerStats) -> f64 {
    lenient_decimal("expected_goals", stats.expected_goals.as_ref())
}

/// Raw xA; absent or malformed values count as zero.
pub fn expected_assists(stats: &RawPlayerStats) -> f64 {
    lenient_decimal("expected_assists", stats.expected_assists.as_ref())
}

/// Round half away from zero (`f64::round`), so 0.5 -> 1 and 2.5 -> 3.
/// Values beyond `i32::MAX` saturate.
pub fn round_expected(value: f64) -> i32 {
    value.round() as i32
}

fn lenient_decimal(field: &'static str, raw: Option<&RawDecimal>) -> f64 {
    parse_decimal(field, raw).unwrap_or_else(|err| {
        warn!(%err, "treating {field} as 0");
        0.0
    })
}

fn count(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
