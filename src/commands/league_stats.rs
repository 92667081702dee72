//! League-wide table of actual points vs xPts.

use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::{
    cli::types::PlayerId,
    fpl::{
        report::build_stats_report,
        types::{parse_decimal, BootstrapStatic, Element, RawDecimal},
    },
    Position, Result,
};

use super::common::{build_data_source, print_json, report_cache_status, SourceOptions};

#[derive(Debug)]
pub struct LeagueStatsParams {
    pub position: Option<Position>,
    pub as_json: bool,
    pub verbose: bool,
    pub source: SourceOptions,
}

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueStatsRow {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub photo: String,
    pub cost: f64,
    pub selected: f64,
    pub form: f64,
    pub points: i32,
    #[serde(rename = "xPts")]
    pub xpts: i32,
    pub minutes: u32,
    pub goals: u32,
    pub assists: u32,
    #[serde(rename = "cleanSheets")]
    pub clean_sheets: u32,
    #[serde(rename = "xG")]
    pub xg: f64,
    #[serde(rename = "xA")]
    pub xa: f64,
}

/// Build rows for every player, optionally restricted to one position.
///
/// Rows keep the upstream element order. Any player with an invalid
/// `element_type` fails the whole table.
pub fn build_league_rows(
    season: &BootstrapStatic,
    position: Option<Position>,
) -> Result<Vec<LeagueStatsRow>> {
    let rows = season
        .elements
        .par_iter()
        .filter_map(|element| match Position::from_element_type(element.element_type) {
            Err(err) => Some(Err(err)),
            Ok(pos) if position.map_or(true, |wanted| wanted == pos) => {
                Some(Ok(league_row(season, element, pos)))
            }
            Ok(_) => None,
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(rows)
}

fn league_row(season: &BootstrapStatic, element: &Element, position: Position) -> LeagueStatsRow {
    let report = build_stats_report(&element.stats, position);
    let team = season
        .team_name(element.team)
        .unwrap_or("Unknown")
        .to_string();

    LeagueStatsRow {
        id: element.id,
        name: element.full_name(),
        team,
        position,
        photo: element.photo_url(),
        cost: element.cost_millions(),
        selected: display_decimal("selected_by_percent", element.selected_by_percent.as_ref()),
        form: display_decimal("form", element.form.as_ref()),
        points: element.stats.total_points,
        xpts: report.xpts(),
        minutes: element.stats.minutes,
        goals: element.stats.goals_scored,
        assists: element.stats.assists,
        clean_sheets: element.stats.clean_sheets,
        xg: report.expected.stats.raw_xg,
        xa: report.expected.stats.raw_xa,
    }
}

fn display_decimal(field: &'static str, raw: Option<&RawDecimal>) -> f64 {
    parse_decimal(field, raw).unwrap_or_else(|err| {
        warn!(%err, "showing {field} as 0");
        0.0
    })
}

pub async fn handle_league_stats(params: LeagueStatsParams) -> Result<()> {
    let source = build_data_source(&params.source)?;

    let (raw, status) = source.raw_season_data().await?;
    report_cache_status(params.verbose, "Season data", status)?;
    let season: BootstrapStatic = serde_json::from_value(raw)?;

    let rows = build_league_rows(&season, params.position)?;

    if params.as_json {
        return print_json(&rows);
    }

    for row in &rows {
        println!(
            "{} {} ({}, {}) £{:.1}m pts {} xPts {} diff {:+}",
            row.id,
            row.name,
            row.team,
            row.position,
            row.cost,
            row.points,
            row.xpts,
            row.xpts.saturating_sub(row.points),
        );
    }
    if params.verbose {
        println!("{} players", rows.len());
    }

    Ok(())
}
