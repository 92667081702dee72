//! Actual vs expected breakdowns for chosen players.
//!
//! For the season scope the numbers come straight from `bootstrap-static`;
//! for a gameweek they come from that gameweek's live data, and players
//! who did not feature are left out of the result rather than failing the
//! whole request.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::{
    cli::types::{GameweekSelection, PlayerId},
    fpl::{
        report::{player_gameweek_stats, player_season_stats, StatsReport},
        source::DataSource,
        types::BootstrapStatic,
    },
    Position, Result, XptsError,
};

use super::common::{build_data_source, print_json, report_cache_status, SourceOptions};

#[derive(Debug)]
pub struct PlayerStatsParams {
    pub player_ids: Vec<PlayerId>,
    pub gameweek: GameweekSelection,
    pub as_json: bool,
    pub verbose: bool,
    pub source: SourceOptions,
}

/// Reports for every id in `player_ids`, keyed by id.
///
/// Ids missing from season data are skipped with a warning; for a gameweek
/// scope, players absent from that gameweek are omitted. An invalid
/// `element_type` on a requested player is an error.
pub async fn collect_player_stats<S>(
    source: &S,
    season: &BootstrapStatic,
    player_ids: &[PlayerId],
    selection: GameweekSelection,
) -> Result<BTreeMap<PlayerId, StatsReport>>
where
    S: DataSource + ?Sized,
{
    let live = match selection {
        GameweekSelection::Season => None,
        GameweekSelection::Gameweek(gw) => Some(source.fetch_gameweek_data(gw).await?),
    };

    let mut result = BTreeMap::new();
    for &id in player_ids {
        let Some(element) = season.element(id) else {
            warn!(player_id = %id, "player not found in season data, skipping");
            continue;
        };

        let report = match &live {
            None => player_season_stats(element)?,
            Some(live) => {
                let position = Position::from_element_type(element.element_type)?;
                match player_gameweek_stats(live, id, position) {
                    Some(report) => report,
                    None => {
                        debug!(player_id = %id, gameweek = %selection, "no gameweek record");
                        continue;
                    }
                }
            }
        };
        result.insert(id, report);
    }

    Ok(result)
}

/// Report for a single player.
///
/// Fails with `PlayerNotFound` when the id is not a known player; returns
/// `Ok(None)` when the player has no record for the selected gameweek.
pub async fn player_stats_for<S>(
    source: &S,
    player_id: PlayerId,
    selection: GameweekSelection,
) -> Result<Option<StatsReport>>
where
    S: DataSource + ?Sized,
{
    let season = source.fetch_season_data().await?;
    if season.element(player_id).is_none() {
        return Err(XptsError::PlayerNotFound {
            id: player_id.as_u32(),
        });
    }
    let mut reports = collect_player_stats(source, &season, &[player_id], selection).await?;
    Ok(reports.remove(&player_id))
}

pub async fn handle_player_stats(params: PlayerStatsParams) -> Result<()> {
    let source = build_data_source(&params.source)?;

    let (raw, status) = source.raw_season_data().await?;
    report_cache_status(params.verbose, "Season data", status)?;
    let season: BootstrapStatic = serde_json::from_value(raw)?;

    let reports =
        collect_player_stats(&source, &season, &params.player_ids, params.gameweek).await?;

    if params.as_json {
        return print_json(&reports);
    }

    if reports.is_empty() {
        println!("No player stats found for {}", params.gameweek);
        return Ok(());
    }

    for (id, report) in &reports {
        let name = season
            .element(*id)
            .map(|e| e.web_name.as_str())
            .unwrap_or("?");
        println!("{}", format_report_line(*id, name, report));
    }

    Ok(())
}

pub fn format_report_line(id: PlayerId, name: &str, report: &StatsReport) -> String {
    let a = &report.actual.points;
    let x = &report.expected.points;
    let xs = &report.expected.stats;
    format!(
        "{id} {name}: pts {} (G {} A {} CS {} other {}) | xPts {} (xG {:.2}->{} xA {:.2}->{})",
        a.total,
        a.goals,
        a.assists,
        a.clean_sheets,
        a.other,
        x.total,
        xs.raw_xg,
        xs.expected_goals,
        xs.raw_xa,
        xs.expected_assists,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::report::build_stats_report;
    use crate::fpl::types::{RawDecimal, RawPlayerStats};

    #[test]
    fn test_format_report_line() {
        let stats = RawPlayerStats {
            minutes: 90,
            goals_scored: 2,
            assists: 1,
            clean_sheets: 0,
            total_points: 11,
            expected_goals: Some(RawDecimal::from("1.26")),
            expected_assists: Some(RawDecimal::from("0.4")),
        };
        let report = build_stats_report(&stats, Position::Forward);
        let line = format_report_line(PlayerId::new(9), "Haaland", &report);

        assert_eq!(
            line,
            "9 Haaland: pts 11 (G 8 A 3 CS 0 other 0) | xPts 4 (xG 1.26->1 xA 0.40->0)"
        );
    }
}
