//! Selectable report scopes: the whole season plus every finished gameweek.

use serde::Serialize;

use crate::{
    cli::types::GameweekSelection,
    fpl::types::BootstrapStatic,
    Result,
};

use super::common::{build_data_source, print_json, report_cache_status, SourceOptions};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameweekEntry {
    pub id: GameweekSelection,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameweekListing {
    pub gameweeks: Vec<GameweekEntry>,
}

pub fn completed_gameweeks(season: &BootstrapStatic) -> GameweekListing {
    let mut gameweeks = vec![GameweekEntry {
        id: GameweekSelection::Season,
        name: "Entire Season".to_string(),
    }];
    gameweeks.extend(season.finished_events().map(|event| GameweekEntry {
        id: GameweekSelection::Gameweek(event.id),
        name: format!("Gameweek {}", event.id),
    }));

    GameweekListing { gameweeks }
}

pub async fn handle_gameweeks(as_json: bool, verbose: bool, source: SourceOptions) -> Result<()> {
    let source = build_data_source(&source)?;

    let (raw, status) = source.raw_season_data().await?;
    report_cache_status(verbose, "Season data", status)?;
    let season: BootstrapStatic = serde_json::from_value(raw)?;
    let listing = completed_gameweeks(&season);

    if as_json {
        return print_json(&listing);
    }

    for entry in &listing.gameweeks {
        println!("{:>6}  {}", entry.id.to_string(), entry.name);
    }

    Ok(())
}
