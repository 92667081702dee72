//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{GameweekSelection, PlayerId, Position};

use crate::commands::common::SourceOptions;

/// Arguments shared by every command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// FPL API base URL (or set `FPL_API_URL`).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Force refresh from the FPL API, overwriting the cache.
    #[clap(long, global = true)]
    pub refresh: bool,

    /// Print cache status and a short summary.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            api_url: self.api_url.clone(),
            refresh: self.refresh,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Actual vs expected points breakdown for one or more players.
    ///
    /// Players with no record in the chosen gameweek are left out.
    PlayerStats {
        /// FPL player id (repeatable): `-p 351 -p 427`.
        #[clap(short = 'p', long = "player-id", required = true)]
        player_ids: Vec<PlayerId>,

        /// `season` or a gameweek number.
        #[clap(long, short, default_value_t = GameweekSelection::Season)]
        gameweek: GameweekSelection,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Season points and xPts for every player.
    LeagueStats {
        /// Only include one position: GK, DEF, MID or FWD.
        #[clap(long)]
        position: Option<Position>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the season scope and every finished gameweek.
    Gameweeks {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the raw bootstrap-static JSON.
    FplData,
}

#[derive(Debug, Parser)]
#[clap(
    name = "fpl-xpts",
    about = "Fantasy Premier League expected points (xPts) CLI"
)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Fantasy Premier League
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
