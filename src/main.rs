//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fpl_xpts::{
    cli::{Cli, Commands, GetCmd},
    commands::{
        fpl_data::handle_fpl_data,
        gameweeks::handle_gameweeks,
        league_stats::{handle_league_stats, LeagueStatsParams},
        player_stats::{handle_player_stats, PlayerStatsParams},
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let app = Cli::parse();
    let verbose = app.common.verbose;
    let source = app.common.source_options();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::PlayerStats {
                player_ids,
                gameweek,
                json,
            } => handle_player_stats(PlayerStatsParams {
                player_ids,
                gameweek,
                as_json: json,
                verbose,
                source,
            })
            .await
            .context("player-stats failed")?,

            GetCmd::LeagueStats { position, json } => handle_league_stats(LeagueStatsParams {
                position,
                as_json: json,
                verbose,
                source,
            })
            .await
            .context("league-stats failed")?,

            GetCmd::Gameweeks { json } => handle_gameweeks(json, verbose, source)
                .await
                .context("gameweeks failed")?,

            GetCmd::FplData => handle_fpl_data(verbose, source)
                .await
                .context("fpl-data failed")?,
        },
    }

    Ok(())
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fpl_xpts=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
