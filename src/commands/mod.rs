//! Command implementations for the FPL expected-points CLI

pub mod common;
pub mod fpl_data;
pub mod gameweeks;
pub mod league_stats;
pub mod player_stats;
