//! Fantasy Premier League expected points library
//!
//! Fetches player and gameweek data from the FPL API and derives an
//! "expected points" (xPts) figure from expected goals and expected assists,
//! alongside an itemised breakdown of the points a player actually scored.
//!
//! ## Features
//!
//! - **Points breakdown**: goals, assists, clean sheets and a single `other`
//!   residual that always sums to the upstream total
//! - **Expected points**: the same breakdown with rounded xG/xA in place of
//!   actual goals and assists
//! - **Season or gameweek scope**: identical rules for both
//! - **Cached data source**: LRU memory cache over JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_xpts::{fpl::report::build_stats_report, fpl::types::RawPlayerStats, Position};
//!
//! let stats = RawPlayerStats {
//!     minutes: 90,
//!     goals_scored: 2,
//!     assists: 1,
//!     total_points: 11,
//!     expected_goals: Some("1.4".into()),
//!     ..Default::default()
//! };
//!
//! let report = build_stats_report(&stats, Position::Forward);
//! assert_eq!(report.actual.points.other, 0);
//! assert_eq!(report.expected.points.total, 4);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FPL_API_URL=https://fantasy.premierleague.com/api
//! export FPL_XPTS_CACHE_DIR=~/.cache/fpl-xpts
//! export FPL_XPTS_CACHE_TTL_SECS=3600
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;

// Re-export commonly used types
pub use cli::types::{GameweekId, GameweekSelection, PlayerId, Position, TeamId};
pub use error::{Result, XptsError};
pub use fpl::compute::{BasePoints, PointsBreakdown};
pub use fpl::report::StatsReport;
pub use fpl::source::{DataSource, FplDataSource};
