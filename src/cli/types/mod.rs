//! Type-safe wrappers and enums for Fantasy Premier League data.

pub mod gameweek;
pub mod ids;
pub mod position;

pub use gameweek::{GameweekId, GameweekSelection};
pub use ids::{PlayerId, TeamId};
pub use position::Position;
