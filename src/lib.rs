// Library interface for pitlane
// This allows integration tests and benches to access internal modules

pub mod calendar;
pub mod config;
pub mod data;
pub mod errors;
pub mod format;
pub mod loader;
pub mod report;
pub mod results;
pub mod selection;
pub mod stats;
pub mod team_colors;

// Re-export commonly used types
pub use data::{LapRecord, Position, Race, RaceResult, StintId};
pub use errors::PitlaneError;
pub use report::{LapReport, ResultsReport};
pub use stats::DriverFilter;
