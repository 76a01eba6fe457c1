//! Driving a game to completion between two strategies.

pub mod session;

pub use session::{GameRecord, PlayConfig, PlaySession};
