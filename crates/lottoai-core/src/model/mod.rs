//! Plain data types exchanged between the core and its callers.

pub mod combination;
pub mod game;
pub mod request;

pub use combination::{CombinationResult, ExtraNumber, JOLLY, SUPERSTAR};
pub use game::Game;
pub use request::{GenerationRequest, ISO_DATE, format_iso_date, parse_iso_date};
