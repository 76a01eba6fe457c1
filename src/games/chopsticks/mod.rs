//! Chopsticks.
//!
//! Each player starts with one finger up on both hands. A turn touches one
//! live opponent hand with one of your live hands, adding your fingers to it
//! modulo five. A player with no legal touch loses.

mod game;
mod state;

pub use game::{parse_move, sanitize, INSTRUCTIONS};
pub use state::ChopsticksState;
