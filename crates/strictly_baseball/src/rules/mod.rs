//! Game rules for number baseball.
//!
//! Pure functions for drawing a secret and scoring a guess. Rules are
//! separated from round bookkeeping so contracts can re-use them.

pub mod scoring;
pub mod secret;

pub use scoring::score_guess;
pub use secret::generate_secret;
