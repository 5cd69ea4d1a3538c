//! Terminal front end for [`strictly_baseball`].
//!
//! The binary is a thin shell over these modules; keeping them in a
//! library lets the play loop run against in-memory buffers in tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod play;
pub mod render;

pub use config::{ConfigError, PlayConfig, SEED_ENV};
pub use input::{Command as PromptCommand, parse_line, sanitize_input};
pub use play::{PlayOptions, run_play};
pub use render::{Renderer, SessionSummary};
