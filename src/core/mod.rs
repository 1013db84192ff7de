//! Core building blocks: errors and RNG.
//!
//! These are game-vocabulary-agnostic. The board and rules layers build on
//! them; concrete games configure everything else via `GameConfig`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use rng::GameRng;
