//! The countries-and-landmarks game.
//!
//! Six countries paired with six landmarks, twelve cards total. Label
//! strings double as asset names for the pictorial/textual card faces, so
//! they keep their asset-catalog spelling.

use crate::core::{GameConfig, GameError};
use crate::rules::MatchEngine;

/// The fixed countries ↔ landmarks vocabulary.
#[must_use]
pub fn config() -> GameConfig {
    GameConfig::new()
        .with_pair("china", "greatWall")
        .with_pair("france", "eiffelTower")
        .with_pair("india", "tajMahal")
        .with_pair("italy", "pisaTower")
        .with_pair("turkey", "ayasofya")
        .with_pair("uae", "burjKhalifa")
}

/// Build a shuffled landmarks round.
pub fn engine(seed: u64) -> Result<MatchEngine, GameError> {
    MatchEngine::new(config(), seed)
}

/// The score line rendered into the shareable image.
#[must_use]
pub fn share_text(score: i32) -> String {
    format!("My Score is {score}!")
}
