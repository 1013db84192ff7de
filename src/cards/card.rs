//! Card identity and runtime state.
//!
//! A `Card` is one face on the board: a label from one of the two pairing
//! vocabularies plus its flip/removal state. Lookups go through `CardId`,
//! never object identity - the presentation layer holds ids, the board holds
//! cards.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card on the board.
///
/// Ids are allocated by [`CardSet`](super::CardSet) and are never reused
/// across resets of the same board, so a stale id from a previous round
/// fails lookup instead of silently aliasing a new card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the board.
///
/// Invariant: `removed` implies `face_up`. A matched card is taken out of
/// play but stays visually face-up (faded by the presentation layer); its
/// flip state never changes again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity for lookups.
    pub id: CardId,

    /// The label tested by the pairing rule.
    pub label: String,

    /// Is this card currently shown to the player?
    pub face_up: bool,

    /// Has this card been matched and taken out of play?
    pub removed: bool,
}

impl Card {
    /// Create a face-down, in-play card.
    #[must_use]
    pub fn new(id: CardId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            face_up: false,
            removed: false,
        }
    }
}
