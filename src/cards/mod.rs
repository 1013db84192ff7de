//! Card system: identity, board state, and the pairing rule.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier for a card on the board
//! - `Card`: Runtime card state (label, face-up, removed)
//! - `PairingRule`: Validated bijection between the two label sides
//! - `CardSet`: The board - ordered cards plus the rule, with a fallible
//!   mutation API

pub mod card;
pub mod card_set;
pub mod pairing;

pub use card::{Card, CardId};
pub use card_set::CardSet;
pub use pairing::PairingRule;
