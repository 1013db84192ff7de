//! Error types for the match engine.
//!
//! Every error here is a caller/engine desynchronization fault: a malformed
//! pairing configuration, an id the board has never issued, or an illegal
//! state transition. None of them occur during normal play - mismatches and
//! over-selection are `SelectionOutcome`s, not errors. Callers should treat
//! any of these as fatal to the round and reinitialize via
//! [`MatchEngine::new_game`](crate::rules::MatchEngine::new_game).

use thiserror::Error;

use crate::cards::CardId;

/// A malformed pairing configuration, rejected at board reset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("label sets differ in size: {left} left vs {right} right")]
    SideSizeMismatch { left: usize, right: usize },

    #[error("duplicate label within a side: {label}")]
    DuplicateLabel { label: String },

    #[error("label appears on both sides: {label}")]
    SharedLabel { label: String },

    #[error("pairing has no entry for left-side label: {label}")]
    UnmappedLabel { label: String },

    #[error("pairing target for {label} is not a right-side label: {target}")]
    UnknownTarget { label: String, target: String },

    #[error("two left-side labels pair to the same target: {target}")]
    DuplicateTarget { target: String },
}

/// The error type for all fallible board and engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The label sets or pairing handed to a reset were malformed.
    #[error("invalid pairing configuration")]
    Config(#[from] ConfigError),

    /// The id does not refer to any card on the board. Indicates the caller
    /// and the board have desynchronized (e.g., a stale id from a previous
    /// round).
    #[error("unknown card id {0}")]
    NotFound(CardId),

    /// A removed card's face-up state is permanent; unflipping it is an
    /// illegal transition.
    #[error("card {0} is removed and stays face-up permanently")]
    UnflipRemoved(CardId),

    /// Only a face-up card can be removed from play.
    #[error("card {0} is face-down and cannot be removed from play")]
    RemoveFaceDown(CardId),
}
