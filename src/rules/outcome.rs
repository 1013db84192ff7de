//! Per-tap outcomes returned to the presentation layer.
//!
//! Every call into [`MatchEngine`](super::MatchEngine) answers with one
//! `SelectionOutcome`: a tagged kind naming the visual effect(s) to render
//! (flip, unflip, remove-fade) plus the orthogonal score delta and
//! game-over flag. This replaces ad hoc boolean threading - the caller
//! matches on the kind and renders exactly what it says.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Ids affected by an over-selection penalty. Three in practice; inline
/// capacity covers the common case without allocating.
pub type SelectionIds = SmallVec<[CardId; 4]>;

/// What a single tap did, as a tagged variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// The tap hit a removed (inert) card; nothing happened.
    Noop,
    /// The card was turned face-up and awaits a partner.
    Flipped(CardId),
    /// The card was turned face-down again (retracted pick or mismatch
    /// leftover toggled off).
    Unflipped(CardId),
    /// The two cards paired under the rule; both removed from play.
    Matched(CardId, CardId),
    /// The two cards did not pair; both stay face-up and in play.
    Mismatched(CardId, CardId),
    /// Three or more cards were face-up at resolution; all were turned
    /// face-down.
    OverSelection(SelectionIds),
}

/// The full result of one tap: the visual effect plus score/terminal state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    /// What to render.
    pub kind: OutcomeKind,
    /// Score change caused by this tap: +1 match, -1 mismatch or
    /// over-selection, 0 otherwise.
    pub score_delta: i32,
    /// True once every card is face-up; stays true until a new game.
    pub game_over: bool,
}

impl SelectionOutcome {
    /// A tap on an inert card.
    #[must_use]
    pub fn noop() -> Self {
        Self::with_kind(OutcomeKind::Noop, 0)
    }

    /// A card turned face-up.
    #[must_use]
    pub fn flipped(id: CardId) -> Self {
        Self::with_kind(OutcomeKind::Flipped(id), 0)
    }

    /// A card turned face-down.
    #[must_use]
    pub fn unflipped(id: CardId) -> Self {
        Self::with_kind(OutcomeKind::Unflipped(id), 0)
    }

    /// A confirmed match.
    #[must_use]
    pub fn matched(x: CardId, y: CardId) -> Self {
        Self::with_kind(OutcomeKind::Matched(x, y), 1)
    }

    /// A confirmed mismatch.
    #[must_use]
    pub fn mismatched(x: CardId, y: CardId) -> Self {
        Self::with_kind(OutcomeKind::Mismatched(x, y), -1)
    }

    /// An over-selection penalty covering all listed ids.
    #[must_use]
    pub fn over_selection(ids: SelectionIds) -> Self {
        Self::with_kind(OutcomeKind::OverSelection(ids), -1)
    }

    fn with_kind(kind: OutcomeKind, score_delta: i32) -> Self {
        Self {
            kind,
            score_delta,
            game_over: false,
        }
    }

    /// Mark the outcome with the current terminal state.
    #[must_use]
    pub fn with_game_over(mut self, game_over: bool) -> Self {
        self.game_over = game_over;
        self
    }

    /// Did this tap change the score?
    #[must_use]
    pub fn affects_score(&self) -> bool {
        self.score_delta != 0
    }
}
