//! The board: an ordered collection of cards plus the pairing rule.
//!
//! `CardSet` owns the authoritative per-round card state. Order is the
//! presentation order - stable once a round starts, reshuffled only by
//! [`reset`](CardSet::reset). All mutation goes through fallible methods so
//! a desynchronized caller (stale id, illegal transition) surfaces as a
//! [`GameError`] instead of corrupting the round.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};
use super::pairing::PairingRule;
use crate::core::{GameError, GameRng};

/// The authoritative card collection for one round.
///
/// Holds one card per label in the pairing rule's two sides, shuffled into
/// presentation order.
#[derive(Clone, Debug, Default)]
pub struct CardSet {
    /// Presentation order. Stable within a round.
    cards: Vec<Card>,
    /// Id -> index into `cards`.
    index: FxHashMap<CardId, usize>,
    rule: PairingRule,
    /// Monotonic id allocator. Never reset, so ids from an old round
    /// fail lookup rather than alias a new card.
    next_id: u32,
}

impl CardSet {
    /// Build a board from the two label sides and their pairs.
    ///
    /// Fails with [`GameError::Config`] if the sides and pairs do not form
    /// a total bijection between disjoint, equal-size sets.
    pub fn new(
        left: &[String],
        right: &[String],
        pairs: &[(String, String)],
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        let mut set = Self::default();
        set.reset(left, right, pairs, rng)?;
        Ok(set)
    }

    /// Rebuild the full card collection for a new round.
    ///
    /// Validates the pairing, creates one face-down card per label in both
    /// sides, and shuffles the presentation order. On a validation error the
    /// previous round's cards are left untouched.
    pub fn reset(
        &mut self,
        left: &[String],
        right: &[String],
        pairs: &[(String, String)],
        rng: &mut GameRng,
    ) -> Result<(), GameError> {
        let rule = PairingRule::new(left, right, pairs)?;

        self.cards.clear();
        self.index.clear();
        for label in left.iter().chain(right.iter()) {
            let id = CardId::new(self.next_id);
            self.next_id += 1;
            self.cards.push(Card::new(id, label.clone()));
        }
        rng.shuffle(&mut self.cards);

        for (pos, card) in self.cards.iter().enumerate() {
            self.index.insert(card.id, pos);
        }
        self.rule = rule;

        log::debug!("board reset: {} cards", self.cards.len());
        Ok(())
    }

    /// Turn a card face-up. Idempotent if already face-up.
    pub fn flip(&mut self, id: CardId) -> Result<(), GameError> {
        self.get_mut(id)?.face_up = true;
        Ok(())
    }

    /// Turn a card face-down.
    ///
    /// Fails with [`GameError::UnflipRemoved`] for removed cards: their
    /// face-up state is permanent.
    pub fn unflip(&mut self, id: CardId) -> Result<(), GameError> {
        let card = self.get_mut(id)?;
        if card.removed {
            return Err(GameError::UnflipRemoved(id));
        }
        card.face_up = false;
        Ok(())
    }

    /// Take a matched card out of play.
    ///
    /// Requires the card to be face-up ([`GameError::RemoveFaceDown`]
    /// otherwise). The card stays face-up and becomes inert.
    pub fn mark_removed(&mut self, id: CardId) -> Result<(), GameError> {
        let card = self.get_mut(id)?;
        if !card.face_up {
            return Err(GameError::RemoveFaceDown(id));
        }
        card.removed = true;
        Ok(())
    }

    /// The label carried by a card.
    pub fn label_of(&self, id: CardId) -> Result<&str, GameError> {
        Ok(self.get(id)?.label.as_str())
    }

    /// Is the card currently face-up?
    pub fn is_face_up(&self, id: CardId) -> Result<bool, GameError> {
        Ok(self.get(id)?.face_up)
    }

    /// Has the card been matched and taken out of play?
    pub fn is_removed(&self, id: CardId) -> Result<bool, GameError> {
        Ok(self.get(id)?.removed)
    }

    /// True iff every card is currently face-up.
    ///
    /// This is the round's terminal condition. Removal never unsets
    /// `face_up`, so removed cards count as flipped.
    #[must_use]
    pub fn all_flipped_or_removed(&self) -> bool {
        self.cards.iter().all(|card| card.face_up)
    }

    /// The pairing rule for this round.
    #[must_use]
    pub fn rule(&self) -> &PairingRule {
        &self.rule
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the board holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    fn get(&self, id: CardId) -> Result<&Card, GameError> {
        let pos = *self.index.get(&id).ok_or(GameError::NotFound(id))?;
        Ok(&self.cards[pos])
    }

    fn get_mut(&mut self, id: CardId) -> Result<&mut Card, GameError> {
        let pos = *self.index.get(&id).ok_or(GameError::NotFound(id))?;
        Ok(&mut self.cards[pos])
    }
}
