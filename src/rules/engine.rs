//! The selection/match state machine.
//!
//! `MatchEngine` owns the transient selection state across taps and is the
//! only writer of the board. One [`handle_selection`] call per discrete tap;
//! the returned [`SelectionOutcome`] tells the caller what to render.
//!
//! ## Selection state machine
//!
//! ```text
//! 0 --flip--> 1 --flip--> 2 --resolve--> 0
//! 1 --unflip (toggle-off)--> 0
//! 2 --flip--> 3 --over-selection penalty--> 0
//! ```
//!
//! After every `handle_selection` call the selection holds 0 or 1 ids.
//! Length 3 is reachable only through deferred resolution: callers that
//! settle flip animations before resolving use [`select`] for each tap and
//! [`resolve_selection`] afterwards, so rapid taps can stack up three
//! face-up picks. The next resolution then applies the over-selection
//! penalty instead of a pair check.
//!
//! [`handle_selection`]: MatchEngine::handle_selection
//! [`select`]: MatchEngine::select
//! [`resolve_selection`]: MatchEngine::resolve_selection

use serde::{Deserialize, Serialize};

use super::outcome::{OutcomeKind, SelectionIds, SelectionOutcome};
use crate::cards::{Card, CardId, CardSet};
use crate::core::{GameConfig, GameError, GameRng};

/// The selection/match engine for one board.
///
/// Owns the board, the in-flight selection, the score, and the terminal
/// flag. The configuration is retained so [`new_game`](Self::new_game) can
/// rebuild the same vocabularies with a fresh shuffle.
///
/// ## Example
///
/// ```
/// use matchpairs::core::GameConfig;
/// use matchpairs::rules::{MatchEngine, OutcomeKind};
///
/// let config = GameConfig::new().with_pair("china", "greatWall");
/// let mut engine = MatchEngine::new(config, 42).unwrap();
///
/// let ids: Vec<_> = engine.card_set().iter().map(|c| c.id).collect();
/// engine.handle_selection(ids[0]).unwrap();
/// let outcome = engine.handle_selection(ids[1]).unwrap();
///
/// // The only two cards on this board always pair up.
/// assert!(matches!(outcome.kind, OutcomeKind::Matched(..)));
/// assert_eq!(engine.score(), 1);
/// assert!(outcome.game_over);
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: GameConfig,
    set: CardSet,
    /// Face-up, not-yet-removed picks in tap order.
    selection: SelectionIds,
    score: i32,
    game_over: bool,
    rng: GameRng,
}

impl MatchEngine {
    /// Build an engine and its first shuffled round.
    ///
    /// Fails with [`GameError::Config`] if the config's sides and pairs do
    /// not form a total bijection between disjoint, equal-size sets.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let mut rng = GameRng::new(seed);
        let set = CardSet::new(
            &config.left_labels,
            &config.right_labels,
            &config.pairs,
            &mut rng,
        )?;
        Ok(Self {
            config,
            set,
            selection: SelectionIds::new(),
            score: 0,
            game_over: false,
            rng,
        })
    }

    /// Handle one discrete tap: toggle the card, then resolve if the
    /// selection is full.
    ///
    /// Equivalent to [`select`](Self::select) followed by
    /// [`resolve_selection`](Self::resolve_selection), preferring the
    /// resolution outcome when one occurs. After this call the selection
    /// holds 0 or 1 ids.
    pub fn handle_selection(&mut self, id: CardId) -> Result<SelectionOutcome, GameError> {
        let toggled = self.select(id)?;
        if !matches!(toggled.kind, OutcomeKind::Flipped(_)) {
            return Ok(toggled);
        }
        match self.resolve_selection()? {
            Some(resolved) => Ok(resolved),
            None => Ok(toggled),
        }
    }

    /// Apply the toggle half of a tap without resolving.
    ///
    /// For callers that settle flip animations before resolving: call this
    /// once per tap, then [`resolve_selection`](Self::resolve_selection)
    /// when ready. Taps that outpace resolution accumulate in the selection
    /// and are penalized as an over-selection at the next resolve.
    ///
    /// - Removed card: inert, returns `Noop`.
    /// - Face-up card: turned face-down (and dropped from the selection if
    ///   it was part of it), returns `Unflipped`.
    /// - Face-down card: turned face-up and appended to the selection,
    ///   returns `Flipped`.
    pub fn select(&mut self, id: CardId) -> Result<SelectionOutcome, GameError> {
        if self.set.is_removed(id)? {
            return Ok(SelectionOutcome::noop().with_game_over(self.game_over));
        }

        if self.set.is_face_up(id)? {
            // Toggle-off. Mismatch leftovers are face-up but no longer
            // selected; they toggle down all the same.
            if let Some(pos) = self.selection.iter().position(|&c| c == id) {
                self.selection.remove(pos);
            }
            self.set.unflip(id)?;
            return Ok(SelectionOutcome::unflipped(id).with_game_over(self.game_over));
        }

        self.selection.push(id);
        self.set.flip(id)?;
        Ok(SelectionOutcome::flipped(id).with_game_over(self.game_over))
    }

    /// Resolve the current selection, if it is full.
    ///
    /// Returns `None` for a selection of 0 or 1 cards. Exactly 2 cards are
    /// checked as a pair; 3 or more is an over-selection: every selected
    /// card is turned face-down, the selection is cleared, and the score
    /// drops by one. The game-over check runs after every resolution, since
    /// each one affects the score.
    pub fn resolve_selection(&mut self) -> Result<Option<SelectionOutcome>, GameError> {
        let outcome = match self.selection.len() {
            0 | 1 => return Ok(None),
            2 => self.resolve_pair()?,
            _ => self.penalize_over_selection()?,
        };

        self.score += outcome.score_delta;
        if self.set.all_flipped_or_removed() {
            self.game_over = true;
            log::info!("round over, final score {}", self.score);
        }
        Ok(Some(outcome.with_game_over(self.game_over)))
    }

    /// Check the selected pair against the pairing rule.
    fn resolve_pair(&mut self) -> Result<SelectionOutcome, GameError> {
        debug_assert_eq!(self.selection.len(), 2);
        let x = self.selection[0];
        let y = self.selection[1];
        self.selection.clear();

        let matched = {
            let lx = self.set.label_of(x)?;
            let ly = self.set.label_of(y)?;
            self.set.rule().is_match(lx, ly)
        };

        if matched {
            self.set.mark_removed(x)?;
            self.set.mark_removed(y)?;
            log::debug!("matched {x} with {y}");
            Ok(SelectionOutcome::matched(x, y))
        } else {
            // Mismatched cards stay face-up and in play; a fresh tap on
            // either toggles it down individually.
            log::debug!("mismatched {x} with {y}");
            Ok(SelectionOutcome::mismatched(x, y))
        }
    }

    /// Unflip every selected card and clear the selection.
    fn penalize_over_selection(&mut self) -> Result<SelectionOutcome, GameError> {
        let ids: SelectionIds = std::mem::take(&mut self.selection);
        for &id in &ids {
            self.set.unflip(id)?;
        }
        log::debug!("over-selection penalty on {} cards", ids.len());
        Ok(SelectionOutcome::over_selection(ids))
    }

    /// Start a new round: score to zero, selection cleared, board rebuilt
    /// from the retained config with a fresh shuffle.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.set.reset(
            &self.config.left_labels,
            &self.config.right_labels,
            &self.config.pairs,
            &mut self.rng,
        )?;
        self.selection.clear();
        self.score = 0;
        self.game_over = false;
        log::info!("new game, {} cards", self.set.len());
        Ok(())
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Has the round ended? Sticky until [`new_game`](Self::new_game).
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The ids currently selected, in tap order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// The board, for initial render and queries.
    #[must_use]
    pub fn card_set(&self) -> &CardSet {
        &self.set
    }

    /// The retained configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Serializable view of the whole round, for re-render after rotation
    /// or resume.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cards: self.set.iter().cloned().collect(),
            score: self.score,
            game_over: self.game_over,
        }
    }
}

/// Everything a presentation layer needs to redraw the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cards in presentation order.
    pub cards: Vec<Card>,
    pub score: i32,
    pub game_over: bool,
}
