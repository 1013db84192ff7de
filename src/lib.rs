//! # matchpairs
//!
//! A UI-agnostic selection/match engine for memory card-matching games:
//! a board of face-down cards whose labels come from two disjoint
//! vocabularies linked by a bijective pairing rule. Taps flip cards;
//! matching a card to its paired label removes both; mismatches and
//! over-selection are penalized; the round ends when every card has been
//! turned face-up.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: Rendering, animation, and share sheets live in the
//!    caller. The engine answers each tap with a [`SelectionOutcome`]
//!    describing exactly what to draw.
//!
//! 2. **Explicit Identity**: Cards are addressed by stable [`CardId`]s,
//!    never object identity. Stale ids fail lookup instead of aliasing.
//!
//! 3. **Errors Are Desync**: Mismatches and over-selection are outcomes,
//!    not errors. A [`GameError`] always means the caller and engine have
//!    drifted apart; reinitialize with [`MatchEngine::new_game`].
//!
//! ## Architecture
//!
//! - Single-threaded and synchronous: one `handle_selection` call per
//!   discrete tap, resolved deterministically within that call.
//! - Callers that settle flip animations before resolving use the split
//!   [`MatchEngine::select`] / [`MatchEngine::resolve_selection`] API;
//!   taps outpacing resolution become over-selection penalties.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, game configuration
//! - `cards`: Card identity, board state, the pairing rule
//! - `rules`: The selection/match state machine and per-tap outcomes
//! - `games`: Ready-made configurations (countries ↔ landmarks)
//!
//! ## Example
//!
//! ```
//! use matchpairs::games::landmarks;
//! use matchpairs::rules::OutcomeKind;
//!
//! let mut engine = landmarks::engine(42).unwrap();
//!
//! let first = engine.card_set().iter().next().unwrap().id;
//! let outcome = engine.handle_selection(first).unwrap();
//! assert!(matches!(outcome.kind, OutcomeKind::Flipped(_)));
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, CardSet, PairingRule};
pub use crate::core::{ConfigError, GameConfig, GameError, GameRng};
pub use crate::rules::{GameSnapshot, MatchEngine, OutcomeKind, SelectionIds, SelectionOutcome};
