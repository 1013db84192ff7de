//! Rules layer: the selection state machine and its outcomes.
//!
//! ## Key Types
//!
//! - `MatchEngine`: One entry point per tap; owns selection, score, and the
//!   terminal flag
//! - `SelectionOutcome` / `OutcomeKind`: Tagged per-tap result for the
//!   presentation layer
//! - `GameSnapshot`: Serializable whole-round view for re-render

pub mod engine;
pub mod outcome;

pub use engine::{GameSnapshot, MatchEngine};
pub use outcome::{OutcomeKind, SelectionIds, SelectionOutcome};
