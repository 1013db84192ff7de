//! Game configuration: the fixed label vocabularies and their pairing.
//!
//! The presentation layer supplies one of these at startup; the engine
//! retains it so `new_game` can rebuild the board from the same sets with a
//! fresh shuffle. Validation happens at board reset, not here - a config is
//! plain data until a round is built from it.

use serde::{Deserialize, Serialize};

/// The two label sides and the pairs linking them.
///
/// ## Example
///
/// ```
/// use matchpairs::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_pair("china", "greatWall")
///     .with_pair("france", "eiffelTower");
///
/// assert_eq!(config.left_labels, vec!["china", "france"]);
/// assert_eq!(config.card_count(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Left-side labels (e.g., country names).
    pub left_labels: Vec<String>,
    /// Right-side labels (e.g., landmark names).
    pub right_labels: Vec<String>,
    /// Pairs `(left, right)` defining valid matches.
    pub pairs: Vec<(String, String)>,
}

impl GameConfig {
    /// An empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pair, extending both sides.
    #[must_use]
    pub fn with_pair(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        let left = left.into();
        let right = right.into();
        self.left_labels.push(left.clone());
        self.right_labels.push(right.clone());
        self.pairs.push((left, right));
        self
    }

    /// Number of cards a round built from this config will hold.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.left_labels.len() + self.right_labels.len()
    }
}
