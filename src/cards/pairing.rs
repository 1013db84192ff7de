//! The pairing rule: a validated bijection between two label vocabularies.
//!
//! A board carries one label per card, drawn from two disjoint sides of
//! equal size (e.g., countries and landmarks). Two cards match iff the rule
//! links their labels. The engine never knows which side a tapped card
//! belongs to, so the match test is bidirectional: `forward[a] == b` OR
//! `forward[b] == a`. A single-direction probe would make every match
//! order-dependent - this is the one place the rules are easy to get subtly
//! wrong.

use rustc_hash::FxHashMap;

use crate::core::ConfigError;

/// A validated bijection `left → right` between two disjoint label sets.
///
/// ## Example
///
/// ```
/// use matchpairs::cards::PairingRule;
///
/// let rule = PairingRule::new(
///     &["china".into(), "france".into()],
///     &["greatWall".into(), "eiffelTower".into()],
///     &[("china".into(), "greatWall".into()),
///       ("france".into(), "eiffelTower".into())],
/// )
/// .unwrap();
///
/// // Either argument may be the left-side label.
/// assert!(rule.is_match("china", "greatWall"));
/// assert!(rule.is_match("greatWall", "china"));
/// assert!(!rule.is_match("china", "eiffelTower"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PairingRule {
    /// The forward map, left label -> right label.
    forward: FxHashMap<String, String>,
    left: Vec<String>,
    right: Vec<String>,
}

impl PairingRule {
    /// Build a rule from the two label sides and their pairs, validating
    /// that the pairs form a total bijection between disjoint sides.
    ///
    /// Rejects: sides of unequal size, a duplicate label within a side, a
    /// label on both sides, a left label with no pair, a pair target outside
    /// the right side, and two left labels sharing a target.
    pub fn new(
        left: &[String],
        right: &[String],
        pairs: &[(String, String)],
    ) -> Result<Self, ConfigError> {
        if left.len() != right.len() {
            return Err(ConfigError::SideSizeMismatch {
                left: left.len(),
                right: right.len(),
            });
        }

        let mut seen: FxHashMap<&str, ()> = FxHashMap::default();
        for label in left {
            if seen.insert(label.as_str(), ()).is_some() {
                return Err(ConfigError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }
        let mut right_set: FxHashMap<&str, ()> = FxHashMap::default();
        for label in right {
            if seen.contains_key(label.as_str()) {
                return Err(ConfigError::SharedLabel {
                    label: label.clone(),
                });
            }
            if right_set.insert(label.as_str(), ()).is_some() {
                return Err(ConfigError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        let pair_map: FxHashMap<&str, &str> = pairs
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();

        let mut forward = FxHashMap::default();
        let mut used_targets: FxHashMap<&str, ()> = FxHashMap::default();
        for label in left {
            let target = *pair_map.get(label.as_str()).ok_or_else(|| {
                ConfigError::UnmappedLabel {
                    label: label.clone(),
                }
            })?;
            if !right_set.contains_key(target) {
                return Err(ConfigError::UnknownTarget {
                    label: label.clone(),
                    target: target.to_string(),
                });
            }
            if used_targets.insert(target, ()).is_some() {
                return Err(ConfigError::DuplicateTarget {
                    target: target.to_string(),
                });
            }
            forward.insert(label.clone(), target.to_string());
        }

        Ok(Self {
            forward,
            left: left.to_vec(),
            right: right.to_vec(),
        })
    }

    /// Test whether two labels form a matching pair.
    ///
    /// Bidirectional: either argument may be the left-side label.
    #[must_use]
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        self.forward.get(a).map(String::as_str) == Some(b)
            || self.forward.get(b).map(String::as_str) == Some(a)
    }

    /// Left-side labels, in configuration order.
    #[must_use]
    pub fn left_labels(&self) -> &[String] {
        &self.left
    }

    /// Right-side labels, in configuration order.
    #[must_use]
    pub fn right_labels(&self) -> &[String] {
        &self.right
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True if the rule holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
