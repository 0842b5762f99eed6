//! Group indices
//!
//! The four word lists as index sequences. Before any statistic runs,
//! |T1| == |T2| and |A1| == |A2| are enforced by popping the tail of the longer
//! list. Tail truncation is deterministic and keeps runs reproducible, but it is
//! an ad hoc balancing policy: trailing words are discarded regardless of content.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::VocabIndex;
use crate::errors::{Result, WeatError};
use crate::shared::models::{WeatWordSets, WordListRole};

/// Words dropped from one list while balancing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truncation {
    pub role: WordListRole,
    /// Dropped words, in their original list order
    pub dropped: Vec<String>,
}

/// Balanced, in-vocabulary index sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIndices {
    pub targets_1: Vec<usize>,
    pub targets_2: Vec<usize>,
    pub attributes_1: Vec<usize>,
    pub attributes_2: Vec<usize>,
}

impl GroupIndices {
    /// Convert, balance and validate the four lists.
    ///
    /// Returns the truncations applied. Fails if any group is empty after
    /// OOV filtering.
    pub fn build(sets: &WeatWordSets, vocab: &VocabIndex) -> Result<(Self, Vec<Truncation>)> {
        let mut groups = Self {
            targets_1: vocab.convert(&sets.targets_1),
            targets_2: vocab.convert(&sets.targets_2),
            attributes_1: vocab.convert(&sets.attributes_1),
            attributes_2: vocab.convert(&sets.attributes_2),
        };

        for role in WordListRole::ALL {
            if groups.get(role).is_empty() {
                return Err(WeatError::empty_group(role));
            }
        }

        let mut truncations = Vec::new();
        truncations.extend(balance(
            &mut groups.targets_1,
            &mut groups.targets_2,
            (WordListRole::Target1, WordListRole::Target2),
            vocab,
        ));
        truncations.extend(balance(
            &mut groups.attributes_1,
            &mut groups.attributes_2,
            (WordListRole::Attribute1, WordListRole::Attribute2),
            vocab,
        ));

        debug_assert_eq!(groups.targets_1.len(), groups.targets_2.len());
        debug_assert_eq!(groups.attributes_1.len(), groups.attributes_2.len());

        Ok((groups, truncations))
    }

    pub fn get(&self, role: WordListRole) -> &[usize] {
        match role {
            WordListRole::Target1 => &self.targets_1,
            WordListRole::Target2 => &self.targets_2,
            WordListRole::Attribute1 => &self.attributes_1,
            WordListRole::Attribute2 => &self.attributes_2,
        }
    }

    /// Size of each target group
    pub fn target_size(&self) -> usize {
        self.targets_1.len()
    }

    /// Size of each attribute group
    pub fn attribute_size(&self) -> usize {
        self.attributes_1.len()
    }
}

/// Pop the longer list until both have equal length
fn balance(
    first: &mut Vec<usize>,
    second: &mut Vec<usize>,
    roles: (WordListRole, WordListRole),
    vocab: &VocabIndex,
) -> Option<Truncation> {
    let target = first.len().min(second.len());
    let (longer, role) = if first.len() > target {
        (first, roles.0)
    } else if second.len() > target {
        (second, roles.1)
    } else {
        return None;
    };

    let dropped: Vec<String> = longer
        .drain(target..)
        .map(|i| vocab.word(i).to_string())
        .collect();
    for word in dropped.iter().rev() {
        info!("Popped {} '{}'", role, word);
    }

    Some(Truncation { role, dropped })
}
