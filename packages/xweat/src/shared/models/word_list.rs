//! Word lists and their roles in a WEAT test

use serde::{Deserialize, Serialize};

/// Role a word list plays in a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordListRole {
    #[serde(rename = "target_1")]
    Target1,
    #[serde(rename = "target_2")]
    Target2,
    #[serde(rename = "attribute_1")]
    Attribute1,
    #[serde(rename = "attribute_2")]
    Attribute2,
}

impl WordListRole {
    /// All roles in canonical order
    pub const ALL: [WordListRole; 4] = [
        WordListRole::Target1,
        WordListRole::Target2,
        WordListRole::Attribute1,
        WordListRole::Attribute2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordListRole::Target1 => "target_1",
            WordListRole::Target2 => "target_2",
            WordListRole::Attribute1 => "attribute_1",
            WordListRole::Attribute2 => "attribute_2",
        }
    }
}

impl std::fmt::Display for WordListRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered word sequence with a role
///
/// Duplicates are kept; they are only collapsed when the vocabulary is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    pub role: WordListRole,
    pub words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(role: WordListRole, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role,
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The four word lists of one test
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeatWordSets {
    pub targets_1: Vec<String>,
    pub targets_2: Vec<String>,
    pub attributes_1: Vec<String>,
    pub attributes_2: Vec<String>,
}

impl WeatWordSets {
    pub fn new<S: Into<String>>(
        targets_1: impl IntoIterator<Item = S>,
        targets_2: impl IntoIterator<Item = S>,
        attributes_1: impl IntoIterator<Item = S>,
        attributes_2: impl IntoIterator<Item = S>,
    ) -> Self {
        fn collect<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Vec<String> {
            words.into_iter().map(Into::into).collect()
        }

        Self {
            targets_1: collect(targets_1),
            targets_2: collect(targets_2),
            attributes_1: collect(attributes_1),
            attributes_2: collect(attributes_2),
        }
    }

    /// Words of one role
    pub fn get(&self, role: WordListRole) -> &[String] {
        match role {
            WordListRole::Target1 => &self.targets_1,
            WordListRole::Target2 => &self.targets_2,
            WordListRole::Attribute1 => &self.attributes_1,
            WordListRole::Attribute2 => &self.attributes_2,
        }
    }

    /// Lists paired with their roles, in canonical order
    pub fn lists(&self) -> [WordList; 4] {
        WordListRole::ALL.map(|role| WordList::new(role, self.get(role).iter().cloned()))
    }

    /// All words of all four lists, in list order (duplicates included)
    pub fn iter_words(&self) -> impl Iterator<Item = &str> {
        WordListRole::ALL
            .into_iter()
            .flat_map(move |role| self.get(role).iter().map(String::as_str))
    }

    /// Lower-case every word. Case handling belongs to callers, never to the core.
    pub fn lowercased(&self) -> Self {
        fn lower(words: &[String]) -> Vec<String> {
            words.iter().map(|w| w.to_lowercase()).collect()
        }

        Self {
            targets_1: lower(&self.targets_1),
            targets_2: lower(&self.targets_2),
            attributes_1: lower(&self.attributes_1),
            attributes_2: lower(&self.attributes_2),
        }
    }
}
