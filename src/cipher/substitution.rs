use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Character-for-character substitution table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterMap(BTreeMap<char, char>);

impl CharacterMap {
    /// Pair `input[i]` with `output[i]`, stopping at the shorter of the two.
    /// Later pairs for the same input character win.
    pub fn from_pairs(input: &str, output: &str) -> Self {
        Self(input.chars().zip(output.chars()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.0.get(&c).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.0.iter().map(|(&from, &to)| (from, to))
    }

    /// Map every character through the table; unmapped characters pass through.
    pub fn apply(&self, text: &str) -> Result<String> {
        if self.is_empty() {
            return Err(CipherError::EmptyCharacterMap);
        }
        Ok(text.chars().map(|c| self.get(c).unwrap_or(c)).collect())
    }
}

impl FromIterator<(char, char)> for CharacterMap {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
