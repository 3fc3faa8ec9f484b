//! Spelling names with a phonetic word list
//!
//! A `LetterTable` is built fresh from a word list on every call and then
//! used to translate a name letter by letter. Nothing is cached between
//! calls.

use crate::phonetics::NATO;
use crate::{PhoneticError, Result};
use log::debug;
use std::collections::HashMap;

const INVALID_NAME: &str = "name must be a non-empty string of letters";

/// Mapping from a lowercase letter to the word that spells it
///
/// Every stored word starts with a character whose lowercase form is the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterTable {
    map: HashMap<char, String>,
}

impl LetterTable {
    /// Build a table from an ordered word list
    ///
    /// Empty entries are skipped. When two words share a lowercased first
    /// character the later one wins.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();

        for (idx, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            let Some(first) = word.chars().next() else {
                debug!("Skipping empty word list entry at index {}", idx);
                continue;
            };

            // Only single-char lowercase forms can ever match a name character
            let mut lower = first.to_lowercase();
            let key = match (lower.next(), lower.next()) {
                (Some(key), None) => key,
                _ => {
                    debug!("Skipping {:?}: first letter has no single-char lowercase", word);
                    continue;
                }
            };

            if let Some(previous) = map.insert(key, word.to_string()) {
                debug!("Word {:?} replaces {:?} for letter {:?}", word, previous, key);
            }
        }

        debug!("Built letter table with {} entries", map.len());
        Self { map }
    }

    /// Word for a letter, if the table has one
    ///
    /// Lookup is by the lowercase letter.
    pub fn get(&self, letter: char) -> Option<&str> {
        self.map.get(&letter).map(String::as_str)
    }

    /// Number of letters in the table
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Spell a name through this table
    ///
    /// The name is trimmed and lowercased first. Fails with
    /// `PhoneticError::InvalidName` if nothing is left or if any character
    /// has no word; no partial spelling is returned.
    pub fn translate(&self, name: &str) -> Result<Vec<String>> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(PhoneticError::InvalidName(INVALID_NAME.to_string()));
        }

        normalized
            .chars()
            .map(|letter| {
                self.get(letter)
                    .map(str::to_string)
                    .ok_or_else(|| PhoneticError::InvalidName(INVALID_NAME.to_string()))
            })
            .collect()
    }
}

/// Spell a name with the NATO alphabet
pub fn spell(name: &str) -> Result<Vec<String>> {
    spell_with(name, NATO)
}

/// Spell a name with a custom word list
pub fn spell_with<I, S>(name: &str, words: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LetterTable::from_words(words).translate(name)
}
