//! Read-only table of display content handed to flyables as they spawn.

use std::collections::HashSet;

use bevy::prelude::*;
use lf_core::{ContentEntry, SpawnError, VisualRef};
use rand::prelude::*;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Ordered collection of content entries, loaded once and read-only afterwards.
#[derive(Resource, Debug, Clone)]
pub struct ContentTable {
    locale: String,
    entries: Vec<ContentEntry>,
}

impl Default for ContentTable {
    fn default() -> Self {
        Self::latin_alphabet(DEFAULT_LOCALE)
    }
}

impl ContentTable {
    /// Build a table, rejecting entries that reuse an id.
    pub fn new(locale: impl Into<String>, entries: Vec<ContentEntry>) -> Result<Self, SpawnError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(SpawnError::DuplicateContentId(entry.id.clone()));
            }
        }

        Ok(Self {
            locale: locale.into(),
            entries,
        })
    }

    /// The uppercase Latin alphabet A–Z, one entry per letter.
    ///
    /// The letters are the same for every locale; `locale` is only recorded.
    /// Ids are the lowercase letter, sprites live under `letters/<id>.png`.
    pub fn latin_alphabet(locale: impl Into<String>) -> Self {
        let entries = ('A'..='Z')
            .map(|letter| {
                let id = letter.to_ascii_lowercase().to_string();
                let visual = VisualRef::new(format!("letters/{}.png", id));
                ContentEntry::new(id, letter.to_string(), visual)
            })
            .collect();

        Self {
            locale: locale.into(),
            entries,
        }
    }

    /// Pick one entry uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&ContentEntry, SpawnError> {
        self.entries.choose(rng).ok_or(SpawnError::EmptyContentTable)
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&ContentEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter()
    }
}
