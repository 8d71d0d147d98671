//! Mapping from in-archive references to inline data URIs.

use std::collections::HashMap;

/// Reference key → data URI.
///
/// Keys are either a `Content-Location` URL or a `cid:<id>` token. Inserting
/// an existing key replaces its data URI but keeps its original registration
/// position, which only matters as a tie-break between keys of equal length.
#[derive(Debug, Clone, Default)]
pub struct ResourceMap {
    entries: HashMap<String, Slot>,
    next_seq: usize,
}

#[derive(Debug, Clone)]
struct Slot {
    data_uri: String,
    seq: usize,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key`, returning the previous data URI if it was already present.
    pub fn insert(&mut self, key: impl Into<String>, data_uri: impl Into<String>) -> Option<String> {
        let data_uri = data_uri.into();
        match self.entries.entry(key.into()) {
            std::collections::hash_map::Entry::Occupied(mut slot) => {
                Some(std::mem::replace(&mut slot.get_mut().data_uri, data_uri))
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(Slot {
                    data_uri,
                    seq: self.next_seq,
                });
                self.next_seq += 1;
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|slot| slot.data_uri.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by descending key length, ties in registration order.
    ///
    /// Replacing in this order keeps a key that is a prefix of another from
    /// clobbering the longer key's occurrences.
    pub fn longest_first(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&String, &Slot)> = self.entries.iter().collect();
        entries.sort_by(|(ka, sa), (kb, sb)| kb.len().cmp(&ka.len()).then(sa.seq.cmp(&sb.seq)));
        entries
            .into_iter()
            .map(|(key, slot)| (key.as_str(), slot.data_uri.as_str()))
            .collect()
    }
}
